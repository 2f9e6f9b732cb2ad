//! 애플리케이션 포트를 실제 출력 구현체로 연결하는 어댑터 계층.

mod reporter;

pub use reporter::ConsoleReporter;
