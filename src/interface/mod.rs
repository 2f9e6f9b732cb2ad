//! Interface layer
//! CLI 입력 파싱과 실행 의존성 조립을 담당한다.

pub mod cli;
pub mod composition;
