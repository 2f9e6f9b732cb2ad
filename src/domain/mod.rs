//! Domain layer
//! 리뷰 대상/변경 파일/프롬프트 규칙을 외부 의존성 없이 표현한다.

pub mod error;
pub mod prompt;
pub mod review;
