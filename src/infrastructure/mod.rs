//! Infrastructure layer
//! 외부 시스템(GitHub/OpenAI API, 프로세스 환경)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
pub mod github;
pub mod http;
pub mod openai;
