//! 실행 설정 모듈.
//! 프로세스 환경변수를 시작 시점에 한 번만 읽어 `Settings`로 고정한다.

mod loader;
mod types;

pub use loader::{
    ENV_GITHUB_API_URL, ENV_GITHUB_REPOSITORY, ENV_GITHUB_TOKEN, ENV_OPENAI_API_KEY,
    ENV_OPENAI_BASE_URL, ENV_PR_NUMBER,
};
pub use types::{
    DEFAULT_GITHUB_API_URL, DEFAULT_OPENAI_BASE_URL, REVIEW_MAX_TOKENS, REVIEW_MODEL,
    REVIEW_SYSTEM_PROMPT, Settings,
};
