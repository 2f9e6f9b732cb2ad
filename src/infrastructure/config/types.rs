//! 설정 스키마와 고정 상수.

use std::fmt;

use crate::domain::review::PullRequestRef;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub const REVIEW_MODEL: &str = "gpt-4o-mini";
pub const REVIEW_SYSTEM_PROMPT: &str = "You are an expert code reviewer.";
pub const REVIEW_MAX_TOKENS: u32 = 500;

/// 시작 시 확정되는 실행 설정.
/// 각 컴포넌트는 환경변수 대신 이 값만 전달받는다.
#[derive(Clone)]
pub struct Settings {
    pub target: PullRequestRef,
    pub github_token: String,
    pub github_api_base: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
}

// 토큰/키가 로그에 남지 않도록 직접 구현한다.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("target", &self.target)
            .field("github_token", &"<redacted>")
            .field("github_api_base", &self.github_api_base)
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}
