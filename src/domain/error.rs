//! 실행 실패 분류.
//! main의 단일 핸들러가 종류별로 메시지/종료 코드를 결정한다.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// 필수 환경변수 누락/형식 오류. 네트워크 호출 전에 검출된다.
    #[error("{0}")]
    Configuration(String),

    /// GitHub API가 비정상 상태 코드를 반환했다.
    #[error("github: failed to {action} ({status}): {body}")]
    Http {
        action: &'static str,
        status: u16,
        body: String,
    },

    /// GitHub 요청 전송/응답 수신 자체가 실패했다.
    #[error("github: failed to {action}: {message}")]
    Transport {
        action: &'static str,
        message: String,
    },

    /// GitHub 응답 본문이 기대한 JSON 형태가 아니다.
    #[error("github: invalid JSON while trying to {action}: {message}")]
    Decode {
        action: &'static str,
        message: String,
    },

    /// 모델 API 호출/응답 해석 실패.
    #[error("openai: {0}")]
    ModelApi(String),
}

impl ReviewError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 1,
            Self::Http { .. } | Self::Transport { .. } | Self::Decode { .. } => 2,
            Self::ModelApi(_) => 3,
        }
    }
}
