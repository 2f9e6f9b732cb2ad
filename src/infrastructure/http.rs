//! GitHub/OpenAI 호출 공용 HTTP 유틸리티.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};

pub const USER_AGENT: &str = concat!("pr-review-bot/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// 타임아웃/User-Agent가 적용된 기본 HTTP 클라이언트를 생성한다.
pub fn build_http_client() -> Client {
    // TLS 설정 실패 등 예외 상황에서는 기본 클라이언트로 폴백한다.
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// 요청 전송/본문 수신 단계의 실패.
#[derive(Debug)]
pub enum SendFailure {
    /// 전송 또는 본문 읽기 실패
    Transport(reqwest::Error),
    /// 비정상 상태 코드(본문 포함)
    Status(StatusCode, String),
}

/// 요청을 보내고 성공 상태일 때만 본문 텍스트를 돌려준다.
pub async fn send_for_body(request: RequestBuilder) -> Result<String, SendFailure> {
    let response = request.send().await.map_err(SendFailure::Transport)?;

    let status = response.status();
    let body = response.text().await.map_err(SendFailure::Transport)?;

    if !status.is_success() {
        return Err(SendFailure::Status(status, body));
    }
    Ok(body)
}
