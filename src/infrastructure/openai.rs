//! OpenAI chat-completions 리뷰 모델 어댑터.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ports::ReviewModel;
use crate::domain::error::ReviewError;

use super::config::{REVIEW_MAX_TOKENS, REVIEW_MODEL, REVIEW_SYSTEM_PROMPT};
use super::http::{SendFailure, build_http_client, send_for_body};

pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: build_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// 고정 모델/시스템 지시문으로 리뷰 요청 본문을 구성한다.
fn build_chat_request(prompt: &str) -> ChatRequest<'_> {
    ChatRequest {
        model: REVIEW_MODEL,
        messages: [
            ChatMessage {
                role: "system",
                content: REVIEW_SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        max_tokens: REVIEW_MAX_TOKENS,
    }
}

/// 첫 번째 choice의 메시지 텍스트를 trim해서 꺼낸다.
fn extract_review(body: &str) -> Result<String, ReviewError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|err| ReviewError::ModelApi(format!("invalid JSON response: {err}")))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ReviewError::ModelApi("response contained no choices".to_string()))?;

    let content = choice
        .message
        .content
        .ok_or_else(|| ReviewError::ModelApi("first choice has no message content".to_string()))?;

    Ok(content.trim().to_string())
}

#[async_trait]
impl ReviewModel for OpenAiClient {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn request_review(&self, prompt: &str) -> Result<String, ReviewError> {
        let url = self.completions_endpoint();
        debug!(%url, model = REVIEW_MODEL, prompt_bytes = prompt.len(), "requesting chat completion");

        let request = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&build_chat_request(prompt));

        let body = send_for_body(request).await.map_err(|failure| match failure {
            SendFailure::Transport(err) => {
                ReviewError::ModelApi(format!("failed to request chat completion: {err}"))
            }
            SendFailure::Status(status, body) => {
                ReviewError::ModelApi(format!("chat completion failed ({status}): {body}"))
            }
        })?;

        extract_review(&body)
    }
}
