//! GitHub API 연동 구현.
//! PR 변경 파일 조회와 PR(issue) 코멘트 생성만 담당한다.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::application::ports::PullRequestGateway;
use crate::domain::error::ReviewError;
use crate::domain::review::{ChangedFile, PostedComment, PullRequestRef};

use super::http::{SendFailure, USER_AGENT, build_http_client, send_for_body};

/// GitHub `/files` 엔드포인트의 기본 페이지 크기.
const FILES_PAGE_SIZE: usize = 30;

// 저장소 이름에 흔한 `-`, `.`, `_`는 그대로 둔다.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

pub struct GitHubClient {
    client: Client,
    api_base: String,
    target: PullRequestRef,
    token: String,
}

impl GitHubClient {
    /// 대상 PR에 고정된 클라이언트를 생성한다.
    pub fn new(api_base: String, target: PullRequestRef, token: String) -> Self {
        Self {
            client: build_http_client(),
            api_base: api_base.trim_end_matches('/').to_string(),
            target,
            token,
        }
    }

    fn repo_path(&self) -> String {
        self.target
            .repository
            .split('/')
            .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn pull_files_endpoint(&self) -> String {
        format!(
            "{}/repos/{}/pulls/{}/files",
            self.api_base,
            self.repo_path(),
            self.target.number
        )
    }

    fn issue_comments_endpoint(&self) -> String {
        // PR 코멘트는 issue 코멘트 리소스로 게시한다.
        format!(
            "{}/repos/{}/issues/{}/comments",
            self.api_base,
            self.repo_path(),
            self.target.number
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용. 클라이언트 폴백 시에도 User-Agent가 빠지지 않게 요청마다 붙인다.
        self.client
            .request(method, url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .bearer_auth(&self.token)
    }
}

#[derive(Debug, Deserialize)]
struct PullFileResponse {
    filename: String,
    #[serde(default)]
    patch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IssueCommentResponse {
    id: u64,
    #[serde(default)]
    html_url: Option<String>,
}

fn map_failure(action: &'static str, failure: SendFailure) -> ReviewError {
    match failure {
        SendFailure::Transport(err) => ReviewError::Transport {
            action,
            message: err.to_string(),
        },
        SendFailure::Status(status, body) => ReviewError::Http {
            action,
            status: status.as_u16(),
            body,
        },
    }
}

fn parse_changed_files(body: &str) -> Result<Vec<ChangedFile>, ReviewError> {
    let files: Vec<PullFileResponse> =
        serde_json::from_str(body).map_err(|err| ReviewError::Decode {
            action: "list PR files",
            message: err.to_string(),
        })?;

    Ok(files
        .into_iter()
        .map(|f| ChangedFile {
            filename: f.filename,
            patch: f.patch,
        })
        .collect())
}

fn parse_posted_comment(body: &str) -> Result<PostedComment, ReviewError> {
    let comment: IssueCommentResponse =
        serde_json::from_str(body).map_err(|err| ReviewError::Decode {
            action: "create comment",
            message: err.to_string(),
        })?;

    Ok(PostedComment {
        id: comment.id,
        html_url: comment.html_url,
    })
}

#[async_trait]
impl PullRequestGateway for GitHubClient {
    async fn list_changed_files(&self) -> Result<Vec<ChangedFile>, ReviewError> {
        const ACTION: &str = "list PR files";

        let url = self.pull_files_endpoint();
        debug!(%url, "fetching PR files");
        let body = send_for_body(self.request(Method::GET, url))
            .await
            .map_err(|failure| map_failure(ACTION, failure))?;

        let files = parse_changed_files(&body)?;
        if files.len() >= FILES_PAGE_SIZE {
            // 페이지네이션은 하지 않는다. 첫 페이지만 리뷰한다.
            warn!(
                count = files.len(),
                "PR file list may be truncated to the first page"
            );
        }
        Ok(files)
    }

    async fn create_comment(&self, body: &str) -> Result<PostedComment, ReviewError> {
        const ACTION: &str = "create comment";

        let url = self.issue_comments_endpoint();
        debug!(%url, bytes = body.len(), "creating PR comment");
        let response_body = send_for_body(
            self.request(Method::POST, url)
                .json(&json!({ "body": body })),
        )
        .await
        .map_err(|failure| map_failure(ACTION, failure))?;

        parse_posted_comment(&response_body)
    }
}
