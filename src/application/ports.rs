//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use async_trait::async_trait;

use crate::domain::error::ReviewError;
use crate::domain::review::{ChangedFile, PostedComment};

/// 대상 PR에 대한 GitHub 연동 포트.
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// 변경 파일 목록(API 응답 순서 유지)
    async fn list_changed_files(&self) -> Result<Vec<ChangedFile>, ReviewError>;
    /// PR(issue) 코멘트 생성
    async fn create_comment(&self, body: &str) -> Result<PostedComment, ReviewError>;
}

/// 리뷰 텍스트를 생성하는 언어 모델 포트.
#[async_trait]
pub trait ReviewModel: Send + Sync {
    fn name(&self) -> &str;
    /// 프롬프트를 user 턴으로 보내고 trim된 응답을 돌려준다.
    async fn request_review(&self, prompt: &str) -> Result<String, ReviewError>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
