//! 리뷰 도메인 엔티티/값 객체.

use std::fmt;

/// 리뷰 대상 PR 식별자(`owner/name` + 번호).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub repository: String,
    pub number: u64,
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}

/// PR에서 변경된 파일 1건.
/// 바이너리/rename-only 변경은 patch가 없다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub filename: String,
    pub patch: Option<String>,
}

impl ChangedFile {
    /// 프롬프트에 포함할 수 있는(비어있지 않은) patch를 반환한다.
    pub fn reviewable_patch(&self) -> Option<&str> {
        self.patch.as_deref().filter(|patch| !patch.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    pub id: u64,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub dry_run: bool,
}

/// 1회 실행 결과.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub review: String,
    /// dry-run이면 None
    pub comment: Option<PostedComment>,
}
