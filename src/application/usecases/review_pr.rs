//! PR 리뷰 1회 실행 오케스트레이션 유스케이스.
//! 변경 파일 조회 → 프롬프트 구성 → 모델 리뷰 요청 → 코멘트 게시를 순서대로 수행한다.

use tracing::{debug, info};

use crate::application::ports::{PullRequestGateway, Reporter, ReviewModel};
use crate::domain::error::ReviewError;
use crate::domain::prompt::build_prompt;
use crate::domain::review::{PullRequestRef, ReviewOutcome, RunOptions};

pub struct ReviewPrUseCase<'a> {
    pub pull_requests: &'a dyn PullRequestGateway,
    pub model: &'a dyn ReviewModel,
    pub reporter: &'a dyn Reporter,
}

impl ReviewPrUseCase<'_> {
    /// 리뷰 본 실행 진입점.
    /// 어느 단계든 실패하면 즉시 중단하고 이후 단계는 호출하지 않는다.
    pub async fn execute(
        &self,
        target: &PullRequestRef,
        options: &RunOptions,
    ) -> Result<ReviewOutcome, ReviewError> {
        self.reporter.section("Session");
        self.reporter.kv("Target", &target.to_string());
        self.reporter.kv(
            "Mode",
            if options.dry_run {
                "dry-run"
            } else {
                "post-comment"
            },
        );

        self.reporter.status(
            "GitHub",
            &format!("fetching PR #{} from {}", target.number, target.repository),
        );
        let files = self.pull_requests.list_changed_files().await?;
        let reviewable = files
            .iter()
            .filter(|file| file.reviewable_patch().is_some())
            .count();
        self.reporter.kv("Files", &files.len().to_string());
        self.reporter.kv("With Patch", &reviewable.to_string());

        let prompt = build_prompt(&files);
        debug!(prompt_bytes = prompt.len(), "built review prompt");

        self.reporter.status(self.model.name(), "requesting review");
        let review = self.model.request_review(&prompt).await?;
        info!(review_bytes = review.len(), "received review");

        if options.dry_run {
            self.reporter.section("Dry Run: Review Comment");
            self.reporter.raw(&review);
            return Ok(ReviewOutcome {
                review,
                comment: None,
            });
        }

        self.reporter.status("GitHub", "posting review");
        let comment = self.pull_requests.create_comment(&review).await?;

        self.reporter.section("Done");
        self.reporter.status("GitHub", "review posted");
        if let Some(url) = &comment.html_url {
            self.reporter.kv("Comment", url);
        }

        Ok(ReviewOutcome {
            review,
            comment: Some(comment),
        })
    }
}
