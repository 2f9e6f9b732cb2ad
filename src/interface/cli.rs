//! CLI 명령 파싱 모듈.
//! 리뷰 대상/인증 정보는 전부 환경변수에서 읽으므로 플래그는 최소한만 둔다.

use clap::Parser;

use crate::domain::review::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "pr-review-bot", version)]
#[command(about = "Review a GitHub pull request with an LLM and post the result as a comment")]
#[command(
    after_help = "Environment: GITHUB_REPOSITORY, PR_NUMBER, GITHUB_TOKEN, OPENAI_API_KEY (required); GITHUB_API_URL, OPENAI_BASE_URL (optional)"
)]
pub struct Cli {
    /// Print the review to stdout, do not post
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    pub fn parse_options() -> RunOptions {
        Cli::parse().into_options()
    }

    fn into_options(self) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
        }
    }
}
