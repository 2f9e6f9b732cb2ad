//! pr-review-bot library root.
//! Clean Architecture 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::error::ReviewError;
use domain::review::{ReviewOutcome, RunOptions};
use infrastructure::config::Settings;
use interface::composition::AppComposition;

/// 확정된 설정으로 리뷰 1회를 실행한다.
pub async fn run(settings: &Settings, options: RunOptions) -> Result<ReviewOutcome, ReviewError> {
    let composition = AppComposition::new(settings);
    composition
        .review_usecase()
        .execute(&settings.target, &options)
        .await
}
