//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::review_pr::ReviewPrUseCase;
use crate::infrastructure::adapters::ConsoleReporter;
use crate::infrastructure::config::Settings;
use crate::infrastructure::github::GitHubClient;
use crate::infrastructure::openai::OpenAiClient;

/// 확정된 설정으로 실행 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    github: GitHubClient,
    openai: OpenAiClient,
    reporter: ConsoleReporter,
}

impl AppComposition {
    pub fn new(settings: &Settings) -> Self {
        Self {
            github: GitHubClient::new(
                settings.github_api_base.clone(),
                settings.target.clone(),
                settings.github_token.clone(),
            ),
            openai: OpenAiClient::new(
                settings.openai_base_url.clone(),
                settings.openai_api_key.clone(),
            ),
            reporter: ConsoleReporter::new(),
        }
    }

    /// 리뷰 실행 유스케이스를 생성한다.
    pub fn review_usecase(&self) -> ReviewPrUseCase<'_> {
        ReviewPrUseCase {
            pull_requests: &self.github,
            model: &self.openai,
            reporter: &self.reporter,
        }
    }
}
