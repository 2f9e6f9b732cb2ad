//! `pr-review-bot` 바이너리 진입점.

use pr_review_bot::domain::error::ReviewError;
use pr_review_bot::infrastructure::config::Settings;
use pr_review_bot::interface::cli::Cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = Cli::parse_options();

    // 네트워크 호출 전에 설정을 확정한다.
    let result = match Settings::from_env() {
        Ok(settings) => pr_review_bot::run(&settings, options).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        match &err {
            ReviewError::Configuration(msg) => println!("{msg}"),
            _ => eprintln!("error: {err}"),
        }
        std::process::exit(err.exit_code());
    }
}
