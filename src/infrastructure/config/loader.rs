//! 환경변수 → `Settings` 해석.
//!
//! - 누락된 필수 변수는 한 번에 모아서 보고한다.
//! - 모든 검증은 네트워크 호출 전에 끝난다.

use std::env;

use tracing::debug;
use url::Url;

use super::types::{DEFAULT_GITHUB_API_URL, DEFAULT_OPENAI_BASE_URL, Settings};
use crate::domain::error::ReviewError;
use crate::domain::review::PullRequestRef;

pub const ENV_GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_PR_NUMBER: &str = "PR_NUMBER";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

const REQUIRED: [&str; 4] = [
    ENV_GITHUB_REPOSITORY,
    ENV_PR_NUMBER,
    ENV_GITHUB_TOKEN,
    ENV_OPENAI_API_KEY,
];

impl Settings {
    /// 프로세스 환경에서 설정을 읽는다.
    pub fn from_env() -> Result<Self, ReviewError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 임의의 조회 함수로 설정을 해석한다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReviewError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let missing: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .filter(|name| read(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ReviewError::Configuration(format!(
                "Missing required environment variables. ({})",
                missing.join(", ")
            )));
        }

        let value = |name: &str| read(name).unwrap_or_default();

        let repository = parse_repository(&value(ENV_GITHUB_REPOSITORY))?;
        let number = parse_pr_number(&value(ENV_PR_NUMBER))?;
        let github_api_base = parse_base_url(
            ENV_GITHUB_API_URL,
            read(ENV_GITHUB_API_URL).as_deref(),
            DEFAULT_GITHUB_API_URL,
        )?;
        let openai_base_url = parse_base_url(
            ENV_OPENAI_BASE_URL,
            read(ENV_OPENAI_BASE_URL).as_deref(),
            DEFAULT_OPENAI_BASE_URL,
        )?;

        let settings = Settings {
            target: PullRequestRef { repository, number },
            github_token: value(ENV_GITHUB_TOKEN),
            github_api_base,
            openai_api_key: value(ENV_OPENAI_API_KEY),
            openai_base_url,
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

fn parse_repository(raw: &str) -> Result<String, ReviewError> {
    // owner/name 두 세그먼트만 허용한다.
    match raw.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(raw.to_string())
        }
        _ => Err(ReviewError::Configuration(format!(
            "{ENV_GITHUB_REPOSITORY} must look like owner/name, got '{raw}'"
        ))),
    }
}

fn parse_pr_number(raw: &str) -> Result<u64, ReviewError> {
    match raw.parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ReviewError::Configuration(format!(
            "{ENV_PR_NUMBER} must be a positive integer, got '{raw}'"
        ))),
    }
}

fn parse_base_url(name: &str, raw: Option<&str>, default: &str) -> Result<String, ReviewError> {
    let Some(raw) = raw else {
        return Ok(default.to_string());
    };

    let url = Url::parse(raw)
        .map_err(|err| ReviewError::Configuration(format!("{name} is not a valid URL: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ReviewError::Configuration(format!(
            "{name} must use http or https, got '{raw}'"
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            (ENV_GITHUB_REPOSITORY, "octo/widgets"),
            (ENV_PR_NUMBER, "12"),
            (ENV_GITHUB_TOKEN, "ghs_secret"),
            (ENV_OPENAI_API_KEY, "sk-secret"),
        ]
    }

    fn without(name: &str) -> Vec<(&'static str, &'static str)> {
        complete().into_iter().filter(|(k, _)| *k != name).collect()
    }

    #[test]
    fn resolves_required_values_with_defaults() {
        let settings = Settings::from_lookup(lookup_from(&complete())).unwrap();
        assert_eq!(settings.target.repository, "octo/widgets");
        assert_eq!(settings.target.number, 12);
        assert_eq!(settings.github_token, "ghs_secret");
        assert_eq!(settings.openai_api_key, "sk-secret");
        assert_eq!(settings.github_api_base, DEFAULT_GITHUB_API_URL);
        assert_eq!(settings.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    }

    #[test]
    fn each_missing_required_variable_is_a_configuration_error() {
        for name in REQUIRED {
            let err = Settings::from_lookup(lookup_from(&without(name))).unwrap_err();
            assert!(matches!(err, ReviewError::Configuration(_)), "{name}");
            assert_eq!(err.exit_code(), 1);
            assert!(err.to_string().contains(name));
        }
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut pairs = without(ENV_PR_NUMBER);
        pairs.push((ENV_PR_NUMBER, "   "));
        let err = Settings::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(err.to_string().starts_with("Missing required environment variables."));
    }

    #[test]
    fn all_missing_variables_are_listed_together() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        let message = err.to_string();
        for name in REQUIRED {
            assert!(message.contains(name));
        }
    }

    #[test]
    fn rejects_malformed_repository() {
        for bad in ["widgets", "octo/", "/widgets", "a/b/c"] {
            let mut pairs = without(ENV_GITHUB_REPOSITORY);
            pairs.push((ENV_GITHUB_REPOSITORY, bad));
            let err = Settings::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, ReviewError::Configuration(_)), "{bad}");
        }
    }

    #[test]
    fn rejects_non_numeric_or_zero_pr_number() {
        for bad in ["abc", "0", "-3", "1.5"] {
            let mut pairs = without(ENV_PR_NUMBER);
            pairs.push((ENV_PR_NUMBER, bad));
            let err = Settings::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, ReviewError::Configuration(_)), "{bad}");
        }
    }

    #[test]
    fn base_url_overrides_are_normalized() {
        let mut pairs = complete();
        pairs.push((ENV_GITHUB_API_URL, "https://ghe.example.com/api/v3/"));
        pairs.push((ENV_OPENAI_BASE_URL, "http://localhost:8080/v1"));
        let settings = Settings::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(settings.github_api_base, "https://ghe.example.com/api/v3");
        assert_eq!(settings.openai_base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let mut pairs = complete();
        pairs.push((ENV_OPENAI_BASE_URL, "ftp://example.com"));
        assert!(Settings::from_lookup(lookup_from(&pairs)).is_err());

        let mut pairs = complete();
        pairs.push((ENV_GITHUB_API_URL, "not a url"));
        assert!(Settings::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let settings = Settings::from_lookup(lookup_from(&complete())).unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("ghs_secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("octo/widgets"));
    }
}
