use std::time::Duration;

use url::Url;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://www.youracclaim.com";
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 8;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Site and request settings for one scraper instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site origin, without a trailing slash. Relative hrefs are appended verbatim.
    pub base_url: String,
    /// Maximum number of badge pages fetched at once.
    pub detail_concurrency: usize,
    /// Per-request timeout handed to the fetcher.
    pub timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SiteConfig {
    /// Build a validated config.
    pub fn new(
        base_url: &str,
        detail_concurrency: usize,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            detail_concurrency: validate_concurrency(detail_concurrency)?,
            timeout,
        })
    }

    /// Read configuration from environment variables.
    ///
    /// - `ACCLAIM_BASE_URL` (optional, defaults to `https://www.youracclaim.com`)
    /// - `ACCLAIM_DETAIL_CONCURRENCY` (optional, defaults to 8)
    /// - `ACCLAIM_TIMEOUT_SECS` (optional, defaults to 30)
    pub fn from_env() -> Result<Self, AppError> {
        let base_url =
            std::env::var("ACCLAIM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let detail_concurrency = match std::env::var("ACCLAIM_DETAIL_CONCURRENCY") {
            Err(_) => DEFAULT_DETAIL_CONCURRENCY,
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid ACCLAIM_DETAIL_CONCURRENCY '{raw}': must be a positive integer"
                ))
            })?,
        };

        let timeout_secs = match std::env::var("ACCLAIM_TIMEOUT_SECS") {
            Err(_) => DEFAULT_TIMEOUT_SECS,
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid ACCLAIM_TIMEOUT_SECS '{raw}': must be a whole number of seconds"
                ))
            })?,
        };

        Self::new(&base_url, detail_concurrency, Duration::from_secs(timeout_secs))
    }

    /// URL of the public badge listing for a profile.
    pub fn listing_url(&self, profile_id: &str) -> String {
        format!("{}/users/{}/badges", self.base_url, profile_id)
    }
}

/// Check the base URL is an absolute http(s) URL and strip trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let parsed = Url::parse(raw)
        .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{raw}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::ConfigError(format!(
                "Base URL scheme '{scheme}' is not allowed (only http/https)"
            )));
        }
    }

    if parsed.host_str().is_none() {
        return Err(AppError::ConfigError(format!("Base URL '{raw}' has no host")));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn validate_concurrency(value: usize) -> Result<usize, AppError> {
    if value == 0 {
        return Err(AppError::ConfigError(
            "Detail concurrency must be at least 1".into(),
        ));
    }
    Ok(value)
}
