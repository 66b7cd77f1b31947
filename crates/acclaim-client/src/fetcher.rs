use std::time::Duration;

use acclaim_core::config::SiteConfig;
use acclaim_core::error::AppError;
use acclaim_core::traits::Fetcher;
use reqwest::Client;

const USER_AGENT: &str = concat!("acclaim-badges/", env!("CARGO_PKG_VERSION"));

/// HTTP fetcher using reqwest.
///
/// Downloads raw HTML with a fixed User-Agent and a per-request timeout.
/// Any non-2xx status is reported as an error.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Fetcher using the timeout from a site config.
    pub fn from_config(config: &SiteConfig) -> Result<Self, AppError> {
        Self::with_timeout(config.timeout)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let timeout_secs = timeout.as_secs();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                AppError::NetworkError(format!("Connection failed: {e}"))
            } else {
                AppError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpError(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to read response body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("acclaim-badges/"));
        assert!(USER_AGENT.len() > "acclaim-badges/".len());
    }

    #[test]
    fn test_from_config_uses_timeout() {
        let config = SiteConfig {
            timeout: Duration::from_secs(7),
            ..SiteConfig::default()
        };
        let fetcher = ReqwestFetcher::from_config(&config).unwrap();
        assert_eq!(fetcher.timeout_secs, 7);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on loopback is closed on any sane test machine.
        let fetcher = ReqwestFetcher::with_timeout(Duration::from_secs(2)).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/users/x/badges").await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_invalid_url_is_http_error() {
        let fetcher = ReqwestFetcher::new().unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, AppError::HttpError(_)));
    }
}
