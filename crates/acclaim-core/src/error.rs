use thiserror::Error;

/// Application-wide error types for the badge scraper.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error came from the transport layer (fetching a page).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_) | AppError::Timeout(_) | AppError::NetworkError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors() {
        assert!(AppError::HttpError("HTTP 404".into()).is_transport());
        assert!(AppError::Timeout(30).is_transport());
        assert!(AppError::NetworkError("reset".into()).is_transport());
        assert!(!AppError::ConfigError("bad base url".into()).is_transport());
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::Timeout(5).to_string(), "Request timed out after 5 seconds");
        assert_eq!(
            AppError::HttpError("HTTP 500 for https://x".into()).to_string(),
            "HTTP error: HTTP 500 for https://x"
        );
    }
}
