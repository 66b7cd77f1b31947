//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit and integration tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::AppError;
use crate::models::{BadgeDetail, BadgeSummary};
use crate::traits::{Fetcher, MarkupExtractor};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum MockPage {
    Html { body: String, delay: Duration },
    Error(String),
}

/// Mock fetcher serving canned pages by URL.
///
/// Unknown URLs answer with an `HttpError` 404. Every requested URL is recorded.
#[derive(Clone, Default)]
pub struct MockFetcher {
    pages: Arc<Mutex<HashMap<String, MockPage>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.with_delayed_page(url, html, Duration::ZERO)
    }

    /// Serve `html` for `url` after sleeping for `delay`.
    pub fn with_delayed_page(self, url: &str, html: &str, delay: Duration) -> Self {
        self.pages.lock().unwrap().insert(
            url.to_string(),
            MockPage::Html {
                body: html.to_string(),
                delay,
            },
        );
        self
    }

    /// Fail requests for `url` with `AppError::HttpError(message)`.
    pub fn with_error(self, url: &str, message: &str) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), MockPage::Error(message.to_string()));
        self
    }

    /// URLs requested so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        let page = self.pages.lock().unwrap().get(url).cloned();

        match page {
            Some(MockPage::Html { body, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(body)
            }
            Some(MockPage::Error(message)) => Err(AppError::HttpError(message)),
            None => Err(AppError::HttpError(format!("HTTP 404 for {url}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// MockExtractor
// ---------------------------------------------------------------------------

/// Mock extractor returning fixed summaries, and details keyed by page body.
///
/// Pages without a registered detail produce `BadgeDetail::default()`.
#[derive(Clone, Default)]
pub struct MockExtractor {
    summaries: Arc<Vec<BadgeSummary>>,
    details: Arc<Mutex<HashMap<String, BadgeDetail>>>,
    base_urls: Arc<Mutex<Vec<String>>>,
}

impl MockExtractor {
    pub fn new(summaries: Vec<BadgeSummary>) -> Self {
        Self {
            summaries: Arc::new(summaries),
            ..Self::default()
        }
    }

    pub fn with_detail(self, html: &str, detail: BadgeDetail) -> Self {
        self.details.lock().unwrap().insert(html.to_string(), detail);
        self
    }

    /// Base URLs passed to `listing`, in call order.
    pub fn base_urls(&self) -> Vec<String> {
        self.base_urls.lock().unwrap().clone()
    }
}

impl MarkupExtractor for MockExtractor {
    fn listing(&self, _html: &str, base_url: &str) -> Vec<BadgeSummary> {
        self.base_urls.lock().unwrap().push(base_url.to_string());
        self.summaries.as_ref().clone()
    }

    fn detail(&self, html: &str, _base_url: &str) -> BadgeDetail {
        self.details
            .lock()
            .unwrap()
            .get(html)
            .cloned()
            .unwrap_or_default()
    }
}
