use std::future::Future;

use crate::error::AppError;
use crate::models::{BadgeDetail, BadgeSummary};

/// Fetches raw HTML content from a URL.
///
/// Implementations fail on unreachable hosts and non-success statuses;
/// timeout policy belongs to the implementation.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Turns badge pages into structured records.
///
/// Extraction never fails: missing markup yields absent fields or empty lists.
/// `base_url` is the site origin that relative links are appended to.
pub trait MarkupExtractor: Send + Sync + Clone {
    /// Reads every badge entry of a listing page, in document order.
    fn listing(&self, html: &str, base_url: &str) -> Vec<BadgeSummary>;

    /// Reads the detail-level fields of a single badge page.
    fn detail(&self, html: &str, base_url: &str) -> BadgeDetail;
}
