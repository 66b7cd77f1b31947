use futures::stream::{self, StreamExt};

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::models::{Badge, BadgeDetail, BadgeSummary};
use crate::traits::{Fetcher, MarkupExtractor};

/// Collects a profile's badges: fetch listing → extract → (fetch detail → extract → merge).
///
/// Generic over the fetcher and the markup extractor so it can be driven
/// by mocks or local fixtures instead of the live site.
pub struct BadgeService<F, X>
where
    F: Fetcher,
    X: MarkupExtractor,
{
    fetcher: F,
    extractor: X,
    config: SiteConfig,
}

impl<F, X> BadgeService<F, X>
where
    F: Fetcher,
    X: MarkupExtractor,
{
    pub fn new(fetcher: F, extractor: X, config: SiteConfig) -> Self {
        Self {
            fetcher,
            extractor,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Fetch every badge on a profile's public listing, in listing order.
    ///
    /// With `include_detail`, each badge page is fetched as well (at most
    /// `detail_concurrency` at a time) and its data attached to the badge.
    /// A listing failure is returned as-is. A failed badge page only drops
    /// the detail of that one badge.
    pub async fn fetch_badges(
        &self,
        profile_id: &str,
        include_detail: bool,
    ) -> Result<Vec<Badge>, AppError> {
        let listing_url = self.config.listing_url(profile_id);

        tracing::info!("Fetching {}", listing_url);
        let html = self.fetcher.fetch(&listing_url).await?;
        tracing::info!("Fetched {} bytes of HTML", html.len());

        let summaries = self.extractor.listing(&html, &self.config.base_url);
        tracing::info!(count = summaries.len(), "Found badges on listing page");

        if !include_detail {
            return Ok(summaries.into_iter().map(Badge::from_summary).collect());
        }

        // `buffered` yields in input order, whatever order the fetches finish in.
        let badges: Vec<Badge> = stream::iter(summaries)
            .map(|summary| self.attach_detail(summary))
            .buffered(self.config.detail_concurrency)
            .collect()
            .await;

        let degraded = badges.iter().filter(|b| b.detail.is_none()).count();
        if degraded > 0 {
            tracing::warn!(degraded, total = badges.len(), "Some badge pages could not be fetched");
        }

        Ok(badges)
    }

    /// Fetch a single badge page and extract its detail fields.
    pub async fn fetch_badge_detail(&self, url: &str) -> Result<BadgeDetail, AppError> {
        let html = self.fetcher.fetch(url).await?;
        tracing::debug!(url, bytes = html.len(), "Fetched badge page");
        Ok(self.extractor.detail(&html, &self.config.base_url))
    }

    async fn attach_detail(&self, summary: BadgeSummary) -> Badge {
        match self.fetch_badge_detail(&summary.url).await {
            Ok(detail) => Badge::with_detail(summary, detail),
            Err(e) => {
                tracing::warn!(url = %summary.url, error = %e, "Badge page fetch failed, keeping summary only");
                Badge::from_summary(summary)
            }
        }
    }
}
