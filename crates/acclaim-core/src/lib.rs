pub mod badges;
pub mod config;
pub mod error;
pub mod models;
pub mod traits;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use badges::BadgeService;
pub use config::SiteConfig;
pub use error::AppError;
pub use models::{Badge, BadgeDetail, BadgeSummary, Skill};
pub use traits::{Fetcher, MarkupExtractor};
