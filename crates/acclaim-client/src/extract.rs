//! Badge extraction from Acclaim listing and badge pages.
//!
//! Selection rules are fixed class names of the site's server-rendered markup.
//! Every lookup is optional: a missing element or attribute leaves its field
//! absent and never aborts extraction.

use std::sync::Arc;

use acclaim_core::models::{BadgeDetail, BadgeSummary, Skill};
use acclaim_core::traits::MarkupExtractor;
use scraper::{ElementRef, Html, Selector};

/// Badge tile on the listing page.
pub const LISTING_ITEM: &str = "a.cr-public-earned-badge-grid-item";
/// Issuer name under a listing tile.
pub const LISTING_ORGANISATION: &str = "div.cr-standard-grid-item-content__subtitle";
/// Large badge image on a badge page.
pub const FULL_BADGE_IMAGE: &str = "img.cr-badges-full-badge__img";
/// Issuer block on a badge page; its first link points at the organisation.
pub const ISSUER_ENTITY: &str = "div.cr-badges-badge-issuer__entity";
/// Skill entry that links to a skill page. Unlinked skills lack this class.
pub const LINKED_SKILL: &str = "li.cr-badges-badge-skills__skill--linked";

struct Selectors {
    listing_item: Selector,
    listing_organisation: Selector,
    full_badge_image: Selector,
    issuer_entity: Selector,
    linked_skill: Selector,
    anchor: Selector,
    img: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            listing_item: parse(LISTING_ITEM),
            listing_organisation: parse(LISTING_ORGANISATION),
            full_badge_image: parse(FULL_BADGE_IMAGE),
            issuer_entity: parse(ISSUER_ENTITY),
            linked_skill: parse(LINKED_SKILL),
            anchor: parse("a"),
            img: parse("img"),
        }
    }
}

fn parse(selector: &str) -> Selector {
    Selector::parse(selector).expect("invalid selector")
}

/// HTML extractor using scraper.
///
/// Malformed or truncated HTML is parsed leniently into whatever tree it
/// describes, so an empty page simply yields empty results.
pub struct HtmlExtractor {
    selectors: Arc<Selectors>,
}

impl Clone for HtmlExtractor {
    fn clone(&self) -> Self {
        Self {
            selectors: Arc::clone(&self.selectors),
        }
    }
}

impl HtmlExtractor {
    pub fn new() -> Self {
        Self {
            selectors: Arc::new(Selectors::new()),
        }
    }

    fn summary(&self, tile: ElementRef<'_>, base_url: &str) -> BadgeSummary {
        let s = &self.selectors;
        BadgeSummary {
            title: attr(tile, "title"),
            url: resolve(base_url, tile.value().attr("href")),
            image110: tile.select(&s.img).next().and_then(|img| attr(img, "src")),
            organisation: tile
                .select(&s.listing_organisation)
                .next()
                .map(|div| strip_newlines(&text_of(div))),
        }
    }

    fn skill(&self, item: ElementRef<'_>, base_url: &str) -> Option<Skill> {
        let link = item.select(&self.selectors.anchor).next()?;
        let name = strip_newlines(&text_of(link));
        Some(Skill {
            name: (!name.is_empty()).then_some(name),
            url: resolve(base_url, link.value().attr("href")),
        })
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupExtractor for HtmlExtractor {
    fn listing(&self, html: &str, base_url: &str) -> Vec<BadgeSummary> {
        let document = Html::parse_document(html);
        document
            .select(&self.selectors.listing_item)
            .map(|tile| self.summary(tile, base_url))
            .collect()
    }

    fn detail(&self, html: &str, base_url: &str) -> BadgeDetail {
        let document = Html::parse_document(html);
        let s = &self.selectors;

        let image340 = document
            .select(&s.full_badge_image)
            .next()
            .and_then(|img| attr(img, "src"));

        let organisation_url = document
            .select(&s.issuer_entity)
            .next()
            .and_then(|issuer| issuer.select(&s.anchor).next())
            .and_then(|link| link.value().attr("href"))
            .map(|href| format!("{base_url}{href}"));

        let skills = document
            .select(&s.linked_skill)
            .filter_map(|item| self.skill(item, base_url))
            .collect();

        BadgeDetail {
            image340,
            organisation_url,
            skills,
        }
    }
}

fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).map(str::to_string)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn strip_newlines(text: &str) -> String {
    text.replace('\n', "")
}

/// Append an href to the site origin as-is. A missing href resolves to the origin.
fn resolve(base_url: &str, href: Option<&str>) -> String {
    format!("{base_url}{}", href.unwrap_or_default())
}
