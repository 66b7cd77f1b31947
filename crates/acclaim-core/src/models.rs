use serde::{Deserialize, Serialize};

/// List-level data for one badge, read from the profile's badge listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Absolute URL of the badge's detail page.
    pub url: String,
    /// Small (110px) badge image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image110: Option<String>,
    /// Issuing organisation, as shown under the badge tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
}

/// Detail-level data read from a single badge page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDetail {
    /// Large (340px) badge image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image340: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A linked competency listed on a badge page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub url: String,
}

/// A badge as returned to callers: the summary, plus its detail when requested.
///
/// Built field by field; detail data is only ever added next to the summary,
/// it never replaces a summary field. On the wire both images share one
/// `images` object keyed by size, absent fields are omitted, and `skills`
/// is present exactly when detail was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BadgeRecord", from = "BadgeRecord")]
pub struct Badge {
    pub summary: BadgeSummary,
    pub detail: Option<BadgeDetail>,
}

/// Serialized form of [`Badge`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BadgeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    url: String,
    #[serde(default)]
    images: BadgeImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    organisation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    organisation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skills: Option<Vec<Skill>>,
}

#[derive(Default, Serialize, Deserialize)]
struct BadgeImages {
    #[serde(rename = "110", default, skip_serializing_if = "Option::is_none")]
    small: Option<String>,
    #[serde(rename = "340", default, skip_serializing_if = "Option::is_none")]
    large: Option<String>,
}

impl From<Badge> for BadgeRecord {
    fn from(badge: Badge) -> Self {
        let Badge { summary, detail } = badge;
        let (large, organisation_url, skills) = match detail {
            Some(d) => (d.image340, d.organisation_url, Some(d.skills)),
            None => (None, None, None),
        };

        Self {
            title: summary.title,
            url: summary.url,
            images: BadgeImages {
                small: summary.image110,
                large,
            },
            organisation: summary.organisation,
            organisation_url,
            skills,
        }
    }
}

impl From<BadgeRecord> for Badge {
    fn from(record: BadgeRecord) -> Self {
        let summary = BadgeSummary {
            title: record.title,
            url: record.url,
            image110: record.images.small,
            organisation: record.organisation,
        };

        match record.skills {
            Some(skills) => Badge::with_detail(
                summary,
                BadgeDetail {
                    image340: record.images.large,
                    organisation_url: record.organisation_url,
                    skills,
                },
            ),
            None => Badge::from_summary(summary),
        }
    }
}

impl Badge {
    /// A badge carrying list-level data only.
    pub fn from_summary(summary: BadgeSummary) -> Self {
        Self {
            summary,
            detail: None,
        }
    }

    /// A badge carrying both list-level and detail-level data.
    pub fn with_detail(summary: BadgeSummary, detail: BadgeDetail) -> Self {
        Self {
            summary,
            detail: Some(detail),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.summary.title.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.summary.url
    }

    pub fn organisation_url(&self) -> Option<&str> {
        self.detail.as_ref()?.organisation_url.as_deref()
    }

    /// Skills from the detail page; empty when detail was not fetched.
    pub fn skills(&self) -> &[Skill] {
        self.detail.as_ref().map_or(&[], |d| d.skills.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> BadgeSummary {
        BadgeSummary {
            title: Some("badge-1".into()),
            url: "https://www.youracclaim.com/badge-1-href".into(),
            image110: Some("badge-1-img".into()),
            organisation: Some("badge-1-organisation".into()),
        }
    }

    #[test]
    fn test_summary_only_serializes_list_fields() {
        let badge = Badge::from_summary(summary());
        let json = serde_json::to_value(&badge).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "badge-1",
                "url": "https://www.youracclaim.com/badge-1-href",
                "images": { "110": "badge-1-img" },
                "organisation": "badge-1-organisation",
            })
        );
        assert!(badge.skills().is_empty());
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let badge = Badge::from_summary(BadgeSummary {
            title: None,
            url: "https://www.youracclaim.com/b2".into(),
            image110: None,
            organisation: None,
        });

        let json = serde_json::to_value(&badge).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "url": "https://www.youracclaim.com/b2", "images": {} })
        );
    }

    #[test]
    fn test_detail_is_additive() {
        let detail = BadgeDetail {
            image340: Some("big-img".into()),
            organisation_url: Some("https://www.youracclaim.com/org/acme".into()),
            skills: vec![
                Skill {
                    name: Some("Rust".into()),
                    url: "https://www.youracclaim.com/skills/rust".into(),
                },
                Skill {
                    name: None,
                    url: "https://www.youracclaim.com/skills/unnamed".into(),
                },
            ],
        };
        let badge = Badge::with_detail(summary(), detail);

        assert_eq!(badge.summary, summary());
        assert_eq!(
            badge.organisation_url(),
            Some("https://www.youracclaim.com/org/acme")
        );

        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(json["title"], "badge-1");
        assert_eq!(json["images"]["110"], "badge-1-img");
        assert_eq!(json["images"]["340"], "big-img");
        assert_eq!(json["organisationUrl"], "https://www.youracclaim.com/org/acme");
        assert_eq!(json["skills"][0]["name"], "Rust");
        assert!(json["skills"][1].get("name").is_none());
    }

    #[test]
    fn test_empty_detail_still_reports_skills() {
        let badge = Badge::with_detail(summary(), BadgeDetail::default());
        let json = serde_json::to_value(&badge).unwrap();

        assert_eq!(json["skills"], serde_json::json!([]));
        assert!(json.get("organisationUrl").is_none());
        assert!(json["images"].get("340").is_none());
    }

    #[test]
    fn test_deserialize_restores_badge() {
        let with_detail = Badge::with_detail(
            summary(),
            BadgeDetail {
                image340: Some("big-img".into()),
                organisation_url: None,
                skills: vec![],
            },
        );
        let text = serde_json::to_string(&with_detail).unwrap();
        assert_eq!(serde_json::from_str::<Badge>(&text).unwrap(), with_detail);

        let summary_only: Badge = serde_json::from_str(
            r#"{"url":"https://www.youracclaim.com/x","images":{"110":"small"}}"#,
        )
        .unwrap();
        assert_eq!(summary_only.detail, None);
        assert_eq!(summary_only.summary.image110.as_deref(), Some("small"));
        assert_eq!(summary_only.title(), None);
    }
}
