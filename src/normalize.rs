//! Mapping from the untrusted remote site document to the display-ready
//! records the renderer and API hand out.
//!
//! Every raw field is optional; absent fields take the fixed defaults below.
//! Summary and items are always derived together from one document, so a
//! caller can never observe half of an update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::fetch::base_path;

pub const UNKNOWN_SITE: &str = "Unknown Site";
pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No description available";
pub const DEFAULT_THEME: &str = "Default Theme";
pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_SOURCE: &str = "index.html";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// The raw `site.json` payload. Unknown fields are ignored; nothing beyond
/// presence is validated.
#[derive(Debug, Default, Deserialize)]
pub struct RawSiteDocument {
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: RawSiteMetadata,
    #[serde(default)]
    pub items: Vec<RawItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSiteMetadata {
    pub site: Option<RawSiteInfo>,
    pub theme: Option<RawTheme>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSiteInfo {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub created: Option<i64>,
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub updated: Option<i64>,
    pub logo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTheme {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub metadata: RawItemMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawItemMetadata {
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub updated: Option<i64>,
    #[serde(default)]
    pub images: Vec<String>,
}

// Documents in the wild carry epoch timestamps as numbers or as numeric
// strings; anything else reads as absent rather than failing the document.
fn epoch_seconds<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// Normalized top-level site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub name: String,
    pub description: String,
    pub theme: String,
    pub created: String,
    pub last_updated: String,
    pub logo: String,
}

/// Normalized per-entry record, one card each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub title: String,
    pub description: String,
    pub last_updated: String,
    pub link: String,
    pub source: String,
    pub image: String,
}

/// Derive the summary and the item list from one raw document.
pub fn normalize(document: &RawSiteDocument, canonical_url: &str) -> (SiteSummary, Vec<DisplayItem>) {
    let base = base_path(canonical_url);
    let summary = summarize(document);
    let items = document
        .items
        .iter()
        .map(|item| display_item(item, base))
        .collect();
    (summary, items)
}

fn summarize(document: &RawSiteDocument) -> SiteSummary {
    let site = document.metadata.site.as_ref();

    SiteSummary {
        name: site
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| UNKNOWN_SITE.to_string()),
        description: document
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        theme: document
            .metadata
            .theme
            .as_ref()
            .and_then(|t| t.name.clone())
            .unwrap_or_else(|| DEFAULT_THEME.to_string()),
        created: date_or_na(site.and_then(|s| s.created)),
        last_updated: date_or_na(site.and_then(|s| s.updated)),
        logo: site.and_then(|s| s.logo.clone()).unwrap_or_default(),
    }
}

fn display_item(item: &RawItem, base: &str) -> DisplayItem {
    // link and source resolve to the same joined location; a location-less
    // item keeps an empty link but still points its source at the index.
    let (link, source) = match item.location.as_deref() {
        Some(location) => {
            let joined = join_path(base, location);
            (joined.clone(), joined)
        }
        None => (String::new(), DEFAULT_SOURCE.to_string()),
    };

    let image = item
        .metadata
        .images
        .first()
        .filter(|path| !path.is_empty())
        .map(|path| join_path(base, path))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    DisplayItem {
        title: item
            .title
            .clone()
            .unwrap_or_else(|| UNTITLED.to_string()),
        description: item
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        last_updated: date_or_na(item.metadata.updated),
        link,
        source,
        image,
    }
}

pub fn format_epoch_date(seconds: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(seconds, 0).map(|date| date.format("%B %-d, %Y").to_string())
}

fn date_or_na(seconds: Option<i64>) -> String {
    seconds
        .and_then(format_epoch_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn join_path(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}
