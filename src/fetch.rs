use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use once_cell::sync::Lazy;
use crate::error::{AppError, Result};
use crate::normalize::RawSiteDocument;

/// Every site description document lives under this suffix.
pub const SITE_DOCUMENT_SUFFIX: &str = "/site.json";

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Derive the document-fetch URL from whatever the user typed.
///
/// No scheme or host validation happens here; a malformed string is passed
/// through and the fetch layer surfaces its own failure.
pub fn canonicalize_url(input: &str) -> String {
    if input.ends_with(SITE_DOCUMENT_SUFFIX) {
        input.to_string()
    } else {
        format!("{}{}", input, SITE_DOCUMENT_SUFFIX)
    }
}

/// The canonical URL with the document suffix stripped. Item locations and
/// image paths are resolved against this.
pub fn base_path(canonical_url: &str) -> &str {
    canonical_url
        .strip_suffix(SITE_DOCUMENT_SUFFIX)
        .unwrap_or(canonical_url)
}

pub async fn fetch_site_document(url: &str, timeout: Duration) -> Result<RawSiteDocument> {
    let response = CLIENT.get(url).timeout(timeout).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::HttpError(status.as_u16()));
    }

    let body = response.text().await?;
    let document = serde_json::from_str(&body)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_document_suffix() {
        assert_eq!(canonicalize_url("https://x.com"), "https://x.com/site.json");
    }

    #[test]
    fn suffix_is_never_doubled() {
        assert_eq!(
            canonicalize_url("https://x.com/site.json"),
            "https://x.com/site.json"
        );
    }

    #[test]
    fn base_path_strips_suffix() {
        assert_eq!(base_path("https://x.com/site.json"), "https://x.com");
    }

    #[test]
    fn base_path_passes_through_unsuffixed_urls() {
        assert_eq!(base_path("https://x.com"), "https://x.com");
    }
}
