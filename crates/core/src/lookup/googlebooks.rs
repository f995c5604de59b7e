//! Google Books catalog provider.

use crate::error::LookupError;
use crate::lookup::{MediaInfo, MediaInfoProvider};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

pub struct GoogleBooksProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl GoogleBooksProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for GoogleBooksProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaInfoProvider for GoogleBooksProvider {
    fn name(&self) -> &str {
        "googlebooks"
    }

    fn fetch(&self, title: &str) -> Result<MediaInfo, LookupError> {
        let url = format!("{}/books/v1/volumes", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("q", format!("intitle:{}", title))])
            .send()
            .map_err(|e| LookupError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| LookupError::Network(e.to_string()))?;
        // A non-2xx body also parses as JSON with no items; it must not be
        // mistaken for an empty search result.
        if !status.is_success() {
            return Err(LookupError::Provider {
                provider: "googlebooks".to_string(),
                message: format!("status {}: {}", status.as_u16(), body),
            });
        }
        let info = parse_volumes_response(&body).map_err(|e| LookupError::Provider {
            provider: "googlebooks".to_string(),
            message: e,
        })?;
        info.ok_or_else(|| LookupError::NotFound {
            title: title.to_string(),
        })
    }
}

/// Pull the first volume out of a Google Books search response.
/// Returns `Ok(None)` when the search matched nothing.
fn parse_volumes_response(body: &str) -> Result<Option<MediaInfo>, String> {
    let v: serde_json::Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    let volume = match v.get("items").and_then(|i| i.as_array()).and_then(|a| a.first()) {
        Some(item) => item
            .get("volumeInfo")
            .ok_or_else(|| "volume item without volumeInfo".to_string())?,
        None => return Ok(None),
    };
    let string_list = |key: &str| -> Vec<String> {
        volume
            .get(key)
            .and_then(|a| a.as_array())
            .map(|a| a.iter().filter_map(|v| v.as_str()).map(String::from).collect())
            .unwrap_or_default()
    };
    Ok(Some(MediaInfo {
        authors: string_list("authors"),
        categories: string_list("categories"),
        rating: volume.get("averageRating").and_then(|r| r.as_f64()).unwrap_or(0.0),
        summary: volume
            .get("description")
            .and_then(|d| d.as_str())
            .unwrap_or("")
            .to_string(),
        link: volume
            .get("canonicalVolumeLink")
            .and_then(|l| l.as_str())
            .unwrap_or("")
            .to_string(),
        image: volume
            .get("imageLinks")
            .and_then(|l| l.get("thumbnail"))
            .and_then(|t| t.as_str())
            .unwrap_or("")
            .to_string(),
        page_count: volume.get("pageCount").and_then(|p| p.as_i64()).unwrap_or(0),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_takes_first_volume_only() {
        let body = r#"{
            "items": [
                {
                    "volumeInfo": {
                        "authors": ["Frank Herbert"],
                        "categories": ["Fiction"],
                        "averageRating": 4.0,
                        "description": "Desert planet.",
                        "canonicalVolumeLink": "http://books/dune",
                        "imageLinks": { "thumbnail": "http://x/y.jpg" },
                        "pageCount": 412
                    }
                },
                {
                    "volumeInfo": { "authors": ["Someone Else"] }
                }
            ]
        }"#;
        let info = parse_volumes_response(body).unwrap().unwrap();
        assert_eq!(info.authors, vec!["Frank Herbert".to_string()]);
        assert_eq!(info.categories, vec!["Fiction".to_string()]);
        assert_eq!(info.rating, 4.0);
        assert_eq!(info.summary, "Desert planet.");
        assert_eq!(info.link, "http://books/dune");
        assert_eq!(info.image, "http://x/y.jpg");
        assert_eq!(info.page_count, 412);
    }

    #[test]
    fn parse_no_items_is_none() {
        assert_eq!(parse_volumes_response(r#"{"totalItems": 0}"#).unwrap(), None);
        assert_eq!(parse_volumes_response(r#"{"items": []}"#).unwrap(), None);
    }

    #[test]
    fn parse_missing_optional_fields_default_to_absent() {
        let body = r#"{"items": [{"volumeInfo": {"title": "Dune"}}]}"#;
        let info = parse_volumes_response(body).unwrap().unwrap();
        assert!(info.authors.is_empty());
        assert!(info.categories.is_empty());
        assert_eq!(info.rating, 0.0);
        assert_eq!(info.page_count, 0);
        assert_eq!(info.summary, "");
        assert_eq!(info.image, "");
    }

    #[test]
    fn parse_invalid_json_is_error() {
        assert!(parse_volumes_response("not json").is_err());
    }

    #[test]
    fn parse_item_without_volume_info_is_error() {
        assert!(parse_volumes_response(r#"{"items": [{"id": "abc"}]}"#).is_err());
    }
}
