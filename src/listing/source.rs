// SPDX-License-Identifier: MPL-2.0
//! Where a listing comes from: the listing API or a JSON file on disk.
//!
//! Both sources accept either the API envelope
//! (`{ "success": true, "property": { ... } }`) or a bare listing object.

use super::Listing;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Response wrapper used by the listing API.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    property: Option<Listing>,
    #[serde(default)]
    message: Option<String>,
}

/// A place a single listing can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    /// `GET {base_url}/properties/{listing_id}`.
    Http { base_url: String, listing_id: u64 },
    /// JSON document on the local disk.
    File { path: PathBuf },
}

impl ListingSource {
    /// Full request URL for HTTP sources.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        match self {
            ListingSource::Http {
                base_url,
                listing_id,
            } => Some(format!(
                "{}/properties/{}",
                base_url.trim_end_matches('/'),
                listing_id
            )),
            ListingSource::File { .. } => None,
        }
    }

    /// Loads and decodes the listing.
    pub async fn load(self) -> Result<Listing> {
        match &self {
            ListingSource::Http { .. } => {
                let url = self
                    .url()
                    .ok_or_else(|| Error::Network("missing listing url".to_string()))?;
                let response = http_client().get(&url).send().await?;
                let status_ok = response.status().is_success();
                let body = response.text().await?;
                parse_response(status_ok, &body)
            }
            ListingSource::File { path } => {
                let body = tokio::fs::read_to_string(path).await?;
                parse_listing(&body)
            }
        }
    }
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSource::Http { .. } => {
                write!(f, "{}", self.url().unwrap_or_default())
            }
            ListingSource::File { path } => write!(f, "{}", path.display()),
        }
    }
}

/// Shared HTTP client for listing and image requests.
pub(crate) fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Decodes a listing document that may or may not be wrapped in the API envelope.
pub fn parse_listing(body: &str) -> Result<Listing> {
    parse_response(true, body)
}

/// Decodes an API response body.
///
/// A failed envelope, or a non-success HTTP status, becomes
/// [`Error::Listing`] carrying the backend's message when it sent one.
pub fn parse_response(status_ok: bool, body: &str) -> Result<Listing> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let is_envelope = value
        .as_object()
        .is_some_and(|object| object.contains_key("success") || object.contains_key("property"));

    if !is_envelope {
        if !status_ok {
            return Err(Error::Listing(String::new()));
        }
        return Ok(serde_json::from_value(value)?);
    }

    let envelope: Envelope = serde_json::from_value(value)?;
    match envelope {
        Envelope {
            success: true,
            property: Some(listing),
            ..
        } if status_ok => Ok(listing),
        Envelope { message, .. } => Err(Error::Listing(message.unwrap_or_default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const LISTING_JSON: &str = r#"{"id": 3, "tipo": "Casa", "imagens": ["a.jpg", "b.jpg"]}"#;

    #[test]
    fn url_joins_base_and_id() {
        let source = ListingSource::Http {
            base_url: "https://api.example/api/".to_string(),
            listing_id: 42,
        };
        assert_eq!(
            source.url().as_deref(),
            Some("https://api.example/api/properties/42")
        );
    }

    #[test]
    fn parse_accepts_envelope() {
        let body = format!(r#"{{"success": true, "property": {LISTING_JSON}}}"#);
        let listing = parse_listing(&body).expect("envelope should parse");
        assert_eq!(listing.id, 3);
        assert_eq!(listing.images.len(), 2);
    }

    #[test]
    fn parse_accepts_bare_listing() {
        let listing = parse_listing(LISTING_JSON).expect("bare listing should parse");
        assert_eq!(listing.kind, "Casa");
    }

    #[test]
    fn failed_envelope_carries_backend_message() {
        let body = r#"{"success": false, "message": "Imóvel não encontrado"}"#;
        assert_eq!(
            parse_listing(body),
            Err(Error::Listing("Imóvel não encontrado".to_string()))
        );
    }

    #[test]
    fn error_status_with_success_body_is_rejected() {
        let body = format!(r#"{{"success": true, "property": {LISTING_JSON}}}"#);
        assert!(matches!(
            parse_response(false, &body),
            Err(Error::Listing(_))
        ));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        assert!(matches!(parse_listing("<html>"), Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn file_source_loads_listing() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("listing.json");
        std::fs::write(&path, LISTING_JSON).expect("failed to write listing");

        let listing = ListingSource::File { path }
            .load()
            .await
            .expect("file listing should load");
        assert_eq!(listing.id, 3);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = ListingSource::File {
            path: dir.path().join("absent.json"),
        }
        .load()
        .await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
