// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::listing::{Listing, ListingSource};
use crate::ui::gallery::{inline, lightbox};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Inline(inline::Message),
    Lightbox(lightbox::Message),
    /// Result of the listing fetch.
    ListingLoaded(Result<Listing, Error>),
    /// Bytes for one remote image, or the reason they could not be fetched.
    ImageLoaded {
        index: usize,
        result: Result<Vec<u8>, Error>,
    },
    /// Re-issue the listing fetch after a failure.
    Retry,
    /// Hide the configuration warning banner.
    DismissWarning,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `pt-BR`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LISTING_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional listing API base URL. Takes precedence over `[source] api_base_url`.
    pub api: Option<String>,
    /// Listing JSON file to open.
    pub listing_path: Option<String>,
    /// Listing id to fetch from the API.
    pub listing_id: Option<u64>,
}

impl Flags {
    /// Resolves where the listing comes from. A file path wins over an id.
    #[must_use]
    pub fn source(&self, default_base_url: &str) -> Option<ListingSource> {
        if let Some(path) = &self.listing_path {
            return Some(ListingSource::File {
                path: PathBuf::from(path),
            });
        }

        self.listing_id.map(|listing_id| ListingSource::Http {
            base_url: self
                .api
                .clone()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| default_base_url.to_string()),
            listing_id,
        })
    }
}
