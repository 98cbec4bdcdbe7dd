// SPDX-License-Identifier: MPL-2.0
//! Resolution of image references into renderable handles.
//!
//! Local files are handed to Iced directly. Remote images are fetched in the
//! background and parked in an [`ImageCache`] slot until their bytes arrive.

use super::source::http_client;
use super::{ImageRef, ImageSet};
use crate::error::Result;
use iced::widget::image::Handle;

/// Load state of one image in the set.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Bytes not available yet.
    Pending,
    Ready(Handle),
    /// The fetch failed; the surface shows an "unavailable" placeholder.
    Failed,
}

impl ImageSlot {
    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            ImageSlot::Ready(handle) => Some(handle),
            ImageSlot::Pending | ImageSlot::Failed => None,
        }
    }
}

/// A remote image that still has to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub index: usize,
    pub url: String,
}

/// Per-index image handles for one [`ImageSet`].
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    slots: Vec<ImageSlot>,
}

impl ImageCache {
    /// Creates a cache for `set`.
    ///
    /// Local images are ready immediately; the returned list names the remote
    /// images the caller must fetch and feed back through [`ImageCache::store`].
    #[must_use]
    pub fn for_set(set: &ImageSet) -> (Self, Vec<PendingFetch>) {
        let mut pending = Vec::new();
        let slots = set
            .iter()
            .enumerate()
            .map(|(index, image)| match image {
                ImageRef::Local(path) => ImageSlot::Ready(Handle::from_path(path)),
                ImageRef::Remote(url) => {
                    pending.push(PendingFetch {
                        index,
                        url: url.clone(),
                    });
                    ImageSlot::Pending
                }
            })
            .collect();

        (Self { slots }, pending)
    }

    /// Slot for `index`, or `None` when out of range.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&ImageSlot> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Records the outcome of a background fetch. Out-of-range indices are ignored.
    pub fn store(&mut self, index: usize, result: Result<Vec<u8>>) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        *slot = match result {
            Ok(bytes) => ImageSlot::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(index, error = %err, "image fetch failed");
                ImageSlot::Failed
            }
        };
    }
}

/// Downloads the raw bytes of a remote image.
pub async fn fetch_bytes(url: String) -> Result<Vec<u8>> {
    let response = http_client().get(&url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
