// SPDX-License-Identifier: MPL-2.0
//! Ordered, immutable set of image references for one listing.

use std::path::PathBuf;
use std::sync::Arc;

/// Where an image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// `http://` or `https://` URL, fetched in the background.
    Remote(String),
    /// File on the local disk.
    Local(PathBuf),
}

impl ImageRef {
    /// Parses a raw reference as delivered by the listing backend.
    ///
    /// Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Some(ImageRef::Remote(trimmed.to_string()));
        }

        let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);
        Some(ImageRef::Local(PathBuf::from(path)))
    }

}

/// The ordered images of a listing.
///
/// Cloning is cheap: both gallery surfaces hold a handle to the same
/// underlying slice and neither can modify it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSet {
    images: Arc<[ImageRef]>,
}

impl ImageSet {
    /// Builds a set from raw references, dropping blank entries.
    pub fn from_uris<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let images: Vec<ImageRef> = uris
            .into_iter()
            .filter_map(|uri| ImageRef::parse(uri.as_ref()))
            .collect();
        Self {
            images: images.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }

    /// Whether two sets share the same backing storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.images, &other.images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_detects_remote_urls() {
        assert_eq!(
            ImageRef::parse("https://cdn.example/a.jpg"),
            Some(ImageRef::Remote("https://cdn.example/a.jpg".to_string()))
        );
        assert!(ImageRef::parse("HTTP://cdn.example/b.jpg")
            .is_some_and(|image| matches!(image, ImageRef::Remote(_))));
    }

    #[test]
    fn parse_strips_file_scheme() {
        assert_eq!(
            ImageRef::parse("file:///tmp/house.png"),
            Some(ImageRef::Local(PathBuf::from("/tmp/house.png")))
        );
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(ImageRef::parse(""), None);
        assert_eq!(ImageRef::parse("   "), None);
    }

    #[test]
    fn from_uris_drops_blank_entries() {
        let set = ImageSet::from_uris(["a.jpg", "", "  ", "b.jpg"]);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().last(),
            Some(&ImageRef::Local(PathBuf::from("b.jpg")))
        );
    }

    #[test]
    fn clones_share_storage() {
        let set = ImageSet::from_uris(["a.jpg"]);
        let other = set.clone();
        assert!(set.ptr_eq(&other));
    }

    #[test]
    fn default_set_is_empty() {
        let set = ImageSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
