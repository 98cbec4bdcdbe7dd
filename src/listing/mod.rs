// SPDX-License-Identifier: MPL-2.0
//! Listing data: the model, its image set, where it is loaded from, and the
//! image handles derived from it.

pub mod image_set;
pub mod images;
pub mod model;
pub mod source;

pub use image_set::{ImageRef, ImageSet};
pub use images::{ImageCache, ImageSlot, PendingFetch};
pub use model::Listing;
pub use source::ListingSource;
