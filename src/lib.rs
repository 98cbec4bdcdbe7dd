// SPDX-License-Identifier: MPL-2.0
//! `listing_gallery` is a property listing viewer built with the Iced GUI framework.
//!
//! It shows one listing with an inline image carousel and a full-window
//! lightbox, both driven by mouse drags, touch swipes, clicks, and (in the
//! lightbox) the keyboard. Text is localized with Fluent and preferences are
//! read from a `settings.toml` file.

#![doc(html_root_url = "https://docs.rs/listing_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod listing;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
