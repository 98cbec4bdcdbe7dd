// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of `App` it
//! may touch and returns the follow-up task.

use super::{ListingState, Message};
use crate::config::GalleryConfig;
use crate::error::Error;
use crate::listing::{images, ImageCache, Listing, ListingSource};
use crate::ui::gallery::{inline, lightbox, Inline, Lightbox};
use iced::Task;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a GalleryConfig,
    pub source: Option<&'a ListingSource>,
    pub listing: &'a mut ListingState,
    pub inline: &'a mut Inline,
    pub lightbox: &'a mut Option<Lightbox>,
    pub images: &'a mut ImageCache,
}

/// Issues one fetch for `source`.
pub fn fetch_listing(source: ListingSource) -> Task<Message> {
    tracing::info!(%source, "fetching listing");
    Task::perform(source.load(), Message::ListingLoaded)
}

pub fn handle_inline_message(ctx: &mut UpdateContext<'_>, message: inline::Message) -> Task<Message> {
    match ctx.inline.handle(message) {
        inline::Effect::OpenLightbox { seed } => {
            tracing::debug!(seed, len = ctx.inline.images().len(), "opening lightbox");
            *ctx.lightbox = Some(Lightbox::new(
                ctx.inline.images(),
                seed,
                ctx.gallery.swipe_threshold(),
                ctx.gallery.drag_damping(),
            ));
        }
        inline::Effect::Navigated(_) | inline::Effect::None => {}
    }
    Task::none()
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    // Late events for a lightbox that has already closed
    let Some(lightbox) = ctx.lightbox.as_mut() else {
        return Task::none();
    };

    match lightbox.handle(message) {
        lightbox::Effect::Close => {
            tracing::debug!(index = ?lightbox.current(), "closing lightbox");
            *ctx.lightbox = None;
        }
        lightbox::Effect::Navigated(_) | lightbox::Effect::None => {}
    }
    Task::none()
}

pub fn handle_listing_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Listing, Error>,
) -> Task<Message> {
    match result {
        Ok(listing) => {
            let set = listing.image_set();
            let (cache, pending) = ImageCache::for_set(&set);
            tracing::info!(
                id = listing.id,
                images = set.len(),
                remote = pending.len(),
                "listing loaded"
            );

            *ctx.inline = Inline::new(
                set,
                ctx.gallery.swipe_threshold(),
                ctx.gallery.drag_damping(),
            );
            *ctx.lightbox = None;
            *ctx.images = cache;
            *ctx.listing = ListingState::Loaded(listing);

            Task::batch(pending.into_iter().map(|fetch| {
                let index = fetch.index;
                Task::perform(images::fetch_bytes(fetch.url), move |result| {
                    Message::ImageLoaded { index, result }
                })
            }))
        }
        Err(err) => {
            tracing::warn!(error = %err, "listing fetch failed");
            *ctx.listing = ListingState::Failed(err);
            Task::none()
        }
    }
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    ctx.images.store(index, result);
    Task::none()
}

pub fn handle_retry(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    // Only a failed load can be retried, and only once per failure
    if !matches!(ctx.listing, ListingState::Failed(_)) {
        return Task::none();
    }
    let Some(source) = ctx.source else {
        return Task::none();
    };

    *ctx.listing = ListingState::Loading;
    fetch_listing(source.clone())
}
