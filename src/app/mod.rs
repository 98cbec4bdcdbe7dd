// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the listing page and the
//! lightbox.
//!
//! The `App` struct owns the loaded listing, the inline carousel, and the
//! lightbox while it is open. It turns surface effects into state changes and
//! background fetches.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, GalleryConfig};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::listing::{ImageCache, Listing, ListingSource};
use crate::ui::gallery::{Inline, Lightbox};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Lifecycle of the single listing this window shows.
#[derive(Debug, Clone)]
pub enum ListingState {
    Loading,
    Loaded(Listing),
    Failed(Error),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryConfig,
    source: Option<ListingSource>,
    listing: ListingState,
    inline: Inline,
    /// `Some` exactly while the lightbox is open.
    lightbox: Option<Lightbox>,
    images: ImageCache,
    /// i18n key of a configuration warning shown as a banner.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("listing_loaded", &matches!(self.listing, ListingState::Loaded(_)))
            .field("inline_index", &self.inline.current())
            .field("lightbox_open", &self.lightbox.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the listing fetch based on
    /// the `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let source = flags.source(config.source.api_base_url());

        let (listing, task) = match source.clone() {
            Some(source) => (ListingState::Loading, update::fetch_listing(source)),
            None => (
                ListingState::Failed(Error::Config("no listing source given".to_string())),
                Task::none(),
            ),
        };

        let app = App {
            i18n,
            gallery: config.gallery,
            source,
            listing,
            inline: Inline::default(),
            lightbox: None,
            images: ImageCache::default(),
            config_warning,
        };

        (app, task)
    }

    /// Builds an application around an already loaded listing.
    ///
    /// Local images are ready immediately; the returned task fetches the
    /// remote ones.
    pub fn with_listing(listing: Listing, gallery: GalleryConfig, i18n: I18n) -> (Self, Task<Message>) {
        let mut app = App {
            i18n,
            gallery,
            source: None,
            listing: ListingState::Loading,
            inline: Inline::default(),
            lightbox: None,
            images: ImageCache::default(),
            config_warning: None,
        };
        let task = app.update(Message::ListingLoaded(Ok(listing)));
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.listing {
            ListingState::Loaded(listing) => format!("{} - {app_name}", listing.heading()),
            ListingState::Loading | ListingState::Failed(_) => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.lightbox.is_some())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &self.gallery,
            source: self.source.as_ref(),
            listing: &mut self.listing,
            inline: &mut self.inline,
            lightbox: &mut self.lightbox,
            images: &mut self.images,
        };

        match message {
            Message::Inline(inline_message) => update::handle_inline_message(&mut ctx, inline_message),
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::ListingLoaded(result) => update::handle_listing_loaded(&mut ctx, result),
            Message::ImageLoaded { index, result } => {
                update::handle_image_loaded(&mut ctx, index, result)
            }
            Message::Retry => update::handle_retry(&mut ctx),
            Message::DismissWarning => {
                self.config_warning = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            listing: &self.listing,
            inline: &self.inline,
            lightbox: self.lightbox.as_ref(),
            images: &self.images,
            config_warning: self.config_warning.as_deref(),
        })
    }

    #[must_use]
    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    #[must_use]
    pub fn inline(&self) -> &Inline {
        &self.inline
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    #[must_use]
    pub fn images(&self) -> &ImageCache {
        &self.images
    }
}
