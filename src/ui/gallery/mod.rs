// SPDX-License-Identifier: MPL-2.0
//! Gallery surfaces over one shared image set.
//!
//! - [`inline`] - Carousel embedded in the listing page
//! - [`lightbox`] - Full-window modal viewer, opened from the inline carousel
//! - [`input`] - Keyboard mapping for the lightbox
//!
//! Both surfaces own their own [`NavigationState`] and [`GestureSession`]
//! (`crate::ui::state`). Neither reads or writes the other's position: the
//! lightbox is seeded once from the inline index when it opens.
//!
//! [`NavigationState`]: crate::ui::state::NavigationState
//! [`GestureSession`]: crate::ui::state::GestureSession

pub mod inline;
pub mod input;
pub mod lightbox;

pub use inline::Inline;
pub use input::LightboxKey;
pub use lightbox::Lightbox;

use crate::i18n::fluent::I18n;
use crate::listing::{ImageCache, ImageSlot};
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::state::NavigationState;
use crate::ui::styles;
use iced::widget::{button, image, scrollable, Container, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Read-only data a surface needs to render.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

/// The image at `index`, or a placeholder when it is missing, loading, or failed.
pub(crate) fn image_frame<'a, Message: 'a>(
    ctx: ViewContext<'a>,
    index: Option<usize>,
    fit: ContentFit,
) -> Element<'a, Message> {
    let placeholder_key = match index.and_then(|i| ctx.images.slot(i)) {
        Some(ImageSlot::Ready(handle)) => {
            return image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(fit)
                .into();
        }
        Some(ImageSlot::Pending) => "gallery-image-loading",
        Some(ImageSlot::Failed) => "gallery-image-unavailable",
        None => "gallery-empty",
    };

    placeholder(ctx.i18n.tr(placeholder_key), Length::Fill, Length::Fill)
}

fn placeholder<'a, Message: 'a>(label: String, width: Length, height: Length) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_placeholder)
        .into()
}

/// Counter pill, e.g. "2 / 5". `None` for an empty gallery.
pub(crate) fn counter<'a, Message: 'a>(
    i18n: &I18n,
    navigation: &NavigationState,
) -> Option<Element<'a, Message>> {
    let (current, total) = navigation.position()?;
    let (current, total) = (current.to_string(), total.to_string());
    let label = i18n.tr_with_args(
        "gallery-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    Some(
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::FULL))
            .into(),
    )
}

/// Caption pill used for gesture and keyboard hints.
pub(crate) fn hint<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL))
        .into()
}

/// Horizontal strip with one button per image. The current image is highlighted.
pub(crate) fn thumbnail_strip<'a, Message: Clone + 'a>(
    ctx: ViewContext<'a>,
    navigation: &NavigationState,
    on_press: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let mut strip = Row::new().spacing(spacing::XS).padding(spacing::XXS);

    for index in 0..navigation.len() {
        let active = navigation.is_current(index);
        let content: Element<'a, Message> = match ctx.images.slot(index) {
            Some(ImageSlot::Ready(handle)) => image(handle.clone())
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .content_fit(ContentFit::Cover)
                .opacity(if active {
                    opacity::OPAQUE
                } else {
                    opacity::THUMBNAIL_DIMMED
                })
                .into(),
            _ => placeholder(
                String::new(),
                Length::Fixed(sizing::THUMBNAIL_WIDTH),
                Length::Fixed(sizing::THUMBNAIL_HEIGHT),
            ),
        };

        strip = strip.push(
            button(content)
                .padding(2.0)
                .style(styles::button::thumbnail(active))
                .on_press(on_press(index)),
        );
    }

    Scrollable::new(strip)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        ))
        .width(Length::Fill)
        .into()
}
