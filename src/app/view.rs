// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the listing page for the current load state and stacks the
//! lightbox over it while it is open.

use super::{ListingState, Message};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::listing::{ImageCache, Listing};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::gallery::{Inline, Lightbox, ViewContext as GalleryContext};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub listing: &'a ListingState,
    pub inline: &'a Inline,
    pub lightbox: Option<&'a Lightbox>,
    pub images: &'a ImageCache,
    pub config_warning: Option<&'a str>,
}

/// Renders the page, with the lightbox on top when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = GalleryContext {
        i18n: ctx.i18n,
        images: ctx.images,
    };

    let page: Element<'_, Message> = match ctx.listing {
        ListingState::Loading => view_loading(ctx.i18n),
        ListingState::Failed(err) => view_error(ctx.i18n, err),
        ListingState::Loaded(listing) => view_listing(ctx.i18n, listing, ctx.inline, gallery),
    };

    let page = match ctx.config_warning {
        Some(key) => Column::new()
            .push(view_warning(ctx.i18n, key))
            .push(page)
            .into(),
        None => page,
    };

    match ctx.lightbox {
        Some(lightbox) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(lightbox.view(gallery).map(Message::Lightbox))
            .into(),
        None => page,
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_loading(i18n: &I18n) -> Element<'_, Message> {
    centered(
        Text::new(i18n.tr("listing-loading"))
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
}

fn view_error<'a>(i18n: &'a I18n, err: &'a Error) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("listing-error-title"))
        .size(typography::TITLE_MD)
        .color(palette::ERROR_500);

    let message = Text::new(i18n.tr(err.i18n_key())).size(typography::BODY);

    let detail = Text::new(err.detail()).size(typography::CAPTION).color(Color {
        a: 0.7,
        ..palette::GRAY_400
    });

    let retry = button(Text::new(i18n.tr("listing-retry")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Retry);

    centered(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(message)
            .push(detail)
            .push(retry),
    )
}

fn view_warning<'a>(i18n: &'a I18n, key: &'a str) -> Element<'a, Message> {
    let dismiss = button(Text::new("✕").size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::overlay(palette::WHITE, 0.3, 0.5))
        .on_press(Message::DismissWarning);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr(key)).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(dismiss),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(styles::overlay::indicator(radius::NONE))
    .into()
}

fn view_listing<'a>(
    i18n: &'a I18n,
    listing: &'a Listing,
    inline: &'a Inline,
    gallery: GalleryContext<'a>,
) -> Element<'a, Message> {
    let heading = Text::new(listing.heading()).size(typography::TITLE_LG);

    let price_line = Text::new(i18n.tr_with_args(
        "listing-price",
        &[("price", listing.price.as_str()), ("currency", listing.currency())],
    ))
    .size(typography::TITLE_MD)
    .color(palette::PRIMARY_600);

    let mut header = Column::new().spacing(spacing::XS).push(heading);
    if !listing.title.trim().is_empty() && listing.title != listing.heading() {
        header = header.push(
            Text::new(listing.title.as_str())
                .size(typography::BODY_LG)
                .color(palette::GRAY_700),
        );
    }
    header = header.push(price_line);

    let bedrooms = listing.bedrooms.to_string();
    let bathrooms = listing.bathrooms.to_string();
    let area = i18n.tr_with_args("listing-area-value", &[("area", listing.area_value())]);
    let facts = Row::new()
        .spacing(spacing::LG)
        .push(fact(i18n.tr("listing-bedrooms"), bedrooms))
        .push(fact(i18n.tr("listing-bathrooms"), bathrooms))
        .push(fact(i18n.tr("listing-area"), area));

    let description = listing
        .description_text()
        .map_or_else(|| i18n.tr("listing-description-empty"), str::to_string);
    let mut about = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("listing-description-title")).size(typography::TITLE_SM))
        .push(Text::new(description).size(typography::BODY));
    if let Some(sub) = listing.subdescription_text() {
        about = about.push(Text::new(sub).size(typography::BODY).color(palette::GRAY_700));
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(header)
        .push(inline.view(gallery).map(Message::Inline))
        .push(section(facts))
        .push(section(about));

    if !listing.features.is_empty() {
        let features = listing.features.iter().fold(
            Column::new()
                .spacing(spacing::XS)
                .push(Text::new(i18n.tr("listing-features-title")).size(typography::TITLE_SM)),
            |column, feature| column.push(Text::new(format!("• {feature}")).size(typography::BODY)),
        );
        content = content.push(section(features));
    }

    Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn fact<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION).color(palette::GRAY_400))
        .push(Text::new(value).size(typography::BODY_LG))
        .into()
}

fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}
