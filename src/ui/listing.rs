use iced::font::Weight;
use iced::widget::{button, column, container, horizontal_space, pick_list, row, text, Column};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Theme};
use iced_aw::Wrap;

use super::{panel, product_card, sidebar, DANGER, MUTED};
use crate::state::filter::SortKey;
use crate::state::listing::{Listing, Phase, SKELETON_CARDS};
use crate::Message;

fn grid<'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { r: 1.0, g: 0.89, b: 0.89, a: 1.0 })),
        text_color: Some(DANGER),
        border: Border {
            color: DANGER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}

fn error_banner<'a>(message: &'a str) -> Element<'a, Message> {
    container(
        column![
            text("Oops! Something went wrong.").font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }),
            text(message),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(banner)
    .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            text("🔍").size(48),
            text("No products found.").size(22),
            text("Try adjusting your search or filters.").color(MUTED),
            button("Clear Filters & Search")
                .padding([8, 16])
                .style(button::primary)
                .on_press(Message::ResetFilters),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .center_x(Length::Fill)
    .into()
}

/// List screen: sidebar, toolbar, banner and the product grid
pub fn view<'a>(listing: &'a Listing) -> Element<'a, Message> {
    let toolbar = container(
        row![
            text(listing.summary()).size(14).color(MUTED),
            horizontal_space(),
            text("Sort by:").size(14).color(MUTED),
            pick_list(SortKey::ALL, Some(listing.sort()), Message::SortSelected).text_size(14),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(panel);

    let mut content = Column::new().spacing(16).width(Length::Fill).push(toolbar);

    if let Some(message) = listing.error() {
        content = content.push(error_banner(message));
    }

    let body = match listing.phase() {
        Phase::Idle | Phase::Loading => {
            grid((0..SKELETON_CARDS).map(|_| product_card::skeleton()).collect())
        }
        _ if listing.is_empty_result() => empty_state(),
        Phase::Ready | Phase::ErrorDisplayed => grid(
            listing
                .visible()
                .into_iter()
                .map(|product| product_card::view(product, listing.thumbnail(product.id)))
                .collect(),
        ),
    };

    row![
        sidebar::view(listing.categories(), listing.category()),
        content.push(body),
    ]
    .spacing(24)
    .padding(24)
    .into()
}
