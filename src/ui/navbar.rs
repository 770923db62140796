use chrono::Datelike;
use iced::font::Weight;
use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{Alignment, Element, Font, Length};

use super::{chrome, MUTED};
use crate::route::Route;
use crate::Message;

/// Top bar: store name (links home) and, on the list screen, the search box
pub fn view<'a>(store_name: &'a str, search: Option<&'a str>) -> Element<'a, Message> {
    let brand = button(
        text(store_name)
            .size(24)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }),
    )
    .style(button::text)
    .on_press(Message::Navigate(Route::Listing));

    let mut bar = row![brand, horizontal_space()]
        .align_y(Alignment::Center)
        .spacing(20);

    if let Some(term) = search {
        bar = bar.push(
            text_input("Search products...", term)
                .on_input(Message::SearchChanged)
                .padding(8)
                .width(320),
        );
    }

    container(bar)
        .padding([12, 24])
        .width(Length::Fill)
        .style(chrome)
        .into()
}

/// Copyright line at the bottom of every screen
pub fn footer<'a>(store_name: &'a str) -> Element<'a, Message> {
    let year = chrono::Local::now().year();

    container(
        column![
            text(format!("© {} {}. All rights reserved.", year, store_name)).size(14),
            text("Inspired by modern e-commerce design.").size(12).color(MUTED),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .padding(28)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(chrome)
    .into()
}
