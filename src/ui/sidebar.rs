use iced::font::Weight;
use iced::widget::{button, column, container, horizontal_rule, text, Column};
use iced::{Element, Font, Length};

use super::{panel, MUTED};
use crate::state::data::display_category;
use crate::state::filter::CategoryFilter;
use crate::Message;

fn heading(label: &str) -> iced::widget::Text<'_> {
    text(label.to_uppercase()).size(12).color(MUTED).font(Font {
        weight: Weight::Semibold,
        ..Font::DEFAULT
    })
}

fn category_button<'a>(label: String, filter: CategoryFilter, selected: bool) -> Element<'a, Message> {
    let style = if selected { button::primary } else { button::text };

    button(text(label).size(14))
        .width(Length::Fill)
        .padding([8, 14])
        .style(style)
        .on_press(Message::CategorySelected(filter))
        .into()
}

/// "Filters" panel: category buttons and the price range stub
pub fn view<'a>(categories: &'a [String], selected: &'a CategoryFilter) -> Element<'a, Message> {
    let mut buttons = Column::new().spacing(4).push(category_button(
        "All Products".to_string(),
        CategoryFilter::All,
        *selected == CategoryFilter::All,
    ));

    for category in categories {
        let filter = CategoryFilter::Only(category.clone());
        let is_selected = *selected == filter;
        buttons = buttons.push(category_button(display_category(category), filter, is_selected));
    }

    let content = column![
        text("Filters").size(18),
        horizontal_rule(1),
        heading("Shop by Category"),
        buttons,
        horizontal_rule(1),
        heading("Price Range"),
        text("Slider coming soon...").size(13).color(MUTED),
    ]
    .spacing(12);

    container(content)
        .padding(16)
        .width(220)
        .style(panel)
        .into()
}
