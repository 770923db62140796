use iced::widget::{button, column, container, image, text, Space};
use iced::{ContentFit, Element, Length};

use super::{panel, placeholder, star_rating, ACCENT, MUTED};
use crate::route::Route;
use crate::state::data::{display_category, format_price, Product};
use crate::state::listing::Thumbnail;
use crate::Message;

/// Fixed card width so the grid wraps evenly
pub const CARD_WIDTH: f32 = 230.0;

/// Height of the image area on a card
const IMAGE_HEIGHT: f32 = 180.0;

/// Longest title shown before it is cut with an ellipsis
const MAX_TITLE_CHARS: usize = 56;

/// Cut a long title on a character boundary and append an ellipsis
pub fn clamp_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let cut: String = title.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Product image, a gray box while loading, or a fallback label
pub fn picture<'a>(thumbnail: Option<&Thumbnail>, height: f32) -> Element<'a, Message> {
    match thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Contain)
            .into(),
        Some(Thumbnail::Missing) => container(text("Image Not Found").size(13).color(MUTED))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(height))
            .style(placeholder)
            .into(),
        Some(Thumbnail::Loading) | None => container(Space::new(Length::Fill, height))
            .style(placeholder)
            .into(),
    }
}

/// Grid card; the whole card opens the detail page
pub fn view<'a>(product: &'a Product, thumbnail: Option<&'a Thumbnail>) -> Element<'a, Message> {
    let details = column![
        picture(thumbnail, IMAGE_HEIGHT),
        text(clamp_title(&product.title, MAX_TITLE_CHARS)).size(14),
        text(display_category(&product.category)).size(12).color(MUTED),
        text(format_price(product.price)).size(18).color(ACCENT),
        star_rating::view(product.rate(), product.review_count()),
    ]
    .spacing(8);

    let add_to_cart = button(text("Add to Cart").size(14))
        .width(Length::Fill)
        .padding(8)
        .style(button::primary)
        .on_press(Message::AddToCart(product.id));

    let card = container(column![details, add_to_cart].spacing(12))
        .padding(14)
        .width(CARD_WIDTH)
        .style(panel);

    button(card)
        .padding(0)
        .style(button::text)
        .on_press(Message::Navigate(Route::Product(product.id)))
        .into()
}

/// Gray placeholder card shown while the catalog loads
pub fn skeleton<'a>() -> Element<'a, Message> {
    let block = |width: Length, height: f32| container(Space::new(width, height)).style(placeholder);

    let content = column![
        block(Length::Fill, IMAGE_HEIGHT),
        block(Length::Fixed(150.0), 14.0),
        block(Length::Fixed(100.0), 12.0),
        block(Length::Fixed(64.0), 20.0),
        block(Length::Fill, 14.0),
        block(Length::Fill, 34.0),
    ]
    .spacing(12);

    container(content)
        .padding(14)
        .width(CARD_WIDTH)
        .style(panel)
        .into()
}
