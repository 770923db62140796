use iced::font::Weight;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Font, Length};

use super::product_card::picture;
use super::{star_rating, ACCENT, DANGER, MUTED};
use crate::state::data::{display_category, format_price};
use crate::state::detail::{Detail, DetailPhase};
use crate::Message;

const IMAGE_SIZE: f32 = 400.0;

/// Detail screen for one product
pub fn view<'a>(detail: &'a Detail) -> Element<'a, Message> {
    let back = button(text("← Back to Products").color(ACCENT))
        .style(button::text)
        .on_press(Message::Back);

    let body: Element<'a, Message> = match detail.phase() {
        DetailPhase::Loading => column![
            text("Loading...").color(MUTED),
            picture(None, IMAGE_SIZE),
        ]
        .spacing(16)
        .into(),
        DetailPhase::Error(message) => text(message).color(DANGER).into(),
        DetailPhase::Ready(product) => {
            let info = column![
                text(&product.title).size(28).font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }),
                text(format_price(product.price)).size(22).color(ACCENT),
                text(display_category(&product.category)).size(14).color(MUTED),
                star_rating::view(product.rate(), product.review_count()),
                text(&product.description),
                button(text("Add to Cart"))
                    .padding([10, 24])
                    .style(button::primary)
                    .on_press(Message::AddToCart(product.id)),
            ]
            .spacing(12)
            .width(Length::Fill);

            row![
                container(picture(Some(detail.image()), IMAGE_SIZE)).width(IMAGE_SIZE),
                info,
            ]
            .spacing(60)
            .into()
        }
    };

    container(column![back, body].spacing(24).max_width(960))
        .padding(32)
        .center_x(Length::Fill)
        .into()
}
