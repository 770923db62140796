use iced::widget::{row, text, Row};
use iced::{Color, Element};

use super::{MUTED, STAR, STAR_HALF};
use crate::Message;

/// One of the five rating stars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Split a 0-5 rating into five stars, rounded to the nearest half star
pub fn stars(rate: f64) -> [Star; 5] {
    let halves = (rate.clamp(0.0, 5.0) * 2.0).round() as u32;

    std::array::from_fn(|i| {
        let filled = i as u32 * 2;
        if halves >= filled + 2 {
            Star::Full
        } else if halves == filled + 1 {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

/// Glyph and color of a star. A half star is a filled star in faded amber,
/// so only ★ and ☆ are needed from the font.
pub fn glyph(star: Star) -> (&'static str, Color) {
    match star {
        Star::Full => ("★", STAR),
        Star::Half => ("★", STAR_HALF),
        Star::Empty => ("☆", MUTED),
    }
}

/// Stars followed by the review count, e.g. ★★★★☆ (120)
pub fn view<'a>(rate: f64, count: u32) -> Element<'a, Message> {
    let glyphs: Vec<Element<'a, Message>> = stars(rate)
        .into_iter()
        .map(|star| {
            let (symbol, color) = glyph(star);
            text(symbol).color(color).size(14).into()
        })
        .collect();

    row![
        Row::with_children(glyphs).spacing(1),
        text(format!("({})", count)).size(12).color(MUTED),
    ]
    .spacing(6)
    .into()
}
