/// Presentational widgets
///
/// Every function here only reads state and returns an `Element`; all
/// state changes go through `Message`.
pub mod detail;
pub mod listing;
pub mod navbar;
pub mod product_card;
pub mod sidebar;
pub mod star_rating;

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Highlight color for prices and selected filters (sky blue)
pub const ACCENT: Color = Color { r: 0.008, g: 0.518, b: 0.780, a: 1.0 };
/// Secondary text (gray)
pub const MUTED: Color = Color { r: 0.42, g: 0.45, b: 0.50, a: 1.0 };
/// Skeleton and image placeholder fill
pub const PLACEHOLDER: Color = Color { r: 0.90, g: 0.91, b: 0.92, a: 1.0 };
/// Rating stars (amber)
pub const STAR: Color = Color { r: 0.98, g: 0.75, b: 0.14, a: 1.0 };
/// Faded amber for half stars
pub const STAR_HALF: Color = Color { r: 0.98, g: 0.75, b: 0.14, a: 0.45 };
/// Error banner text (red)
pub const DANGER: Color = Color { r: 0.73, g: 0.11, b: 0.11, a: 1.0 };
/// Navbar and footer background (slate)
pub const SLATE: Color = Color { r: 0.12, g: 0.16, b: 0.23, a: 1.0 };

/// White panel with a light border, used by cards and the sidebar
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            color: PLACEHOLDER,
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.06, ..Color::BLACK },
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..container::Style::default()
    }
}

/// Solid gray block standing in for content that is still loading
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PLACEHOLDER)),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Dark bar behind the navbar and footer
pub fn chrome(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SLATE)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}
