//! Product image loading
//!
//! Downloads a product image, shrinks it on a blocking worker so the UI
//! thread never decodes, and hands back an RGBA handle iced can draw.

use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};

use super::client::get_bytes;
use super::error::ImageError;

/// Longest side of an image on a product card
pub const CARD_IMAGE_SIZE: u32 = 256;

/// Longest side of an image on the detail page
pub const DETAIL_IMAGE_SIZE: u32 = 640;

/// Download an image and shrink it to fit within `max_side` pixels
pub async fn fetch_image(
    http: reqwest::Client,
    url: String,
    max_side: u32,
) -> Result<Handle, ImageError> {
    let bytes = get_bytes(&http, &url).await?;

    // Decoding and resampling are CPU-bound
    let rgba = tokio::task::spawn_blocking(move || shrink(&bytes, max_side)).await??;

    Ok(Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw()))
}

/// Decode an encoded image and scale it down (never up) to fit `max_side`,
/// preserving its aspect ratio
pub fn shrink(bytes: &[u8], max_side: u32) -> Result<RgbaImage, image::ImageError> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > max_side || img.height() > max_side {
        img.resize(max_side, max_side, FilterType::Lanczos3)
    } else {
        img
    };

    Ok(img.to_rgba8())
}
