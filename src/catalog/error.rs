use reqwest::StatusCode;
use thiserror::Error;

use crate::state::data::ProductId;

/// Why a catalog request failed
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request could not be sent or the body could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("HTTP error! status: {status} ({url})")]
    Http { status: StatusCode, url: String },

    /// The body was not the JSON we expected
    #[error("malformed catalog response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog has no product with this ID
    #[error("product {id} not found")]
    NotFound { id: ProductId },
}

/// Why a product image could not be shown
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to download image: {0}")]
    Fetch(#[from] CatalogError),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
