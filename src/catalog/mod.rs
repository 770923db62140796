/// Remote catalog module
///
/// This module handles everything that talks to the catalog service:
/// - Product, category and detail requests (client.rs)
/// - Product image download and shrinking (image.rs)
/// - The error taxonomy for both (error.rs)
pub mod client;
pub mod error;
pub mod image;

pub use client::CatalogClient;
