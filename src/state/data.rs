//! Shared data structures for the application state
//!
//! These structs mirror the JSON records served by the remote catalog
//! and flow from the catalog client into the screens.

use serde::Deserialize;

/// Catalog identifier of a product
pub type ProductId = u32;

/// A single product as served by the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique catalog ID
    pub id: ProductId,
    pub title: String,
    /// Price in dollars (non-negative)
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// One of the catalog's categories (e.g. "electronics")
    pub category: String,
    /// URL of the product image
    pub image: String,
    /// Customer rating, absent for some records
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Average customer rating and the number of reviews behind it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rating {
    /// Average score from 0.0 to 5.0
    pub rate: f64,
    pub count: u32,
}

impl Product {
    /// Rating score, 0.0 when the product has no rating
    pub fn rate(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(0.0)
    }

    /// Review count, 0 when the product has no rating
    pub fn review_count(&self) -> u32 {
        self.rating.map(|r| r.count).unwrap_or(0)
    }
}

/// Format a price the way cards and the detail page show it ("$20.00")
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Title-case a category for display ("men's clothing" -> "Men's Clothing")
pub fn display_category(category: &str) -> String {
    category
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
