//! Product list screen state
//!
//! Owns everything the list screen shows: the fetched catalog, the filter
//! selections, the debounced search box, card thumbnails and the handles of
//! the tasks it started. Dropping a `Listing` aborts all of those tasks.

use std::collections::HashMap;
use std::future::Future;

use iced::task;
use iced::widget::image::Handle;
use tracing::{error, info, warn};

use super::data::{display_category, Product, ProductId};
use super::debounce::{Debouncer, Ticket, SEARCH_DELAY};
use super::filter::{self, CategoryFilter, SortKey};
use super::TaskGuard;
use crate::catalog::CatalogClient;

/// Number of placeholder cards shown while the catalog loads
pub const SKELETON_CARDS: usize = 8;

pub const PRODUCTS_ERROR: &str =
    "Failed to fetch products. Please check your connection or try again later.";
pub const CATEGORIES_ERROR: &str = "Failed to fetch categories.";

/// Loading state of the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted yet
    Idle,
    /// At least one of the two catalog fetches is in flight
    Loading,
    /// Both fetches settled successfully
    Ready,
    /// Both fetches settled and at least one failed
    ErrorDisplayed,
}

/// Image slot of a product card
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    /// Download or decode failed; the card shows a placeholder
    Missing,
}

pub struct Listing {
    products: Vec<Product>,
    categories: Vec<String>,
    category: CategoryFilter,
    search: Debouncer<String>,
    sort: SortKey,
    started: bool,
    products_settled: bool,
    categories_settled: bool,
    /// First user-facing error message, shown in the banner
    error: Option<String>,
    thumbnails: HashMap<ProductId, Thumbnail>,
    tasks: TaskGuard,
}

impl Default for Listing {
    fn default() -> Self {
        Self::new()
    }
}

impl Listing {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            category: CategoryFilter::All,
            search: Debouncer::new(SEARCH_DELAY),
            sort: SortKey::Relevance,
            started: false,
            products_settled: false,
            categories_settled: false,
            error: None,
            thumbnails: HashMap::new(),
            tasks: TaskGuard::default(),
        }
    }

    // ========== Loading ==========

    /// Enter the loading phase; both fetches are expected to settle next
    pub fn begin_load(&mut self) {
        self.started = true;
        self.products_settled = false;
        self.categories_settled = false;
        self.error = None;
    }

    /// Record the outcome of the product fetch
    pub fn products_settled(&mut self, result: Result<Vec<Product>, String>) {
        self.products_settled = true;

        match result {
            Ok(products) => {
                info!("🛍️  Loaded {} products", products.len());
                self.thumbnails = products
                    .iter()
                    .map(|p| (p.id, Thumbnail::Loading))
                    .collect();
                self.products = products;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    /// Record the outcome of the category fetch.
    /// A failure degrades to an empty category set.
    pub fn categories_settled(&mut self, result: Result<Vec<String>, String>) {
        self.categories_settled = true;

        match result {
            Ok(categories) => {
                info!("🏷️  Loaded {} categories", categories.len());
                self.categories = categories;
            }
            Err(message) => {
                self.categories.clear();
                if self.error.is_none() {
                    self.error = Some(message);
                }
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Idle
        } else if !(self.products_settled && self.categories_settled) {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::ErrorDisplayed
        } else {
            Phase::Ready
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ========== Filters ==========

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Text currently in the search box
    pub fn search_input(&self) -> &str {
        self.search.raw()
    }

    /// Debounced term the grid is filtered with
    pub fn search_term(&self) -> &str {
        self.search.settled()
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn select_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Record a keystroke and return the ticket for its debounce timer
    pub fn type_search(&mut self, value: String) -> Ticket {
        self.search.input(value)
    }

    /// Timer that must be scheduled for `ticket`
    pub fn search_timer(&self, ticket: Ticket) -> impl Future<Output = Ticket> + Send + 'static {
        self.search.sleep(ticket)
    }

    /// Keep the abort handle of the pending search timer
    pub fn arm_search(&mut self, handle: task::Handle) {
        self.search.arm(handle);
    }

    /// A debounce timer fired; returns whether the grid's term changed
    pub fn search_settled(&mut self, ticket: Ticket) -> bool {
        self.search.settle(ticket).is_some()
    }

    /// Back to "All Products", empty search and relevance order
    pub fn reset_filters(&mut self) {
        self.search.reset(String::new());
        self.category = CategoryFilter::All;
        self.sort = SortKey::Relevance;
    }

    /// Whether a category belongs to the last fetched category set
    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    // ========== Derived view ==========

    /// Filtered and sorted products for the grid
    pub fn visible(&self) -> Vec<&Product> {
        filter::apply(
            &self.products,
            &self.category,
            self.search.settled(),
            self.sort,
        )
    }

    /// Loaded, nothing matches: show the empty-state panel.
    /// A failed product fetch leaves only the error banner, since clearing
    /// filters cannot bring data back.
    pub fn is_empty_result(&self) -> bool {
        if self.products.is_empty() && self.error.is_some() {
            return false;
        }
        matches!(self.phase(), Phase::Ready | Phase::ErrorDisplayed) && self.visible().is_empty()
    }

    /// Toolbar line: "Showing 2 of 20 products in Electronics"
    pub fn summary(&self) -> String {
        if self.is_loading() {
            return "Loading...".to_string();
        }

        let mut summary = format!(
            "Showing {} of {} products",
            self.visible().len(),
            self.products.len()
        );

        if let CategoryFilter::Only(selected) = &self.category {
            if self.is_known_category(selected) {
                summary.push_str(" in ");
                summary.push_str(&display_category(selected));
            }
        }

        summary
    }

    // ========== Thumbnails & tasks ==========

    pub fn thumbnail(&self, id: ProductId) -> Option<&Thumbnail> {
        self.thumbnails.get(&id)
    }

    pub fn thumbnail_loaded(&mut self, id: ProductId, result: Result<Handle, String>) {
        let thumbnail = match result {
            Ok(handle) => Thumbnail::Ready(handle),
            Err(_) => Thumbnail::Missing,
        };
        self.thumbnails.insert(id, thumbnail);
    }

    /// Tie a background task's lifetime to this screen
    pub fn hold(&mut self, handle: task::Handle) {
        self.tasks.hold(handle);
    }
}

/// Fetch all products, collapsing failures into the banner message
pub async fn load_products(client: CatalogClient) -> Result<Vec<Product>, String> {
    client.fetch_products().await.map_err(|e| {
        error!("Product fetch error: {}", e);
        PRODUCTS_ERROR.to_string()
    })
}

/// Fetch the category set, collapsing failures into the banner message
pub async fn load_categories(client: CatalogClient) -> Result<Vec<String>, String> {
    client.fetch_categories().await.map_err(|e| {
        error!("Category fetch error: {}", e);
        CATEGORIES_ERROR.to_string()
    })
}

/// Fetch a card-sized image for one product
pub async fn load_thumbnail(client: CatalogClient, url: String) -> Result<Handle, String> {
    crate::catalog::image::fetch_image(
        client.http().clone(),
        url.clone(),
        crate::catalog::image::CARD_IMAGE_SIZE,
    )
    .await
    .map_err(|e| {
        warn!("⚠️  Image {} unavailable: {}", url, e);
        e.to_string()
    })
}
