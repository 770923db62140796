//! Product detail screen state, keyed by the product ID from the route

use iced::task;
use iced::widget::image::Handle;
use tracing::{error, warn};

use super::data::{Product, ProductId};
use super::listing::Thumbnail;
use super::TaskGuard;
use crate::catalog::image::{fetch_image, DETAIL_IMAGE_SIZE};
use crate::catalog::CatalogClient;

pub const DETAIL_ERROR: &str = "Failed to fetch product detail";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    Loading,
    Ready(Product),
    Error(String),
}

pub struct Detail {
    id: ProductId,
    phase: DetailPhase,
    image: Thumbnail,
    tasks: TaskGuard,
}

impl Detail {
    /// A freshly mounted detail screen starts loading immediately
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            phase: DetailPhase::Loading,
            image: Thumbnail::Loading,
            tasks: TaskGuard::default(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn image(&self) -> &Thumbnail {
        &self.image
    }

    /// Record the fetch outcome. Results for another product are ignored.
    pub fn loaded(&mut self, id: ProductId, result: Result<Product, String>) {
        if id != self.id {
            return;
        }
        self.phase = match result {
            Ok(product) => DetailPhase::Ready(product),
            Err(message) => DetailPhase::Error(message),
        };
    }

    pub fn image_loaded(&mut self, id: ProductId, result: Result<Handle, String>) {
        if id != self.id {
            return;
        }
        self.image = match result {
            Ok(handle) => Thumbnail::Ready(handle),
            Err(_) => Thumbnail::Missing,
        };
    }

    /// Tie a background task's lifetime to this screen
    pub fn hold(&mut self, handle: task::Handle) {
        self.tasks.hold(handle);
    }
}

/// Fetch one product, collapsing failures into the static error message
pub async fn load_product(client: CatalogClient, id: ProductId) -> Result<Product, String> {
    client.fetch_product(id).await.map_err(|e| {
        error!("Product detail fetch error: {}", e);
        DETAIL_ERROR.to_string()
    })
}

/// Fetch the large product image for the detail page
pub async fn load_image(client: CatalogClient, url: String) -> Result<Handle, String> {
    fetch_image(client.http().clone(), url.clone(), DETAIL_IMAGE_SIZE)
        .await
        .map_err(|e| {
            warn!("⚠️  Image {} unavailable: {}", url, e);
            e.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::client::tests::{serve, PRODUCTS};
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    fn bag() -> Product {
        Product {
            id: 3,
            title: "Bag".to_string(),
            price: 30.0,
            description: "canvas".to_string(),
            category: "women".to_string(),
            image: String::new(),
            rating: None,
        }
    }

    #[test]
    fn test_loading_then_ready() {
        let mut detail = Detail::new(3);
        assert_eq!(detail.phase(), &DetailPhase::Loading);

        detail.loaded(3, Ok(bag()));
        assert_eq!(detail.phase(), &DetailPhase::Ready(bag()));
    }

    #[test]
    fn test_error_is_terminal_message() {
        let mut detail = Detail::new(3);
        detail.loaded(3, Err(DETAIL_ERROR.to_string()));

        assert_eq!(detail.phase(), &DetailPhase::Error(DETAIL_ERROR.to_string()));
    }

    #[test]
    fn test_results_for_other_products_are_ignored() {
        let mut detail = Detail::new(3);
        detail.loaded(1, Err(DETAIL_ERROR.to_string()));
        detail.image_loaded(1, Err("gone".to_string()));

        assert_eq!(detail.phase(), &DetailPhase::Loading);
        assert!(matches!(detail.image(), Thumbnail::Loading));
    }

    #[test]
    fn test_dropping_detail_aborts_its_tasks() {
        let mut detail = Detail::new(3);

        let (_fetch, fetch) = iced::Task::perform(std::future::pending::<()>(), |_| ()).abortable();
        let fetch_watch = fetch.clone();
        detail.hold(fetch);

        let (_image, image) = iced::Task::perform(std::future::pending::<()>(), |_| ()).abortable();
        let image_watch = image.clone();
        detail.hold(image);

        assert!(!fetch_watch.is_aborted());
        drop(detail);

        assert!(fetch_watch.is_aborted());
        assert!(image_watch.is_aborted());
    }

    #[tokio::test]
    async fn test_load_product_maps_failure_to_message() {
        let router = Router::new().route(
            "/products/:id",
            get(|Path(id): Path<u32>| async move {
                let products: serde_json::Value = serde_json::from_str(PRODUCTS).unwrap();
                match products.as_array().unwrap().iter().find(|p| p["id"] == id) {
                    Some(p) => (StatusCode::OK, p.to_string()),
                    None => (StatusCode::NOT_FOUND, String::new()),
                }
            }),
        );
        let client = CatalogClient::new(&serve(router).await);

        let found = load_product(client.clone(), 2).await.unwrap();
        assert_eq!(found.title, "Shoe");

        let missing = load_product(client, 404).await;
        assert_eq!(missing, Err(DETAIL_ERROR.to_string()));
    }
}
