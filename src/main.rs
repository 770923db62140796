use clap::Parser;
use iced::widget::{column, image, scrollable};
use iced::{Element, Length, Task, Theme};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod catalog;
mod config;
mod route;
mod state;
mod ui;

use catalog::CatalogClient;
use config::{Args, Config};
use route::{History, Route};
use state::data::{Product, ProductId};
use state::debounce::Ticket;
use state::detail::{self, Detail, DetailPhase};
use state::filter::{CategoryFilter, SortKey};
use state::listing::{self, Listing};

/// The screen currently mounted
enum Screen {
    Listing(Listing),
    Detail(Detail),
}

/// Main application state
struct Storefront {
    config: Config,
    /// Shared catalog client
    catalog: CatalogClient,
    history: History,
    /// Replacing the screen drops it, which aborts its pending tasks
    screen: Screen,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Go to a route and push it on the back stack
    Navigate(Route),
    /// "Back to Products"
    Back,

    // ========== List screen ==========
    ProductsLoaded(Result<Vec<Product>, String>),
    CategoriesLoaded(Result<Vec<String>, String>),
    ThumbnailLoaded(ProductId, Result<image::Handle, String>),
    /// Raw keystroke in the search box
    SearchChanged(String),
    /// A debounce timer fired
    SearchSettled(Ticket),
    CategorySelected(CategoryFilter),
    SortSelected(SortKey),
    /// Empty-state "Clear Filters & Search"
    ResetFilters,

    // ========== Detail screen ==========
    DetailLoaded(ProductId, Result<Product, String>),
    DetailImageLoaded(ProductId, Result<image::Handle, String>),

    /// Placeholder until there is a cart
    AddToCart(ProductId),
}

impl Storefront {
    /// Create the application and mount the start route
    fn new(config: Config) -> (Self, Task<Message>) {
        let catalog = CatalogClient::new(&config.catalog_base);
        let start = config.start_route;

        let mut app = Storefront {
            history: History::new(start),
            screen: Screen::Listing(Listing::new()),
            config,
            catalog,
        };
        let task = app.mount(start);

        info!("🛒 Storefront started at {}", start);
        (app, task)
    }

    /// Replace the active screen with a fresh one for `route` and start
    /// its loading tasks
    fn mount(&mut self, route: Route) -> Task<Message> {
        match route {
            Route::Listing => {
                let mut listing = Listing::new();
                listing.begin_load();

                let (task, handle) = Task::batch([
                    Task::perform(
                        listing::load_products(self.catalog.clone()),
                        Message::ProductsLoaded,
                    ),
                    Task::perform(
                        listing::load_categories(self.catalog.clone()),
                        Message::CategoriesLoaded,
                    ),
                ])
                .abortable();
                listing.hold(handle);

                self.screen = Screen::Listing(listing);
                task
            }
            Route::Product(id) => {
                let mut detail = Detail::new(id);

                let (task, handle) = Task::perform(
                    detail::load_product(self.catalog.clone(), id),
                    move |result| Message::DetailLoaded(id, result),
                )
                .abortable();
                detail.hold(handle);

                self.screen = Screen::Detail(detail);
                task
            }
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                debug!("Navigate to {}", route);
                self.history.push(route);
                self.mount(route)
            }
            Message::Back => {
                let route = self.history.back();
                debug!("Back to {}", route);
                self.mount(route)
            }
            Message::AddToCart(id) => {
                info!("Add to cart: {}", id);
                Task::none()
            }
            message => match &mut self.screen {
                Screen::Listing(listing) => update_listing(listing, &self.catalog, message),
                Screen::Detail(detail) => update_detail(detail, &self.catalog, message),
            },
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let (search, body) = match &self.screen {
            Screen::Listing(listing) => (Some(listing.search_input()), ui::listing::view(listing)),
            Screen::Detail(detail) => (None, ui::detail::view(detail)),
        };

        column![
            ui::navbar::view(&self.config.store_name, search),
            scrollable(column![body, ui::navbar::footer(&self.config.store_name)])
                .height(Length::Fill),
        ]
        .into()
    }

    /// Window title, naming the product on the detail screen
    fn title(&self) -> String {
        match &self.screen {
            Screen::Detail(detail) => match detail.phase() {
                DetailPhase::Ready(product) => {
                    format!("{} | {}", product.title, self.config.store_name)
                }
                _ => self.config.store_name.clone(),
            },
            Screen::Listing(_) => self.config.store_name.clone(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn update_listing(listing: &mut Listing, catalog: &CatalogClient, message: Message) -> Task<Message> {
    match message {
        Message::ProductsLoaded(result) => {
            listing.products_settled(result);

            // One image download per card, all tied to this screen
            let downloads: Vec<Task<Message>> = listing
                .products()
                .iter()
                .map(|product| {
                    let id = product.id;
                    Task::perform(
                        listing::load_thumbnail(catalog.clone(), product.image.clone()),
                        move |result| Message::ThumbnailLoaded(id, result),
                    )
                })
                .collect();

            let (task, handle) = Task::batch(downloads).abortable();
            listing.hold(handle);
            task
        }
        Message::CategoriesLoaded(result) => {
            listing.categories_settled(result);
            Task::none()
        }
        Message::ThumbnailLoaded(id, result) => {
            listing.thumbnail_loaded(id, result);
            Task::none()
        }
        Message::SearchChanged(value) => {
            let ticket = listing.type_search(value);

            let (task, handle) =
                Task::perform(listing.search_timer(ticket), Message::SearchSettled).abortable();
            listing.arm_search(handle);
            task
        }
        Message::SearchSettled(ticket) => {
            if listing.search_settled(ticket) {
                debug!("Search settled on {:?}", listing.search_term());
            }
            Task::none()
        }
        Message::CategorySelected(category) => {
            listing.select_category(category);
            Task::none()
        }
        Message::SortSelected(sort) => {
            debug!("Sort by {}", sort.as_str());
            listing.select_sort(sort);
            Task::none()
        }
        Message::ResetFilters => {
            listing.reset_filters();
            Task::none()
        }
        other => {
            debug!("Ignoring {:?} on the list screen", other);
            Task::none()
        }
    }
}

fn update_detail(detail: &mut Detail, catalog: &CatalogClient, message: Message) -> Task<Message> {
    match message {
        Message::DetailLoaded(id, result) => {
            let image_url = match &result {
                Ok(product) if id == detail.id() => Some(product.image.clone()),
                _ => None,
            };
            detail.loaded(id, result);

            match image_url {
                Some(url) => {
                    let (task, handle) = Task::perform(
                        detail::load_image(catalog.clone(), url),
                        move |result| Message::DetailImageLoaded(id, result),
                    )
                    .abortable();
                    detail.hold(handle);
                    task
                }
                None => Task::none(),
            }
        }
        Message::DetailImageLoaded(id, result) => {
            detail.image_loaded(id, result);
            Task::none()
        }
        other => {
            debug!("Ignoring {:?} on the detail screen", other);
            Task::none()
        }
    }
}

fn main() -> iced::Result {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storefront=info")),
        )
        .init();

    let config = match Config::from_args(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(2);
        }
    };

    iced::application(Storefront::title, Storefront::update, Storefront::view)
        .theme(Storefront::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || Storefront::new(config))
}
