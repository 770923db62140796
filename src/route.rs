//! Client-side routes and the back stack

use std::fmt;

use crate::state::data::ProductId;

/// A screen the storefront can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Listing,
    /// `/product/:id`
    Product(ProductId),
}

impl Route {
    /// Parse a route path, `None` for anything unknown
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Some(Route::Listing);
        }

        let id = trimmed.strip_prefix("/product/")?;
        id.parse().ok().map(Route::Product)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Listing => f.write_str("/"),
            Route::Product(id) => write!(f, "/product/{}", id),
        }
    }
}

/// Navigation history; the last entry is the current route
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Route>,
}

impl History {
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Listing)
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Go back one entry; with nothing to go back to, land on `/`
    pub fn back(&mut self) -> Route {
        self.stack.pop();
        if self.stack.is_empty() {
            self.stack.push(Route::Listing);
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Listing));
        assert_eq!(Route::parse(""), Some(Route::Listing));
        assert_eq!(Route::parse("/product/7"), Some(Route::Product(7)));
        assert_eq!(Route::parse("/product/7/"), Some(Route::Product(7)));
        assert_eq!(Route::parse("/product/"), None);
        assert_eq!(Route::parse("/product/abc"), None);
        assert_eq!(Route::parse("/cart"), None);
    }

    #[test]
    fn test_display_matches_parse() {
        for route in [Route::Listing, Route::Product(12)] {
            assert_eq!(Route::parse(&route.to_string()), Some(route));
        }
    }

    #[test]
    fn test_back_navigation() {
        let mut history = History::new(Route::Listing);
        history.push(Route::Product(3));
        assert_eq!(history.current(), Route::Product(3));

        assert_eq!(history.back(), Route::Listing);
        // Nothing left to pop
        assert_eq!(history.back(), Route::Listing);
    }

    #[test]
    fn test_back_from_deep_link_lands_on_listing() {
        let mut history = History::new(Route::Product(5));

        assert_eq!(history.back(), Route::Listing);
    }
}
