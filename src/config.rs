//! Runtime configuration, from flags or environment variables

use clap::Parser;
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::route::Route;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com";

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Browse a public product catalog")]
pub struct Args {
    /// Base URL of the product catalog
    #[arg(long, env = "STOREFRONT_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: Url,

    /// Store name shown in the navbar and footer
    #[arg(long, env = "STOREFRONT_NAME", default_value = "CloudGenZ")]
    pub store_name: String,

    /// Route to open at startup, e.g. /product/3
    #[arg(default_value = "/")]
    pub route: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("catalog URL must be http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("unknown route: {0}")]
    InvalidRoute(String),
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog base without a trailing slash
    pub catalog_base: String,
    pub store_name: String,
    pub start_route: Route,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let scheme = args.catalog_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
        }

        let start_route =
            Route::parse(&args.route).ok_or_else(|| ConfigError::InvalidRoute(args.route.clone()))?;

        let catalog_base = args.catalog_url.as_str().trim_end_matches('/').to_string();
        info!("Catalog: {}", catalog_base);

        Ok(Self {
            catalog_base,
            store_name: args.store_name,
            start_route,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(argv).unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["storefront"]).unwrap();
        // The environment may override the defaults; only check what it can't touch
        assert_eq!(args.route, "/");

        let config = parse(&["storefront", "--catalog-url", "https://fakestoreapi.com/"]).unwrap();
        assert_eq!(config.catalog_base, "https://fakestoreapi.com");
        assert_eq!(config.start_route, Route::Listing);
    }

    #[test]
    fn test_deep_link_and_overrides() {
        let config = parse(&[
            "storefront",
            "--catalog-url",
            "http://127.0.0.1:9000/api/",
            "--store-name",
            "Corner Shop",
            "/product/4",
        ])
        .unwrap();

        assert_eq!(config.catalog_base, "http://127.0.0.1:9000/api");
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.start_route, Route::Product(4));
    }

    #[test]
    fn test_rejects_unknown_route() {
        let result = parse(&["storefront", "--catalog-url", "https://example.com", "/checkout"]);

        assert!(matches!(result, Err(ConfigError::InvalidRoute(route)) if route == "/checkout"));
    }

    #[test]
    fn test_rejects_non_http_catalog() {
        let result = parse(&["storefront", "--catalog-url", "ftp://example.com"]);

        assert!(matches!(result, Err(ConfigError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_rejects_malformed_url() {
        assert!(Args::try_parse_from(["storefront", "--catalog-url", "not a url"]).is_err());
    }
}
