//! # Solid Cart CLI
//!
//! Library half of the `solid-cart` binary.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize tracing (stderr, RUST_LOG)                               │
//! │  2. Load AppConfig from the environment                                 │
//! │  3. Load the catalog (SOLID_CATALOG_PATH or the built-in sample)        │
//! │  4. Build Cart<InMemoryStorage> at the configured precision             │
//! │  5. Buy each NAME:QTY argument, or replay the demo when there are none  │
//! │  6. Print { items, total } as pretty JSON on stdout                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod order;

use std::fs;

use serde::Serialize;
use solid_core::{Cart, Catalog, InMemoryStorage, LineItem, Storable, Vegetable};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::order::{parse_orders, Order};

const USAGE: &str = "\
Solid Cart

Usage: solid-cart [NAME[:QTY]]...

Buys each product from the catalog and prints the cart.
With no arguments, buys Apple (2.00) twice: 3 then 5 units.

Environment:
  SOLID_PRECISION      Decimals kept when truncating (default: 2)
  SOLID_CATALOG_PATH   JSON catalog replacing the built-in sample
  RUST_LOG             Log filter (default: info,solid=debug)";

/// What gets printed once all orders are bought.
#[derive(Debug, Serialize)]
pub struct CartSummary<'a> {
    pub items: &'a [LineItem],
    pub total: f64,
}

impl<'a> CartSummary<'a> {
    pub fn of(cart: &'a Cart<InMemoryStorage>) -> Self {
        CartSummary {
            items: cart.show(),
            total: cart.total(),
        }
    }
}

/// Entry point used by `main`.
pub fn run() -> AppResult<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let config = AppConfig::load()?;
    info!(
        precision = config.precision_decimals,
        catalog = ?config.catalog_path,
        "Configuration loaded"
    );

    let catalog = load_catalog(&config)?;
    let orders = parse_orders(&args)?;

    // Purchases and totals truncate at the same precision
    let precision = config.precision()?;
    let mut cart = Cart::with_precision(InMemoryStorage::with_precision(precision), precision);

    if orders.is_empty() {
        buy_demo(&mut cart);
    } else {
        buy_orders(&mut cart, &catalog, &orders)?;
    }

    println!("{}", serde_json::to_string_pretty(&CartSummary::of(&cart))?);
    Ok(())
}

/// Reads the configured catalog file, or falls back to the sample.
pub fn load_catalog(config: &AppConfig) -> AppResult<Catalog> {
    let Some(path) = &config.catalog_path else {
        debug!("Using built-in sample catalog");
        return Ok(Catalog::sample());
    };

    let json = fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
        path: path.clone(),
        source,
    })?;
    let catalog = Catalog::from_json(&json)?;
    info!(?path, products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// Buys every order from `catalog`.
///
/// An unknown product aborts before anything else is bought, so a failed
/// run never leaves a partially filled cart behind.
pub fn buy_orders<S: Storable>(
    cart: &mut Cart<S>,
    catalog: &Catalog,
    orders: &[Order],
) -> AppResult<()> {
    let products = orders
        .iter()
        .map(|order| catalog.get(&order.name).map(|product| (product, order.quantity)))
        .collect::<Result<Vec<_>, _>>()?;

    for (product, quantity) in products {
        cart.buy(product, quantity);
    }
    Ok(())
}

/// Buys the demo product the way the sample session does.
pub fn buy_demo<S: Storable>(cart: &mut Cart<S>) {
    let apple = Vegetable::new("Apple", 2.0);
    cart.buy(&apple, 3.0);
    cart.buy(&apple, 5.0);
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=solid_core=trace` - Show every truncation
/// - Default: INFO, DEBUG for solid crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,solid_core=debug,solid_cli=debug"));

    // Logs go to stderr so stdout stays valid JSON
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_core::{CoreError, Precision};

    fn cart() -> Cart<InMemoryStorage> {
        Cart::new(InMemoryStorage::new())
    }

    #[test]
    fn test_demo_session() {
        let mut cart = cart();
        buy_demo(&mut cart);

        assert_eq!(cart.show(), &vec![LineItem::new("Apple", 16.0)]);
        assert_eq!(cart.total(), 16.0);
    }

    #[test]
    fn test_buy_orders_from_sample() {
        let mut cart = cart();
        let orders = parse_orders(["Carrot:2", "Tomato:3", "Carrot"]).unwrap();

        buy_orders(&mut cart, &Catalog::sample(), &orders).unwrap();

        assert_eq!(cart.show().len(), 2);
        assert_eq!(cart.show()[0], LineItem::new("Carrot", 4.5));
        assert_eq!(cart.show()[1].name, "Tomato");
        assert_eq!(cart.total(), 14.1);
    }

    #[test]
    fn test_unknown_product_buys_nothing() {
        let mut cart = cart();
        let orders = parse_orders(["Carrot:2", "Kale:1"]).unwrap();

        let err = buy_orders(&mut cart, &Catalog::sample(), &orders).unwrap_err();

        assert!(matches!(err, AppError::Core(CoreError::ProductNotFound(name)) if name == "Kale"));
        assert!(cart.show().is_empty());
    }

    #[test]
    fn test_summary_json() {
        let mut cart = cart();
        buy_demo(&mut cart);

        let json = serde_json::to_value(CartSummary::of(&cart)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{ "name": "Apple", "price": 16.0 }],
                "total": 16.0
            })
        );
    }

    #[test]
    fn test_load_catalog_defaults_to_sample() {
        let catalog = load_catalog(&AppConfig::default()).unwrap();
        assert_eq!(catalog, Catalog::sample());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let config = AppConfig {
            precision_decimals: 2,
            catalog_path: Some("/nonexistent/solid/catalog.json".into()),
        };

        let err = load_catalog(&config).unwrap_err();
        assert!(matches!(err, AppError::CatalogRead { .. }));
    }

    #[test]
    fn test_orders_at_custom_precision() {
        let precision = Precision::from_decimals(0).unwrap();
        let mut cart = Cart::with_precision(InMemoryStorage::with_precision(precision), precision);
        let orders = parse_orders(["Broccoli:1"]).unwrap();

        buy_orders(&mut cart, &Catalog::sample(), &orders).unwrap();

        assert_eq!(cart.total(), 2.0);
    }
}
