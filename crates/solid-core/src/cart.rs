//! # Cart
//!
//! A thin façade over a [`Storable`] that turns "buy this product, this many
//! times" into a truncated amount.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart → Store Delegation                              │
//! │                                                                         │
//! │  Cart Method              Store Call               Notes                │
//! │  ───────────              ──────────               ─────                │
//! │                                                                         │
//! │  buy(p, qty) ───────────► set(p.name, amount) ──► amount truncated here │
//! │                                                                         │
//! │  restore(p) ────────────► restore(p.name)                               │
//! │                                                                         │
//! │  reset() ───────────────► reset()                                       │
//! │                                                                         │
//! │  total() ───────────────► total() ─────────────► truncated again there  │
//! │                                                                         │
//! │  show() ────────────────► all()                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use solid_core::{Cart, InMemoryStorage, Vegetable};
//!
//! let mut cart = Cart::new(InMemoryStorage::new());
//! let apple = Vegetable::new("Apple", 2.0);
//!
//! cart.buy(&apple, 3.0);
//! cart.buy(&apple, 2.0);
//!
//! assert_eq!(cart.show().len(), 1);
//! assert_eq!(cart.total(), 10.0);
//! ```

use tracing::debug;

use crate::precision::Precision;
use crate::store::Storable;
use crate::types::Productable;

/// The shopping cart.
///
/// ## Invariants
/// - The cart owns its store; stores are never shared between carts
/// - Every amount passed to [`Storable::set`] is already truncated
/// - Quantities are not validated: zero and negative values flow through
#[derive(Debug, Clone, Default)]
pub struct Cart<S> {
    storage: S,
    precision: Precision,
}

impl<S: Storable> Cart<S> {
    /// Creates a cart over `storage`, truncating purchases at two decimals.
    pub fn new(storage: S) -> Self {
        Self::with_precision(storage, Precision::default())
    }

    /// Creates a cart over `storage`, truncating purchases at `precision`.
    pub fn with_precision(storage: S, precision: Precision) -> Self {
        Cart { storage, precision }
    }

    /// Buys `quantity` units of `product`.
    ///
    /// ## Behavior
    /// - Amount is `truncate(price × quantity)`
    /// - Same product name as an earlier purchase: its line grows
    /// - New name: a line is appended
    pub fn buy(&mut self, product: impl Productable, quantity: f64) {
        let amount = self.precision.truncate(product.price() * quantity);
        debug!(product = product.name(), quantity, amount, "Buying product");
        self.storage.set(product.name(), amount);
    }

    /// Truncated sum of all lines, as computed by the store.
    pub fn total(&self) -> f64 {
        self.storage.total()
    }

    /// Removes the product's line entirely, whatever quantity was bought.
    pub fn restore(&mut self, product: impl Productable) {
        self.storage.restore(product.name());
    }

    /// Empties the cart.
    pub fn reset(&mut self) {
        self.storage.reset();
    }

    /// Current lines, straight from the store.
    pub fn show(&self) -> &S::Collection {
        self.storage.all()
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
