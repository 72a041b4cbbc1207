//! # Line-Item Store
//!
//! The storage capability a [`Cart`](crate::cart::Cart) is built on, and its
//! in-memory implementation.
//!
//! ## Store Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storable Operations                                  │
//! │                                                                         │
//! │  Operation            Name present?          Effect                     │
//! │  ─────────            ─────────────          ──────                     │
//! │                                                                         │
//! │  set(name, amount) ──► yes ────────────────► items[i].price += amount   │
//! │                    └─► no  ────────────────► items.push({name, amount}) │
//! │                                                                         │
//! │  restore(name) ──────► yes ────────────────► items.retain(≠ name)       │
//! │                    └─► no  ────────────────► (nothing)                  │
//! │                                                                         │
//! │  reset() ──────────────────────────────────► items.clear()              │
//! │                                                                         │
//! │  total() ──────────────────────────────────► floor(Σ price × f) / f     │
//! │                                                                         │
//! │  all() ────────────────────────────────────► &items (live, not a copy)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::precision::Precision;
use crate::types::LineItem;

// =============================================================================
// Storable Trait
// =============================================================================

/// Narrow contract between a cart and whatever keeps its line items.
///
/// ## Invariants
/// - At most one line item per distinct name
/// - Names keep the order in which they were first set
/// - No operation fails; unknown names are ignored
pub trait Storable {
    /// Representation handed out by [`Storable::all`].
    type Collection: ?Sized;

    /// Adds `price` to the line item called `name`, creating it if needed.
    fn set(&mut self, name: &str, price: f64);

    /// Removes the line item called `name`, if any.
    fn restore(&mut self, name: &str);

    /// Sum of all line item prices, truncated.
    fn total(&self) -> f64;

    /// Removes every line item.
    fn reset(&mut self);

    /// Borrows the current line items.
    fn all(&self) -> &Self::Collection;
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// `Vec`-backed store. Lookups are linear; carts are small.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    storage: Vec<LineItem>,
    precision: Precision,
}

impl InMemoryStorage {
    /// Creates an empty store truncating totals at two decimals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store truncating totals at `precision`.
    pub fn with_precision(precision: Precision) -> Self {
        InMemoryStorage {
            storage: Vec::new(),
            precision,
        }
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Storable for InMemoryStorage {
    type Collection = Vec<LineItem>;

    fn set(&mut self, name: &str, price: f64) {
        if let Some(item) = self.storage.iter_mut().find(|item| item.name == name) {
            item.price += price;
            debug!(name, added = price, price = item.price, "Line item increased");
            return;
        }

        self.storage.push(LineItem::new(name, price));
        debug!(name, price, "Line item added");
    }

    fn restore(&mut self, name: &str) {
        let initial_len = self.storage.len();
        self.storage.retain(|item| item.name != name);

        if self.storage.len() != initial_len {
            debug!(name, "Line item restored");
        }
    }

    fn total(&self) -> f64 {
        // Explicit 0.0 seed: `Sum for f64` may start from -0.0
        let sum = self.storage.iter().fold(0.0, |acc, item| item.price + acc);
        self.precision.truncate(sum)
    }

    fn reset(&mut self) {
        debug!(cleared = self.storage.len(), "Store reset");
        self.storage.clear();
    }

    fn all(&self) -> &Vec<LineItem> {
        &self.storage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
