//! # Domain Types
//!
//! Core domain types used throughout Solid Cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                      │
//! │  │  Productable    │◄─────────│   Vegetable     │                      │
//! │  │  (capability)   │  impl    │  ─────────────  │                      │
//! │  │  name()         │          │  name           │                      │
//! │  │  price()        │          │  price (unit)   │                      │
//! │  └────────┬────────┘          └─────────────────┘                      │
//! │           │ Cart::buy                                                   │
//! │           ▼                                                             │
//! │  ┌─────────────────┐                                                    │
//! │  │    LineItem     │   one per distinct name in a store                 │
//! │  │  ─────────────  │                                                    │
//! │  │  name (key)     │                                                    │
//! │  │  price (accum.) │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Product Capability
// =============================================================================

/// Anything that can be bought: a name and a unit price.
///
/// The cart depends on this capability only, never on a concrete product
/// type.
pub trait Productable {
    /// Name used as the line-item key.
    fn name(&self) -> &str;

    /// Unit price.
    fn price(&self) -> f64;
}

impl<P: Productable + ?Sized> Productable for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }
}

// =============================================================================
// Vegetable
// =============================================================================

/// A product sold by the unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vegetable {
    name: String,
    price: f64,
}

impl Vegetable {
    /// Creates a vegetable with the given unit price.
    ///
    /// ## Example
    /// ```rust
    /// use solid_core::{Productable, Vegetable};
    ///
    /// let apple = Vegetable::new("Apple", 2.0);
    /// assert_eq!(apple.name(), "Apple");
    /// assert_eq!(apple.price(), 2.0);
    /// ```
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Vegetable {
            name: name.into(),
            price,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl Productable for Vegetable {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A (name, accumulated price) pair held by a store.
///
/// `price` is the sum of every truncated amount bought under `name`, not a
/// unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        LineItem {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
