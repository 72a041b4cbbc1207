//! # solid-core: Pure Cart Logic for Solid Cart
//!
//! This crate is the **heart** of Solid Cart: a cart that depends on a
//! storage capability instead of a concrete collection.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Solid Cart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    solid-cli (binary)                           │   │
//! │  │    env config ──► catalog ──► buy orders ──► print show()      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ solid-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   store   │  │   types   │  │ precision │  │   │
//! │  │   │   Cart    │─►│ Storable  │  │Productable│  │  floor()  │  │   │
//! │  │   │           │  │ InMemory  │  │ LineItem  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NO FAILING CART OPERATIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The `Cart` façade
//! - [`store`] - The `Storable` contract and `InMemoryStorage`
//! - [`types`] - `Productable`, `Vegetable`, `LineItem`
//! - [`precision`] - Floor truncation at a fixed number of decimals
//! - [`catalog`] - Sample product data
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use solid_core::{Cart, InMemoryStorage, Vegetable};
//!
//! let mut cart = Cart::new(InMemoryStorage::new());
//! cart.buy(Vegetable::new("Apple", 2.0), 2.0);
//! cart.buy(Vegetable::new("Banana", 1.0), 2.0);
//! cart.restore(Vegetable::new("Apple", 2.0));
//!
//! assert_eq!(cart.show()[0].name, "Banana");
//! assert_eq!(cart.total(), 2.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod precision;
pub mod store;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use precision::Precision;
pub use store::{InMemoryStorage, Storable};
pub use types::*;
