//! # Precision Module
//!
//! Provides the `Precision` type: the truncation policy applied to every
//! amount that enters or leaves a cart.
//!
//! ## Floor, Not Round
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TRUNCATION AT 2 DECIMALS (factor = 100)                                │
//! │                                                                         │
//! │    truncate(x) = floor(x * 100) / 100                                   │
//! │                                                                         │
//! │     0.125  →  12.5   → floor →  12  →  0.12                             │
//! │    -0.125  → -12.5   → floor → -13  → -0.13   (away from zero!)         │
//! │     0.57   →  56.999…→ floor →  56  →  0.56   (float noise is kept)     │
//! │                                                                         │
//! │  Amounts stay f64 end to end. The results above are part of the         │
//! │  contract: nothing rounds, nothing corrects binary noise.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use solid_core::precision::Precision;
//!
//! let cents = Precision::default(); // 2 decimals
//! assert_eq!(cents.truncate(1.999), 1.99);
//! assert_eq!(cents.truncate(-0.125), -0.13);
//! ```

use tracing::trace;

use crate::error::{CoreError, CoreResult};

/// Highest number of decimals accepted by [`Precision::from_decimals`].
///
/// Beyond this the scaled value starts losing integer precision for
/// everyday prices.
pub const MAX_DECIMALS: u32 = 6;

/// Decimals used when nothing else is configured.
pub const DEFAULT_DECIMALS: u32 = 2;

// =============================================================================
// Precision Type
// =============================================================================

/// A truncation factor of `10^decimals`.
///
/// ## Where Precision is Applied
/// ```text
/// Cart::buy(product, qty)
///      │
///      ▼
/// truncate(price × qty)  ← first truncation point (per purchase)
///      │
///      ▼
/// Storable::set(name, amount)
///      │
///      ▼
/// Storable::total()
///      │
///      ▼
/// truncate(Σ prices)     ← second truncation point (per total)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    decimals: u32,
}

impl Precision {
    /// Creates a precision that keeps `decimals` digits after the point.
    ///
    /// ## Example
    /// ```rust
    /// use solid_core::precision::Precision;
    ///
    /// let tenths = Precision::from_decimals(1).unwrap();
    /// assert_eq!(tenths.factor(), 10.0);
    ///
    /// assert!(Precision::from_decimals(12).is_err());
    /// ```
    pub fn from_decimals(decimals: u32) -> CoreResult<Self> {
        if decimals > MAX_DECIMALS {
            return Err(CoreError::InvalidPrecision {
                decimals,
                max: MAX_DECIMALS,
            });
        }
        Ok(Precision { decimals })
    }

    /// Number of decimals kept.
    #[inline]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// The scale factor, `10^decimals`.
    #[inline]
    pub fn factor(&self) -> f64 {
        10f64.powi(self.decimals as i32)
    }

    /// Truncates `value` toward negative infinity at this precision.
    pub fn truncate(&self, value: f64) -> f64 {
        let factor = self.factor();
        let truncated = (value * factor).floor() / factor;
        trace!(value, truncated, decimals = self.decimals, "Truncated amount");
        truncated
    }
}

/// Default precision is two decimals (a factor of 100).
impl Default for Precision {
    fn default() -> Self {
        Precision {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
