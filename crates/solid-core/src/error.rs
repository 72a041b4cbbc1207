//! # Error Types
//!
//! Domain-specific error types for solid-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  solid-core errors (this file)                                         │
//! │  └── CoreError        - Catalog and precision failures                 │
//! │                                                                         │
//! │  solid-cli errors (app)                                                │
//! │  ├── ConfigError      - Bad environment values                         │
//! │  └── AppError         - What the user sees on stderr                   │
//! │                                                                         │
//! │  Flow: CoreError → AppError → exit code 1                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart and store operations never fail. Buying a zero quantity or
//! restoring a product that was never bought are silent no-ops, so
//! nothing in [`crate::cart`] or [`crate::store`] returns a `Result`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised around the cart: looking up products and configuring
/// truncation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry carries this exact name.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Catalog JSON could not be parsed.
    ///
    /// ## When This Occurs
    /// - The file is not a JSON array
    /// - An entry is missing `name` or `price`
    /// - `price` is not a number
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Requested more decimal places than the truncation supports.
    #[error("Precision of {decimals} decimals exceeds maximum allowed ({max})")]
    InvalidPrecision { decimals: u32, max: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("Kale".to_string());
        assert_eq!(err.to_string(), "Product not found: Kale");

        let err = CoreError::InvalidPrecision {
            decimals: 9,
            max: 6,
        };
        assert_eq!(
            err.to_string(),
            "Precision of 9 decimals exceeds maximum allowed (6)"
        );
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidCatalog(_)));
    }
}
