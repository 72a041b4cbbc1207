//! # Application Error Type
//!
//! Unified error type for the CLI.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppConfig::load() ── ConfigError ──┐                                   │
//! │  Catalog::get()    ── CoreError ────┤                                   │
//! │  fs::read_to_string ─ io::Error ────┼──► AppError ──► main ──► exit 1   │
//! │  serde_json output ── json::Error ──┤                                   │
//! │  "NAME:QTY" parse  ── InvalidOrder ─┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use solid_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render cart: {0}")]
    Output(#[from] serde_json::Error),

    /// Argument is not `NAME` or `NAME:QTY`.
    #[error("Invalid order '{0}', expected NAME or NAME:QTY")]
    InvalidOrder(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::InvalidOrder("Tomato:lots".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid order 'Tomato:lots', expected NAME or NAME:QTY"
        );

        let err: AppError = CoreError::ProductNotFound("Kale".to_string()).into();
        assert_eq!(err.to_string(), "Product not found: Kale");

        let err: AppError = ConfigError::InvalidValue("SOLID_PRECISION".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for SOLID_PRECISION"
        );
    }
}
