//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `TruckError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `truck-core`.
#[derive(Debug, Error)]
pub enum TruckError {
    #[error("customer {0} not found")]
    CustomerNotFound(i64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `truck-core`.
pub type TruckResult<T> = Result<T, TruckError>;
