//! Routing error type.

use thiserror::Error;

use truck_core::GeoPoint;

/// Errors produced while asking the oracle for a route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("routing oracle did not answer within {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("routing oracle error: {0}")]
    Oracle(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },
}

pub type RouteResult<T> = Result<T, RouteError>;
