//! Error types for truck-device.

use thiserror::Error;
use truck_sim::SimError;

/// Errors raised by the device runtime.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("command '{command}' has an invalid payload: {payload}")]
    BadPayload { command: &'static str, payload: String },

    #[error("malformed desired-properties patch: {0}")]
    BadDesired(String),

    #[error("truck service is no longer running")]
    ServiceClosed,

    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Alias for `Result<T, DeviceError>`.
pub type DeviceResult<T> = Result<T, DeviceError>;
