use thiserror::Error;
use truck_core::TruckError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("setting {name} rejected: {value} is not a usable value")]
    InvalidSetting {
        name:  &'static str,
        value: f64,
    },

    #[error(transparent)]
    Core(#[from] TruckError),
}

pub type SimResult<T> = Result<T, SimError>;
