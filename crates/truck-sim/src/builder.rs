//! Fluent builder for constructing a [`Truck`].

use truck_core::{SimConfig, Sites};

use crate::{SimError, SimResult, Truck};

/// Fluent builder for [`Truck`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default              |
/// |---------------|----------------------|
/// | `.sites(s)`   | `Sites::seattle()`   |
///
/// # Example
///
/// ```rust,ignore
/// let truck = TruckBuilder::new(config)
///     .sites(sites)
///     .build()?;
/// ```
pub struct TruckBuilder {
    config: SimConfig,
    sites:  Option<Sites>,
}

impl TruckBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, sites: None }
    }

    /// Supply the base and customer locations.
    pub fn sites(mut self, sites: Sites) -> Self {
        self.sites = Some(sites);
        self
    }

    /// Validate inputs and return a truck in its startup state.
    pub fn build(self) -> SimResult<Truck> {
        self.config.validate()?;

        let sites = self.sites.unwrap_or_default();
        if sites.customers.is_empty() {
            return Err(SimError::Config("at least one customer site is required".into()));
        }

        Ok(Truck::new(sites, self.config.optimal_temperature_c))
    }
}
