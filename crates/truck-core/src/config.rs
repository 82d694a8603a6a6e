//! Top-level simulation configuration.

use crate::{SimClock, TruckError, TruckResult};

/// Settings for one simulated truck.
///
/// Typically loaded from a TOML file by the application crate and patched
/// with command-line overrides.  Every field has a default, so an empty file
/// is a valid configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number reported in the `truckId` property ("Truck number N").
    pub truck_number: u32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Simulated seconds advanced per tick.
    pub tick_interval_secs: u32,

    /// Wall-clock milliseconds between ticks; telemetry is sent once per tick.
    pub telemetry_period_ms: u64,

    /// Initial cargo set point in °C.  Can be changed remotely at runtime.
    pub optimal_temperature_c: f64,

    /// Abort a routing request after this many milliseconds.
    pub route_timeout_ms: u64,

    /// Simulated propagation delay before a desired setting takes effect.
    pub setting_delay_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            truck_number:          1,
            seed:                  42,
            tick_interval_secs:    60,
            telemetry_period_ms:   5_000,
            optimal_temperature_c: -5.0,
            route_timeout_ms:      10_000,
            setting_delay_ms:      1_000,
        }
    }
}

impl SimConfig {
    /// Reject values the tick loop cannot run with.
    pub fn validate(&self) -> TruckResult<()> {
        if self.tick_interval_secs == 0 {
            return Err(TruckError::Config("tick_interval_secs must be > 0".into()));
        }
        if self.telemetry_period_ms == 0 {
            return Err(TruckError::Config("telemetry_period_ms must be > 0".into()));
        }
        if self.route_timeout_ms == 0 {
            return Err(TruckError::Config("route_timeout_ms must be > 0".into()));
        }
        if !self.optimal_temperature_c.is_finite() {
            return Err(TruckError::Config(format!(
                "optimal_temperature_c must be finite, got {}",
                self.optimal_temperature_c
            )));
        }
        Ok(())
    }

    /// Value of the `truckId` reported property.
    pub fn truck_id(&self) -> String {
        format!("Truck number {}", self.truck_number)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_interval_secs)
    }
}
