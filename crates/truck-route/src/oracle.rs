//! Routing-oracle trait and a straight-line reference implementation.
//!
//! # Pluggability
//!
//! The truck never computes road routes itself.  Planning calls out through
//! the [`RouteOracle`] trait, so a device build can plug in a web mapping
//! service while tests and the demo use [`StraightLineOracle`].
//!
//! # Units
//!
//! Lengths are metres, times are seconds, both `f64`.

use async_trait::async_trait;

use truck_core::GeoPoint;

use crate::{RouteError, RouteResult};

// ── OracleRoute ───────────────────────────────────────────────────────────────

/// What the oracle reports for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleRoute {
    /// Intermediate waypoints in driving order.  May or may not repeat the
    /// endpoints; planning always adds both explicitly.
    pub points: Vec<GeoPoint>,
    /// Total road length in metres.
    pub length_m: f64,
    /// Total travel time in seconds.
    pub travel_secs: f64,
}

impl OracleRoute {
    /// Average speed over the whole route, m/s.
    ///
    /// `None` when the summary cannot produce a usable speed (zero or
    /// non-finite length/time).
    pub fn average_speed_mps(&self) -> Option<f64> {
        let speed = self.length_m / self.travel_secs;
        (speed.is_finite() && speed > 0.0).then_some(speed)
    }
}

// ── RouteOracle trait ─────────────────────────────────────────────────────────

/// External route-planning service.
///
/// # Thread safety
///
/// The device runtime calls the oracle from a spawned task, so
/// implementations must be `Send + Sync`.  The caller enforces the timeout;
/// implementations do not need their own.
#[async_trait]
pub trait RouteOracle: Send + Sync {
    /// Compute a road route from `from` to `to`.
    async fn route(&self, from: GeoPoint, to: GeoPoint) -> RouteResult<OracleRoute>;
}

// ── StraightLineOracle ────────────────────────────────────────────────────────

/// Routes along the straight line between the endpoints at a fixed speed.
///
/// Intermediate points are spaced roughly `step_m` apart so the tracker has
/// several segments to walk, as it would with a real road route.
#[derive(Debug, Clone)]
pub struct StraightLineOracle {
    /// Driving speed in m/s.
    pub speed_mps: f64,
    /// Target spacing between emitted waypoints, metres.
    pub step_m: f64,
}

impl Default for StraightLineOracle {
    /// ~40 km/h with a waypoint every 500 m.
    fn default() -> Self {
        Self { speed_mps: 11.0, step_m: 500.0 }
    }
}

#[async_trait]
impl RouteOracle for StraightLineOracle {
    async fn route(&self, from: GeoPoint, to: GeoPoint) -> RouteResult<OracleRoute> {
        let length_m = from.distance_m(to);
        if !length_m.is_finite() {
            return Err(RouteError::NoRoute { from, to });
        }
        let sections = if self.step_m > 0.0 {
            ((length_m / self.step_m).ceil() as usize).max(1)
        } else {
            1
        };

        let points = (1..sections)
            .map(|k| from.lerp(to, k as f64 / sections as f64))
            .collect();

        Ok(OracleRoute {
            points,
            length_m,
            travel_secs: length_m / self.speed_mps,
        })
    }
}
