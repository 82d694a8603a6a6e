//! Route requests: what the truck asks of the outside world.

use truck_core::{GeoPoint, TaskState};

/// Monotonic counter identifying one route request.
///
/// Each request gets a fresh generation.  Only a result carrying the
/// generation the truck is still waiting for is applied.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct RouteGeneration(pub u64);

impl std::fmt::Display for RouteGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "route#{}", self.0)
    }
}

/// A route the truck needs before it can continue.
///
/// Produced by [`Truck::tick`][crate::Truck::tick] (delivery finished, head
/// home) and by the command handlers.  The truck is already parked in
/// `Ready` when a request is handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub generation: RouteGeneration,
    pub from:       GeoPoint,
    pub to:         GeoPoint,
    /// Task to enter once the route arrives: `Enroute` or `Returning`.
    pub target:     TaskState,
}

/// What [`Truck::complete_route`][crate::Truck::complete_route] did with a
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteCompletion {
    /// The route was installed and the truck entered this task.
    Started(TaskState),
    /// The oracle failed; the truck stays `Ready` with a failure event.
    Failed,
    /// The result belonged to a request the truck is no longer waiting for.
    Stale,
}
