//! `truck-route`: routing oracle interface, route planning, and position
//! tracking.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`oracle`]  | `RouteOracle` trait, `OracleRoute`, `StraightLineOracle`        |
//! | [`route`]   | `Route`:  waypoint path, segment durations, position cursor     |
//! | [`planner`] | `plan_route`:  bounded-time oracle call → `Route`               |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                                  |
//!
//! # Movement model
//!
//! The oracle only reports total length and travel time.  Planning assumes
//! the truck drives the whole route at that single average speed and derives
//! every segment's duration from its great-circle length.  The position
//! tracker then walks a cursor along the segments as task time accumulates
//! and interpolates linearly inside the current one.

pub mod error;
pub mod oracle;
pub mod planner;
pub mod route;


pub use error::{RouteError, RouteResult};
pub use oracle::{OracleRoute, RouteOracle, StraightLineOracle};
pub use planner::plan_route;
pub use route::Route;
