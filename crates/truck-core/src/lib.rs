//! `truck-core`: foundational types for the delivery-truck digital twin.
//!
//! This crate is a dependency of every other `truck-*` crate.  It has no
//! `truck-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, arrival test          |
//! | [`state`]       | `TaskState`, `ContentsState`, `FanState`              |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`                                           |
//! | [`sites`]       | `Sites`:  base and customer coordinates               |
//! | [`rng`]         | `SimRng`, the `Dice` trait                            |
//! | [`error`]       | `TruckError`, `TruckResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod sites;
pub mod state;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{TruckError, TruckResult};
pub use geo::{GeoPoint, has_arrived, to_radians};
pub use rng::{Dice, SimRng};
pub use sites::Sites;
pub use state::{ContentsState, FanState, TaskState};
pub use time::{SimClock, Tick};
