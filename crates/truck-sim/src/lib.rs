//! `truck-sim`: the truck state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`truck`]     | `TruckState`, `Truck` and its per-tick update                 |
//! | [`command`]   | `go_to_customer` / `recall` handlers, event texts             |
//! | [`intent`]    | `RouteRequest`, `RouteGeneration`, `RouteCompletion`          |
//! | [`telemetry`] | `TelemetryRecord`:  the per-period outbound message           |
//! | [`builder`]   | `TruckBuilder`:  validated construction from `SimConfig`      |
//! | [`error`]     | `SimError`, `SimResult<T>`                                    |
//!
//! # Request / apply split
//!
//! Nothing in this crate awaits.  When a tick or a command needs a new route,
//! the truck parks itself in `Ready`, records a pending generation, and hands
//! back a [`RouteRequest`].  The caller runs the oracle however it likes and
//! later feeds the result to [`Truck::complete_route`].  Results for any
//! generation other than the pending one are dropped, so a late answer can
//! never overwrite a newer plan.
//!
//! ```text
//! tick / command ──► RouteRequest ──► (oracle, async, elsewhere)
//!                                          │
//! complete_route(request, result) ◄────────┘
//! ```

pub mod builder;
pub mod command;
pub mod error;
pub mod intent;
pub mod telemetry;
pub mod truck;


pub use builder::TruckBuilder;
pub use error::{SimError, SimResult};
pub use intent::{RouteCompletion, RouteGeneration, RouteRequest};
pub use telemetry::{Location, TelemetryRecord};
pub use truck::{Truck, TruckState};
