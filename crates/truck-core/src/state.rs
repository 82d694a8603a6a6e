//! Truck sub-state enums shared by the simulation and telemetry crates.
//!
//! Telemetry reports these as lower-case strings (`"enroute"`, `"melting"`,
//! `"failed"`, …), which is also what `Display` produces.

/// The truck's current operational phase.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TaskState {
    /// Idle at base (or waiting for a route), task clock not running.
    #[default]
    Ready,
    /// Driving to a customer.
    Enroute,
    /// Parked at a customer, handing out goods.
    Delivering,
    /// Driving back to base.
    Returning,
    /// Restocking at base.
    Loading,
    /// Disposing of melted contents at base.
    Dumping,
}

impl TaskState {
    /// `true` for the two phases in which the truck follows a route.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, TaskState::Enroute | TaskState::Returning)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskState::Ready      => "ready",
            TaskState::Enroute    => "enroute",
            TaskState::Delivering => "delivering",
            TaskState::Returning  => "returning",
            TaskState::Loading    => "loading",
            TaskState::Dumping    => "dumping",
        }
    }
}

/// Condition of the cargo.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContentsState {
    #[default]
    Full,
    /// Has been too warm for too long.  Only cleared by dumping and reloading.
    Melting,
    Empty,
}

impl ContentsState {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentsState::Full    => "full",
            ContentsState::Melting => "melting",
            ContentsState::Empty   => "empty",
        }
    }
}

/// Condition of the cooling fan.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FanState {
    #[default]
    On,
    Off,
    /// Sticky until repaired when loading completes.
    Failed,
}

impl FanState {
    pub fn as_str(self) -> &'static str {
        match self {
            FanState::On     => "on",
            FanState::Off    => "off",
            FanState::Failed => "failed",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

display_as_str!(TaskState, ContentsState, FanState);
