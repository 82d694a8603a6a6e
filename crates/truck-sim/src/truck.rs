//! Truck state and the per-tick update.

use tracing::{debug, info, warn};
use truck_core::{ContentsState, Dice, FanState, GeoPoint, Sites, TaskState, has_arrived};
use truck_route::{Route, RouteResult};

use crate::command::ROUTE_FAILED_EVENT;
use crate::{RouteCompletion, RouteGeneration, RouteRequest, SimError, SimResult};

// ── Simulation constants ──────────────────────────────────────────────────────

/// Time to hand out a full load at a customer.
pub const DELIVER_SECS: f64 = 600.0;
/// Time to restock at base.
pub const LOADING_SECS: f64 = 800.0;
/// Time to dispose of melted contents at base.
pub const DUMPING_SECS: f64 = 400.0;
/// At or above this cargo temperature the melt timer runs.
pub const TOO_WARM_C: f64 = 2.0;
/// Contents melt once the melt timer reaches this.
pub const TOO_WARM_TOO_LONG_SECS: f64 = 60.0;
/// The fan switches off below `optimal - OVERCOOL_MARGIN_C`.
pub const OVERCOOL_MARGIN_C: f64 = 5.0;
/// Chance per tick, in percent, that a working fan fails.
pub const FAN_FAILURE_PERCENT: f64 = 1.0;
/// Cargo temperature at startup and after a reload.
pub const LOADED_TEMPERATURE_C: f64 = -2.0;

// ── TruckState ────────────────────────────────────────────────────────────────

/// Everything observable about the truck.
#[derive(Debug, Clone, PartialEq)]
pub struct TruckState {
    pub task:     TaskState,
    pub contents: ContentsState,
    pub fan:      FanState,

    /// Cargo temperature, °C.
    pub temperature_c: f64,

    /// Seconds spent in the current `task`.  Pinned to 0 while `Ready`.
    pub time_on_task_secs: f64,

    /// Melt timer: grows while the cargo is too warm, shrinks (never below
    /// zero) while it is not.
    pub too_warm_secs: f64,

    pub position:    GeoPoint,
    pub destination: GeoPoint,

    /// Remotely adjustable cooling set point, °C.
    pub optimal_temperature_c: f64,

    /// One-shot operator message, cleared when read.
    pub event: Option<String>,
}

impl TruckState {
    /// Startup state: parked at `base`, full, fan on, ready.
    pub fn at_base(base: GeoPoint, optimal_temperature_c: f64) -> Self {
        Self {
            task:                  TaskState::Ready,
            contents:              ContentsState::Full,
            fan:                   FanState::On,
            temperature_c:         LOADED_TEMPERATURE_C,
            time_on_task_secs:     0.0,
            too_warm_secs:         0.0,
            position:              base,
            destination:           base,
            optimal_temperature_c,
            event:                 None,
        }
    }

    /// Read and clear the pending event.
    #[inline]
    pub fn take_event(&mut self) -> Option<String> {
        self.event.take()
    }

    /// Replace the pending event.  Only the latest message survives until
    /// the next telemetry read.
    #[inline]
    pub fn set_event(&mut self, text: impl Into<String>) {
        self.event = Some(text.into());
    }
}

// ── Truck ─────────────────────────────────────────────────────────────────────

/// The simulated truck: state, current route, and the sites it serves.
///
/// A `Truck` has a single owner.  Ticks, commands, and route completions all
/// take `&mut self`, so they cannot interleave; the device runtime feeds
/// them in one at a time.
pub struct Truck {
    pub state: TruckState,

    /// The route being driven.  `None` until the first route arrives, and
    /// cleared whenever a new one is requested.
    pub route: Option<Route>,

    pub sites: Sites,

    /// Generation of the route request still awaiting an answer.
    pending: Option<RouteGeneration>,

    /// Last generation handed out.
    generation: u64,
}

impl Truck {
    /// A truck in its startup state at `sites.base`.
    pub fn new(sites: Sites, optimal_temperature_c: f64) -> Self {
        Self {
            state:      TruckState::at_base(sites.base, optimal_temperature_c),
            route:      None,
            sites,
            pending:    None,
            generation: 0,
        }
    }

    /// `true` while a route request is outstanding.
    #[inline]
    pub fn route_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Change the cooling set point.
    pub fn set_optimal_temperature(&mut self, celsius: f64) -> SimResult<()> {
        if !celsius.is_finite() {
            return Err(SimError::InvalidSetting { name: "OptimalTemperature", value: celsius });
        }
        info!(from = self.state.optimal_temperature_c, to = celsius, "optimal temperature changed");
        self.state.optimal_temperature_c = celsius;
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the simulation by `interval_secs`.
    ///
    /// Runs the thermal/fan model, bumps the task clock, then applies the
    /// current task's transition.  Returns a [`RouteRequest`] when the tick
    /// finished a delivery and the truck needs a route home.
    pub fn tick<D: Dice + ?Sized>(&mut self, interval_secs: f64, dice: &mut D) -> Option<RouteRequest> {
        self.simulate_cargo(interval_secs, dice);
        self.state.time_on_task_secs += interval_secs;
        self.advance_task()
    }

    fn simulate_cargo<D: Dice + ?Sized>(&mut self, interval_secs: f64, dice: &mut D) {
        let s = &mut self.state;

        if s.contents == ContentsState::Empty {
            // Nothing to keep cold.
            if s.fan == FanState::On {
                s.fan = FanState::Off;
            }
            s.temperature_c += -2.9 + dice.roll(6.0);
            return;
        }

        if s.fan != FanState::Failed {
            if s.temperature_c < s.optimal_temperature_c - OVERCOOL_MARGIN_C {
                s.fan = FanState::Off;
            } else if s.temperature_c > s.optimal_temperature_c {
                s.fan = FanState::On;
            }

            if dice.roll(100.0) < FAN_FAILURE_PERCENT {
                warn!("cooling fan failed");
                s.fan = FanState::Failed;
            }
        }

        s.temperature_c += match s.fan {
            FanState::On => -3.0 + dice.roll(5.0),
            FanState::Off | FanState::Failed => -2.9 + dice.roll(6.0),
        };

        if s.temperature_c >= TOO_WARM_C {
            s.too_warm_secs += interval_secs;
            if s.too_warm_secs >= TOO_WARM_TOO_LONG_SECS && s.contents != ContentsState::Melting {
                warn!(temperature_c = s.temperature_c, "contents melting");
                s.contents = ContentsState::Melting;
            }
        } else {
            s.too_warm_secs = (s.too_warm_secs - interval_secs).max(0.0);
        }

        debug!(
            temperature_c = s.temperature_c,
            fan           = %s.fan,
            too_warm_secs = s.too_warm_secs,
            "cargo updated"
        );
    }

    fn advance_task(&mut self) -> Option<RouteRequest> {
        match self.state.task {
            TaskState::Loading => {
                if self.state.time_on_task_secs >= LOADING_SECS {
                    self.set_task(TaskState::Ready);
                    self.state.contents = ContentsState::Full;
                    self.state.time_on_task_secs = 0.0;
                    // Restocking also repairs the fan.
                    self.state.fan = FanState::On;
                    self.state.temperature_c = LOADED_TEMPERATURE_C;
                }
                None
            }

            TaskState::Ready => {
                self.state.time_on_task_secs = 0.0;
                None
            }

            TaskState::Delivering => {
                if self.state.time_on_task_secs >= DELIVER_SECS {
                    self.state.contents = ContentsState::Empty;
                    return Some(self.return_to_base());
                }
                None
            }

            TaskState::Returning => {
                if self.follow_route() {
                    self.state.time_on_task_secs = 0.0;
                    let next = match self.state.contents {
                        ContentsState::Empty   => TaskState::Loading,
                        ContentsState::Full    => TaskState::Ready,
                        ContentsState::Melting => TaskState::Dumping,
                    };
                    self.set_task(next);
                }
                None
            }

            TaskState::Enroute => {
                if self.follow_route() {
                    self.set_task(TaskState::Delivering);
                    self.state.time_on_task_secs = 0.0;
                }
                None
            }

            TaskState::Dumping => {
                if self.state.time_on_task_secs >= DUMPING_SECS {
                    self.set_task(TaskState::Loading);
                    self.state.contents = ContentsState::Empty;
                    self.state.time_on_task_secs = 0.0;
                }
                None
            }
        }
    }

    /// Move along the current route; `true` once at the destination.
    fn follow_route(&mut self) -> bool {
        if let Some(route) = self.route.as_mut() {
            self.state.position = route.update_position(self.state.time_on_task_secs);
        }
        has_arrived(self.state.position, self.state.destination)
    }

    fn set_task(&mut self, next: TaskState) {
        if self.state.task != next {
            info!(from = %self.state.task, to = %next, "task changed");
            self.state.task = next;
        }
    }

    // ── Route requests ────────────────────────────────────────────────────

    /// Park in `Ready` and issue a request for a route from the current
    /// position to `state.destination`.
    pub(crate) fn request_route(&mut self, target: TaskState) -> RouteRequest {
        self.set_task(TaskState::Ready);
        self.route = None;
        self.generation += 1;
        let generation = RouteGeneration(self.generation);
        self.pending = Some(generation);

        RouteRequest {
            generation,
            from: self.state.position,
            to: self.state.destination,
            target,
        }
    }

    /// Point the truck at base and request the route there.
    pub(crate) fn return_to_base(&mut self) -> RouteRequest {
        self.state.destination = self.sites.base;
        self.request_route(TaskState::Returning)
    }

    /// Apply the outcome of a route request.
    ///
    /// On success the route replaces any previous one, the cursor and task
    /// clock restart at zero, and the truck enters `request.target`.  On
    /// failure the truck stays `Ready` and reports a failure event; it does
    /// not retry.
    pub fn complete_route(&mut self, request: &RouteRequest, result: RouteResult<Route>) -> RouteCompletion {
        if self.pending != Some(request.generation) || self.state.task != TaskState::Ready {
            warn!(generation = %request.generation, "discarding stale route result");
            return RouteCompletion::Stale;
        }
        self.pending = None;

        match result {
            Ok(route) => {
                self.route = Some(route);
                self.state.time_on_task_secs = 0.0;
                self.set_task(request.target);
                RouteCompletion::Started(request.target)
            }
            Err(e) => {
                warn!(generation = %request.generation, error = %e, "route planning failed");
                self.state.set_event(ROUTE_FAILED_EVENT);
                RouteCompletion::Failed
            }
        }
    }
}
