//! `TruckService`: the task that owns the truck.
//!
//! All mutation of the [`Truck`] happens here, one event at a time.  Three
//! sources feed the loop:
//!
//! - the telemetry timer: tick once, then publish a record;
//! - [`TruckHandle`] requests: remote commands and desired-setting patches;
//! - completions posted back by work the service spawned itself (route
//!   planning and delayed setting application).
//!
//! Spawned work never touches the truck.  It only sends a completion, which
//! the loop applies in order with everything else.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};
use truck_core::{Dice, SimClock, SimConfig};
use truck_route::{Route, RouteOracle, RouteResult, plan_route};
use truck_sim::{RouteCompletion, RouteRequest, TelemetryRecord, Truck};

use crate::twin::{SettingReport, SettingStatus, device_properties, setting_patch};
use crate::{CommandAck, DesiredChange, DeviceClient, DeviceCommand, DeviceError, DeviceResult, Setting};

/// Capacity of the request channel behind [`TruckHandle`].
const REQUEST_CAPACITY: usize = 32;

// ── Messages ──────────────────────────────────────────────────────────────────

/// Requests accepted from outside the service.
#[derive(Debug)]
pub enum ServiceRequest {
    Command { command: DeviceCommand, reply: oneshot::Sender<CommandAck> },
    Desired(DesiredChange),
    Shutdown,
}

/// Results of work the service spawned.
#[derive(Debug)]
enum Completion {
    Route { request: RouteRequest, result: RouteResult<Route> },
    SettingDue { setting: Setting, version: Option<u64> },
}

// ── TruckHandle ───────────────────────────────────────────────────────────────

/// Cloneable sender side of a running [`TruckService`].
#[derive(Clone, Debug)]
pub struct TruckHandle {
    tx: mpsc::Sender<ServiceRequest>,
}

impl TruckHandle {
    /// Deliver a remote command and wait for its acknowledgement.
    pub async fn command(&self, command: DeviceCommand) -> DeviceResult<CommandAck> {
        let (reply, ack) = oneshot::channel();
        self.send(ServiceRequest::Command { command, reply }).await?;
        ack.await.map_err(|_| DeviceError::ServiceClosed)
    }

    /// Deliver a desired-properties patch.
    pub async fn desired(&self, change: DesiredChange) -> DeviceResult<()> {
        self.send(ServiceRequest::Desired(change)).await
    }

    /// Ask the service loop to stop after the current event.
    pub async fn shutdown(&self) -> DeviceResult<()> {
        self.send(ServiceRequest::Shutdown).await
    }

    async fn send(&self, request: ServiceRequest) -> DeviceResult<()> {
        self.tx.send(request).await.map_err(|_| DeviceError::ServiceClosed)
    }
}

// ── TruckService ──────────────────────────────────────────────────────────────

/// Owns the truck and drives it from the event loop.
pub struct TruckService<C, D> {
    truck:  Truck,
    clock:  SimClock,
    dice:   D,
    client: Arc<C>,
    oracle: Arc<dyn RouteOracle>,

    truck_id:      String,
    period:        Duration,
    route_timeout: Duration,
    setting_delay: Duration,

    requests:      mpsc::Receiver<ServiceRequest>,
    completions:   mpsc::UnboundedReceiver<Completion>,
    completion_tx: mpsc::UnboundedSender<Completion>,
}

impl<C, D> TruckService<C, D>
where
    C: DeviceClient + 'static,
    D: Dice + Send,
{
    /// Wire a service around `truck`.  The returned handle is the only way
    /// in; the loop ends once every handle has been dropped.
    pub fn new(
        truck:  Truck,
        config: &SimConfig,
        oracle: Arc<dyn RouteOracle>,
        client: C,
        dice:   D,
    ) -> (Self, TruckHandle) {
        let (tx, requests) = mpsc::channel(REQUEST_CAPACITY);
        let (completion_tx, completions) = mpsc::unbounded_channel();

        let service = Self {
            truck,
            clock: config.make_clock(),
            dice,
            client: Arc::new(client),
            oracle,
            truck_id:      config.truck_id(),
            period:        Duration::from_millis(config.telemetry_period_ms),
            route_timeout: Duration::from_millis(config.route_timeout_ms),
            setting_delay: Duration::from_millis(config.setting_delay_ms),
            requests,
            completions,
            completion_tx,
        };
        (service, TruckHandle { tx })
    }

    pub fn truck(&self) -> &Truck {
        &self.truck
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Report the startup properties.
    pub async fn start(&self) -> DeviceResult<()> {
        info!(truck_id = %self.truck_id, "truck service starting");
        self.client.update_reported(&device_properties(&self.truck_id)).await
    }

    /// Run until shut down.
    ///
    /// Upstream failures are logged and do not stop the loop.  The first
    /// telemetry record goes out one full period after start.
    pub async fn run(mut self) -> DeviceResult<()> {
        if let Err(e) = self.start().await {
            warn!(error = %e, "failed to report device properties");
        }

        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                request = self.requests.recv() => {
                    let Some(request) = request else { break };
                    if !self.handle_request(request).await {
                        break;
                    }
                }

                Some(completion) = self.completions.recv() => {
                    self.handle_completion(completion).await;
                }

                _ = ticker.tick() => {
                    if let Err(e) = self.step().await {
                        warn!(error = %e, "failed to send telemetry");
                    }
                }
            }
        }

        info!(tick = %self.clock.current_tick, "truck service stopped");
        Ok(())
    }

    /// Wait for and handle the next request or completion, without the
    /// timer.  Returns `false` once the service should stop.
    pub async fn process_next(&mut self) -> bool {
        tokio::select! {
            request = self.requests.recv() => match request {
                Some(request) => self.handle_request(request).await,
                None => false,
            },
            Some(completion) = self.completions.recv() => {
                self.handle_completion(completion).await;
                true
            }
        }
    }

    /// One telemetry period: tick the truck, start any route it asked for,
    /// then publish the record.
    pub async fn step(&mut self) -> DeviceResult<TelemetryRecord> {
        self.clock.advance();
        if let Some(request) = self.truck.tick(self.clock.interval_secs(), &mut self.dice) {
            self.spawn_route(request);
        }
        debug!(clock = %self.clock, task = %self.truck.state.task, "tick");

        let record = self.truck.telemetry();
        self.client.send_telemetry(&record).await?;
        Ok(record)
    }

    // ── Requests ──────────────────────────────────────────────────────────

    async fn handle_request(&mut self, request: ServiceRequest) -> bool {
        match request {
            ServiceRequest::Command { command, reply } => {
                let ack = self.apply_command(command);
                if reply.send(ack).is_err() {
                    debug!(command = command.name(), "command caller went away before the ack");
                }
                true
            }
            ServiceRequest::Desired(change) => {
                self.schedule_settings(change);
                true
            }
            ServiceRequest::Shutdown => false,
        }
    }

    /// Run a remote command against the truck and acknowledge it.
    pub fn apply_command(&mut self, command: DeviceCommand) -> CommandAck {
        info!(command = command.name(), "command received");
        let request = match command {
            DeviceCommand::GoToCustomer(customer) => self.truck.go_to_customer(customer),
            DeviceCommand::Recall => self.truck.recall(),
        };
        if let Some(request) = request {
            self.spawn_route(request);
        }
        CommandAck::SUCCESS
    }

    fn schedule_settings(&self, change: DesiredChange) {
        for setting in change.settings {
            info!(setting = setting.name(), value = setting.value(), "received setting");
            let tx = self.completion_tx.clone();
            let delay = self.setting_delay;
            let version = change.version;
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(Completion::SettingDue { setting, version });
            });
        }
    }

    fn spawn_route(&self, request: RouteRequest) {
        let oracle = Arc::clone(&self.oracle);
        let tx = self.completion_tx.clone();
        let timeout = self.route_timeout;
        debug!(generation = %request.generation, from = %request.from, to = %request.to, "planning route");
        tokio::spawn(async move {
            let result = plan_route(&*oracle, request.from, request.to, timeout).await;
            let _ = tx.send(Completion::Route { request, result });
        });
    }

    // ── Completions ───────────────────────────────────────────────────────

    async fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Route { request, result } => {
                match self.truck.complete_route(&request, result) {
                    RouteCompletion::Started(task) => info!(generation = %request.generation, %task, "route started"),
                    RouteCompletion::Failed => {}
                    RouteCompletion::Stale => debug!(generation = %request.generation, "stale route dropped"),
                }
            }
            Completion::SettingDue { setting, version } => {
                let report = self.apply_setting(setting, version);
                let sent = match setting_patch(setting.name(), &report) {
                    Ok(patch) => self.client.update_reported(&patch).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = sent {
                    warn!(setting = setting.name(), error = %e, "failed to report setting");
                }
            }
        }
    }

    fn apply_setting(&mut self, setting: Setting, version: Option<u64>) -> SettingReport {
        let applied = match setting {
            Setting::OptimalTemperature(celsius) => self.truck.set_optimal_temperature(celsius),
        };
        match applied {
            Ok(()) => SettingReport {
                value: setting.value(),
                status: SettingStatus::Completed,
                desired_version: version,
                message: None,
            },
            Err(e) => SettingReport {
                value: self.truck.state.optimal_temperature_c,
                status: SettingStatus::Failed,
                desired_version: version,
                message: Some(e.to_string()),
            },
        }
    }
}
