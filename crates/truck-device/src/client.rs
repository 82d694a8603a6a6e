//! The upstream connection: where telemetry and reported properties go.

use std::io::Write;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use truck_sim::TelemetryRecord;

use crate::DeviceResult;

/// Outbound half of the device connection.
///
/// Implementations are shared between the service loop and the tasks it
/// spawns, so they must be `Send + Sync` and take `&self`.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// Publish one telemetry message.
    async fn send_telemetry(&self, record: &TelemetryRecord) -> DeviceResult<()>;

    /// Merge `patch` into the device's reported properties.
    async fn update_reported(&self, patch: &Value) -> DeviceResult<()>;
}

/// Writes every outbound message as a single JSON line.
///
/// Telemetry lines are the bare record; reported-property lines are wrapped
/// as `{"reported": patch}`.
pub struct ConsoleClient<W> {
    sink: Mutex<W>,
}

impl<W: Write + Send> ConsoleClient<W> {
    pub fn new(sink: W) -> Self {
        Self { sink: Mutex::new(sink) }
    }

    /// Recover the sink, e.g. to inspect what a test wrote.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    async fn write_line(&self, value: &(impl serde::Serialize + Sync)) -> DeviceResult<()> {
        let mut sink = self.sink.lock().await;
        serde_json::to_writer(&mut *sink, value)?;
        sink.write_all(b"\n")?;
        sink.flush()?;
        Ok(())
    }
}

impl ConsoleClient<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait]
impl<W: Write + Send> DeviceClient for ConsoleClient<W> {
    async fn send_telemetry(&self, record: &TelemetryRecord) -> DeviceResult<()> {
        self.write_line(record).await
    }

    async fn update_reported(&self, patch: &Value) -> DeviceResult<()> {
        self.write_line(&json!({ "reported": patch })).await
    }
}
