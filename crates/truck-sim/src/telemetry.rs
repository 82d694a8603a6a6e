//! The periodic telemetry record.

use serde::{Deserialize, Serialize};
use truck_core::{ContentsState, FanState, TaskState};

use crate::Truck;

/// Truck position as reported upstream (`lon` first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lon: f64,
    pub lat: f64,
}

/// One telemetry message.
///
/// Serialises to the field names the dashboard expects, e.g.
///
/// ```json
/// {"ContentsTemperature":"-2.00","TruckState":"ready","CoolingSystemState":"on",
///  "ContentsState":"full","Location":{"lon":-122.130137,"lat":47.644702}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TelemetryRecord {
    /// Two-decimal string, e.g. `"-3.17"`.
    pub contents_temperature: String,
    pub truck_state:          TaskState,
    pub cooling_system_state: FanState,
    pub contents_state:       ContentsState,
    pub location:             Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event:                Option<String>,
}

impl Truck {
    /// Snapshot the state for telemetry, consuming the pending event.
    pub fn telemetry(&mut self) -> TelemetryRecord {
        let s = &mut self.state;
        TelemetryRecord {
            contents_temperature: format!("{:.2}", s.temperature_c),
            truck_state:          s.task,
            cooling_system_state: s.fan,
            contents_state:       s.contents,
            location:             Location { lon: s.position.lon, lat: s.position.lat },
            event:                s.take_event(),
        }
    }
}
