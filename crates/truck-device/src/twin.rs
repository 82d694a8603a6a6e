//! Device twin: desired settings in, reported properties out.
//!
//! A desired-properties patch looks like
//!
//! ```json
//! {"OptimalTemperature": {"value": -7.5}, "$version": 12}
//! ```
//!
//! Each recognised setting is applied and then echoed back under the same
//! name with a completion status and the version it answers.

use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::{DeviceError, DeviceResult};

/// A setting the truck knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    /// Cooling set point, °C.
    OptimalTemperature(f64),
}

impl Setting {
    pub fn name(self) -> &'static str {
        match self {
            Setting::OptimalTemperature(_) => "OptimalTemperature",
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Setting::OptimalTemperature(v) => v,
        }
    }
}

/// The recognised part of one desired-properties patch.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredChange {
    pub version:  Option<u64>,
    pub settings: Vec<Setting>,
}

impl DesiredChange {
    pub fn from_json(patch: &Value) -> DeviceResult<Self> {
        let object = patch
            .as_object()
            .ok_or_else(|| DeviceError::BadDesired(format!("expected an object, got {patch}")))?;

        let mut change = DesiredChange { version: None, settings: Vec::new() };
        for (key, entry) in object {
            match key.as_str() {
                "$version" => change.version = entry.as_u64(),
                "OptimalTemperature" => {
                    let value = setting_value(key, entry)?;
                    change.settings.push(Setting::OptimalTemperature(value));
                }
                other => debug!(setting = other, "ignoring unknown desired property"),
            }
        }
        Ok(change)
    }

    pub fn parse_str(text: &str) -> DeviceResult<Self> {
        Self::from_json(&serde_json::from_str(text)?)
    }
}

fn setting_value(name: &str, entry: &Value) -> DeviceResult<f64> {
    entry
        .get("value")
        .and_then(Value::as_f64)
        .ok_or_else(|| DeviceError::BadDesired(format!("{name}: missing numeric 'value' in {entry}")))
}

/// Outcome of applying a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingStatus {
    Completed,
    Failed,
}

/// The reported echo of one applied setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingReport {
    pub value:           f64,
    pub status:          SettingStatus,
    pub desired_version: Option<u64>,
    pub message:         Option<String>,
}

/// `{"<name>": report}`
pub fn setting_patch(name: &str, report: &SettingReport) -> DeviceResult<Value> {
    let mut patch = Map::new();
    patch.insert(name.to_owned(), serde_json::to_value(report)?);
    Ok(Value::Object(patch))
}

/// The one-off properties reported at startup.
pub fn device_properties(truck_id: &str) -> Value {
    json!({ "truckId": truck_id })
}
