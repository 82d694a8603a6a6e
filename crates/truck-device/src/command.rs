//! Remote method calls and their acknowledgement.

use serde::Serialize;
use serde_json::Value;

use crate::{DeviceError, DeviceResult};

/// A parsed remote method call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    /// `GoToCustomer` with the customer index as payload.
    GoToCustomer(i64),
    /// `Recall`; any payload is ignored.
    Recall,
}

impl DeviceCommand {
    pub const GO_TO_CUSTOMER: &'static str = "GoToCustomer";
    pub const RECALL: &'static str = "Recall";

    /// Parse a method name and its JSON payload.
    ///
    /// The customer index may arrive as a JSON integer or as a string holding
    /// one.  Range checking is left to the truck, which reports an unknown
    /// index through its event text.
    pub fn parse(name: &str, payload: &Value) -> DeviceResult<Self> {
        match name {
            Self::GO_TO_CUSTOMER => {
                let index = match payload {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                };
                index.map(Self::GoToCustomer).ok_or_else(|| DeviceError::BadPayload {
                    command: Self::GO_TO_CUSTOMER,
                    payload: payload.to_string(),
                })
            }
            Self::RECALL => Ok(Self::Recall),
            other => Err(DeviceError::UnknownCommand(other.to_owned())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::GoToCustomer(_) => Self::GO_TO_CUSTOMER,
            Self::Recall => Self::RECALL,
        }
    }
}

/// Response returned to the caller of a remote method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandAck {
    pub status:  u16,
    pub message: &'static str,
}

impl CommandAck {
    /// Every command the truck receives is acknowledged with this, whether
    /// or not it acted on it.
    pub const SUCCESS: CommandAck = CommandAck { status: 200, message: "Success" };
}
