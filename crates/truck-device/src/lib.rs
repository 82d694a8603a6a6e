//! `truck-device`: runs a simulated truck as a connected device.
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`client`]  | `DeviceClient` trait, `ConsoleClient` (JSON lines to a sink)   |
//! | [`command`] | `DeviceCommand` parsing, `CommandAck`                          |
//! | [`twin`]    | Desired-setting patches in, reported-property patches out      |
//! | [`service`] | `TruckService` event loop and its `TruckHandle`                |
//! | [`error`]   | `DeviceError`, `DeviceResult<T>`                               |
//!
//! # Usage
//!
//! ```rust,ignore
//! use truck_device::{ConsoleClient, DeviceCommand, TruckService};
//!
//! let (service, handle) = TruckService::new(truck, &config, oracle, ConsoleClient::stdout(), rng);
//! let running = tokio::spawn(service.run());
//! handle.command(DeviceCommand::GoToCustomer(3)).await?;
//! handle.shutdown().await?;
//! running.await??;
//! ```

pub mod client;
pub mod command;
pub mod error;
pub mod service;
pub mod twin;


pub use client::{ConsoleClient, DeviceClient};
pub use command::{CommandAck, DeviceCommand};
pub use error::{DeviceError, DeviceResult};
pub use service::{ServiceRequest, TruckHandle, TruckService};
pub use twin::{DesiredChange, Setting, SettingReport, SettingStatus};
