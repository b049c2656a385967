//! Devices domain module.
//!
//! Read-only access to the tailnet's device inventory:
//!
//! - `client.rs` - authenticated HTTP client for the Tailscale REST API
//! - `service.rs` - the device listing every tool reads from
//! - `model.rs` - the `Device` record and its field table
//! - `error.rs` - API error types

mod client;
mod error;
mod model;
mod service;

pub use client::{RequestOptions, TailscaleClient};
pub use error::ApiError;
pub use model::{Device, DevicesResponse};
pub use service::{DeviceService, DeviceSource};
