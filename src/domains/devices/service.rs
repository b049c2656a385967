//! Device registry fetch.
//!
//! Every tool reads the inventory through [`DeviceSource`]. The production
//! source, [`DeviceService`], asks the API for a fresh listing on every call.

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::client::{RequestOptions, TailscaleClient};
use super::error::ApiError;
use super::model::{Device, DevicesResponse};

/// Anything that can produce the current device list.
#[async_trait]
pub trait DeviceSource: Send + Sync {
    /// Fetch a snapshot of all devices in the tailnet.
    async fn fetch_devices(&self) -> Result<Vec<Device>, ApiError>;
}

/// Lists devices of one tailnet via the Tailscale API.
#[derive(Debug, Clone)]
pub struct DeviceService {
    client: TailscaleClient,
    endpoint: String,
}

impl DeviceService {
    /// Create a service reading from `tailnet` through `client`.
    pub fn new(client: TailscaleClient, tailnet: &str) -> Self {
        Self {
            client,
            endpoint: format!("/tailnet/{}/devices", tailnet),
        }
    }
}

#[async_trait]
impl DeviceSource for DeviceService {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_devices(&self) -> Result<Vec<Device>, ApiError> {
        let body = self.client.call(&self.endpoint, RequestOptions::default()).await?;
        let response: DevicesResponse = serde_json::from_value(body)?;
        debug!("Fetched {} devices", response.devices.len());
        Ok(response.devices)
    }
}
