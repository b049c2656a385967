//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod check_updates;
pub mod common;
pub mod device_summary;
pub mod get_device;
pub mod list_devices;
pub mod list_offline_devices;
pub mod list_online_devices;

pub use check_updates::{CheckUpdatesParams, CheckUpdatesTool, PendingUpdate};
pub use device_summary::{DeviceSummary, DeviceSummaryParams, DeviceSummaryTool};
pub use get_device::{DeviceLookup, GetDeviceParams, GetDeviceTool};
pub use list_devices::{ListDevicesParams, ListDevicesTool};
pub use list_offline_devices::{ListOfflineDevicesParams, ListOfflineDevicesTool, OfflineDevice};
pub use list_online_devices::{ListOnlineDevicesParams, ListOnlineDevicesTool, OnlineDevice};
