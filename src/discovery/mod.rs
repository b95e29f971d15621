// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cloud device discovery for Pixoo devices.
//!
//! Pixoo devices do not answer a local discovery query; the vendor's cloud
//! API is the only way to enumerate the devices on the local network
//! together with their identity data (serial id, MAC, private IP, hardware
//! revision). Discovery is therefore a one-shot, read-only request to that
//! endpoint, performed during initial configuration only.
//!
//! Finding zero devices is a normal outcome and returns an empty list; any
//! other failure is a [`DiscoveryError`] and the caller is expected to
//! abort setup.
//!
//! # Examples
//!
//! ```no_run
//! use pixoor_lib::discovery::discover;
//!
//! # async fn example() -> pixoor_lib::Result<()> {
//! let devices = discover().await?;
//! for device in &devices {
//!     println!("{} ({}) at {}", device.name, device.id, device.ip);
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DiscoveryError;

/// The vendor's cloud discovery endpoint.
const DEFAULT_ENDPOINT: &str = "https://app.divoom-gz.com";

/// Path of the same-LAN device listing.
const DEVICE_LIST_PATH: &str = "/Device/ReturnSameLANDevice";

/// Default discovery request timeout.
const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(15);

/// Identity record of a discovered device.
///
/// Created by discovery and never mutated afterwards; the `id` field (the
/// vendor-assigned serial) is the device's identity. The record carries
/// everything needed to construct a
/// [`PixooCoordinator`](crate::coordinator::PixooCoordinator) later, and is
/// serializable so callers can persist it between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Vendor-assigned serial id.
    pub id: String,
    /// MAC address of the device.
    pub mac: String,
    /// User-visible device name.
    pub name: String,
    /// Private IP address on the local network.
    pub ip: String,
    /// Hardware revision tag.
    pub hardware: String,
}

/// Wire format of one device in the discovery response.
#[derive(Debug, Deserialize)]
struct WireDevice {
    #[serde(rename = "DeviceId")]
    device_id: i64,
    #[serde(rename = "DeviceMac")]
    device_mac: String,
    #[serde(rename = "DeviceName")]
    device_name: String,
    #[serde(rename = "DevicePrivateIP")]
    device_private_ip: String,
    #[serde(rename = "Hardware")]
    hardware: i64,
}

impl From<WireDevice> for DeviceRecord {
    fn from(wire: WireDevice) -> Self {
        Self {
            id: wire.device_id.to_string(),
            mac: wire.device_mac,
            name: wire.device_name,
            ip: wire.device_private_ip,
            hardware: wire.hardware.to_string(),
        }
    }
}

/// Wire format of the discovery response.
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(rename = "ReturnCode", default)]
    return_code: i64,
    #[serde(rename = "DeviceList", default)]
    device_list: Vec<WireDevice>,
}

/// Options for device discovery.
///
/// # Examples
///
/// ```
/// use pixoor_lib::discovery::DiscoveryOptions;
/// use std::time::Duration;
///
/// let options = DiscoveryOptions::new().with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Request timeout for the discovery query.
    timeout: Option<Duration>,
    /// Override of the cloud endpoint base URL.
    endpoint: Option<String>,
}

impl DiscoveryOptions {
    /// Creates a new `DiscoveryOptions` with default settings.
    ///
    /// Default timeout is 15 seconds against the vendor cloud endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the discovery request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the cloud endpoint base URL.
    ///
    /// Intended for tests against a local mock server.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Returns the discovery timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_DISCOVERY_TIMEOUT)
    }

    /// Returns the endpoint base URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

/// Discovers Pixoo devices with default options.
///
/// # Errors
///
/// Returns `DiscoveryError` if the cloud query fails or its response
/// cannot be interpreted. Zero discovered devices is `Ok(vec![])`.
pub async fn discover() -> Result<Vec<DeviceRecord>, DiscoveryError> {
    discover_with(DiscoveryOptions::default()).await
}

/// Discovers Pixoo devices with the given options.
///
/// # Errors
///
/// Returns `DiscoveryError` if the cloud query fails or its response
/// cannot be interpreted. Zero discovered devices is `Ok(vec![])`.
pub async fn discover_with(options: DiscoveryOptions) -> Result<Vec<DeviceRecord>, DiscoveryError> {
    let url = format!("{}{DEVICE_LIST_PATH}", options.endpoint());

    tracing::debug!(url = %url, "Starting device discovery");

    let client = reqwest::Client::builder()
        .timeout(options.timeout())
        .build()
        .map_err(DiscoveryError::Http)?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(DiscoveryError::Http)?;

    if !response.status().is_success() {
        return Err(DiscoveryError::InvalidResponse(format!(
            "HTTP {}",
            response.status().as_u16()
        )));
    }

    let wire: WireResponse = response
        .json()
        .await
        .map_err(|e| DiscoveryError::InvalidResponse(e.to_string()))?;

    if wire.return_code != 0 {
        return Err(DiscoveryError::Rejected {
            code: wire.return_code,
        });
    }

    let devices: Vec<DeviceRecord> = wire.device_list.into_iter().map(Into::into).collect();

    if devices.is_empty() {
        tracing::warn!("No Pixoo devices found");
    } else {
        tracing::info!(count = devices.len(), "Discovered Pixoo devices");
    }

    Ok(devices)
}
