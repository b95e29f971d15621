// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity adapters over the coordinator's snapshot.
//!
//! Entities are thin views: each one projects fields out of the latest
//! [`DeviceSnapshot`](crate::coordinator::DeviceSnapshot) and translates
//! user actions into exactly one coordinator command (which re-refreshes on
//! its own). Entities hold no device state of their own, with one
//! exception: the siren tracks a local on-flag because the buzzer has no
//! off command and no feedback.
//!
//! All entity kinds share identity handling through [`EntityIdentity`] and
//! the [`Entity`] trait: a per-kind unique id derived from the device
//! serial, plus the common device metadata.

mod light;
mod select;
mod siren;

pub use light::{ScreenLight, TurnOn};
pub use select::{HourModeSelect, MirrorModeSelect, RotationSelect, TemperatureUnitSelect};
pub use siren::BuzzerSiren;

use crate::discovery::DeviceRecord;

/// Device registry metadata shared by every entity of one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Vendor-assigned serial id.
    pub serial_number: String,
    /// User-visible device name.
    pub name: String,
    /// MAC address of the device.
    pub mac: String,
    /// Hardware revision tag.
    pub hw_version: String,
    /// Device model.
    pub model: &'static str,
    /// Device manufacturer.
    pub manufacturer: &'static str,
}

impl DeviceInfo {
    /// Builds the metadata from a discovered identity record.
    #[must_use]
    pub fn from_record(record: &DeviceRecord) -> Self {
        Self {
            serial_number: record.id.clone(),
            name: record.name.clone(),
            mac: record.mac.clone(),
            hw_version: record.hardware.clone(),
            model: "Pixoo64",
            manufacturer: "Divoom",
        }
    }
}

/// Identity shared by all entity kinds: unique id plus device metadata.
#[derive(Debug, Clone)]
pub struct EntityIdentity {
    key: &'static str,
    unique_id: String,
    device_info: DeviceInfo,
}

impl EntityIdentity {
    /// Creates the identity for one entity kind of one device.
    ///
    /// The unique id is `{device id}-{key}`, stable across restarts.
    #[must_use]
    pub fn new(record: &DeviceRecord, key: &'static str) -> Self {
        Self {
            key,
            unique_id: format!("{}-{key}", record.id),
            device_info: DeviceInfo::from_record(record),
        }
    }

    /// Returns the entity kind key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the unique id.
    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Returns the device metadata.
    #[must_use]
    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }
}

/// Common surface of every entity kind.
pub trait Entity {
    /// Returns the entity's identity.
    fn identity(&self) -> &EntityIdentity;

    /// Returns the entity's unique id.
    fn unique_id(&self) -> &str {
        self.identity().unique_id()
    }

    /// Returns the device metadata for this entity.
    fn device_info(&self) -> &DeviceInfo {
        self.identity().device_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DeviceRecord {
        DeviceRecord {
            id: "300000001".to_string(),
            mac: "aa:bb:cc:dd:ee:ff".to_string(),
            name: "Kitchen Pixoo".to_string(),
            ip: "192.168.1.50".to_string(),
            hardware: "70".to_string(),
        }
    }

    #[test]
    fn identity_unique_id() {
        let identity = EntityIdentity::new(&record(), "screen");
        assert_eq!(identity.unique_id(), "300000001-screen");
        assert_eq!(identity.key(), "screen");
    }

    #[test]
    fn device_info_from_record() {
        let info = DeviceInfo::from_record(&record());
        assert_eq!(info.serial_number, "300000001");
        assert_eq!(info.name, "Kitchen Pixoo");
        assert_eq!(info.model, "Pixoo64");
        assert_eq!(info.manufacturer, "Divoom");
        assert_eq!(info.hw_version, "70");
    }
}
