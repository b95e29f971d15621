// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `PixooR` Lib - A Rust library to control Divoom Pixoo LED-matrix displays.
//!
//! This library provides async APIs to discover Pixoo devices and control
//! them via their local HTTP API: screen power, brightness, clock-face
//! effects, display modes, and the buzzer.
//!
//! # Architecture
//!
//! - **Discovery** finds devices on the local network through the vendor's
//!   cloud endpoint and yields persisted identity records.
//! - The **coordinator** owns one device's connection, polls its settings
//!   every 60 seconds into an immutable snapshot, and exposes typed command
//!   wrappers that re-refresh after every change.
//! - **Entities** (a light, a siren, four mode selects) are thin views over
//!   the snapshot for integration into home-automation frontends.
//!
//! # Quick Start
//!
//! ## Controlling a known device
//!
//! ```no_run
//! use pixoor_lib::coordinator::PixooCoordinator;
//! use pixoor_lib::discovery::DeviceRecord;
//! use pixoor_lib::types::Brightness;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> pixoor_lib::Result<()> {
//!     let record = DeviceRecord {
//!         id: "300000001".to_string(),
//!         mac: "aa:bb:cc:dd:ee:ff".to_string(),
//!         name: "Kitchen Pixoo".to_string(),
//!         ip: "192.168.1.50".to_string(),
//!         hardware: "70".to_string(),
//!     };
//!
//!     let coordinator = Arc::new(PixooCoordinator::new(record));
//!     coordinator.first_refresh().await?;
//!
//!     coordinator.set_brightness(Brightness::new(80)?).await?;
//!     coordinator.set_effect("Normal - Classic Digital Clock").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Discovery and full setup
//!
//! ```no_run
//! use pixoor_lib::discovery::discover;
//! use pixoor_lib::manager::ManagedPixoo;
//!
//! #[tokio::main]
//! async fn main() -> pixoor_lib::Result<()> {
//!     // One-shot query against the vendor cloud; empty result is not an error
//!     let devices = discover().await?;
//!     let Some(record) = devices.into_iter().next() else {
//!         println!("no devices found");
//!         return Ok(());
//!     };
//!
//!     // First refresh, entities, and the 60 s polling loop
//!     let device = ManagedPixoo::setup(record).await?;
//!
//!     device.siren().turn_on(None).await?;
//!     device.teardown();
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod coordinator;
pub mod discovery;
pub mod effects;
pub mod entity;
pub mod error;
pub mod manager;
pub mod protocol;
pub mod response;
pub mod types;

pub use coordinator::{DeviceSnapshot, PixooCoordinator, PollingHandle};
pub use discovery::{DeviceRecord, DiscoveryOptions, discover, discover_with};
pub use effects::{EffectTable, FACES};
pub use entity::{
    BuzzerSiren, Entity, HourModeSelect, MirrorModeSelect, RotationSelect, ScreenLight,
    TemperatureUnitSelect, TurnOn,
};
pub use error::{
    DeviceError, DiscoveryError, Error, ParseError, ProtocolError, Result, ValueError,
};
pub use manager::ManagedPixoo;
pub use protocol::{HttpClient, HttpConfig};
pub use types::{Brightness, BuzzerCycle, HourMode, MirrorMode, Rotation, TemperatureUnit};
