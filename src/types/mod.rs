// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Divoom Pixoo device control.
//!
//! This module provides type-safe representations of values used in Pixoo
//! commands. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`Brightness`] - Screen brightness (0-100%), with device-level conversion
//! - [`HourMode`] - 12/24 hour clock display
//! - [`TemperatureUnit`] - Celsius/Fahrenheit display
//! - [`Rotation`] - Screen rotation angle (0/90/180/270 degrees)
//! - [`MirrorMode`] - Horizontal screen mirroring
//! - [`BuzzerCycle`] - Buzzer timing (total/active/off durations)

mod brightness;
mod buzzer;
mod modes;

pub use brightness::Brightness;
pub use buzzer::BuzzerCycle;
pub use modes::{HourMode, MirrorMode, Rotation, TemperatureUnit};
