// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device commands: buzzer and the display mode flags.

use serde_json::{Map, Value};

use crate::types::{BuzzerCycle, HourMode, MirrorMode, Rotation, TemperatureUnit};

use super::Command;

/// Plays the buzzer (`Device/PlayBuzzer`).
///
/// Fire-and-forget: the device acknowledges the command and plays the
/// configured on/off cycle until the total time elapses. There is no stop
/// command.
///
/// # Examples
///
/// ```
/// use pixoor_lib::command::{BuzzerCommand, Command};
/// use pixoor_lib::types::BuzzerCycle;
///
/// let body = BuzzerCommand::new(BuzzerCycle::default()).to_request_body();
/// assert_eq!(body["PlayTTotalTime"], 3000);
/// assert_eq!(body["ActiveTimeInCycle"], 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuzzerCommand(BuzzerCycle);

impl BuzzerCommand {
    /// Creates a buzzer command with the given cycle timings.
    #[must_use]
    pub fn new(cycle: BuzzerCycle) -> Self {
        Self(cycle)
    }

    /// Returns the cycle timings being played.
    #[must_use]
    pub fn cycle(&self) -> BuzzerCycle {
        self.0
    }
}

impl Command for BuzzerCommand {
    fn name(&self) -> &'static str {
        "Device/PlayBuzzer"
    }

    fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert(
            "ActiveTimeInCycle".to_string(),
            Value::from(self.0.active_ms()),
        );
        args.insert("OffTimeInCycle".to_string(), Value::from(self.0.off_ms()));
        // Vendor field name, double T included
        args.insert("PlayTTotalTime".to_string(), Value::from(self.0.total_ms()));
        args
    }
}

/// Sets 12/24-hour clock display (`Device/SetTime24Flag`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourModeCommand(HourMode);

impl HourModeCommand {
    /// Creates an hour mode command.
    #[must_use]
    pub fn new(mode: HourMode) -> Self {
        Self(mode)
    }
}

impl Command for HourModeCommand {
    fn name(&self) -> &'static str {
        "Device/SetTime24Flag"
    }

    fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert("Mode".to_string(), Value::from(self.0.as_flag()));
        args
    }
}

/// Sets the temperature display unit (`Device/SetDisTempMode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureUnitCommand(TemperatureUnit);

impl TemperatureUnitCommand {
    /// Creates a temperature unit command.
    #[must_use]
    pub fn new(unit: TemperatureUnit) -> Self {
        Self(unit)
    }
}

impl Command for TemperatureUnitCommand {
    fn name(&self) -> &'static str {
        "Device/SetDisTempMode"
    }

    fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert("Mode".to_string(), Value::from(self.0.as_flag()));
        args
    }
}

/// Sets horizontal screen mirroring (`Device/SetMirrorMode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorModeCommand(MirrorMode);

impl MirrorModeCommand {
    /// Creates a mirror mode command.
    #[must_use]
    pub fn new(mode: MirrorMode) -> Self {
        Self(mode)
    }
}

impl Command for MirrorModeCommand {
    fn name(&self) -> &'static str {
        "Device/SetMirrorMode"
    }

    fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert("Mode".to_string(), Value::from(self.0.as_flag()));
        args
    }
}

/// Sets the screen rotation angle (`Device/SetScreenRotationAngle`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCommand(Rotation);

impl RotationCommand {
    /// Creates a rotation command.
    #[must_use]
    pub fn new(rotation: Rotation) -> Self {
        Self(rotation)
    }
}

impl Command for RotationCommand {
    fn name(&self) -> &'static str {
        "Device/SetScreenRotationAngle"
    }

    fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert("Mode".to_string(), Value::from(self.0.as_flag()));
        args
    }
}
