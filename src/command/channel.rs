// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel commands: settings query, screen power, brightness, clock select.

use serde_json::{Map, Value};

use crate::types::Brightness;

use super::Command;

/// Queries all device settings (`Channel/GetAllConf`).
///
/// The response is parsed as
/// [`SettingsResponse`](crate::response::SettingsResponse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsCommand;

impl Command for SettingsCommand {
    fn name(&self) -> &'static str {
        "Channel/GetAllConf"
    }
}

/// Turns the screen on or off (`Channel/OnOffScreen`).
///
/// # Examples
///
/// ```
/// use pixoor_lib::command::{Command, ScreenPowerCommand};
///
/// assert_eq!(ScreenPowerCommand::Off.to_request_body()["OnOff"], 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPowerCommand {
    /// Turn the screen on.
    On,
    /// Turn the screen off.
    Off,
}

impl ScreenPowerCommand {
    /// Creates the command from a boolean.
    #[must_use]
    pub fn from_bool(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl Command for ScreenPowerCommand {
    fn name(&self) -> &'static str {
        "Channel/OnOffScreen"
    }

    fn arguments(&self) -> Map<String, Value> {
        let flag = match self {
            Self::On => 1,
            Self::Off => 0,
        };
        let mut args = Map::new();
        args.insert("OnOff".to_string(), Value::from(flag));
        args
    }
}

/// Sets the screen brightness (`Channel/SetBrightness`).
///
/// The transmitted value is the device-scale level (0-255), converted from
/// the percentage with [`Brightness::to_device_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessCommand(Brightness);

impl BrightnessCommand {
    /// Creates a brightness command.
    #[must_use]
    pub fn new(brightness: Brightness) -> Self {
        Self(brightness)
    }

    /// Returns the brightness being set.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.0
    }
}

impl Command for BrightnessCommand {
    fn name(&self) -> &'static str {
        "Channel/SetBrightness"
    }

    fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert(
            "Brightness".to_string(),
            Value::from(self.0.to_device_level()),
        );
        args
    }
}

/// Selects the shown clock face by id (`Channel/SetClockSelectId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSelectCommand(u32);

impl ClockSelectCommand {
    /// Creates a clock select command for the given clock id.
    #[must_use]
    pub fn new(clock_id: u32) -> Self {
        Self(clock_id)
    }

    /// Returns the clock id being selected.
    #[must_use]
    pub fn clock_id(&self) -> u32 {
        self.0
    }
}

impl Command for ClockSelectCommand {
    fn name(&self) -> &'static str {
        "Channel/SetClockSelectId"
    }

    fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert("ClockId".to_string(), Value::from(self.0));
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_body() {
        let body = SettingsCommand.to_request_body();
        assert_eq!(
            body,
            serde_json::json!({"Command": "Channel/GetAllConf"})
        );
    }

    #[test]
    fn screen_power_on_off() {
        assert_eq!(ScreenPowerCommand::On.to_request_body()["OnOff"], 1);
        assert_eq!(ScreenPowerCommand::Off.to_request_body()["OnOff"], 0);
    }

    #[test]
    fn screen_power_from_bool() {
        assert_eq!(ScreenPowerCommand::from_bool(true), ScreenPowerCommand::On);
        assert_eq!(
            ScreenPowerCommand::from_bool(false),
            ScreenPowerCommand::Off
        );
    }

    #[test]
    fn brightness_transmits_device_level() {
        let cmd = BrightnessCommand::new(Brightness::new(50).unwrap());
        // 50% is 127.5 on the device scale and rounds up
        assert_eq!(cmd.to_request_body()["Brightness"], 128);
    }

    #[test]
    fn brightness_full_scale() {
        let cmd = BrightnessCommand::new(Brightness::MAX);
        assert_eq!(cmd.to_request_body()["Brightness"], 255);
    }

    #[test]
    fn clock_select_body() {
        let body = ClockSelectCommand::new(283).to_request_body();
        assert_eq!(
            body,
            serde_json::json!({"Command": "Channel/SetClockSelectId", "ClockId": 283})
        );
    }
}
