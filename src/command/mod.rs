// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pixoo command definitions.
//!
//! This module provides typed representations of commands understood by the
//! device's local HTTP API.
//!
//! # Available Commands
//!
//! | Command Type | Endpoint | Purpose |
//! |-------------|----------|---------|
//! | [`SettingsCommand`] | `Channel/GetAllConf` | Query all device settings |
//! | [`ScreenPowerCommand`] | `Channel/OnOffScreen` | Turn the screen on/off |
//! | [`BrightnessCommand`] | `Channel/SetBrightness` | Set screen brightness |
//! | [`ClockSelectCommand`] | `Channel/SetClockSelectId` | Select the shown clock face |
//! | [`BuzzerCommand`] | `Device/PlayBuzzer` | Play the buzzer |
//! | [`HourModeCommand`] | `Device/SetTime24Flag` | 12/24 hour clock |
//! | [`TemperatureUnitCommand`] | `Device/SetDisTempMode` | Celsius/Fahrenheit |
//! | [`MirrorModeCommand`] | `Device/SetMirrorMode` | Horizontal mirroring |
//! | [`RotationCommand`] | `Device/SetScreenRotationAngle` | Screen rotation |
//!
//! # Command Structure
//!
//! Every command is transmitted as a JSON object POSTed to the device's
//! `/post` endpoint. The object carries the vendor command name under the
//! `Command` key plus the command's own argument fields:
//!
//! ```json
//! {"Command": "Channel/SetBrightness", "Brightness": 128}
//! ```
//!
//! # Examples
//!
//! ```
//! use pixoor_lib::command::{Command, ScreenPowerCommand};
//!
//! let cmd = ScreenPowerCommand::On;
//! let body = cmd.to_request_body();
//! assert_eq!(body["Command"], "Channel/OnOffScreen");
//! assert_eq!(body["OnOff"], 1);
//! ```

mod channel;
mod device;

pub use channel::{BrightnessCommand, ClockSelectCommand, ScreenPowerCommand, SettingsCommand};
pub use device::{
    BuzzerCommand, HourModeCommand, MirrorModeCommand, RotationCommand, TemperatureUnitCommand,
};

use serde_json::{Map, Value};

/// A command that can be sent to a Pixoo device.
///
/// Commands are serialized to the JSON body format the device's `/post`
/// endpoint expects.
pub trait Command {
    /// Returns the vendor command name.
    ///
    /// For example, `"Channel/GetAllConf"` or `"Device/PlayBuzzer"`.
    fn name(&self) -> &'static str;

    /// Returns the command's argument fields, if any.
    ///
    /// Query commands have no arguments and return an empty map.
    fn arguments(&self) -> Map<String, Value> {
        Map::new()
    }

    /// Returns the full JSON request body for this command.
    ///
    /// The body is the argument map with the vendor command name merged in
    /// under the `Command` key.
    fn to_request_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("Command".to_string(), Value::from(self.name()));
        body.extend(self.arguments());
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_command_key() {
        let body = SettingsCommand.to_request_body();
        assert_eq!(body["Command"], "Channel/GetAllConf");
    }

    #[test]
    fn body_merges_arguments() {
        let cmd = ClockSelectCommand::new(64);
        let body = cmd.to_request_body();
        assert_eq!(body["Command"], "Channel/SetClockSelectId");
        assert_eq!(body["ClockId"], 64);
    }

    #[test]
    fn query_command_has_no_arguments() {
        assert!(SettingsCommand.arguments().is_empty());
    }
}
