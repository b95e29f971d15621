// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Settings response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::{Brightness, HourMode, MirrorMode, Rotation, TemperatureUnit};

/// Response from the `Channel/GetAllConf` settings query.
///
/// The device returns a flat field set:
///
/// ```json
/// {
///   "error_code": 0,
///   "LightSwitch": 1,
///   "Brightness": 128,
///   "CurClockId": 10,
///   "Time24Flag": 1,
///   "TemperatureMode": 0,
///   "GyrateAngle": 0,
///   "MirrorFlag": 0
/// }
/// ```
///
/// The raw flag fields are public; the typed accessors interpret them and
/// reject values outside the fixed tables.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsResponse {
    /// The device's error code; zero means success.
    #[serde(default)]
    pub error_code: i64,
    /// Screen power flag (0 = off, >0 = on).
    #[serde(rename = "LightSwitch")]
    pub light_switch: i64,
    /// Brightness as a device-scale level.
    #[serde(rename = "Brightness")]
    pub brightness: i64,
    /// Currently selected clock face id.
    #[serde(rename = "CurClockId")]
    pub cur_clock_id: i64,
    /// 24-hour clock flag.
    #[serde(rename = "Time24Flag")]
    pub time24_flag: i64,
    /// Temperature unit flag.
    #[serde(rename = "TemperatureMode")]
    pub temperature_mode: i64,
    /// Screen rotation mode.
    #[serde(rename = "GyrateAngle")]
    pub gyrate_angle: i64,
    /// Mirror flag.
    #[serde(rename = "MirrorFlag")]
    pub mirror_flag: i64,
    /// Auto-rotation flag across channels. Reported but not surfaced.
    #[serde(rename = "RotationFlag", default)]
    pub rotation_flag: Option<i64>,
    /// Seconds each clock face is shown in rotation. Reported but not surfaced.
    #[serde(rename = "ClockTime", default)]
    pub clock_time: Option<i64>,
    /// Seconds each gallery is shown in rotation. Reported but not surfaced.
    #[serde(rename = "GalleryTime", default)]
    pub gallery_time: Option<i64>,
    /// Seconds each image is shown within a gallery. Reported but not surfaced.
    #[serde(rename = "SingleGalleyTime", default)]
    pub single_gallery_time: Option<i64>,
    /// Whether galleries overlay the current time. Reported but not surfaced.
    #[serde(rename = "GalleryShowTimeFlag", default)]
    pub gallery_show_time_flag: Option<i64>,
    /// Channel selected after power-on. Reported but not surfaced.
    #[serde(rename = "PowerOnChannelId", default)]
    pub power_on_channel_id: Option<i64>,
}

impl SettingsResponse {
    /// Returns true if the screen is on.
    #[must_use]
    pub fn screen_on(&self) -> bool {
        self.light_switch > 0
    }

    /// Returns the brightness as a percentage.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the reported level is
    /// outside the 0-255 device scale.
    pub fn brightness(&self) -> Result<Brightness, ParseError> {
        let level = u8::try_from(self.brightness).map_err(|_| {
            ParseError::UnexpectedFormat(format!(
                "Brightness {} is outside the device scale",
                self.brightness
            ))
        })?;
        Ok(Brightness::from_device_level(level))
    }

    /// Returns the current clock face id.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the id is negative.
    pub fn clock_id(&self) -> Result<u32, ParseError> {
        u32::try_from(self.cur_clock_id).map_err(|_| {
            ParseError::UnexpectedFormat(format!("CurClockId {} is negative", self.cur_clock_id))
        })
    }

    /// Returns the hour mode.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the flag is not 0 or 1.
    pub fn hour_mode(&self) -> Result<HourMode, ParseError> {
        HourMode::from_flag(self.time24_flag).ok_or_else(|| {
            ParseError::UnexpectedFormat(format!("Time24Flag {} is not a mode", self.time24_flag))
        })
    }

    /// Returns the temperature unit.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the flag is not 0 or 1.
    pub fn temperature_unit(&self) -> Result<TemperatureUnit, ParseError> {
        TemperatureUnit::from_flag(self.temperature_mode).ok_or_else(|| {
            ParseError::UnexpectedFormat(format!(
                "TemperatureMode {} is not a unit",
                self.temperature_mode
            ))
        })
    }

    /// Returns the screen rotation.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the mode is not 0-3.
    pub fn rotation(&self) -> Result<Rotation, ParseError> {
        Rotation::from_flag(self.gyrate_angle).ok_or_else(|| {
            ParseError::UnexpectedFormat(format!(
                "GyrateAngle {} is not a rotation",
                self.gyrate_angle
            ))
        })
    }

    /// Returns the mirror mode.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the flag is not 0 or 1.
    pub fn mirror_mode(&self) -> Result<MirrorMode, ParseError> {
        MirrorMode::from_flag(self.mirror_flag).ok_or_else(|| {
            ParseError::UnexpectedFormat(format!("MirrorFlag {} is not a mode", self.mirror_flag))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> &'static str {
        r#"{
            "error_code": 0,
            "LightSwitch": 1,
            "Brightness": 128,
            "CurClockId": 10,
            "Time24Flag": 1,
            "TemperatureMode": 0,
            "GyrateAngle": 2,
            "MirrorFlag": 0,
            "RotationFlag": 1,
            "ClockTime": 60,
            "GalleryTime": 60,
            "SingleGalleyTime": 5,
            "GalleryShowTimeFlag": 1,
            "PowerOnChannelId": 1
        }"#
    }

    #[test]
    fn parse_full_settings() {
        let settings: SettingsResponse = serde_json::from_str(sample()).unwrap();
        assert!(settings.screen_on());
        assert_eq!(settings.brightness().unwrap().value(), 50);
        assert_eq!(settings.clock_id().unwrap(), 10);
        assert_eq!(settings.hour_mode().unwrap(), HourMode::TwentyFour);
        assert_eq!(
            settings.temperature_unit().unwrap(),
            TemperatureUnit::Celsius
        );
        assert_eq!(settings.rotation().unwrap(), Rotation::Deg180);
        assert_eq!(settings.mirror_mode().unwrap(), MirrorMode::Disabled);
        assert_eq!(settings.power_on_channel_id, Some(1));
    }

    #[test]
    fn parse_without_passthrough_fields() {
        let settings: SettingsResponse = serde_json::from_str(
            r#"{
                "error_code": 0,
                "LightSwitch": 0,
                "Brightness": 255,
                "CurClockId": 64,
                "Time24Flag": 0,
                "TemperatureMode": 1,
                "GyrateAngle": 0,
                "MirrorFlag": 1
            }"#,
        )
        .unwrap();
        assert!(!settings.screen_on());
        assert_eq!(settings.brightness().unwrap(), Brightness::MAX);
        assert_eq!(settings.mirror_mode().unwrap(), MirrorMode::Enabled);
        assert_eq!(settings.clock_time, None);
    }

    #[test]
    fn missing_core_field_is_a_parse_error() {
        let result: Result<SettingsResponse, _> =
            serde_json::from_str(r#"{"error_code": 0, "LightSwitch": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn brightness_out_of_scale() {
        let mut settings: SettingsResponse = serde_json::from_str(sample()).unwrap();
        settings.brightness = 300;
        assert!(matches!(
            settings.brightness().unwrap_err(),
            ParseError::UnexpectedFormat(_)
        ));
    }

    #[test]
    fn invalid_flags_rejected() {
        let mut settings: SettingsResponse = serde_json::from_str(sample()).unwrap();
        settings.time24_flag = 7;
        assert!(settings.hour_mode().is_err());
        settings.gyrate_angle = 4;
        assert!(settings.rotation().is_err());
    }

    #[test]
    fn negative_clock_id_rejected() {
        let mut settings: SettingsResponse = serde_json::from_str(sample()).unwrap();
        settings.cur_clock_id = -1;
        assert!(settings.clock_id().is_err());
    }
}
