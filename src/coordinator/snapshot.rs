// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The typed device snapshot produced by a refresh.

use crate::effects::FACES;
use crate::error::ParseError;
use crate::response::SettingsResponse;
use crate::types::{Brightness, HourMode, MirrorMode, Rotation, TemperatureUnit};

/// A fully-typed view of the device settings at one point in time.
///
/// A snapshot is built in one piece from a settings response and replaced
/// wholesale on each successful refresh; readers always observe a value
/// from a single poll, never a mix of two.
///
/// The effect name is resolved against [`FACES`] when the snapshot is
/// built. A clock id outside that table fails the refresh instead of
/// producing a snapshot with an unresolvable effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSnapshot {
    screen_on: bool,
    brightness: Brightness,
    effect_id: u32,
    effect: &'static str,
    hour_mode: HourMode,
    temperature_unit: TemperatureUnit,
    rotation: Rotation,
    mirror_mode: MirrorMode,
}

impl DeviceSnapshot {
    /// Builds a snapshot from a parsed settings response.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if any flag is outside its fixed table, or
    /// `ParseError::UnknownEffectId` if the reported clock id is not in
    /// [`FACES`].
    pub(crate) fn from_settings(settings: &SettingsResponse) -> Result<Self, ParseError> {
        let effect_id = settings.clock_id()?;
        let effect = FACES
            .name(effect_id)
            .ok_or(ParseError::UnknownEffectId(effect_id))?;

        Ok(Self {
            screen_on: settings.screen_on(),
            brightness: settings.brightness()?,
            effect_id,
            effect,
            hour_mode: settings.hour_mode()?,
            temperature_unit: settings.temperature_unit()?,
            rotation: settings.rotation()?,
            mirror_mode: settings.mirror_mode()?,
        })
    }

    /// Returns true if the screen is on.
    #[must_use]
    pub fn screen_on(&self) -> bool {
        self.screen_on
    }

    /// Returns the screen brightness.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Returns the device id of the current effect.
    #[must_use]
    pub fn effect_id(&self) -> u32 {
        self.effect_id
    }

    /// Returns the name of the current effect.
    #[must_use]
    pub fn effect(&self) -> &'static str {
        self.effect
    }

    /// Returns the hour mode.
    #[must_use]
    pub fn hour_mode(&self) -> HourMode {
        self.hour_mode
    }

    /// Returns the temperature unit.
    #[must_use]
    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    /// Returns the screen rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the mirror mode.
    #[must_use]
    pub fn mirror_mode(&self) -> MirrorMode {
        self.mirror_mode
    }
}
