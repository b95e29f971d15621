// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The screen light entity.

use std::sync::Arc;

use crate::coordinator::PixooCoordinator;
use crate::error::Result;
use crate::types::Brightness;

use super::{Entity, EntityIdentity};

/// Attributes applied when turning the screen on.
///
/// # Examples
///
/// ```
/// use pixoor_lib::entity::TurnOn;
/// use pixoor_lib::types::Brightness;
///
/// let attrs = TurnOn::new()
///     .with_brightness(Brightness::new(80).unwrap())
///     .with_effect("Normal - Classic Digital Clock");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TurnOn {
    brightness: Option<Brightness>,
    effect: Option<String>,
}

impl TurnOn {
    /// Creates an empty attribute set (plain turn-on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the brightness to apply.
    #[must_use]
    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the effect to select.
    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }
}

/// Light view of the display screen.
///
/// Projects power, brightness and the current effect out of the snapshot;
/// turn-on applies the requested attributes and powers the screen through
/// the coordinator, which refreshes after each command.
#[derive(Debug)]
pub struct ScreenLight {
    coordinator: Arc<PixooCoordinator>,
    identity: EntityIdentity,
}

impl ScreenLight {
    /// Entity kind key.
    pub const KEY: &'static str = "screen";

    /// Creates the light entity for a coordinator's device.
    #[must_use]
    pub fn new(coordinator: Arc<PixooCoordinator>) -> Self {
        let identity = EntityIdentity::new(coordinator.record(), Self::KEY);
        Self {
            coordinator,
            identity,
        }
    }

    /// Returns whether the screen is on, if known.
    #[must_use]
    pub fn is_on(&self) -> Option<bool> {
        self.coordinator.snapshot().map(|s| s.screen_on())
    }

    /// Returns the screen brightness, if known.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        self.coordinator.snapshot().map(|s| s.brightness())
    }

    /// Returns the name of the current effect, if known.
    #[must_use]
    pub fn effect(&self) -> Option<&'static str> {
        self.coordinator.snapshot().map(|s| s.effect())
    }

    /// Returns the list of selectable effects.
    #[must_use]
    pub fn effect_list(&self) -> Vec<&'static str> {
        self.coordinator.effect_names()
    }

    /// Turns the screen on, applying the requested attributes first.
    ///
    /// Effect and brightness are applied before the power command, matching
    /// the device's expectation that attribute changes land on a screen
    /// about to be visible.
    ///
    /// # Errors
    ///
    /// Returns error if any of the commands fails; an unknown effect name
    /// is rejected before anything is transmitted.
    pub async fn turn_on(&self, attrs: TurnOn) -> Result<()> {
        tracing::debug!(unique_id = %self.identity.unique_id(), "Turning screen on");

        if let Some(effect) = &attrs.effect {
            self.coordinator.set_effect(effect).await?;
        }
        if let Some(brightness) = attrs.brightness {
            self.coordinator.set_brightness(brightness).await?;
        }
        self.coordinator.set_screen_power(true).await?;
        Ok(())
    }

    /// Turns the screen off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn turn_off(&self) -> Result<()> {
        tracing::debug!(unique_id = %self.identity.unique_id(), "Turning screen off");
        self.coordinator.set_screen_power(false).await?;
        Ok(())
    }
}

impl Entity for ScreenLight {
    fn identity(&self) -> &EntityIdentity {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::DeviceRecord;

    fn coordinator() -> Arc<PixooCoordinator> {
        Arc::new(PixooCoordinator::new(DeviceRecord {
            id: "300000001".to_string(),
            mac: "aa:bb:cc:dd:ee:ff".to_string(),
            name: "Test Pixoo".to_string(),
            ip: "192.0.2.1".to_string(),
            hardware: "70".to_string(),
        }))
    }

    #[test]
    fn unique_id_uses_screen_key() {
        let light = ScreenLight::new(coordinator());
        assert_eq!(light.unique_id(), "300000001-screen");
    }

    #[test]
    fn projections_unknown_before_refresh() {
        let light = ScreenLight::new(coordinator());
        assert_eq!(light.is_on(), None);
        assert_eq!(light.brightness(), None);
        assert_eq!(light.effect(), None);
    }

    #[test]
    fn effect_list_is_nonempty() {
        let light = ScreenLight::new(coordinator());
        assert!(!light.effect_list().is_empty());
    }

    #[test]
    fn turn_on_builder() {
        let attrs = TurnOn::new()
            .with_brightness(Brightness::new(40).unwrap())
            .with_effect("Weather - Big Time");
        assert_eq!(attrs.brightness.unwrap().value(), 40);
        assert_eq!(attrs.effect.as_deref(), Some("Weather - Big Time"));
    }
}
