// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mode select entities.
//!
//! Each select exposes one enumerated device setting: the fixed option
//! list, the current option projected from the snapshot, and a setter that
//! validates the option string before calling the matching coordinator
//! command. An unknown option is rejected without any network request.

use std::sync::Arc;

use crate::coordinator::PixooCoordinator;
use crate::error::Result;
use crate::types::{HourMode, MirrorMode, Rotation, TemperatureUnit};

use super::{Entity, EntityIdentity};

/// Select for the 12/24-hour clock display.
#[derive(Debug)]
pub struct HourModeSelect {
    coordinator: Arc<PixooCoordinator>,
    identity: EntityIdentity,
}

impl HourModeSelect {
    /// Entity kind key.
    pub const KEY: &'static str = "hour_mode";

    /// Creates the select for a coordinator's device.
    #[must_use]
    pub fn new(coordinator: Arc<PixooCoordinator>) -> Self {
        let identity = EntityIdentity::new(coordinator.record(), Self::KEY);
        Self {
            coordinator,
            identity,
        }
    }

    /// Returns the fixed option list.
    #[must_use]
    pub fn options(&self) -> &'static [&'static str] {
        HourMode::OPTIONS
    }

    /// Returns the currently selected option, if known.
    #[must_use]
    pub fn current_option(&self) -> Option<&'static str> {
        self.coordinator.snapshot().map(|s| s.hour_mode().as_str())
    }

    /// Applies the given option.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownOption` without issuing any request if
    /// the option is not in the table; otherwise errors as the coordinator
    /// command does.
    pub async fn select_option(&self, option: &str) -> Result<()> {
        let mode: HourMode = option.parse()?;
        tracing::debug!(unique_id = %self.identity.unique_id(), option, "Selecting hour mode");
        self.coordinator.set_hour_mode(mode).await?;
        Ok(())
    }
}

impl Entity for HourModeSelect {
    fn identity(&self) -> &EntityIdentity {
        &self.identity
    }
}

/// Select for the temperature display unit.
#[derive(Debug)]
pub struct TemperatureUnitSelect {
    coordinator: Arc<PixooCoordinator>,
    identity: EntityIdentity,
}

impl TemperatureUnitSelect {
    /// Entity kind key.
    pub const KEY: &'static str = "temperature_unit";

    /// Creates the select for a coordinator's device.
    #[must_use]
    pub fn new(coordinator: Arc<PixooCoordinator>) -> Self {
        let identity = EntityIdentity::new(coordinator.record(), Self::KEY);
        Self {
            coordinator,
            identity,
        }
    }

    /// Returns the fixed option list.
    #[must_use]
    pub fn options(&self) -> &'static [&'static str] {
        TemperatureUnit::OPTIONS
    }

    /// Returns the currently selected option, if known.
    #[must_use]
    pub fn current_option(&self) -> Option<&'static str> {
        self.coordinator
            .snapshot()
            .map(|s| s.temperature_unit().as_str())
    }

    /// Applies the given option.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownOption` without issuing any request if
    /// the option is not in the table; otherwise errors as the coordinator
    /// command does.
    pub async fn select_option(&self, option: &str) -> Result<()> {
        let unit: TemperatureUnit = option.parse()?;
        tracing::debug!(unique_id = %self.identity.unique_id(), option, "Selecting temperature unit");
        self.coordinator.set_temperature_unit(unit).await?;
        Ok(())
    }
}

impl Entity for TemperatureUnitSelect {
    fn identity(&self) -> &EntityIdentity {
        &self.identity
    }
}

/// Select for horizontal screen mirroring.
#[derive(Debug)]
pub struct MirrorModeSelect {
    coordinator: Arc<PixooCoordinator>,
    identity: EntityIdentity,
}

impl MirrorModeSelect {
    /// Entity kind key.
    pub const KEY: &'static str = "mirror_mode";

    /// Creates the select for a coordinator's device.
    #[must_use]
    pub fn new(coordinator: Arc<PixooCoordinator>) -> Self {
        let identity = EntityIdentity::new(coordinator.record(), Self::KEY);
        Self {
            coordinator,
            identity,
        }
    }

    /// Returns the fixed option list.
    #[must_use]
    pub fn options(&self) -> &'static [&'static str] {
        MirrorMode::OPTIONS
    }

    /// Returns the currently selected option, if known.
    #[must_use]
    pub fn current_option(&self) -> Option<&'static str> {
        self.coordinator
            .snapshot()
            .map(|s| s.mirror_mode().as_str())
    }

    /// Applies the given option.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownOption` without issuing any request if
    /// the option is not in the table; otherwise errors as the coordinator
    /// command does.
    pub async fn select_option(&self, option: &str) -> Result<()> {
        let mode: MirrorMode = option.parse()?;
        tracing::debug!(unique_id = %self.identity.unique_id(), option, "Selecting mirror mode");
        self.coordinator.set_mirror_mode(mode).await?;
        Ok(())
    }
}

impl Entity for MirrorModeSelect {
    fn identity(&self) -> &EntityIdentity {
        &self.identity
    }
}

/// Select for the screen rotation angle.
#[derive(Debug)]
pub struct RotationSelect {
    coordinator: Arc<PixooCoordinator>,
    identity: EntityIdentity,
}

impl RotationSelect {
    /// Entity kind key.
    pub const KEY: &'static str = "rotation";

    /// Creates the select for a coordinator's device.
    #[must_use]
    pub fn new(coordinator: Arc<PixooCoordinator>) -> Self {
        let identity = EntityIdentity::new(coordinator.record(), Self::KEY);
        Self {
            coordinator,
            identity,
        }
    }

    /// Returns the fixed option list.
    #[must_use]
    pub fn options(&self) -> &'static [&'static str] {
        Rotation::OPTIONS
    }

    /// Returns the currently selected option, if known.
    #[must_use]
    pub fn current_option(&self) -> Option<&'static str> {
        self.coordinator.snapshot().map(|s| s.rotation().as_str())
    }

    /// Applies the given option.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownOption` without issuing any request if
    /// the option is not in the table; otherwise errors as the coordinator
    /// command does.
    pub async fn select_option(&self, option: &str) -> Result<()> {
        let rotation: Rotation = option.parse()?;
        tracing::debug!(unique_id = %self.identity.unique_id(), option, "Selecting rotation");
        self.coordinator.set_rotation(rotation).await?;
        Ok(())
    }
}

impl Entity for RotationSelect {
    fn identity(&self) -> &EntityIdentity {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::DeviceRecord;
    use crate::error::{Error, ValueError};

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
    fn unique_ids_per_kind() {
        let coordinator = coordinator();
        assert_eq!(
            HourModeSelect::new(Arc::clone(&coordinator)).unique_id(),
            "300000001-hour_mode"
        );
        assert_eq!(
            TemperatureUnitSelect::new(Arc::clone(&coordinator)).unique_id(),
            "300000001-temperature_unit"
        );
        assert_eq!(
            MirrorModeSelect::new(Arc::clone(&coordinator)).unique_id(),
            "300000001-mirror_mode"
        );
        assert_eq!(
            RotationSelect::new(coordinator).unique_id(),
            "300000001-rotation"
        );
    }

    #[test]
    fn options_match_tables() {
        let coordinator = coordinator();
        assert_eq!(
            HourModeSelect::new(Arc::clone(&coordinator)).options(),
            HourMode::OPTIONS
        );
        assert_eq!(
            RotationSelect::new(coordinator).options(),
            Rotation::OPTIONS
        );
    }

    #[test]
    fn current_option_unknown_before_refresh() {
        let select = HourModeSelect::new(coordinator());
        assert_eq!(select.current_option(), None);
    }

    #[tokio::test]
    async fn unknown_option_rejected_without_io() {
        let select = RotationSelect::new(coordinator());
        let err = select.select_option("45").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::UnknownOption {
                field: "rotation",
                ..
            })
        ));
    }
}
