// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device lifecycle: setup and teardown of one managed device.
//!
//! [`ManagedPixoo::setup`] is the host-facing entry point: given a
//! persisted [`DeviceRecord`], it builds the coordinator, performs the
//! unconditional first refresh (failing with
//! [`Error::NotReady`](crate::error::Error::NotReady) so the caller retries
//! setup later), constructs all entities and starts periodic polling.
//! [`ManagedPixoo::teardown`] stops polling and cancels the siren's pending
//! auto-off so nothing fires after the device is gone.
//!
//! # Examples
//!
//! ```no_run
//! use pixoor_lib::manager::ManagedPixoo;
//! use pixoor_lib::discovery::discover;
//!
//! # async fn example() -> pixoor_lib::Result<()> {
//! let record = discover().await?.into_iter().next().expect("a device");
//! let device = ManagedPixoo::setup(record).await?;
//!
//! device.light().turn_off().await?;
//! device.teardown();
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::coordinator::{PixooCoordinator, PollingHandle};
use crate::discovery::DeviceRecord;
use crate::entity::{
    BuzzerSiren, HourModeSelect, MirrorModeSelect, RotationSelect, ScreenLight,
    TemperatureUnitSelect,
};
use crate::error::Result;
use crate::protocol::HttpConfig;

/// One fully set-up device: coordinator, entities and the polling task.
#[derive(Debug)]
pub struct ManagedPixoo {
    coordinator: Arc<PixooCoordinator>,
    light: ScreenLight,
    siren: BuzzerSiren,
    hour_mode: HourModeSelect,
    temperature_unit: TemperatureUnitSelect,
    mirror_mode: MirrorModeSelect,
    rotation: RotationSelect,
    polling: PollingHandle,
}

impl ManagedPixoo {
    /// Sets up a device from its persisted identity record.
    ///
    /// Performs the first refresh before any entity exists; on failure the
    /// error is [`Error::NotReady`](crate::error::Error::NotReady) and
    /// nothing is left running.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` if the initial refresh fails.
    pub async fn setup(record: DeviceRecord) -> Result<Self> {
        let coordinator = Arc::new(PixooCoordinator::new(record));
        Self::setup_coordinator(coordinator).await
    }

    /// Sets up a device with an explicit connection configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` if the initial refresh fails.
    pub async fn setup_with_config(record: DeviceRecord, config: HttpConfig) -> Result<Self> {
        let coordinator = Arc::new(PixooCoordinator::with_config(record, config));
        Self::setup_coordinator(coordinator).await
    }

    async fn setup_coordinator(coordinator: Arc<PixooCoordinator>) -> Result<Self> {
        tracing::info!(
            id = %coordinator.record().id,
            name = %coordinator.record().name,
            "Setting up device"
        );

        coordinator.first_refresh().await?;

        let polling = Arc::clone(&coordinator).spawn_polling();
        Ok(Self {
            light: ScreenLight::new(Arc::clone(&coordinator)),
            siren: BuzzerSiren::new(Arc::clone(&coordinator)),
            hour_mode: HourModeSelect::new(Arc::clone(&coordinator)),
            temperature_unit: TemperatureUnitSelect::new(Arc::clone(&coordinator)),
            mirror_mode: MirrorModeSelect::new(Arc::clone(&coordinator)),
            rotation: RotationSelect::new(Arc::clone(&coordinator)),
            coordinator,
            polling,
        })
    }

    /// Returns the coordinator.
    #[must_use]
    pub fn coordinator(&self) -> &Arc<PixooCoordinator> {
        &self.coordinator
    }

    /// Returns the screen light entity.
    #[must_use]
    pub fn light(&self) -> &ScreenLight {
        &self.light
    }

    /// Returns the buzzer siren entity.
    #[must_use]
    pub fn siren(&self) -> &BuzzerSiren {
        &self.siren
    }

    /// Returns the hour mode select entity.
    #[must_use]
    pub fn hour_mode_select(&self) -> &HourModeSelect {
        &self.hour_mode
    }

    /// Returns the temperature unit select entity.
    #[must_use]
    pub fn temperature_unit_select(&self) -> &TemperatureUnitSelect {
        &self.temperature_unit
    }

    /// Returns the mirror mode select entity.
    #[must_use]
    pub fn mirror_mode_select(&self) -> &MirrorModeSelect {
        &self.mirror_mode
    }

    /// Returns the rotation select entity.
    #[must_use]
    pub fn rotation_select(&self) -> &RotationSelect {
        &self.rotation
    }

    /// Tears the device down: stops polling and cancels the siren's
    /// pending auto-off.
    pub fn teardown(self) {
        tracing::info!(id = %self.coordinator.record().id, "Tearing down device");
        self.polling.abort();
        self.siren.cancel();
    }
}
