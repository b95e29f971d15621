// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The polling coordinator: single owner of one device's I/O and state.
//!
//! A [`PixooCoordinator`] owns the connection to one device, refreshes the
//! device settings on a fixed interval, and exposes typed command wrappers.
//! Every command wrapper re-refreshes afterwards so the snapshot always
//! reflects device-acknowledged state; entities read the snapshot and never
//! talk to the device directly.
//!
//! # Lifecycle
//!
//! The HTTP client is constructed lazily on the first refresh attempt. A
//! refresh is bounded by [`REFRESH_TIMEOUT`]; expiry or a malformed response
//! is a recoverable failure - the snapshot keeps its previous value and the
//! next interval tries again. The unconditional first refresh during setup
//! maps failures to [`Error::NotReady`] so the caller retries setup later
//! instead of proceeding with no data.
//!
//! # Concurrency
//!
//! All device I/O is serialized through an internal mutex: at most one
//! refresh or command is in flight per coordinator at a time, so two
//! concurrent setters cannot interleave their writes and leave the snapshot
//! reflecting neither. The snapshot itself is replaced wholesale under a
//! separate lock; readers never observe a partially-updated value.
//!
//! # Examples
//!
//! ```no_run
//! use pixoor_lib::coordinator::PixooCoordinator;
//! use pixoor_lib::discovery::DeviceRecord;
//! use std::sync::Arc;
//!
//! # async fn example(record: DeviceRecord) -> pixoor_lib::Result<()> {
//! let coordinator = Arc::new(PixooCoordinator::new(record));
//! coordinator.first_refresh().await?;
//!
//! let _polling = Arc::clone(&coordinator).spawn_polling();
//! coordinator.set_screen_power(true).await?;
//! # Ok(())
//! # }
//! ```

mod snapshot;

pub use snapshot::DeviceSnapshot;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::{Mutex, OnceCell};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::command::{
    BrightnessCommand, BuzzerCommand, ClockSelectCommand, Command, HourModeCommand,
    MirrorModeCommand, RotationCommand, ScreenPowerCommand, SettingsCommand,
    TemperatureUnitCommand,
};
use crate::discovery::DeviceRecord;
use crate::effects::FACES;
use crate::error::{DeviceError, Error, ProtocolError, Result, ValueError};
use crate::protocol::{HttpClient, HttpConfig, Protocol};
use crate::response::{AckResponse, SettingsResponse};
use crate::types::{Brightness, BuzzerCycle, HourMode, MirrorMode, Rotation, TemperatureUnit};

/// Interval between periodic refreshes.
pub const SCAN_INTERVAL: Duration = Duration::from_secs(60);

/// Hard bound on a single refresh attempt.
pub const REFRESH_TIMEOUT: Duration = Duration::from_secs(10);

/// Coordinator for a single Pixoo device.
///
/// See the [module documentation](self) for lifecycle and concurrency
/// details.
#[derive(Debug)]
pub struct PixooCoordinator {
    record: DeviceRecord,
    config: HttpConfig,
    /// Lazily-built device client, created on the first refresh attempt.
    client: OnceCell<HttpClient>,
    /// Serializes refreshes and commands; at most one in flight at a time.
    io_lock: Mutex<()>,
    /// Latest snapshot, replaced wholesale on each successful refresh.
    snapshot: RwLock<Option<DeviceSnapshot>>,
}

impl PixooCoordinator {
    /// Creates a coordinator for the given device record.
    ///
    /// The connection uses the record's stored IP address with default
    /// settings; no network I/O happens until the first refresh.
    #[must_use]
    pub fn new(record: DeviceRecord) -> Self {
        let config = HttpConfig::new(record.ip.clone()).with_timeout(REFRESH_TIMEOUT);
        Self::with_config(record, config)
    }

    /// Creates a coordinator with an explicit connection configuration.
    #[must_use]
    pub fn with_config(record: DeviceRecord, config: HttpConfig) -> Self {
        tracing::debug!(id = %record.id, ip = %record.ip, "Creating coordinator");
        Self {
            record,
            config,
            client: OnceCell::new(),
            io_lock: Mutex::new(()),
            snapshot: RwLock::new(None),
        }
    }

    /// Returns the identity record of the owned device.
    #[must_use]
    pub fn record(&self) -> &DeviceRecord {
        &self.record
    }

    /// Returns the latest snapshot, if at least one refresh has succeeded.
    #[must_use]
    pub fn snapshot(&self) -> Option<DeviceSnapshot> {
        *self.snapshot.read()
    }

    /// Returns the names of all selectable effects, in table order.
    #[must_use]
    pub fn effect_names(&self) -> Vec<&'static str> {
        FACES.names()
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Performs the unconditional initial refresh during setup.
    ///
    /// # Errors
    ///
    /// Maps any refresh failure to [`Error::NotReady`] so the caller can
    /// retry the whole setup later rather than proceeding with no data.
    pub async fn first_refresh(&self) -> Result<DeviceSnapshot> {
        self.refresh().await.map_err(Error::not_ready)
    }

    /// Fetches the device settings and replaces the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Timeout` if the attempt exceeds
    /// [`REFRESH_TIMEOUT`], or a parse/device error on a malformed or
    /// rejected response. Failures are recoverable: the previous snapshot
    /// stays in place and the coordinator remains usable.
    pub async fn refresh(&self) -> Result<DeviceSnapshot> {
        let _io = self.io_lock.lock().await;
        self.refresh_locked().await
    }

    /// Refresh body; caller must hold the I/O lock.
    async fn refresh_locked(&self) -> Result<DeviceSnapshot> {
        tracing::debug!(id = %self.record.id, "Refreshing device settings");

        let snapshot = tokio::time::timeout(REFRESH_TIMEOUT, self.fetch_snapshot())
            .await
            .map_err(|_| {
                ProtocolError::Timeout(u64::try_from(REFRESH_TIMEOUT.as_millis()).unwrap_or(u64::MAX))
            })??;

        *self.snapshot.write() = Some(snapshot);
        Ok(snapshot)
    }

    /// Queries the settings endpoint and builds a typed snapshot.
    async fn fetch_snapshot(&self) -> Result<DeviceSnapshot> {
        let client = self.client().await?;
        let response = client
            .send_command(&SettingsCommand)
            .await
            .map_err(Error::Protocol)?;
        let settings: SettingsResponse = response.parse().map_err(Error::Parse)?;
        if settings.error_code != 0 {
            return Err(DeviceError::CommandRejected {
                code: settings.error_code,
            }
            .into());
        }
        DeviceSnapshot::from_settings(&settings).map_err(Error::Parse)
    }

    /// Returns the device client, building it on first use.
    async fn client(&self) -> Result<&HttpClient> {
        self.client
            .get_or_try_init(|| async {
                tracing::debug!(ip = %self.record.ip, "Creating device client");
                self.config.clone().into_client().map_err(Error::Protocol)
            })
            .await
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Turns the screen on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the command or the follow-up refresh fails.
    pub async fn set_screen_power(&self, on: bool) -> Result<DeviceSnapshot> {
        tracing::debug!(on, "Setting screen power");
        self.run_command(&ScreenPowerCommand::from_bool(on)).await
    }

    /// Sets the screen brightness.
    ///
    /// The percentage is converted to the device's 0-255 scale for
    /// transmission, rounding up.
    ///
    /// # Errors
    ///
    /// Returns error if the command or the follow-up refresh fails.
    pub async fn set_brightness(&self, brightness: Brightness) -> Result<DeviceSnapshot> {
        tracing::debug!(
            percent = brightness.value(),
            level = brightness.to_device_level(),
            "Setting brightness"
        );
        self.run_command(&BrightnessCommand::new(brightness)).await
    }

    /// Selects an effect by name.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownEffect` without issuing any request if
    /// the name is not in the effect table; otherwise errors as the other
    /// commands do.
    pub async fn set_effect(&self, name: &str) -> Result<DeviceSnapshot> {
        let Some(clock_id) = FACES.id(name) else {
            return Err(ValueError::UnknownEffect(name.to_string()).into());
        };
        tracing::debug!(effect = name, clock_id, "Selecting effect");
        self.run_command(&ClockSelectCommand::new(clock_id)).await
    }

    /// Plays the buzzer with the given cycle timings.
    ///
    /// Fire-and-forget on the device side; there is no stop command and the
    /// settings carry no buzzer state.
    ///
    /// # Errors
    ///
    /// Returns error if the command or the follow-up refresh fails.
    pub async fn play_buzzer(&self, cycle: BuzzerCycle) -> Result<DeviceSnapshot> {
        tracing::debug!(total_ms = cycle.total_ms(), "Playing buzzer");
        self.run_command(&BuzzerCommand::new(cycle)).await
    }

    /// Sets 12/24-hour clock display.
    ///
    /// # Errors
    ///
    /// Returns error if the command or the follow-up refresh fails.
    pub async fn set_hour_mode(&self, mode: HourMode) -> Result<DeviceSnapshot> {
        tracing::debug!(mode = %mode, "Setting hour mode");
        self.run_command(&HourModeCommand::new(mode)).await
    }

    /// Sets the temperature display unit.
    ///
    /// # Errors
    ///
    /// Returns error if the command or the follow-up refresh fails.
    pub async fn set_temperature_unit(&self, unit: TemperatureUnit) -> Result<DeviceSnapshot> {
        tracing::debug!(unit = %unit, "Setting temperature unit");
        self.run_command(&TemperatureUnitCommand::new(unit)).await
    }

    /// Sets horizontal screen mirroring.
    ///
    /// # Errors
    ///
    /// Returns error if the command or the follow-up refresh fails.
    pub async fn set_mirror_mode(&self, mode: MirrorMode) -> Result<DeviceSnapshot> {
        tracing::debug!(mode = %mode, "Setting mirror mode");
        self.run_command(&MirrorModeCommand::new(mode)).await
    }

    /// Sets the screen rotation angle.
    ///
    /// # Errors
    ///
    /// Returns error if the command or the follow-up refresh fails.
    pub async fn set_rotation(&self, rotation: Rotation) -> Result<DeviceSnapshot> {
        tracing::debug!(rotation = %rotation, "Setting rotation");
        self.run_command(&RotationCommand::new(rotation)).await
    }

    /// Sends a command and refreshes afterwards, holding the I/O lock for
    /// the whole sequence.
    ///
    /// The refresh is attempted even when the command failed, so the
    /// snapshot reflects device truth where obtainable; the command error
    /// wins over a refresh error in that case.
    async fn run_command<C: Command + Sync>(&self, command: &C) -> Result<DeviceSnapshot> {
        let _io = self.io_lock.lock().await;
        let sent = self.send_checked(command).await;
        let refreshed = self.refresh_locked().await;

        match sent {
            Ok(()) => refreshed,
            Err(error) => {
                if let Err(refresh_error) = refreshed {
                    tracing::debug!(%refresh_error, "Post-command refresh also failed");
                }
                Err(error)
            }
        }
    }

    /// Sends a command and checks the device acknowledgement.
    async fn send_checked<C: Command + Sync>(&self, command: &C) -> Result<()> {
        let client = self.client().await?;
        let response = client.send_command(command).await.map_err(Error::Protocol)?;
        let ack: AckResponse = response.parse().map_err(Error::Parse)?;
        ack.ensure_ok().map_err(Error::Device)
    }

    // =========================================================================
    // Polling
    // =========================================================================

    /// Starts the periodic refresh task at [`SCAN_INTERVAL`].
    ///
    /// Per-tick failures are logged and swallowed; the next tick retries.
    /// The task stops when the returned handle is aborted or dropped.
    #[must_use]
    pub fn spawn_polling(self: Arc<Self>) -> PollingHandle {
        self.spawn_polling_every(SCAN_INTERVAL)
    }

    /// Starts the periodic refresh task with a custom interval.
    #[must_use]
    pub fn spawn_polling_every(self: Arc<Self>, period: Duration) -> PollingHandle {
        let coordinator = self;
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; setup already did the
            // initial refresh, so wait a full period before polling.
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(error) = coordinator.refresh().await {
                    tracing::warn!(
                        id = %coordinator.record.id,
                        %error,
                        "Periodic refresh failed"
                    );
                }
            }
        });
        PollingHandle { handle }
    }
}

/// Handle to a running polling task.
///
/// Aborting (or dropping) the handle stops the task.
#[derive(Debug)]
pub struct PollingHandle {
    handle: JoinHandle<()>,
}

impl PollingHandle {
    /// Stops the polling task.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Returns true if the polling task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DeviceRecord {
        DeviceRecord {
            id: "300000001".to_string(),
            mac: "aa:bb:cc:dd:ee:ff".to_string(),
            name: "Test Pixoo".to_string(),
            ip: "192.0.2.1".to_string(),
            hardware: "70".to_string(),
        }
    }

    #[test]
    fn no_snapshot_before_first_refresh() {
        let coordinator = PixooCoordinator::new(record());
        assert!(coordinator.snapshot().is_none());
    }

    #[test]
    fn effect_names_match_table() {
        let coordinator = PixooCoordinator::new(record());
        assert_eq!(coordinator.effect_names(), FACES.names());
    }

    #[tokio::test]
    async fn unknown_effect_rejected_without_io() {
        // 192.0.2.1 is TEST-NET; if validation did not short-circuit this
        // would block on a connection attempt
        let coordinator = PixooCoordinator::new(record());
        let err = coordinator.set_effect("No Such Face").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::UnknownEffect(name)) if name == "No Such Face"
        ));
        assert!(coordinator.snapshot().is_none());
    }
}
