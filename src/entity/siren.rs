// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The buzzer siren entity.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::coordinator::PixooCoordinator;
use crate::error::Result;
use crate::types::BuzzerCycle;

use super::{Entity, EntityIdentity};

/// Siren view of the device buzzer.
///
/// The device protocol has no buzzer-off command and reports no buzzer
/// state, so the entity self-tracks: turning on plays the buzzer for the
/// requested duration, sets a local on-flag and schedules a cancellable
/// auto-off at `now + duration`. A new activation cancels the pending
/// auto-off before scheduling its own, so the last command wins and exactly
/// one auto-off fires per activation sequence.
#[derive(Debug)]
pub struct BuzzerSiren {
    coordinator: Arc<PixooCoordinator>,
    identity: EntityIdentity,
    state: Arc<Mutex<SirenState>>,
}

#[derive(Debug)]
struct SirenState {
    is_on: bool,
    /// Bumped on every activation; a stale auto-off must not clear the flag.
    generation: u64,
    auto_off: Option<JoinHandle<()>>,
}

impl BuzzerSiren {
    /// Entity kind key.
    pub const KEY: &'static str = "siren";

    /// Default siren duration (3 seconds).
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

    /// Creates the siren entity for a coordinator's device.
    #[must_use]
    pub fn new(coordinator: Arc<PixooCoordinator>) -> Self {
        let identity = EntityIdentity::new(coordinator.record(), Self::KEY);
        Self {
            coordinator,
            identity,
            state: Arc::new(Mutex::new(SirenState {
                is_on: false,
                generation: 0,
                auto_off: None,
            })),
        }
    }

    /// Returns whether the siren currently considers itself on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.lock().is_on
    }

    /// Turns the siren on for the given duration (default 3 seconds).
    ///
    /// Plays the buzzer, then marks the entity on and schedules the
    /// auto-off. A pending auto-off from an earlier activation is cancelled
    /// first.
    ///
    /// # Errors
    ///
    /// Returns error if the buzzer command fails; the on-flag and timer are
    /// only touched after the device acknowledged the command.
    pub async fn turn_on(&self, duration: Option<Duration>) -> Result<()> {
        let duration = duration.unwrap_or(Self::DEFAULT_DURATION);
        tracing::debug!(
            unique_id = %self.identity.unique_id(),
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "Turning siren on"
        );

        self.coordinator
            .play_buzzer(BuzzerCycle::with_total(duration))
            .await?;

        let mut state = self.state.lock();
        if let Some(pending) = state.auto_off.take() {
            pending.abort();
        }
        state.is_on = true;
        state.generation += 1;
        let generation = state.generation;

        let shared = Arc::clone(&self.state);
        state.auto_off = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut state = shared.lock();
            if state.generation == generation {
                tracing::debug!("Siren auto-off");
                state.is_on = false;
                state.auto_off = None;
            }
        }));

        Ok(())
    }

    /// Cancels any pending auto-off and clears the on-flag.
    ///
    /// Called on teardown so no timer fires after the entity is gone.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        if let Some(pending) = state.auto_off.take() {
            pending.abort();
        }
        state.is_on = false;
        state.generation += 1;
    }
}

impl Entity for BuzzerSiren {
    fn identity(&self) -> &EntityIdentity {
        &self.identity
    }
}

impl Drop for BuzzerSiren {
    fn drop(&mut self) {
        if let Some(pending) = self.state.lock().auto_off.take() {
            pending.abort();
        }
    }
}
