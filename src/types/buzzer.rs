// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Buzzer timing parameters.

use std::time::Duration;

/// Timing for a buzzer activation.
///
/// The device plays the buzzer in on/off cycles (`active`/`off`) until
/// `total` has elapsed. There is no stop command; the buzzer always runs to
/// the end of `total`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pixoor_lib::types::BuzzerCycle;
///
/// // The device defaults: 3 s total, 500 ms on, 500 ms off
/// let cycle = BuzzerCycle::default();
/// assert_eq!(cycle.total_ms(), 3000);
///
/// // A 10 second alarm with the default duty cycle
/// let cycle = BuzzerCycle::with_total(Duration::from_secs(10));
/// assert_eq!(cycle.total_ms(), 10_000);
/// assert_eq!(cycle.active_ms(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuzzerCycle {
    total: Duration,
    active: Duration,
    off: Duration,
}

impl BuzzerCycle {
    /// Default total play time (3 seconds).
    pub const DEFAULT_TOTAL: Duration = Duration::from_millis(3000);
    /// Default active time per cycle (500 ms).
    pub const DEFAULT_ACTIVE: Duration = Duration::from_millis(500);
    /// Default off time per cycle (500 ms).
    pub const DEFAULT_OFF: Duration = Duration::from_millis(500);

    /// Creates a buzzer cycle with explicit timings.
    #[must_use]
    pub const fn new(total: Duration, active: Duration, off: Duration) -> Self {
        Self { total, active, off }
    }

    /// Creates a buzzer cycle with the given total play time and the
    /// default 500 ms / 500 ms duty cycle.
    #[must_use]
    pub const fn with_total(total: Duration) -> Self {
        Self {
            total,
            active: Self::DEFAULT_ACTIVE,
            off: Self::DEFAULT_OFF,
        }
    }

    /// Returns the total play time.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Returns the total play time in milliseconds, as transmitted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn total_ms(&self) -> u64 {
        self.total.as_millis() as u64
    }

    /// Returns the active time per cycle in milliseconds, as transmitted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn active_ms(&self) -> u64 {
        self.active.as_millis() as u64
    }

    /// Returns the off time per cycle in milliseconds, as transmitted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn off_ms(&self) -> u64 {
        self.off.as_millis() as u64
    }
}

impl Default for BuzzerCycle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOTAL, Self::DEFAULT_ACTIVE, Self::DEFAULT_OFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings() {
        let cycle = BuzzerCycle::default();
        assert_eq!(cycle.total_ms(), 3000);
        assert_eq!(cycle.active_ms(), 500);
        assert_eq!(cycle.off_ms(), 500);
    }

    #[test]
    fn with_total_keeps_duty_cycle() {
        let cycle = BuzzerCycle::with_total(Duration::from_secs(7));
        assert_eq!(cycle.total_ms(), 7000);
        assert_eq!(cycle.active_ms(), 500);
        assert_eq!(cycle.off_ms(), 500);
    }

    #[test]
    fn explicit_timings() {
        let cycle = BuzzerCycle::new(
            Duration::from_millis(1200),
            Duration::from_millis(100),
            Duration::from_millis(200),
        );
        assert_eq!(cycle.total_ms(), 1200);
        assert_eq!(cycle.active_ms(), 100);
        assert_eq!(cycle.off_ms(), 200);
    }
}
