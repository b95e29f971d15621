// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for screen brightness control.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.
//!
//! The device itself transmits brightness as a level in the 0-255 range;
//! [`Brightness::to_device_level`] and [`Brightness::from_device_level`]
//! convert between the two scales.

use std::fmt;

use crate::error::ValueError;

/// Screen brightness as a percentage (0-100).
///
/// The library-facing scale is a percentage, where 0 is the dimmest level
/// and 100 is full brightness. On the wire the device uses a 0-255 level.
///
/// Percent-to-level conversion rounds up so the transmitted level is never
/// dimmer than requested; level-to-percent rounds to nearest. A percentage
/// round-tripped through the device scale never decreases.
///
/// # Examples
///
/// ```
/// use pixoor_lib::types::Brightness;
///
/// // Create a brightness at 75%
/// let level = Brightness::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// // Use predefined values
/// let off = Brightness::MIN;
/// let full = Brightness::MAX;
/// assert_eq!(off.value(), 0);
/// assert_eq!(full.value(), 100);
///
/// // Invalid values return error
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness value (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness value (100%).
    pub const MAX: Self = Self(100);

    /// Maximum device-scale level.
    pub const DEVICE_MAX: u8 = 255;

    /// Creates a new brightness value.
    ///
    /// # Arguments
    ///
    /// * `value` - The brightness percentage (0-100)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixoor_lib::types::Brightness;
    ///
    /// let level = Brightness::new(50).unwrap();
    /// assert_eq!(level.value(), 50);
    /// ```
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixoor_lib::types::Brightness;
    ///
    /// let level = Brightness::clamped(150);
    /// assert_eq!(level.value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Converts the percentage to the device's 0-255 level.
    ///
    /// Fractional results round up, so a requested percentage never maps to
    /// a dimmer level than asked for.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixoor_lib::types::Brightness;
    ///
    /// assert_eq!(Brightness::MIN.to_device_level(), 0);
    /// assert_eq!(Brightness::MAX.to_device_level(), 255);
    /// assert_eq!(Brightness::new(1).unwrap().to_device_level(), 3);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_device_level(&self) -> u8 {
        // ceil(value * 255 / 100), result is <= 255 for value <= 100
        ((self.0 as u16 * 255).div_ceil(100)) as u8
    }

    /// Converts a device 0-255 level back to a percentage.
    ///
    /// Rounds to nearest. Together with the ceiling in
    /// [`to_device_level`](Self::to_device_level), a percentage round-tripped
    /// through the device scale never decreases.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixoor_lib::types::Brightness;
    ///
    /// assert_eq!(Brightness::from_device_level(0).value(), 0);
    /// assert_eq!(Brightness::from_device_level(255).value(), 100);
    /// assert_eq!(Brightness::from_device_level(128).value(), 50);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_device_level(level: u8) -> Self {
        Self(((level as u32 * 100 + 127) / 255) as u8)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
