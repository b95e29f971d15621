// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display mode enums with their fixed device flag tables.
//!
//! Each enum maps between three representations:
//!
//! - the Rust variant,
//! - the numeric flag the device understands (`as_flag`/`from_flag`),
//! - the option string offered to select entities (`as_str`/`FromStr`).
//!
//! The flag tables are fixed by the vendor API; an unknown flag reported by
//! the device is a parse failure, an unknown option string offered by a
//! caller is a validation failure.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Clock display mode (12 or 24 hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourMode {
    /// 12-hour display.
    Twelve,
    /// 24-hour display.
    TwentyFour,
}

impl HourMode {
    /// All option strings, in display order.
    pub const OPTIONS: &'static [&'static str] = &["12h", "24h"];

    /// Parses the device flag (0 = 12h, 1 = 24h).
    #[must_use]
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Self::Twelve),
            1 => Some(Self::TwentyFour),
            _ => None,
        }
    }

    /// Returns the device flag for this mode.
    #[must_use]
    pub fn as_flag(self) -> u8 {
        match self {
            Self::Twelve => 0,
            Self::TwentyFour => 1,
        }
    }

    /// Returns the option string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twelve => "12h",
            Self::TwentyFour => "24h",
        }
    }
}

impl FromStr for HourMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12h" => Ok(Self::Twelve),
            "24h" => Ok(Self::TwentyFour),
            other => Err(ValueError::UnknownOption {
                field: "hour_mode",
                option: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for HourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperature display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// All option strings, in display order.
    pub const OPTIONS: &'static [&'static str] = &["celsius", "fahrenheit"];

    /// Parses the device flag (0 = Celsius, 1 = Fahrenheit).
    #[must_use]
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Self::Celsius),
            1 => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// Returns the device flag for this unit.
    #[must_use]
    pub fn as_flag(self) -> u8 {
        match self {
            Self::Celsius => 0,
            Self::Fahrenheit => 1,
        }
    }

    /// Returns the option string for this unit.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "celsius" => Ok(Self::Celsius),
            "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(ValueError::UnknownOption {
                field: "temperature_unit",
                option: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    Deg0,
    /// Rotated 90 degrees.
    Deg90,
    /// Rotated 180 degrees.
    Deg180,
    /// Rotated 270 degrees.
    Deg270,
}

impl Rotation {
    /// All option strings, in display order.
    pub const OPTIONS: &'static [&'static str] = &["0", "90", "180", "270"];

    /// Parses the device mode value (0-3).
    #[must_use]
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Self::Deg0),
            1 => Some(Self::Deg90),
            2 => Some(Self::Deg180),
            3 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Returns the device mode value for this angle.
    #[must_use]
    pub fn as_flag(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Returns the rotation angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Returns the option string for this angle.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deg0 => "0",
            Self::Deg90 => "90",
            Self::Deg180 => "180",
            Self::Deg270 => "270",
        }
    }
}

impl FromStr for Rotation {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::Deg0),
            "90" => Ok(Self::Deg90),
            "180" => Ok(Self::Deg180),
            "270" => Ok(Self::Deg270),
            other => Err(ValueError::UnknownOption {
                field: "rotation",
                option: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal screen mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorMode {
    /// Mirroring disabled.
    Disabled,
    /// Mirroring enabled.
    Enabled,
}

impl MirrorMode {
    /// All option strings, in display order.
    pub const OPTIONS: &'static [&'static str] = &["disabled", "enabled"];

    /// Parses the device flag (0 = disabled, 1 = enabled).
    #[must_use]
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Self::Disabled),
            1 => Some(Self::Enabled),
            _ => None,
        }
    }

    /// Returns the device flag for this mode.
    #[must_use]
    pub fn as_flag(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }

    /// Returns true if mirroring is enabled.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// Returns the option string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Enabled => "enabled",
        }
    }
}

impl FromStr for MirrorMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(Self::Disabled),
            "enabled" => Ok(Self::Enabled),
            other => Err(ValueError::UnknownOption {
                field: "mirror_mode",
                option: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MirrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
