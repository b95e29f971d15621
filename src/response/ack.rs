// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command acknowledgement parsing.

use serde::Deserialize;

use crate::error::DeviceError;

/// Acknowledgement returned by every Pixoo command endpoint.
///
/// The device answers each command with `{"error_code": 0}` on success and
/// a non-zero code on failure. The API documents no richer error payload.
///
/// # Examples
///
/// ```
/// use pixoor_lib::response::AckResponse;
///
/// let ack: AckResponse = serde_json::from_str(r#"{"error_code": 0}"#).unwrap();
/// assert!(ack.is_ok());
/// ```
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AckResponse {
    /// The device's error code; zero means success.
    pub error_code: i64,
}

impl AckResponse {
    /// Returns true if the device accepted the command.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error_code == 0
    }

    /// Converts a non-zero error code into a [`DeviceError`].
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::CommandRejected` if the error code is non-zero.
    pub fn ensure_ok(&self) -> Result<(), DeviceError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(DeviceError::CommandRejected {
                code: self.error_code,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_success() {
        let ack: AckResponse = serde_json::from_str(r#"{"error_code": 0}"#).unwrap();
        assert!(ack.is_ok());
        assert!(ack.ensure_ok().is_ok());
    }

    #[test]
    fn parse_rejection() {
        let ack: AckResponse = serde_json::from_str(r#"{"error_code": 4}"#).unwrap();
        assert!(!ack.is_ok());
        let err = ack.ensure_ok().unwrap_err();
        assert_eq!(err, DeviceError::CommandRejected { code: 4 });
    }

    #[test]
    fn parse_ignores_extra_fields() {
        let ack: AckResponse =
            serde_json::from_str(r#"{"error_code": 0, "Brightness": 90}"#).unwrap();
        assert!(ack.is_ok());
    }
}
