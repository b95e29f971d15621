// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `PixooR` library.
//!
//! This module provides a comprehensive error hierarchy for handling failures
//! across the library: value validation, protocol communication, JSON parsing,
//! device acknowledgements, and cloud discovery.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with Divoom Pixoo devices.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during device operations.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// Error occurred during cloud discovery.
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// The initial refresh failed and setup should be retried later.
    #[error("device is not ready: {0}")]
    NotReady(#[source] Box<Error>),
}

impl Error {
    /// Wraps an error as a setup-time "not ready" failure.
    ///
    /// Used by the coordinator's first refresh so callers can distinguish
    /// "retry setup later" from a recoverable mid-poll failure.
    #[must_use]
    pub fn not_ready(source: Error) -> Self {
        Self::NotReady(Box::new(source))
    }

    /// Returns true if this error is a setup-time "not ready" failure.
    #[must_use]
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady(_))
    }
}

/// Errors related to value validation and constraints.
///
/// These errors occur when a command is given a value outside its fixed
/// table before any network request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An effect name is not present in the effect table.
    #[error("unknown effect name: {0}")]
    UnknownEffect(String),

    /// An option string is not present in a selector's fixed option table.
    #[error("unknown option for {field}: {option}")]
    UnknownOption {
        /// The selector the option was offered to.
        field: &'static str,
        /// The rejected option string.
        option: String,
    },
}

/// Errors related to HTTP protocol communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing Pixoo responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// The device reported a clock id that is not in the effect table.
    ///
    /// Surfaced as a refresh failure so the snapshot never carries an
    /// effect name that cannot be resolved back to an id.
    #[error("device reported unknown clock id {0}")]
    UnknownEffectId(u32),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to device acknowledgements.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Command was acknowledged with a non-zero error code.
    #[error("command rejected by device with error code {code}")]
    CommandRejected {
        /// The `error_code` field of the acknowledgement.
        code: i64,
    },
}

/// Errors related to cloud device discovery.
///
/// Discovery failures abort setup and are not retried. An empty device
/// list is not an error and is returned as an empty `Vec` instead.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// HTTP request to the discovery endpoint failed.
    #[error("discovery request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The discovery endpoint answered with a non-zero return code.
    #[error("discovery rejected with return code {code}")]
    Rejected {
        /// The `ReturnCode` field of the discovery response.
        code: i64,
    },

    /// The discovery response could not be interpreted.
    #[error("invalid discovery response: {0}")]
    InvalidResponse(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
