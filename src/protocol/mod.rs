// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementation for communicating with Pixoo devices.
//!
//! Pixoo devices expose a single local HTTP endpoint (`/post`) that accepts
//! JSON command bodies. [`HttpClient`] implements that transport; the
//! [`Protocol`] trait keeps the coordinator independent of it so tests can
//! substitute a mock transport.

mod http;

pub use http::{HttpClient, HttpConfig};

use serde_json::Value;

use crate::command::Command;
use crate::error::ProtocolError;

/// Response from a Pixoo command.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    /// The raw JSON response body.
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::error::ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for protocol implementations that can send commands to Pixoo devices.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a command to the device and returns the response.
    ///
    /// # Arguments
    ///
    /// * `command` - The command to send
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command fails to send or receive.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError>;

    /// Sends a raw JSON request body to the device.
    ///
    /// # Arguments
    ///
    /// * `body` - The raw JSON body
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    async fn send_raw(&self, body: &Value) -> Result<CommandResponse, ProtocolError>;
}
