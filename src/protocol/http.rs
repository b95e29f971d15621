// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for Pixoo devices.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

// ============================================================================
// HttpConfig - Configuration for a device connection
// ============================================================================

/// Configuration for a Pixoo device connection.
///
/// This is a simple configuration struct that holds connection parameters.
/// The local API is stateless - each command is an independent request - and
/// unauthenticated.
///
/// # Examples
///
/// ```
/// use pixoor_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.100");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.100")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    ///
    /// This is the hard bound on a settings refresh; expiry surfaces as a
    /// recoverable [`ProtocolError::Timeout`].
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the Pixoo device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let port_suffix = if self.port == Self::DEFAULT_PORT {
            String::new()
        } else {
            format!(":{}", self.port)
        };
        format!("http://{}{port_suffix}", self.host)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let timeout = self.timeout;
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            timeout,
        })
    }
}

// ============================================================================
// HttpClient - Internal HTTP client implementation
// ============================================================================

/// HTTP client for communicating with Pixoo devices.
///
/// Uses the device's local API endpoint `/post`, which accepts JSON command
/// bodies of the form `{"Command": "<name>", ...args}`.
///
/// # Examples
///
/// ```no_run
/// use pixoor_lib::protocol::{HttpClient, Protocol};
/// use pixoor_lib::command::SettingsCommand;
///
/// # async fn example() -> pixoor_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.100")?;
/// let response = client.send_command(&SettingsCommand).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the Pixoo device
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        let host = host.into();
        if host.starts_with("http://") || host.starts_with("https://") {
            // Accept a pre-built base URL as-is
            let client = Client::builder()
                .timeout(HttpConfig::DEFAULT_TIMEOUT)
                .build()
                .map_err(ProtocolError::Http)?;
            return Ok(Self {
                base_url: host,
                client,
                timeout: HttpConfig::DEFAULT_TIMEOUT,
            });
        }
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the URL for the command endpoint.
    fn post_url(&self) -> String {
        format!("{}/post", self.base_url)
    }
}

impl Protocol for HttpClient {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        self.send_raw(&command.to_request_body()).await
    }

    async fn send_raw(&self, body: &Value) -> Result<CommandResponse, ProtocolError> {
        let url = self.post_url();

        tracing::debug!(url = %url, body = %body, "Sending command");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProtocolError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
                } else {
                    ProtocolError::Http(e)
                }
            })?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received response");

        Ok(CommandResponse::new(body))
    }
}
