// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Pixoo JSON responses.
//!
//! This module provides structures for deserializing JSON responses from
//! Pixoo devices. Every endpoint answers with at least an `error_code`
//! field ([`AckResponse`]); the settings query additionally returns the
//! full flat settings set ([`SettingsResponse`]).

mod ack;
mod settings;

pub use ack::AckResponse;
pub use settings::SettingsResponse;
