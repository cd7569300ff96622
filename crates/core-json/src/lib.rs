// SPDX-FileCopyrightText: Copyright (C) 2018-2023 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! JSON request and response bodies of the countdown web API.
//!
//! Responses are validated when converted into their
//! `countdown-core` counterparts.

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};
}

pub mod album;
pub mod auth;
pub mod progress;
pub mod rating;

/// Generic response with an optional, human-readable message.
///
/// Also used for error responses.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct MessageResponse {
    /// Token validation failures are reported as `msg`.
    #[serde(default, alias = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Only present when the user has not chosen a start rank yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_onboarding: Option<bool>,
}

impl MessageResponse {
    #[must_use]
    pub fn needs_onboarding(&self) -> bool {
        self.needs_onboarding.unwrap_or(false)
    }
}
