// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Track your way through a countdown of the 500 greatest albums.
//!
//! Re-exports the domain model together with the optional
//! JSON representation and web API client.

pub use countdown_core as core;

#[cfg(feature = "json")]
pub use countdown_core_json as core_json;

#[cfg(feature = "client")]
pub use countdown_client as client;
