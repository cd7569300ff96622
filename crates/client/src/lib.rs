// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Client of the 500 albums countdown web API.
//!
//! Each screen is an [`infect::Model`] that handles intents and applies
//! effects. Requests are executed as tasks on the tokio runtime and their
//! results are fed back into the message loop as effects.

pub mod environment;
pub use self::environment::{Environment, TaskSpawner, on_session_changed};

pub mod error;
pub use self::error::{Error, InvalidInput, Result};

pub mod models;

pub mod navigation;
pub use self::navigation::{Navigation, Route};

pub mod observable;

pub mod session;
pub use self::session::SessionStore;

pub mod task;
pub use self::task::ExecuteTask;

pub mod util;

pub mod webapi;
pub use self::webapi::ClientEnvironment;

#[cfg(test)]
pub(crate) mod testing;
