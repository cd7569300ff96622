// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Signing in and out.

use std::fmt;

use countdown_core::user::User;
use infect::ModelChanged;

use crate::{Error, util::remote::RemoteData};

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub type IntentHandled = infect::IntentHandled<Intent, Effect, Task, ModelChanged>;
pub type EffectApplied = infect::EffectApplied<Effect, Task, ModelChanged>;

/// A password that never shows up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        let Self(password) = self;
        password
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Default)]
pub struct Model {
    /// The signed in user or `None` after signing out.
    pub(super) user: RemoteData<Option<User>>,
    pub(super) last_error: Option<Error>,
}

impl Model {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.user.is_pending()
    }

    /// The user according to the most recent response.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.last_value().and_then(Option::as_ref)
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }
}

impl infect::Model for Model {
    type Intent = Intent;
    type IntentRejected = Intent;
    type Effect = Effect;
    type Task = Task;
    type RenderHint = ModelChanged;

    fn handle_intent(&mut self, intent: Self::Intent) -> IntentHandled {
        intent.handle_on(self)
    }

    fn apply_effect(&mut self, effect: Self::Effect) -> EffectApplied {
        effect.apply_on(self)
    }
}

#[cfg(test)]
mod tests;
