// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Effect, IntentHandled, Model, Password};
use crate::InvalidInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Login {
        username: String,
        password: Password,
    },
    Signup {
        username: String,
        email: String,
        password: Password,
    },
    Logout,
    FetchCurrentUser,
}

fn first_missing(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields
        .iter()
        .find_map(|(name, value)| value.trim().is_empty().then_some(*name))
}

impl Intent {
    fn missing_input(&self) -> Option<&'static str> {
        match self {
            Self::Login { username, password } => first_missing(&[
                ("username", username),
                ("password", password.as_str()),
            ]),
            Self::Signup {
                username,
                email,
                password,
            } => first_missing(&[
                ("username", username),
                ("email", email),
                ("password", password.as_str()),
            ]),
            Self::Logout | Self::FetchCurrentUser => None,
        }
    }

    #[must_use]
    pub fn handle_on(self, model: &mut Model) -> IntentHandled {
        log::trace!("Applying intent {self:?} on {model:?}");
        if model.is_pending() {
            log::warn!("Discarding intent while already pending: {self:?}");
            return IntentHandled::Rejected(self);
        }
        if let Some(missing) = self.missing_input() {
            let err = InvalidInput::Missing(missing).into();
            return Effect::ErrorOccurred(err).apply_on(model).into();
        }
        Effect::RequestAccepted(self).apply_on(model).into()
    }
}
