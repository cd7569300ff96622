// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::user::User;

use super::{EffectApplied, Intent, Model, Task};
use crate::{Error, Result, util::roundtrip::PendingToken};

#[derive(Debug)]
pub enum Effect {
    RequestAccepted(Intent),
    RequestFinished {
        token: PendingToken,
        result: Result<Option<User>>,
    },
    ErrorOccurred(Error),
}

impl Effect {
    pub fn apply_on(self, model: &mut Model) -> EffectApplied {
        log::trace!("Applying effect {self:?} on {model:?}");
        match self {
            Self::RequestAccepted(request) => {
                let token = model.user.start_pending();
                model.last_error = None;
                EffectApplied::maybe_changed_task(Task { token, request })
            }
            Self::RequestFinished { token, result } => match result {
                Ok(user) => {
                    if model
                        .user
                        .finish_pending_with_value(token, user)
                        .is_err()
                    {
                        return EffectApplied::unchanged();
                    }
                    EffectApplied::maybe_changed()
                }
                Err(err) => {
                    if !model.user.finish_pending(token) {
                        return EffectApplied::unchanged();
                    }
                    if err.is_unauthorized() {
                        model.user.reset();
                    }
                    model.last_error = Some(err);
                    EffectApplied::maybe_changed()
                }
            },
            Self::ErrorOccurred(err) => {
                model.last_error = Some(err);
                EffectApplied::maybe_changed()
            }
        }
    }
}
