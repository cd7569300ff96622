// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::rating::{RatingFilter, SortField};

use super::{EffectApplied, Model, Snapshot, Task};
use crate::{Result, util::roundtrip::PendingToken};

#[derive(Debug)]
pub enum Effect {
    FetchAllAccepted,
    FetchAllFinished {
        token: PendingToken,
        result: Result<Snapshot>,
    },
    SortChanged(SortField),
    FilterChanged(RatingFilter),
}

impl Effect {
    pub fn apply_on(self, model: &mut Model) -> EffectApplied {
        log::trace!("Applying effect {self:?} on {model:?}");
        match self {
            Self::FetchAllAccepted => {
                let token = model.snapshot.start_pending();
                model.last_error = None;
                EffectApplied::maybe_changed_task(Task::FetchAll { token })
            }
            Self::FetchAllFinished { token, result } => match result {
                Ok(snapshot) => {
                    if model
                        .snapshot
                        .finish_pending_with_value(token, snapshot)
                        .is_err()
                    {
                        return EffectApplied::unchanged();
                    }
                    EffectApplied::maybe_changed()
                }
                Err(err) => {
                    if !model.snapshot.finish_pending(token) {
                        return EffectApplied::unchanged();
                    }
                    model.last_error = Some(err);
                    EffectApplied::maybe_changed()
                }
            },
            Self::SortChanged(sort) => {
                model.sort = sort;
                EffectApplied::maybe_changed()
            }
            Self::FilterChanged(filter) => {
                model.filter = filter;
                EffectApplied::maybe_changed()
            }
        }
    }
}
