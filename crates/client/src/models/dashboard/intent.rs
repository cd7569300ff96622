// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::rating::{RatingFilter, SortField};

use super::{Effect, EffectApplied, IntentHandled, Model};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    FetchAll,
    SortBy(SortField),
    FilterBy(RatingFilter),
}

impl Intent {
    #[must_use]
    pub fn handle_on(self, model: &mut Model) -> IntentHandled {
        log::trace!("Applying intent {self:?} on {model:?}");
        match self {
            Self::FetchAll => {
                if model.is_pending() {
                    log::warn!("Discarding intent while already pending: {self:?}");
                    return IntentHandled::Rejected(self);
                }
                Effect::FetchAllAccepted.apply_on(model).into()
            }
            Self::SortBy(sort) => {
                if model.sort == sort {
                    return IntentHandled::Accepted(EffectApplied::unchanged());
                }
                Effect::SortChanged(sort).apply_on(model).into()
            }
            Self::FilterBy(filter) => {
                if model.filter == filter {
                    return IntentHandled::Accepted(EffectApplied::unchanged());
                }
                Effect::FilterChanged(filter).apply_on(model).into()
            }
        }
    }
}
