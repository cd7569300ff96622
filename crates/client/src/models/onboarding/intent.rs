// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::album::Rank;

use super::{Effect, EffectApplied, IntentHandled, Model};
use crate::InvalidInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    FetchAlbums,
    UpdateSearchTerm { search_term: String },
    SelectRank { rank: Rank },

    /// Start with the album at the first rank of the countdown.
    StartFromBeginning,

    /// Start with the selected album.
    StartFromSelected,
}

impl Intent {
    #[must_use]
    pub fn handle_on(self, model: &mut Model) -> IntentHandled {
        log::trace!("Applying intent {self:?} on {model:?}");
        match self {
            Self::FetchAlbums => {
                if model.albums.is_pending() {
                    log::warn!("Discarding intent while already pending: {self:?}");
                    return IntentHandled::Rejected(self);
                }
                Effect::FetchAlbumsAccepted.apply_on(model).into()
            }
            Self::UpdateSearchTerm { search_term } => {
                if model.search_term == search_term {
                    return IntentHandled::Accepted(EffectApplied::unchanged());
                }
                Effect::SearchTermUpdated { search_term }.apply_on(model).into()
            }
            Self::SelectRank { rank } => {
                if !rank.is_valid() {
                    let err = InvalidInput::Rank(rank).into();
                    return Effect::ErrorOccurred(err).apply_on(model).into();
                }
                Effect::RankSelected { rank }.apply_on(model).into()
            }
            Self::StartFromBeginning | Self::StartFromSelected => {
                if model.started.is_pending() {
                    log::warn!("Discarding intent while already pending: {self:?}");
                    return IntentHandled::Rejected(self);
                }
                let start_rank = if matches!(self, Self::StartFromBeginning) {
                    Rank::FIRST
                } else {
                    model.selected_rank
                };
                if !start_rank.is_valid() {
                    let err = InvalidInput::Rank(start_rank).into();
                    return Effect::ErrorOccurred(err).apply_on(model).into();
                }
                Effect::StartAccepted { start_rank }.apply_on(model).into()
            }
        }
    }
}
