// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::rating::{NewRating, StarRating, Stars};

use super::{Effect, IntentHandled, Model, ViewState};
use crate::InvalidInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    FetchProgress,
    CompleteCurrent,
    SubmitRating { stars: Stars },
    SkipRating,
}

impl Intent {
    #[must_use]
    pub fn handle_on(self, model: &mut Model) -> IntentHandled {
        log::trace!("Applying intent {self:?} on {model:?}");
        if model.is_pending() {
            log::warn!("Discarding intent while already pending: {self:?}");
            return IntentHandled::Rejected(self);
        }
        match self {
            Self::FetchProgress => Effect::FetchProgressAccepted.apply_on(model).into(),
            Self::CompleteCurrent => {
                if matches!(model.view_state, ViewState::ShowingRatingPrompt { .. }) {
                    log::warn!("Discarding intent while rating prompt is shown: {self:?}");
                    return IntentHandled::Rejected(self);
                }
                match model.position().complete_current() {
                    Ok(expected) => {
                        Effect::CompleteCurrentAccepted { expected }.apply_on(model).into()
                    }
                    Err(err) => Effect::ErrorOccurred(err.into()).apply_on(model).into(),
                }
            }
            Self::SubmitRating { stars } => {
                let ViewState::ShowingRatingPrompt { completed_album } = &model.view_state else {
                    log::warn!("Discarding intent without rating prompt: {self:?}");
                    return IntentHandled::Rejected(self);
                };
                let Ok(rating) = StarRating::try_new(stars) else {
                    let err = InvalidInput::Rating(stars).into();
                    return Effect::ErrorOccurred(err).apply_on(model).into();
                };
                let new_rating = NewRating {
                    album_id: completed_album.id,
                    rating,
                };
                Effect::SubmitRatingAccepted { new_rating }.apply_on(model).into()
            }
            Self::SkipRating => {
                if !matches!(model.view_state, ViewState::ShowingRatingPrompt { .. }) {
                    log::warn!("Discarding intent without rating prompt: {self:?}");
                    return IntentHandled::Rejected(self);
                }
                Effect::RatingSkipped.apply_on(model).into()
            }
        }
    }
}
