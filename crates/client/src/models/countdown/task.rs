// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::{progress::Position, rating::NewRating};

use super::Effect;
use crate::{
    ExecuteTask,
    navigation::Route,
    util::roundtrip::PendingToken,
    webapi::{
        ClientEnvironment,
        progress::{complete_current, get_progress},
        ratings::submit_rating,
    },
};

#[derive(Debug)]
pub enum Task {
    FetchProgress {
        token: PendingToken,
    },
    CompleteCurrent {
        token: PendingToken,
        expected: Position,
    },
    SubmitRating {
        token: PendingToken,
        new_rating: NewRating,
    },
}

impl<E: ClientEnvironment> ExecuteTask<E> for Task {
    type Effect = Effect;

    async fn execute(self, env: &E) -> Self::Effect {
        log::debug!("Executing task {self:?}");
        match self {
            Self::FetchProgress { token } => {
                let result = get_progress(env).await;
                if result.as_ref().is_err_and(crate::Error::is_not_initialized) {
                    env.navigate(Route::Onboarding);
                }
                Effect::FetchProgressFinished { token, result }
            }
            Self::CompleteCurrent { token, expected } => {
                let result = complete_current(env).await;
                Effect::CompleteCurrentFinished {
                    token,
                    expected,
                    result,
                }
            }
            Self::SubmitRating { token, new_rating } => {
                let NewRating { album_id, rating } = new_rating;
                let result = submit_rating(env, album_id, rating.stars()).await;
                Effect::SubmitRatingFinished { token, result }
            }
        }
    }
}
