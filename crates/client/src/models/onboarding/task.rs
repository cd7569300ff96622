// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::album::Rank;

use super::Effect;
use crate::{
    ExecuteTask,
    navigation::Route,
    util::roundtrip::PendingToken,
    webapi::{ClientEnvironment, albums::list_albums, progress::initialize},
};

#[derive(Debug)]
pub enum Task {
    FetchAlbums {
        token: PendingToken,
    },
    Start {
        token: PendingToken,
        start_rank: Rank,
    },
}

impl<E: ClientEnvironment> ExecuteTask<E> for Task {
    type Effect = Effect;

    async fn execute(self, env: &E) -> Self::Effect {
        log::debug!("Executing task {self:?}");
        match self {
            Self::FetchAlbums { token } => {
                let result = list_albums(env).await;
                Effect::FetchAlbumsFinished { token, result }
            }
            Self::Start { token, start_rank } => {
                let result = initialize(env, start_rank).await;
                if result.is_ok() {
                    env.navigate(Route::Countdown);
                }
                Effect::StartFinished { token, result }
            }
        }
    }
}
