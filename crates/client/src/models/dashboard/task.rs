// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::progress::Position;

use super::{Effect, Snapshot};
use crate::{
    Error, ExecuteTask, Result,
    util::roundtrip::PendingToken,
    webapi::{ClientEnvironment, progress::get_progress, ratings::list_ratings},
};

#[derive(Debug)]
pub enum Task {
    FetchAll { token: PendingToken },
}

async fn fetch_snapshot<E: ClientEnvironment>(env: &E) -> Result<Snapshot> {
    let (progress, ratings) = tokio::join!(get_progress(env), list_ratings(env));
    let position = match progress {
        Ok(progress) => progress.position(),
        // Nothing has been completed yet.
        Err(Error::NotInitialized) => Position::Uninitialized,
        Err(err) => return Err(err),
    };
    Ok(Snapshot {
        position,
        ratings: ratings?,
    })
}

impl<E: ClientEnvironment> ExecuteTask<E> for Task {
    type Effect = Effect;

    async fn execute(self, env: &E) -> Self::Effect {
        log::debug!("Executing task {self:?}");
        match self {
            Self::FetchAll { token } => {
                let result = fetch_snapshot(env).await;
                Effect::FetchAllFinished { token, result }
            }
        }
    }
}
