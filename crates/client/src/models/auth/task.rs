// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Effect, Intent};
use crate::{
    ExecuteTask,
    navigation::Route,
    util::roundtrip::PendingToken,
    webapi::{
        ClientEnvironment,
        auth::{fetch_current_user, login, logout, signup},
    },
};

/// Sends the accepted request.
#[derive(Debug)]
pub struct Task {
    pub(super) token: PendingToken,
    pub(super) request: Intent,
}

impl<E: ClientEnvironment> ExecuteTask<E> for Task {
    type Effect = Effect;

    async fn execute(self, env: &E) -> Self::Effect {
        log::debug!("Executing task {self:?}");
        let Self { token, request } = self;
        let signing_in = matches!(request, Intent::Login { .. } | Intent::Signup { .. });
        let result = match request {
            Intent::Login { username, password } => {
                login(env, &username, password.as_str()).await.map(Some)
            }
            Intent::Signup {
                username,
                email,
                password,
            } => signup(env, &username, &email, password.as_str())
                .await
                .map(Some),
            Intent::Logout => {
                logout(env).await;
                Ok(None)
            }
            Intent::FetchCurrentUser => fetch_current_user(env).await.map(Some),
        };
        if signing_in && result.is_ok() {
            env.navigate(Route::HOME);
        }
        Effect::RequestFinished { token, result }
    }
}
