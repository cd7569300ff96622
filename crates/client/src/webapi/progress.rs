// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::{
    album::Rank,
    progress::{Completion, Progress},
};
use countdown_core_json::progress::{
    CompleteResponse, InitializeRequest, InitializeResponse, ProgressResponse,
};

use super::{ClientEnvironment, authorize, deserialize_response_body, receive_response_body};
use crate::{Error, InvalidInput, Result};

/// Fetch the current progress.
///
/// Fails with [`Error::NotInitialized`] if the user still needs
/// to choose a start rank.
pub async fn get_progress<E: ClientEnvironment>(env: &E) -> Result<Progress> {
    let request_url = env.join_api_url("progress")?;
    let request = authorize(env, env.client().get(request_url));
    let response = request.send().await?;
    let response_body = receive_response_body(env, response).await?;
    let response = deserialize_response_body::<ProgressResponse>(&response_body)?;
    Progress::try_from(response).map_err(Error::MalformedResponse)
}

/// Start the countdown at the given rank.
///
/// Out of range ranks are rejected without sending a request.
pub async fn initialize<E: ClientEnvironment>(env: &E, start_rank: Rank) -> Result<Progress> {
    if !start_rank.is_valid() {
        return Err(InvalidInput::Rank(start_rank).into());
    }
    let request_url = env.join_api_url("progress/initialize")?;
    let request = authorize(env, env.client().post(request_url))
        .json(&InitializeRequest::from(start_rank));
    let response = request.send().await?;
    let response_body = receive_response_body(env, response).await?;
    let response = deserialize_response_body::<InitializeResponse>(&response_body)?;
    let progress = Progress::try_from(response).map_err(Error::MalformedResponse)?;
    log::info!("Started countdown at rank {start_rank}");
    Ok(progress)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteOutcome {
    pub message: Option<String>,
    pub completion: Completion,
}

/// Complete the current album.
pub async fn complete_current<E: ClientEnvironment>(env: &E) -> Result<CompleteOutcome> {
    let request_url = env.join_api_url("progress/complete")?;
    let request = authorize(env, env.client().post(request_url));
    let response = request.send().await?;
    let response_body = receive_response_body(env, response).await?;
    let response = deserialize_response_body::<CompleteResponse>(&response_body)?;
    let message = response.message.clone();
    let completion = Completion::try_from(response).map_err(Error::MalformedResponse)?;
    Ok(CompleteOutcome {
        message,
        completion,
    })
}
