// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::album::Album;
use countdown_core_json::album::AlbumsResponse;

use super::{ClientEnvironment, authorize, deserialize_response_body, receive_response_body};
use crate::{Error, Result};

/// Fetch the whole catalog in the order returned by the server.
pub async fn list_albums<E: ClientEnvironment>(env: &E) -> Result<Vec<Album>> {
    let request_url = env.join_api_url("albums")?;
    let request = authorize(env, env.client().get(request_url));
    let response = request.send().await?;
    let response_body = receive_response_body(env, response).await?;
    let response = deserialize_response_body::<AlbumsResponse>(&response_body)?;
    let albums = Vec::<Album>::try_from(response).map_err(Error::MalformedResponse)?;
    log::debug!("Fetched {} album(s)", albums.len());
    Ok(albums)
}
