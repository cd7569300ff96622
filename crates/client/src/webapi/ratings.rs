// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::{
    album::AlbumId,
    rating::{NewRating, Rating, StarRating, Stars},
};
use countdown_core_json::rating::RatingsResponse;

use super::{ClientEnvironment, authorize, deserialize_response_body, receive_response_body};
use crate::{Error, InvalidInput, Result};

/// Submit a rating for an album.
///
/// Re-rating an album overwrites the previous rating on the server.
/// Out of range ratings are rejected without sending a request.
pub async fn submit_rating<E: ClientEnvironment>(
    env: &E,
    album_id: AlbumId,
    stars: Stars,
) -> Result<()> {
    let rating = StarRating::try_new(stars).map_err(|_| InvalidInput::Rating(stars))?;
    let new_rating = NewRating { album_id, rating };
    let request_url = env.join_api_url("ratings")?;
    let request = authorize(env, env.client().post(request_url))
        .json(&countdown_core_json::rating::NewRating::from(new_rating));
    let response = request.send().await?;
    receive_response_body(env, response).await?;
    log::info!("Rated album {album_id} with {rating} star(s)");
    Ok(())
}

/// Fetch all ratings in the order returned by the server.
pub async fn list_ratings<E: ClientEnvironment>(env: &E) -> Result<Vec<Rating>> {
    let request_url = env.join_api_url("ratings")?;
    let request = authorize(env, env.client().get(request_url));
    let response = request.send().await?;
    let response_body = receive_response_body(env, response).await?;
    let response = deserialize_response_body::<RatingsResponse>(&response_body)?;
    let ratings = Vec::<Rating>::try_from(response).map_err(Error::MalformedResponse)?;
    log::debug!("Fetched {} rating(s)", ratings.len());
    Ok(ratings)
}
