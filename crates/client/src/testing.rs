// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Fixtures and a stub server for tests.

use std::time::Duration;

use countdown_core::{
    album::{Album, AlbumId, Rank, RankValue},
    user::{User, UserId},
};
use url::Url;
use warp::{Filter as _, Reply, filters::BoxedFilter};

use crate::{ClientEnvironment as _, Environment, SessionStore, session::Credential};

pub(crate) const ACCESS_TOKEN: &str = "access-token";

pub(crate) fn album(id: u64, rank: RankValue) -> Album {
    Album {
        id: AlbumId::new(id),
        rank: Rank::new(rank),
        artist: format!("Artist {id}"),
        title: format!("Album {id}"),
        info: None,
        description: None,
    }
}

pub(crate) fn album_json(id: u64, rank: RankValue) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "rank": rank,
        "artist": format!("Artist {id}"),
        "album": format!("Album {id}"),
    })
}

/// Serve the given routes on an ephemeral port of the loopback interface.
///
/// Must be called from within a tokio runtime.
pub(crate) fn serve<T: Reply + 'static>(routes: BoxedFilter<(T,)>) -> Url {
    let routes = routes.with(warp::log("countdown::stub"));
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{addr}/").parse().unwrap()
}

pub(crate) fn environment(service_url: Url) -> Environment {
    Environment::new(service_url, Duration::from_secs(5), SessionStore::in_memory()).unwrap()
}

pub(crate) fn signed_in_environment(service_url: Url) -> Environment {
    let env = environment(service_url);
    env.session().sign_in(Credential {
        access_token: ACCESS_TOKEN.to_owned(),
        user: User {
            id: Some(UserId::new(1)),
            username: "alice".to_owned(),
            email: None,
        },
    });
    env
}

pub(crate) fn reply_json(status: warp::http::StatusCode, body: serde_json::Value) -> impl Reply {
    warp::reply::with_status(warp::reply::json(&body), status)
}
