// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use countdown_core::{
    album::{AlbumId, Rank},
    progress::{Completion, Progress},
};
use serde_json::json;
use warp::{Filter as _, http::StatusCode};

use super::{
    albums::list_albums,
    auth::{fetch_current_user, login, logout, signup},
    progress::{complete_current, get_progress, initialize},
    ratings::{list_ratings, submit_rating},
    *,
};
use crate::{
    InvalidInput,
    testing::{
        ACCESS_TOKEN, album, album_json, environment, reply_json, serve, signed_in_environment,
    },
};

#[tokio::test]
async fn authenticated_requests_carry_bearer_token() {
    let routes = warp::get()
        .and(warp::path!("api" / "progress"))
        .and(warp::header::optional::<String>("authorization"))
        .map(|authorization: Option<String>| {
            if authorization == Some(format!("Bearer {ACCESS_TOKEN}")) {
                reply_json(StatusCode::OK, json!({ "current_album": album_json(7, 42) }))
            } else {
                reply_json(
                    StatusCode::UNAUTHORIZED,
                    json!({ "msg": "Missing Authorization Header" }),
                )
            }
        })
        .boxed();
    let env = signed_in_environment(serve(routes));
    let progress = get_progress(&env).await.unwrap();
    assert_eq!(
        Progress::InProgress {
            current_album: album(7, 42),
        },
        progress
    );
    assert!(env.session().is_authenticated());
}

#[tokio::test]
async fn unauthorized_response_invalidates_session_and_forces_login() {
    let routes = warp::path!("api" / "ratings")
        .map(|| reply_json(StatusCode::UNAUTHORIZED, json!({ "msg": "Token has expired" })))
        .boxed();
    let env = signed_in_environment(serve(routes));
    assert_eq!(Route::Dashboard, env.navigate(Route::Dashboard));

    let err = list_ratings(&env).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!env.session().is_authenticated());
    assert!(env.session().access_token().is_none());
    assert_eq!(Route::Login, env.navigation().current());

    // Invalidating twice is harmless
    let err = list_ratings(&env).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(Route::Login, env.navigation().current());
}

#[tokio::test]
async fn missing_progress_needs_onboarding() {
    let routes = warp::path!("api" / "progress")
        .map(|| {
            reply_json(
                StatusCode::NOT_FOUND,
                json!({
                    "message": "Progress not initialized",
                    "needs_onboarding": true,
                }),
            )
        })
        .boxed();
    let env = signed_in_environment(serve(routes));
    let err = get_progress(&env).await.unwrap_err();
    assert!(err.is_not_initialized());
    // Not a reason to sign out
    assert!(env.session().is_authenticated());
}

#[tokio::test]
async fn server_errors_carry_message() {
    let routes = warp::path!("api" / "progress" / "initialize")
        .map(|| {
            reply_json(
                StatusCode::BAD_REQUEST,
                json!({ "message": "Progress already initialized" }),
            )
        })
        .or(warp::path!("api" / "progress").map(|| {
            reply_json(StatusCode::NOT_FOUND, json!({ "message": "Not found" }))
        }))
        .unify()
        .boxed();
    let env = signed_in_environment(serve(routes));
    let err = initialize(&env, Rank::FIRST).await.unwrap_err();
    assert!(matches!(
        &err,
        Error::Server { status, message }
            if *status == StatusCode::BAD_REQUEST && message == "Progress already initialized"
    ));
    // Only a 404 with the onboarding flag is special
    let err = get_progress(&env).await.unwrap_err();
    assert!(matches!(err, Error::Server { status, .. } if status == StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn malformed_responses_are_rejected() {
    let routes = warp::path!("api" / "albums")
        .map(|| reply_json(StatusCode::OK, json!({ "albums": "none" })))
        .or(warp::path!("api" / "progress").map(|| {
            // An album rank out of range
            reply_json(StatusCode::OK, json!({ "current_album": album_json(1, 501) }))
        }))
        .unify()
        .boxed();
    let env = signed_in_environment(serve(routes));
    assert!(matches!(
        list_albums(&env).await,
        Err(Error::MalformedResponse(_))
    ));
    assert!(matches!(
        get_progress(&env).await,
        Err(Error::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn invalid_input_is_rejected_without_sending_requests() {
    let hits = Arc::new(AtomicUsize::new(0));
    let routes = {
        let hits = Arc::clone(&hits);
        warp::any()
            .map(move || {
                hits.fetch_add(1, Ordering::SeqCst);
                reply_json(StatusCode::OK, json!({}))
            })
            .boxed()
    };
    let env = signed_in_environment(serve(routes));
    for value in [0, 501] {
        assert!(matches!(
            initialize(&env, Rank::new(value)).await,
            Err(Error::Validation(InvalidInput::Rank(rank))) if rank.value() == value
        ));
    }
    for stars in [0, 6] {
        assert!(matches!(
            submit_rating(&env, AlbumId::new(1), stars).await,
            Err(Error::Validation(InvalidInput::Rating(s))) if s == stars
        ));
    }
    assert!(matches!(
        login(&env, "alice", "").await,
        Err(Error::Validation(InvalidInput::Missing("password")))
    ));
    assert_eq!(0, hits.load(Ordering::SeqCst));
}

#[tokio::test]
async fn submit_and_list_ratings() {
    let routes = warp::post()
        .and(warp::path!("api" / "ratings"))
        .and(warp::body::json())
        .map(|body: serde_json::Value| {
            assert_eq!(json!({ "album_id": 3, "rating": 4 }), body);
            reply_json(
                StatusCode::CREATED,
                json!({ "message": "Rating submitted successfully" }),
            )
        })
        .or(warp::get().and(warp::path!("api" / "ratings")).map(|| {
            reply_json(
                StatusCode::OK,
                json!({
                    "ratings": [{
                        "id": 1,
                        "album_id": 3,
                        "rating": 4,
                        "created_at": "2024-03-01T12:30:00",
                        "album": album_json(3, 498),
                    }],
                }),
            )
        }))
        .unify()
        .boxed();
    let env = signed_in_environment(serve(routes));
    submit_rating(&env, AlbumId::new(3), 4).await.unwrap();
    let ratings = list_ratings(&env).await.unwrap();
    assert_eq!(1, ratings.len());
    assert_eq!(4, ratings[0].rating.stars());
    assert_eq!(Rank::new(498), ratings[0].album.rank);
}

#[tokio::test]
async fn complete_current_until_finished() {
    let remaining = Arc::new(AtomicUsize::new(2));
    let routes = {
        let remaining = Arc::clone(&remaining);
        warp::post()
            .and(warp::path!("api" / "progress" / "complete"))
            .map(move || {
                if remaining.fetch_sub(1, Ordering::SeqCst) > 1 {
                    reply_json(
                        StatusCode::OK,
                        json!({
                            "message": "Album completed",
                            "next_album": album_json(1, 1),
                        }),
                    )
                } else {
                    reply_json(
                        StatusCode::OK,
                        json!({ "message": "Congratulations! You've completed all 500 albums!" }),
                    )
                }
            })
            .boxed()
    };
    let env = signed_in_environment(serve(routes));
    let outcome = complete_current(&env).await.unwrap();
    assert_eq!(Some("Album completed"), outcome.message.as_deref());
    assert_eq!(
        Completion::Advanced {
            next_album: album(1, 1),
        },
        outcome.completion
    );
    let outcome = complete_current(&env).await.unwrap();
    assert_eq!(Completion::Finished, outcome.completion);
}

fn auth_routes() -> warp::filters::BoxedFilter<(impl warp::Reply,)> {
    let signup = warp::post()
        .and(warp::path!("api" / "auth" / "signup"))
        .map(|| {
            reply_json(
                StatusCode::CREATED,
                json!({ "message": "User created successfully" }),
            )
        });
    let login = warp::post()
        .and(warp::path!("api" / "auth" / "login"))
        .and(warp::body::json())
        .map(|body: serde_json::Value| {
            if body["username"] == "alice" && body["password"] == "secret" {
                reply_json(
                    StatusCode::OK,
                    json!({
                        "access_token": ACCESS_TOKEN,
                        "user_id": 1,
                        "username": "alice",
                    }),
                )
            } else {
                reply_json(
                    StatusCode::UNAUTHORIZED,
                    json!({ "message": "Invalid credentials" }),
                )
            }
        });
    let me = warp::get()
        .and(warp::path!("api" / "auth" / "me"))
        .map(|| {
            reply_json(
                StatusCode::OK,
                json!({
                    "id": 1,
                    "username": "alice",
                    "email": "alice@example.com",
                }),
            )
        });
    let logout = warp::post()
        .and(warp::path!("api" / "auth" / "logout"))
        .map(|| reply_json(StatusCode::INTERNAL_SERVER_ERROR, json!({})));
    signup.or(login).unify().or(me).unify().or(logout).unify().boxed()
}

#[tokio::test]
async fn signup_signs_in_with_follow_up_login() {
    let env = environment(serve(auth_routes()));
    let user = signup(&env, "alice", "alice@example.com", "secret")
        .await
        .unwrap();
    assert_eq!("alice", user.username);
    assert!(env.session().is_authenticated());
    assert_eq!(Some(ACCESS_TOKEN.to_owned()), env.session().access_token());
}

#[tokio::test]
async fn refused_login_keeps_session_signed_out() {
    let env = environment(serve(auth_routes()));
    let err = login(&env, "alice", "wrong").await.unwrap_err();
    assert!(matches!(&err, Error::Auth { message } if message == "Invalid credentials"));
    assert!(!env.session().is_authenticated());
    assert_eq!(Route::Login, env.navigation().current());
}

#[tokio::test]
async fn refresh_profile_and_logout() {
    let env = environment(serve(auth_routes()));
    login(&env, "alice", "secret").await.unwrap();
    let user = fetch_current_user(&env).await.unwrap();
    assert_eq!(Some("alice@example.com"), user.email.as_deref());
    assert_eq!(Some(user), env.session().current_user());

    assert_eq!(Route::Countdown, env.navigate(Route::Countdown));
    // The server fails but the session is cleared anyway
    logout(&env).await;
    assert!(!env.session().is_authenticated());
    assert_eq!(Route::Login, env.navigation().current());
}
