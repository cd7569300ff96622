// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::user::User;
use countdown_core_json::auth::{AuthResponse, LoginRequest, SignupRequest};

use super::{
    ClientEnvironment, authorize, deserialize_response_body, receive_auth_response_body,
    receive_response_body,
};
use crate::{Error, InvalidInput, Result, session::Credential};

fn require_non_blank(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InvalidInput::Missing(name).into());
    }
    Ok(())
}

fn sign_in<E: ClientEnvironment>(
    env: &E,
    response: AuthResponse,
    submitted_username: &str,
) -> Result<Option<User>> {
    let Some(authenticated) = response
        .try_into_authenticated(submitted_username)
        .map_err(Error::MalformedResponse)?
    else {
        return Ok(None);
    };
    let user = authenticated.user.clone();
    env.session().sign_in(Credential {
        access_token: authenticated.access_token,
        user: authenticated.user,
    });
    Ok(Some(user))
}

pub async fn login<E: ClientEnvironment>(env: &E, username: &str, password: &str) -> Result<User> {
    require_non_blank(username, "username")?;
    require_non_blank(password, "password")?;
    let request_url = env.join_api_url("auth/login")?;
    let request = env
        .client()
        .post(request_url)
        .json(&LoginRequest { username, password });
    let response = request.send().await?;
    let response_body = receive_auth_response_body(response).await?;
    let response = deserialize_response_body::<AuthResponse>(&response_body)?;
    sign_in(env, response, username)?.ok_or_else(|| {
        Error::MalformedResponse(anyhow::anyhow!("missing access token after login"))
    })
}

/// Create a new account and sign in.
///
/// Logs in with the same credentials if the server only
/// acknowledges the new account without returning a token.
pub async fn signup<E: ClientEnvironment>(
    env: &E,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User> {
    require_non_blank(username, "username")?;
    require_non_blank(email, "email")?;
    require_non_blank(password, "password")?;
    let request_url = env.join_api_url("auth/signup")?;
    let request = env.client().post(request_url).json(&SignupRequest {
        username,
        email,
        password,
    });
    let response = request.send().await?;
    let response_body = receive_auth_response_body(response).await?;
    let response = deserialize_response_body::<AuthResponse>(&response_body)?;
    if let Some(user) = sign_in(env, response, username)? {
        return Ok(user);
    }
    log::debug!("Logging in after signing up");
    login(env, username, password).await
}

/// Sign out of the current session.
///
/// The session is always cleared locally, even if the server
/// could not be notified.
pub async fn logout<E: ClientEnvironment>(env: &E) {
    if env.session().is_authenticated() {
        if let Err(err) = notify_logout(env).await {
            log::warn!("Failed to notify server about logout: {err}");
        }
    }
    env.session().invalidate();
    env.navigation().force_login();
}

async fn notify_logout<E: ClientEnvironment>(env: &E) -> Result<()> {
    let request_url = env.join_api_url("auth/logout")?;
    let request = authorize(env, env.client().post(request_url));
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        log::debug!("Logout responded with {status}");
    }
    Ok(())
}

/// Validate the current session and refresh the profile.
pub async fn fetch_current_user<E: ClientEnvironment>(env: &E) -> Result<User> {
    let request_url = env.join_api_url("auth/me")?;
    let request = authorize(env, env.client().get(request_url));
    let response = request.send().await?;
    let response_body = receive_response_body(env, response).await?;
    let user = deserialize_response_body::<countdown_core_json::auth::User>(&response_body)?;
    let user = User::try_from(user).map_err(Error::MalformedResponse)?;
    env.session().update_user(user.clone());
    Ok(user)
}
