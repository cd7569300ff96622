// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Accessors of the countdown web API.

use bytes::Bytes;
use countdown_core_json::MessageResponse;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    Error, Result,
    navigation::{Navigation, Route},
    session::SessionStore,
};

pub mod albums;
pub mod auth;
pub mod progress;
pub mod ratings;

pub trait ClientEnvironment: Send + Sync {
    fn client(&self) -> &Client;

    fn join_api_url(&self, query_suffix: &str) -> anyhow::Result<Url>;

    fn session(&self) -> &SessionStore;

    fn navigation(&self) -> &Navigation;

    /// Invoked whenever the server has rejected the credential.
    fn on_unauthorized(&self) {
        if self.session().invalidate() {
            log::warn!("Credential has been rejected");
        }
        self.navigation().force_login();
    }

    /// Navigate to a guarded route.
    fn navigate(&self, route: Route) -> Route {
        self.navigation()
            .navigate(route, self.session().is_authenticated())
    }
}

/// Attach the bearer token of the current session, if any.
pub fn authorize<E: ClientEnvironment>(env: &E, request: RequestBuilder) -> RequestBuilder {
    match env.session().access_token() {
        Some(access_token) => request.bearer_auth(access_token),
        None => request,
    }
}

fn error_message(status: StatusCode, body: &Bytes) -> MessageResponse {
    serde_json::from_slice::<MessageResponse>(body).unwrap_or_else(|_| {
        log::debug!("Unexpected {status} response body: {body:?}");
        Default::default()
    })
}

fn server_error(status: StatusCode, response: MessageResponse) -> Error {
    let message = response
        .message
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_owned());
    Error::Server { status, message }
}

/// Receive the body of a response to an authenticated request.
///
/// A 401 response invalidates the session of the environment.
pub async fn receive_response_body<E: ClientEnvironment>(
    env: &E,
    response: Response,
) -> Result<Bytes> {
    let response_status = response.status();
    let bytes = response.bytes().await?;
    if response_status.is_success() {
        return Ok(bytes);
    }
    if response_status == StatusCode::UNAUTHORIZED {
        log::warn!("Request unauthorized");
        env.on_unauthorized();
        return Err(Error::Unauthorized);
    }
    let response = error_message(response_status, &bytes);
    if response_status == StatusCode::NOT_FOUND && response.needs_onboarding() {
        return Err(Error::NotInitialized);
    }
    Err(server_error(response_status, response))
}

/// Receive the body of a login or signup response.
///
/// Client errors are reported as refused credentials.
pub async fn receive_auth_response_body(response: Response) -> Result<Bytes> {
    let response_status = response.status();
    let bytes = response.bytes().await?;
    if response_status.is_success() {
        return Ok(bytes);
    }
    let response = error_message(response_status, &bytes);
    if response_status.is_client_error() {
        let message = response
            .message
            .unwrap_or_else(|| "Invalid credentials".to_owned());
        return Err(Error::Auth { message });
    }
    Err(server_error(response_status, response))
}

pub fn deserialize_response_body<T: DeserializeOwned>(bytes: &Bytes) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|err| Error::MalformedResponse(err.into()))
}

#[cfg(test)]
mod tests;
