// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::IsValid as _;

use crate::prelude::*;

mod _core {
    pub(super) use countdown_core::user::*;
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Response after login or signup.
///
/// A signup might only be acknowledged without returning a token.
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Access token and profile of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    pub access_token: String,
    pub user: _core::User,
}

impl AuthResponse {
    /// Extract the credential, if any.
    ///
    /// The `username` that has been submitted is used as a fallback
    /// if the response omits it.
    pub fn try_into_authenticated(
        self,
        submitted_username: &str,
    ) -> anyhow::Result<Option<Authenticated>> {
        let Self {
            message: _,
            access_token,
            user_id,
            username,
            email,
        } = self;
        let Some(access_token) = access_token else {
            return Ok(None);
        };
        if access_token.trim().is_empty() {
            anyhow::bail!("empty access token");
        }
        let user = _core::User {
            id: user_id.map(_core::UserId::new),
            username: username.unwrap_or_else(|| submitted_username.to_owned()),
            email,
        };
        if !user.is_valid() {
            anyhow::bail!("invalid user: {user:?}");
        }
        Ok(Some(Authenticated { access_token, user }))
    }
}

/// Profile of the current user.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct User {
    id: u64,

    username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl TryFrom<User> for _core::User {
    type Error = anyhow::Error;

    fn try_from(from: User) -> anyhow::Result<Self> {
        let User {
            id,
            username,
            email,
        } = from;
        let into = Self {
            id: Some(_core::UserId::new(id)),
            username,
            email,
        };
        if !into.is_valid() {
            anyhow::bail!("invalid user: {into:?}");
        }
        Ok(into)
    }
}

impl From<_core::User> for User {
    fn from(from: _core::User) -> Self {
        let _core::User {
            id,
            username,
            email,
        } = from;
        Self {
            id: id.map(_core::UserId::value).unwrap_or_default(),
            username,
            email,
        }
    }
}

#[cfg(test)]
mod tests;
