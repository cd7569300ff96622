// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct UserId(u64);

impl UserId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        let Self(value) = self;
        value
    }
}

/// Profile of an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub id: Option<UserId>,

    pub username: String,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UserInvalidity {
    UsernameEmpty,
    EmailEmpty,
}

impl Validate for User {
    type Invalidity = UserInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            username, email, ..
        } = self;
        ValidationContext::new()
            .invalidate_if(username.trim().is_empty(), Self::Invalidity::UsernameEmpty)
            .invalidate_if(
                email.as_ref().is_some_and(|email| email.trim().is_empty()),
                Self::Invalidity::EmailEmpty,
            )
            .into()
    }
}
