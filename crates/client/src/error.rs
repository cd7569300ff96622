// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::{
    album::Rank,
    progress::PositionError,
    rating::{StarRating, Stars},
};
use reqwest::StatusCode;
use thiserror::Error;

/// Input that is rejected before sending any request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("invalid album rank {0}: must be between {min} and {max}", min = Rank::MIN, max = Rank::MAX)]
    Rank(Rank),

    #[error("invalid rating {0}: must be between {min} and {max} stars", min = StarRating::MIN, max = StarRating::MAX)]
    Rating(Stars),

    #[error("missing {0}")]
    Missing(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    /// Login or signup has been refused.
    #[error("{message}")]
    Auth { message: String },

    /// No start rank has been chosen yet.
    #[error("progress has not been initialized yet")]
    NotInitialized,

    #[error(transparent)]
    Validation(#[from] InvalidInput),

    #[error(transparent)]
    Precondition(#[from] PositionError),

    /// No response has been received.
    #[error("Network error. Please check your connection.")]
    Network(#[source] reqwest::Error),

    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// The credential has been rejected and the session is gone.
    #[error("session expired, please log in again")]
    Unauthorized,

    #[error("malformed response: {0:#}")]
    MalformedResponse(anyhow::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl Error {
    #[must_use]
    pub const fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized)
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
