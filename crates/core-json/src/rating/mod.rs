// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Context as _;
use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use semval::IsValid as _;

use crate::{album::Album, prelude::*};

mod _core {
    pub(super) use countdown_core::{album::Album, rating::*};
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct NewRating {
    album_id: u64,
    rating: u8,
}

impl From<_core::NewRating> for NewRating {
    fn from(from: _core::NewRating) -> Self {
        let _core::NewRating { album_id, rating } = from;
        debug_assert!(rating.is_valid());
        Self {
            album_id: album_id.value(),
            rating: rating.stars(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Rating {
    id: u64,

    album_id: u64,

    rating: u8,

    /// Either an RFC 3339 timestamp or a civil date time in UTC
    created_at: String,

    album: Album,
}

/// Parse the creation time of a rating.
///
/// Civil date times without an offset are interpreted as UTC.
pub fn parse_created_at(input: &str) -> anyhow::Result<Timestamp> {
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Ok(timestamp);
    }
    let date_time = input
        .parse::<DateTime>()
        .with_context(|| format!("invalid creation time: {input}"))?;
    let timestamp = date_time.to_zoned(TimeZone::UTC)?.timestamp();
    Ok(timestamp)
}

impl TryFrom<Rating> for _core::Rating {
    type Error = anyhow::Error;

    fn try_from(from: Rating) -> anyhow::Result<Self> {
        let Rating {
            id,
            album_id,
            rating,
            created_at,
            album,
        } = from;
        anyhow::ensure!(
            album.id() == album_id,
            "mismatching album id {album_id} of rated album {album:?}"
        );
        let rating = _core::StarRating::try_new(rating)?;
        let created_at = parse_created_at(&created_at)?;
        let album = _core::Album::try_from(album)?;
        Ok(Self {
            id: _core::RatingId::new(id),
            album,
            rating,
            created_at,
        })
    }
}

impl From<_core::Rating> for Rating {
    fn from(from: _core::Rating) -> Self {
        let _core::Rating {
            id,
            album,
            rating,
            created_at,
        } = from;
        Self {
            id: id.value(),
            album_id: album.id.value(),
            rating: rating.stars(),
            created_at: created_at.to_string(),
            album: album.into(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct RatingsResponse {
    ratings: Vec<Rating>,
}

impl TryFrom<RatingsResponse> for Vec<_core::Rating> {
    type Error = anyhow::Error;

    fn try_from(from: RatingsResponse) -> anyhow::Result<Self> {
        let RatingsResponse { ratings } = from;
        ratings.into_iter().map(TryInto::try_into).collect()
    }
}

impl From<Vec<_core::Rating>> for RatingsResponse {
    fn from(from: Vec<_core::Rating>) -> Self {
        Self {
            ratings: from.into_iter().map(Into::into).collect(),
        }
    }
}
