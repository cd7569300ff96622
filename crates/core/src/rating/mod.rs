// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{cmp::Ordering, str::FromStr};

use jiff::Timestamp;
use semval::prelude::*;

use crate::album::{Album, AlbumId};

///////////////////////////////////////////////////////////////////////
// StarRating
///////////////////////////////////////////////////////////////////////

pub type Stars = u8;

/// A rating of 1 to 5 stars.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StarRating(Stars);

impl StarRating {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    #[must_use]
    pub const fn new(stars: Stars) -> Self {
        Self(stars)
    }

    #[must_use]
    pub const fn stars(self) -> Stars {
        let Self(stars) = self;
        stars
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }

    /// Create a validated rating.
    pub fn try_new(stars: Stars) -> Result<Self, StarRatingInvalidity> {
        let rating = Self(stars);
        if rating < Self::MIN {
            return Err(StarRatingInvalidity::Min(Self::MIN));
        }
        if rating > Self::MAX {
            return Err(StarRatingInvalidity::Max(Self::MAX));
        }
        debug_assert!(rating.is_valid());
        Ok(rating)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StarRatingInvalidity {
    #[display("rating must be at least {_0} star(s)")]
    Min(#[error(not(source))] StarRating),
    #[display("rating must be at most {_0} star(s)")]
    Max(#[error(not(source))] StarRating),
}

impl Validate for StarRating {
    type Invalidity = StarRatingInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self < Self::MIN, Self::Invalidity::Min(Self::MIN))
            .invalidate_if(*self > Self::MAX, Self::Invalidity::Max(Self::MAX))
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Rating
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(transparent)]
pub struct RatingId(u64);

impl RatingId {
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

/// A recorded rating of a single album.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rating {
    pub id: RatingId,

    /// The rated album with only its identifying fields.
    pub album: Album,

    pub rating: StarRating,

    pub created_at: Timestamp,
}

/// A rating that is about to be submitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NewRating {
    pub album_id: AlbumId,
    pub rating: StarRating,
}

///////////////////////////////////////////////////////////////////////
// History
///////////////////////////////////////////////////////////////////////

/// Sort order of the rating history.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SortField {
    /// Most recent first
    #[default]
    #[strum(serialize = "date")]
    CreatedAt,

    /// Highest rating first
    Rating,

    /// Lowest rank first
    Rank,
}

impl SortField {
    fn cmp(self, lhs: &Rating, rhs: &Rating) -> Ordering {
        match self {
            Self::CreatedAt => rhs.created_at.cmp(&lhs.created_at),
            Self::Rating => rhs.rating.cmp(&lhs.rating),
            Self::Rank => lhs.album.rank.cmp(&rhs.album.rank),
        }
    }
}

/// Filter the rating history by the number of stars.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RatingFilter {
    #[default]
    All,
    Exactly(StarRating),
}

impl RatingFilter {
    #[must_use]
    pub fn matches(self, rating: &Rating) -> bool {
        match self {
            Self::All => true,
            Self::Exactly(stars) => rating.rating == stars,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseRatingFilterError {
    #[display("invalid number of stars")]
    Stars(StarRatingInvalidity),
    #[display("expected \"all\" or a number of stars")]
    Syntax,
}

impl FromStr for RatingFilter {
    type Err = ParseRatingFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let stars = s
            .parse::<Stars>()
            .map_err(|_| ParseRatingFilterError::Syntax)?;
        StarRating::try_new(stars)
            .map(Self::Exactly)
            .map_err(ParseRatingFilterError::Stars)
    }
}

/// Filter and sort the rating history.
///
/// Sorting is stable, i.e. ratings that compare equal keep
/// the order in which they have been fetched.
#[must_use]
pub fn filter_and_sort(ratings: &[Rating], filter: RatingFilter, sort: SortField) -> Vec<&Rating> {
    let mut filtered = ratings
        .iter()
        .filter(|rating| filter.matches(rating))
        .collect::<Vec<_>>();
    filtered.sort_by(|lhs, rhs| sort.cmp(lhs, rhs));
    filtered
}
