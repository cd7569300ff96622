// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::prelude::*;

///////////////////////////////////////////////////////////////////////
// Rank
///////////////////////////////////////////////////////////////////////

pub type RankValue = u16;

/// Total number of albums in the countdown.
pub const TOTAL_ALBUMS: RankValue = 500;

/// Fixed position of an album in the countdown.
///
/// The countdown starts at rank 500 and ends at rank 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Rank(RankValue);

impl Rank {
    /// The rank of the last album in the countdown.
    pub const MIN: Self = Self(1);

    /// The rank of the first album in the countdown.
    pub const MAX: Self = Self(TOTAL_ALBUMS);

    /// The default rank when starting from the beginning.
    pub const FIRST: Self = Self::MAX;

    /// The rank that terminates the countdown when completed.
    pub const LAST: Self = Self::MIN;

    #[must_use]
    pub const fn new(value: RankValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> RankValue {
        let Self(value) = self;
        value
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }

    /// The rank that follows after completing this rank.
    ///
    /// Returns `None` for the last rank.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        debug_assert!(self.is_valid());
        (self > Self::LAST).then(|| Self(self.0 - 1))
    }
}

impl From<Rank> for RankValue {
    fn from(from: Rank) -> Self {
        from.value()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum RankInvalidity {
    #[display("rank must be at least {_0}")]
    Min(Rank),
    #[display("rank must be at most {_0}")]
    Max(Rank),
}

impl Validate for Rank {
    type Invalidity = RankInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self < Self::MIN, Self::Invalidity::Min(Self::MIN))
            .invalidate_if(*self > Self::MAX, Self::Invalidity::Max(Self::MAX))
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Album
///////////////////////////////////////////////////////////////////////

/// Server-assigned identifier of an album.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AlbumId(u64);

impl AlbumId {
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

/// Immutable catalog entry.
///
/// Albums that are embedded into ratings only carry the
/// identifying fields, i.e. both `info` and `description`
/// are missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: AlbumId,

    pub rank: Rank,

    pub artist: String,

    pub title: String,

    pub info: Option<String>,

    pub description: Option<String>,
}

impl Album {
    /// Check if the album matches a search term.
    ///
    /// Artist and title are matched case-insensitive. The rank
    /// matches if its decimal representation contains the term.
    /// A blank term matches every album.
    #[must_use]
    pub fn matches_search_term(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.artist.to_lowercase().contains(&term)
            || self.title.to_lowercase().contains(&term)
            || self.rank.to_string().contains(&term)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlbumInvalidity {
    Rank(RankInvalidity),
    ArtistEmpty,
    TitleEmpty,
}

impl Validate for Album {
    type Invalidity = AlbumInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            rank,
            artist,
            title,
            ..
        } = self;
        ValidationContext::new()
            .validate_with(rank, Self::Invalidity::Rank)
            .invalidate_if(artist.trim().is_empty(), Self::Invalidity::ArtistEmpty)
            .invalidate_if(title.trim().is_empty(), Self::Invalidity::TitleEmpty)
            .into()
    }
}

/// Filter albums by a search term, preserving their order.
pub fn filter_by_search_term<'a>(
    albums: &'a [Album],
    term: &'a str,
) -> impl Iterator<Item = &'a Album> + 'a {
    albums
        .iter()
        .filter(move |album| album.matches_search_term(term))
}
