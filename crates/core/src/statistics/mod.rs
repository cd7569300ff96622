// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{
    album::{RankValue, TOTAL_ALBUMS},
    progress::Position,
    rating::{Rating, StarRating},
};

/// Maximum number of entries in the top rated list.
pub const TOP_RATED_LIMIT: usize = 5;

/// Number of albums that have been completed.
///
/// An uninitialized position counts as no progress.
#[must_use]
pub fn completed_count(position: Position) -> RankValue {
    match position {
        Position::Uninitialized => 0,
        Position::InProgress(current_rank) => TOTAL_ALBUMS - current_rank.value(),
        Position::Completed => TOTAL_ALBUMS,
    }
}

/// Mean number of stars, 0 if nothing has been rated yet.
#[must_use]
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum = ratings
        .iter()
        .map(|rating| f64::from(rating.rating.stars()))
        .sum::<f64>();
    sum / ratings.len() as f64
}

#[must_use]
pub fn five_star_count(ratings: &[Rating]) -> usize {
    ratings
        .iter()
        .filter(|rating| rating.rating == StarRating::MAX)
        .count()
}

/// Five star ratings ordered by rank, lowest first.
#[must_use]
pub fn top_rated(ratings: &[Rating]) -> Vec<&Rating> {
    let mut top_rated = ratings
        .iter()
        .filter(|rating| rating.rating == StarRating::MAX)
        .collect::<Vec<_>>();
    top_rated.sort_by_key(|rating| rating.album.rank);
    top_rated.truncate(TOP_RATED_LIMIT);
    top_rated
}

/// Aggregated values derived from progress and ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    pub completed: RankValue,
    pub remaining: RankValue,

    /// Completion percentage in the range 0.0..=100.0
    pub percentage: f64,

    pub average_rating: f64,
    pub five_star_count: usize,
    pub top_rated: Vec<&'a Rating>,
}

impl<'a> Statistics<'a> {
    /// Recompute all values from the latest snapshots.
    #[must_use]
    pub fn derive(position: Position, ratings: &'a [Rating]) -> Self {
        let completed = completed_count(position);
        let remaining = TOTAL_ALBUMS - completed;
        let percentage = f64::from(completed) / f64::from(TOTAL_ALBUMS) * 100.0;
        Self {
            completed,
            remaining,
            percentage,
            average_rating: average_rating(ratings),
            five_star_count: five_star_count(ratings),
            top_rated: top_rated(ratings),
        }
    }

    #[must_use]
    pub fn is_journey_complete(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests;
