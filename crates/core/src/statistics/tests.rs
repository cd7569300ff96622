// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::Timestamp;

use super::*;
use crate::{
    album::{Album, AlbumId, Rank},
    rating::RatingId,
};

fn rating(id: u64, rank: RankValue, stars: u8) -> Rating {
    Rating {
        id: RatingId::new(id),
        album: Album {
            id: AlbumId::new(id),
            rank: Rank::new(rank),
            artist: "Artist".to_owned(),
            title: "Album".to_owned(),
            info: None,
            description: None,
        },
        rating: StarRating::new(stars),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn ratings(stars: &[u8]) -> Vec<Rating> {
    stars
        .iter()
        .enumerate()
        .map(|(i, stars)| rating(i as u64 + 1, 500 - i as RankValue, *stars))
        .collect()
}

#[test]
fn average_rating_of_nothing_is_zero() {
    assert!(average_rating(&[]).abs() < f64::EPSILON);
}

#[test]
fn average_rating_is_mean() {
    assert!((average_rating(&ratings(&[5, 3, 4])) - 4.0).abs() < f64::EPSILON);
}

#[test]
fn completed_count_by_position() {
    assert_eq!(0, completed_count(Position::Uninitialized));
    assert_eq!(0, completed_count(Position::InProgress(Rank::FIRST)));
    assert_eq!(
        TOTAL_ALBUMS - 1,
        completed_count(Position::InProgress(Rank::LAST))
    );
    assert_eq!(TOTAL_ALBUMS, completed_count(Position::Completed));
}

#[test]
fn top_rated_is_limited_and_sorted_by_rank() {
    let ratings = [
        rating(1, 300, 5),
        rating(2, 20, 5),
        rating(3, 450, 5),
        rating(4, 1, 4),
        rating(5, 77, 5),
        rating(6, 5, 5),
        rating(7, 250, 5),
        rating(8, 3, 3),
    ];
    let top_rated = top_rated(&ratings);
    assert_eq!(TOP_RATED_LIMIT, top_rated.len());
    let ranks = top_rated
        .iter()
        .map(|rating| rating.album.rank.value())
        .collect::<Vec<_>>();
    assert_eq!(vec![5, 20, 77, 250, 300], ranks);
}

#[test]
fn top_rated_with_few_five_star_ratings() {
    assert_eq!(1, top_rated(&ratings(&[4, 5, 3])).len());
    assert!(top_rated(&ratings(&[1, 2])).is_empty());
}

#[test]
fn statistics_when_completed() {
    let ratings = ratings(&[5, 5, 4]);
    let stats = Statistics::derive(Position::Completed, &ratings);
    assert_eq!(500, stats.completed);
    assert_eq!(0, stats.remaining);
    assert!((stats.percentage - 100.0).abs() < f64::EPSILON);
    assert!((stats.average_rating - 14.0 / 3.0).abs() < 1e-9);
    assert_eq!("4.67", format!("{:.2}", stats.average_rating));
    assert_eq!(2, stats.five_star_count);
    assert!(stats.is_journey_complete());
}

#[test]
fn statistics_in_progress() {
    let ratings = ratings(&[2]);
    let stats = Statistics::derive(Position::InProgress(Rank::new(400)), &ratings);
    assert_eq!(100, stats.completed);
    assert_eq!(400, stats.remaining);
    assert!((stats.percentage - 20.0).abs() < f64::EPSILON);
    assert!(!stats.is_journey_complete());
}

#[test]
fn statistics_without_progress() {
    let stats = Statistics::derive(Position::Uninitialized, &[]);
    assert_eq!(0, stats.completed);
    assert_eq!(500, stats.remaining);
    assert!(stats.percentage.abs() < f64::EPSILON);
    assert!(stats.average_rating.abs() < f64::EPSILON);
    assert!(stats.top_rated.is_empty());
}
