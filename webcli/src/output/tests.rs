// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::{
    album::{AlbumId, Rank},
    progress::Position,
    rating::{RatingId, StarRating},
};

use super::*;

fn album(id: u64, rank: u16) -> Album {
    Album {
        id: AlbumId::new(id),
        rank: Rank::new(rank),
        artist: "Marvin Gaye".to_owned(),
        title: "What's Going On".to_owned(),
        info: Some("Tamla, 1971".to_owned()),
        description: None,
    }
}

fn rating(id: u64, rank: u16, stars: u8) -> Rating {
    Rating {
        id: RatingId::new(id),
        album: album(id, rank),
        rating: StarRating::new(stars),
        created_at: "2024-03-01T12:30:00Z".parse().unwrap(),
    }
}

#[test]
fn album_lines() {
    assert_eq!("#  1  Marvin Gaye - What's Going On", album_line(&album(1, 1)));
    assert_eq!(
        "#500  Marvin Gaye - What's Going On\n      Tamla, 1971",
        album_details(&album(1, 500))
    );
}

#[test]
fn rating_line_with_stars() {
    assert_eq!(
        "***    #498  Marvin Gaye - What's Going On  (2024-03-01T12:30:00Z)",
        rating_line(&rating(3, 498, 3))
    );
}

#[test]
fn statistics_with_one_decimal() {
    let ratings = [rating(1, 500, 5), rating(2, 499, 5), rating(3, 498, 4)];
    let text = statistics_text(&Statistics::derive(Position::InProgress(Rank::new(498)), &ratings));
    assert!(text.contains("Completed: 2/500 (0.4%)"));
    assert!(text.contains("Remaining: 498"));
    assert!(text.contains("Average rating: 4.7"));
    assert!(text.contains("Five star ratings: 2"));
    assert!(!text.contains("Journey complete!"));
}

#[test]
fn statistics_of_completed_journey() {
    let text = statistics_text(&Statistics::derive(Position::Completed, &[]));
    assert!(text.starts_with("Journey complete!"));
    assert!(text.contains("Completed: 500/500 (100.0%)"));
    assert!(!text.contains("Top rated:"));
}
