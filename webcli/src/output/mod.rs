// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Rendering of screen models on the terminal.

use std::fmt::Write as _;

use countdown_client::models::{
    countdown::{self, ViewState},
    dashboard,
};
use countdown_core::{
    album::{Album, TOTAL_ALBUMS},
    rating::Rating,
    statistics::Statistics,
};

pub(crate) fn album_line(album: &Album) -> String {
    let Album {
        rank,
        artist,
        title,
        ..
    } = album;
    format!("#{rank:>3}  {artist} - {title}")
}

pub(crate) fn album_details(album: &Album) -> String {
    let mut text = album_line(album);
    for line in [&album.info, &album.description].into_iter().flatten() {
        let _ = write!(text, "\n      {line}");
    }
    text
}

fn stars(rating: &Rating) -> String {
    let stars = usize::from(rating.rating.stars());
    format!("{:<5}", "*".repeat(stars))
}

pub(crate) fn rating_line(rating: &Rating) -> String {
    format!(
        "{stars}  {album}  ({created_at})",
        stars = stars(rating),
        album = album_line(&rating.album),
        created_at = rating.created_at,
    )
}

pub(crate) fn countdown_text(model: &countdown::Model) -> String {
    let mut text = String::new();
    if let Some(message) = model.last_message() {
        let _ = writeln!(text, "{message}");
    }
    match model.view_state() {
        ViewState::Loading | ViewState::Error { .. } => (),
        ViewState::Ready => {
            if let Some(album) = model.current_album() {
                let _ = writeln!(text, "Current album:\n{}", album_details(album));
            }
        }
        ViewState::ShowingRatingPrompt { completed_album } => {
            let _ = writeln!(text, "Completed {}", album_line(completed_album));
            if let Some(album) = model.current_album() {
                let _ = writeln!(text, "Next album:\n{}", album_details(album));
            }
        }
        ViewState::NeedsOnboarding => {
            let _ = writeln!(
                text,
                "The countdown has not been started yet. Choose a start rank with `countdown \
                 onboard`."
            );
        }
        ViewState::Completed => {
            let _ = writeln!(
                text,
                "You have completed the countdown of all {TOTAL_ALBUMS} albums!"
            );
        }
    }
    text
}

pub(crate) fn statistics_text(statistics: &Statistics<'_>) -> String {
    let Statistics {
        completed,
        remaining,
        percentage,
        average_rating,
        five_star_count,
        top_rated,
    } = statistics;
    let mut text = String::new();
    if statistics.is_journey_complete() {
        let _ = writeln!(text, "Journey complete!");
    }
    let _ = writeln!(
        text,
        "Completed: {completed}/{TOTAL_ALBUMS} ({percentage:.1}%)"
    );
    let _ = writeln!(text, "Remaining: {remaining}");
    let _ = writeln!(text, "Average rating: {average_rating:.1}");
    let _ = writeln!(text, "Five star ratings: {five_star_count}");
    if !top_rated.is_empty() {
        let _ = writeln!(text, "Top rated:");
        for rating in top_rated {
            let _ = writeln!(text, "  {}", album_line(&rating.album));
        }
    }
    text
}

pub(crate) fn dashboard_text(model: &dashboard::Model) -> String {
    let Some(statistics) = model.statistics() else {
        return String::new();
    };
    let mut text = statistics_text(&statistics);
    let history = model.history();
    let _ = writeln!(
        text,
        "Ratings (sort: {sort}, {count} shown):",
        sort = model.sort(),
        count = history.len()
    );
    for rating in history {
        let _ = writeln!(text, "  {}", rating_line(rating));
    }
    text
}

#[cfg(test)]
mod tests;
