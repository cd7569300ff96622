// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::album::Rank;

use super::*;

#[test]
fn progress_in_progress() {
    let json = r#"{
        "all_completed": false,
        "current_album": {
            "id": 11, "rank": 490, "artist": "Artist", "album": "Album",
            "info": "Info", "description": "Description"
        }
    }"#;
    let response: ProgressResponse = serde_json::from_str(json).unwrap();
    let progress = _core::Progress::try_from(response).unwrap();
    assert_eq!(
        _core::Position::InProgress(Rank::new(490)),
        progress.position()
    );
}

#[test]
fn progress_all_completed_ignores_album() {
    let json = r#"{"all_completed": true, "message": "All albums completed!"}"#;
    let response: ProgressResponse = serde_json::from_str(json).unwrap();
    assert_eq!(
        _core::Progress::Completed,
        _core::Progress::try_from(response).unwrap()
    );
}

#[test]
fn progress_without_album_is_malformed() {
    let json = r#"{"all_completed": false}"#;
    let response: ProgressResponse = serde_json::from_str(json).unwrap();
    assert!(_core::Progress::try_from(response).is_err());
}

#[test]
fn complete_advances_to_next_album() {
    let json = r#"{
        "message": "Album completed!",
        "all_completed": false,
        "next_album": {"id": 12, "rank": 489, "artist": "Artist", "album": "Next"}
    }"#;
    let response: CompleteResponse = serde_json::from_str(json).unwrap();
    assert!(!response.is_terminal());
    let completion = _core::Completion::try_from(response).unwrap();
    assert_eq!(
        _core::Position::InProgress(Rank::new(489)),
        completion.position()
    );
}

#[test]
fn complete_terminal_by_flag() {
    let response = CompleteResponse {
        all_completed: Some(true),
        ..Default::default()
    };
    assert!(response.is_terminal());
    assert_eq!(
        _core::Completion::Finished,
        _core::Completion::try_from(response).unwrap()
    );
}

#[test]
fn complete_terminal_by_message() {
    let json = r#"{"message": "Congratulations! You have completed all 500 albums!"}"#;
    let response: CompleteResponse = serde_json::from_str(json).unwrap();
    assert!(response.is_terminal());
    assert_eq!(
        _core::Completion::Finished,
        _core::Completion::try_from(response).unwrap()
    );
}

#[test]
fn complete_without_next_album_is_malformed() {
    let json = r#"{"message": "Album completed!", "all_completed": false}"#;
    let response: CompleteResponse = serde_json::from_str(json).unwrap();
    assert!(_core::Completion::try_from(response).is_err());
}

#[test]
fn serialize_initialize_request() {
    assert_eq!(
        serde_json::json!({"album_rank": 250}),
        serde_json::to_value(InitializeRequest::from(Rank::new(250))).unwrap()
    );
}
