// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn deserialize_albums_response() {
    let json = r#"{
        "albums": [
            {"id": 1, "rank": 500, "artist": "Arcade Fire", "album": "Funeral", "info": "2004", "description": ""},
            {"id": 2, "rank": 499, "artist": "Wilco", "album": "Yankee Hotel Foxtrot"}
        ]
    }"#;
    let response: AlbumsResponse = serde_json::from_str(json).unwrap();
    let albums: Vec<_core::Album> = response.try_into().unwrap();
    assert_eq!(2, albums.len());
    assert_eq!(_core::Rank::new(500), albums[0].rank);
    assert_eq!("Funeral", albums[0].title);
    assert_eq!(Some("2004"), albums[0].info.as_deref());
    // Blank descriptions are dropped
    assert_eq!(None, albums[0].description);
    assert_eq!(None, albums[1].info);
}

#[test]
fn reject_album_with_invalid_rank() {
    let json = r#"{"id": 1, "rank": 501, "artist": "Artist", "album": "Album"}"#;
    let album: Album = serde_json::from_str(json).unwrap();
    assert!(_core::Album::try_from(album).is_err());
}

#[test]
fn reject_album_with_missing_fields() {
    let json = r#"{"id": 1, "artist": "Artist", "album": "Album"}"#;
    assert!(serde_json::from_str::<Album>(json).is_err());
}

#[test]
fn serialize_album_with_wire_names() {
    let album = Album::from(_core::Album {
        id: _core::AlbumId::new(3),
        rank: _core::Rank::new(1),
        artist: "Marvin Gaye".to_owned(),
        title: "What's Going On".to_owned(),
        info: None,
        description: None,
    });
    assert_eq!(
        serde_json::json!({
            "id": 3,
            "rank": 1,
            "artist": "Marvin Gaye",
            "album": "What's Going On",
        }),
        serde_json::to_value(&album).unwrap()
    );
}
