// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn login_response_with_token() {
    let json = r#"{
        "message": "Login successful",
        "user_id": 7,
        "access_token": "secret",
        "username": "alice",
        "email": "alice@example.com"
    }"#;
    let response: AuthResponse = serde_json::from_str(json).unwrap();
    let authenticated = response.try_into_authenticated("ignored").unwrap().unwrap();
    assert_eq!("secret", authenticated.access_token);
    assert_eq!(Some(_core::UserId::new(7)), authenticated.user.id);
    assert_eq!("alice", authenticated.user.username);
    assert_eq!(Some("alice@example.com"), authenticated.user.email.as_deref());
}

#[test]
fn signup_acknowledged_without_token() {
    let json = r#"{"message": "User registered successfully"}"#;
    let response: AuthResponse = serde_json::from_str(json).unwrap();
    assert!(response.try_into_authenticated("bob").unwrap().is_none());
}

#[test]
fn fallback_to_submitted_username() {
    let response = AuthResponse {
        access_token: Some("token".to_owned()),
        ..Default::default()
    };
    let authenticated = response.try_into_authenticated("carol").unwrap().unwrap();
    assert_eq!("carol", authenticated.user.username);
    assert_eq!(None, authenticated.user.id);
}

#[test]
fn reject_blank_access_token() {
    let response = AuthResponse {
        access_token: Some(" ".to_owned()),
        username: Some("dave".to_owned()),
        ..Default::default()
    };
    assert!(response.try_into_authenticated("dave").is_err());
}

#[test]
fn serialize_signup_request() {
    let request = SignupRequest {
        username: "erin",
        email: "erin@example.com",
        password: "hunter2",
    };
    assert_eq!(
        serde_json::json!({
            "username": "erin",
            "email": "erin@example.com",
            "password": "hunter2",
        }),
        serde_json::to_value(&request).unwrap()
    );
}

#[test]
fn current_user_profile() {
    let json = r#"{"id": 3, "username": "frank", "email": "frank@example.com"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    let user = _core::User::try_from(user).unwrap();
    assert_eq!(Some(_core::UserId::new(3)), user.id);
    assert_eq!("frank", user.username);
}
