// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use discro::tasklet::OnChanged;

use super::*;

fn credential(username: &str) -> Credential {
    Credential {
        access_token: format!("token-of-{username}"),
        user: User {
            id: None,
            username: username.to_owned(),
            email: None,
        },
    }
}

#[test]
fn sign_in_and_invalidate() {
    let store = SessionStore::in_memory();
    assert!(!store.is_authenticated());
    assert_eq!(None, store.access_token());

    store.sign_in(credential("alice"));
    assert!(store.is_authenticated());
    assert_eq!(Some("token-of-alice".to_owned()), store.access_token());
    assert_eq!(
        Some("alice"),
        store.current_user().as_ref().map(|user| user.username.as_str())
    );

    assert!(store.invalidate());
    assert!(!store.is_authenticated());
    assert_eq!(None, store.current_user());
}

#[test]
fn invalidate_is_idempotent() {
    let store = SessionStore::in_memory();
    store.sign_in(credential("bob"));
    assert!(store.invalidate());
    assert!(!store.invalidate());
    assert!(!store.invalidate());
}

#[test]
fn update_user_requires_credential() {
    let store = SessionStore::in_memory();
    let user = credential("carol").user;
    assert!(!store.update_user(user.clone()));
    store.sign_in(credential("carol"));
    assert!(!store.update_user(user.clone()));
    let updated = User {
        email: Some("carol@example.com".to_owned()),
        ..user
    };
    assert!(store.update_user(updated.clone()));
    assert_eq!(Some(updated), store.current_user());
}

#[test]
fn debug_output_redacts_access_token() {
    let debug = format!("{:?}", credential("dave"));
    assert!(!debug.contains("token-of-dave"));
    assert!(debug.contains("dave"));
}

#[test]
fn persist_and_restore() {
    let temp_dir = tempfile::tempdir().unwrap();
    {
        let store = SessionStore::restore(temp_dir.path().to_path_buf());
        assert!(!store.is_authenticated());
        store.sign_in(credential("erin"));
    }
    {
        let store = SessionStore::restore(temp_dir.path().to_path_buf());
        assert_eq!(Some("token-of-erin".to_owned()), store.access_token());
        assert!(store.invalidate());
    }
    let store = SessionStore::restore(temp_dir.path().to_path_buf());
    assert!(!store.is_authenticated());
}

#[test]
fn restore_corrupt_file_as_anonymous() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = new_session_file_path(temp_dir.path().to_path_buf());
    fs::write(file_path, "not ron at all (").unwrap();
    let store = SessionStore::restore(temp_dir.path().to_path_buf());
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn notify_subscribers_when_signing_in_and_out() {
    let store = SessionStore::in_memory();
    let observed = Arc::new(Mutex::new(Vec::<Option<String>>::new()));
    let listener = tokio::spawn(tasklet::on_user_changed(store.subscribe_changed(), {
        let observed = Arc::clone(&observed);
        move |user| {
            let mut observed = observed.lock().unwrap();
            observed.push(user.map(|user| user.username.clone()));
            if observed.len() < 3 {
                OnChanged::Continue
            } else {
                OnChanged::Abort
            }
        }
    }));
    // Wait for the initial notification
    while observed.lock().unwrap().is_empty() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    store.sign_in(credential("frank"));
    while observed.lock().unwrap().len() < 2 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    store.invalidate();
    tokio::time::timeout(Duration::from_secs(5), listener)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        vec![None, Some("frank".to_owned()), None],
        *observed.lock().unwrap()
    );
}
