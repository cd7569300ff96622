// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::user::UserId;

use super::*;
use infect::Model as _;

use crate::InvalidInput;

fn login_intent(username: &str, password: &str) -> Intent {
    Intent::Login {
        username: username.to_owned(),
        password: Password::new(password),
    }
}

fn accept(model: &mut Model, intent: Intent) -> EffectApplied {
    let IntentHandled::Accepted(applied) = model.handle_intent(intent) else {
        panic!("intent not accepted");
    };
    applied
}

#[test]
fn password_is_redacted() {
    let debug = format!("{:?}", login_intent("alice", "secret"));
    assert!(debug.contains("alice"));
    assert!(!debug.contains("secret"));
}

#[test]
fn blank_input_is_rejected_without_request() {
    let mut model = Model::default();
    let applied = accept(&mut model, login_intent("alice", " "));
    assert!(applied.task.is_none());
    assert!(matches!(
        model.last_error(),
        Some(Error::Validation(InvalidInput::Missing("password")))
    ));
    let applied = accept(
        &mut model,
        Intent::Signup {
            username: "bob".to_owned(),
            email: String::new(),
            password: Password::new("secret"),
        },
    );
    assert!(applied.task.is_none());
    assert!(matches!(
        model.last_error(),
        Some(Error::Validation(InvalidInput::Missing("email")))
    ));
}

#[test]
fn login_then_logout() {
    let mut model = Model::default();
    let Some(Task { token, .. }) =
        accept(&mut model, login_intent("alice", "secret")).task
    else {
        panic!("unexpected task");
    };
    assert!(matches!(
        model.handle_intent(Intent::Logout),
        IntentHandled::Rejected(Intent::Logout)
    ));
    let user = User {
        id: Some(UserId::new(1)),
        username: "alice".to_owned(),
        email: None,
    };
    let _ = model.apply_effect(Effect::RequestFinished {
        token,
        result: Ok(Some(user.clone())),
    });
    assert_eq!(Some(&user), model.user());

    let Some(Task { token, request }) =
        accept(&mut model, Intent::Logout).task
    else {
        panic!("unexpected task");
    };
    assert_eq!(Intent::Logout, request);
    let _ = model.apply_effect(Effect::RequestFinished {
        token,
        result: Ok(None),
    });
    assert!(model.user().is_none());
}

#[test]
fn refused_login_is_shown_inline() {
    let mut model = Model::default();
    let Some(Task { token, .. }) =
        accept(&mut model, login_intent("alice", "wrong")).task
    else {
        panic!("unexpected task");
    };
    let _ = model.apply_effect(Effect::RequestFinished {
        token,
        result: Err(Error::Auth {
            message: "Invalid credentials".to_owned(),
        }),
    });
    assert!(!model.is_pending());
    assert_eq!(
        Some("Invalid credentials".to_owned()),
        model.last_error().map(ToString::to_string)
    );
}
