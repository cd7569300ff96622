// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use countdown_core::user::User;
use discro::{Subscriber, tasklet::OnChanged};

use super::State;

/// Listen for users signing in and out.
///
/// The listener is invoked immediately with the current user.
pub fn on_user_changed(
    mut subscriber: Subscriber<State>,
    mut on_changed: impl FnMut(Option<&User>) -> OnChanged + Send + 'static,
) -> impl Future<Output = ()> + Send + 'static {
    // Read the initial value immediately before spawning the async task
    let mut value = subscriber.read_ack().current_user().cloned();
    async move {
        log::debug!("Starting on_user_changed");
        // Enforce initial update
        let mut value_changed = true;
        loop {
            if value_changed {
                log::debug!("on_user_changed({value:?})");
                match on_changed(value.as_ref()) {
                    OnChanged::Continue => (),
                    OnChanged::Abort => {
                        // Consumer has rejected the notification
                        log::debug!("Aborting on_user_changed");
                        return;
                    }
                }
            }
            value_changed = false;
            if subscriber.changed().await.is_err() {
                // Publisher has disappeared
                log::debug!("Aborting on_user_changed");
                break;
            }
            let state = subscriber.read_ack();
            let new_value = state.current_user();
            if value.as_ref() != new_value {
                value = new_value.cloned();
                value_changed = true;
            }
        }
        log::debug!("Stopping on_user_changed");
    }
}
