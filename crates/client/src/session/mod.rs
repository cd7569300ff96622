// SPDX-FileCopyrightText: Copyright (C) 2018-2023 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use countdown_core::user::User;
use discro::Subscriber;
use serde::{Deserialize, Serialize};

use crate::observable::{Observable, ObservableRef};

pub const FILE_NAME: &str = "session";

pub const FILE_SUFFIX: &str = "ron";

pub mod tasklet;

/// Bearer token and cached profile of the authenticated user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub user: User,
}

// The access token must never appear in log messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<Credential>,
}

impl State {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.credential.as_ref().map(|credential| &credential.user)
    }

    /// Load the persisted state, falling back to an anonymous session.
    #[must_use]
    pub fn restore_from_parent_dir(parent_dir: &Path) -> Self {
        Self::load(parent_dir)
            .map_err(|err| {
                log::warn!("Failed to load saved session: {err:#}");
            })
            .unwrap_or_default()
    }

    pub fn load(parent_dir: &Path) -> anyhow::Result<Self> {
        let file_path = new_session_file_path(parent_dir.to_path_buf());
        log::debug!("Loading session from file: {}", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(text) => ron::from_str(&text).map_err(Into::into),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, parent_dir: &Path) -> anyhow::Result<()> {
        let file_path = new_session_file_path(parent_dir.to_path_buf());
        log::debug!("Saving session into file: {}", file_path.display());
        let text = ron::ser::to_string_pretty(self, Default::default())?;
        if let Some(parent_path) = file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&file_path, text)?;
        Ok(())
    }
}

#[must_use]
fn new_session_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
}

/// Observable session that is persisted after every change.
///
/// Without a storage directory the session only lives in memory.
#[derive(Debug)]
pub struct SessionStore {
    state: Observable<State>,
    storage_dir: Option<PathBuf>,
}

impl SessionStore {
    #[must_use]
    pub fn new(initial_state: State, storage_dir: Option<PathBuf>) -> Self {
        Self {
            state: Observable::new(initial_state),
            storage_dir,
        }
    }

    /// Restore the last session from the storage directory.
    #[must_use]
    pub fn restore(storage_dir: PathBuf) -> Self {
        let initial_state = State::restore_from_parent_dir(&storage_dir);
        if let Some(user) = initial_state.current_user() {
            log::info!("Restored session of user {}", user.username);
        }
        Self::new(initial_state, Some(storage_dir))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Default::default(), None)
    }

    #[must_use]
    pub fn read(&self) -> ObservableRef<'_, State> {
        self.state.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<State> {
        self.state.subscribe_changed()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read().current_user().cloned()
    }

    /// A copy of the bearer token.
    ///
    /// Never hold the read lock across an `.await`.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read()
            .credential
            .as_ref()
            .map(|credential| credential.access_token.clone())
    }

    /// Store a new credential after login or signup.
    pub fn sign_in(&self, credential: Credential) {
        log::info!("Signed in as {}", credential.user.username);
        self.modify_and_persist(|state| {
            if state.credential.as_ref() == Some(&credential) {
                return false;
            }
            state.credential = Some(credential);
            true
        });
    }

    /// Replace the cached profile of the current user.
    ///
    /// Has no effect on an anonymous session.
    pub fn update_user(&self, user: User) -> bool {
        self.modify_and_persist(|state| {
            let Some(credential) = &mut state.credential else {
                return false;
            };
            if credential.user == user {
                return false;
            }
            credential.user = user;
            true
        })
    }

    /// Forget the credential.
    ///
    /// Idempotent, i.e. returns `false` if the session was already
    /// anonymous.
    pub fn invalidate(&self) -> bool {
        let invalidated = self.modify_and_persist(|state| state.credential.take().is_some());
        if invalidated {
            log::info!("Session invalidated");
        }
        invalidated
    }

    fn modify_and_persist(&self, modify: impl FnOnce(&mut State) -> bool) -> bool {
        if !self.state.modify(modify) {
            return false;
        }
        if let Some(storage_dir) = &self.storage_dir {
            let state = self.read().clone();
            if let Err(err) = state.save(storage_dir) {
                log::warn!("Failed to save session: {err:#}");
            }
        }
        true
    }
}

#[cfg(test)]
mod tests;
