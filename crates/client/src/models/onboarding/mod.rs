// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Choosing the rank at which the countdown starts.

use countdown_core::{
    album::{Album, Rank, filter_by_search_term},
    progress::Progress,
};
use infect::ModelChanged;

use crate::{Error, util::remote::RemoteData};

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub type IntentHandled = infect::IntentHandled<Intent, Effect, Task, ModelChanged>;
pub type EffectApplied = infect::EffectApplied<Effect, Task, ModelChanged>;

#[derive(Debug)]
pub struct Model {
    pub(super) albums: RemoteData<Vec<Album>>,
    pub(super) search_term: String,
    pub(super) selected_rank: Rank,
    pub(super) started: RemoteData<Progress>,
    pub(super) last_error: Option<Error>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            albums: Default::default(),
            search_term: String::new(),
            selected_rank: Rank::FIRST,
            started: Default::default(),
            last_error: None,
        }
    }
}

impl Model {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.albums.is_pending() || self.started.is_pending()
    }

    #[must_use]
    pub fn albums(&self) -> Option<&[Album]> {
        self.albums.last_value().map(Vec::as_slice)
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Albums that match the current search term.
    #[must_use]
    pub fn filtered_albums(&self) -> Vec<&Album> {
        self.albums()
            .map(|albums| filter_by_search_term(albums, &self.search_term).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn selected_rank(&self) -> Rank {
        self.selected_rank
    }

    #[must_use]
    pub fn selected_album(&self) -> Option<&Album> {
        self.albums()?
            .iter()
            .find(|album| album.rank == self.selected_rank)
    }

    /// The progress after the countdown has been started.
    #[must_use]
    pub fn started(&self) -> Option<&Progress> {
        self.started.last_value()
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }
}

impl infect::Model for Model {
    type Intent = Intent;
    type IntentRejected = Intent;
    type Effect = Effect;
    type Task = Task;
    type RenderHint = ModelChanged;

    fn handle_intent(&mut self, intent: Self::Intent) -> IntentHandled {
        intent.handle_on(self)
    }

    fn apply_effect(&mut self, effect: Self::Effect) -> EffectApplied {
        effect.apply_on(self)
    }
}
