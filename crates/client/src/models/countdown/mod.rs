// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The screen with the current album of the countdown.

use countdown_core::{
    album::Album,
    progress::{Position, Progress},
};
use infect::ModelChanged;

use crate::{Error, navigation::Route, util::remote::RemoteData};

pub mod intent;
pub use self::intent::Intent;

pub mod effect;
pub use self::effect::Effect;

pub mod task;
pub use self::task::Task;

pub type IntentHandled = infect::IntentHandled<Intent, Effect, Task, ModelChanged>;
pub type EffectApplied = infect::EffectApplied<Effect, Task, ModelChanged>;

/// What the screen currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,

    /// The current album.
    Ready,

    /// Asks for rating the album that has just been completed.
    ShowingRatingPrompt { completed_album: Album },

    /// No start rank has been chosen yet.
    NeedsOnboarding,

    /// The whole countdown has been completed.
    Completed,

    Error { message: String },
}

#[derive(Debug)]
pub struct Model {
    pub(super) view_state: ViewState,
    pub(super) progress: RemoteData<Progress>,
    pub(super) rating_submission: RemoteData<()>,
    pub(super) last_message: Option<String>,
    pub(super) last_error: Option<Error>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            view_state: ViewState::Loading,
            progress: Default::default(),
            rating_submission: Default::default(),
            last_message: None,
            last_error: None,
        }
    }
}

impl Model {
    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.progress.is_pending() || self.rating_submission.is_pending()
    }

    /// The position according to the most recent response.
    #[must_use]
    pub fn position(&self) -> Position {
        self.progress
            .last_value()
            .map_or(Position::Uninitialized, Progress::position)
    }

    #[must_use]
    pub fn current_album(&self) -> Option<&Album> {
        self.progress.last_value().and_then(Progress::current_album)
    }

    /// Message of the server after the last completion.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// The screen that should be shown instead.
    #[must_use]
    pub fn redirect(&self) -> Option<Route> {
        matches!(self.view_state, ViewState::NeedsOnboarding).then_some(Route::Onboarding)
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
