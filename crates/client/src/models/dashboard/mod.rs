// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Statistics and the rating history.

use countdown_core::{
    progress::Position,
    rating::{Rating, RatingFilter, SortField, filter_and_sort},
    statistics::Statistics,
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

/// Progress and ratings fetched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Position,
    pub ratings: Vec<Rating>,
}

#[derive(Debug, Default)]
pub struct Model {
    pub(super) snapshot: RemoteData<Snapshot>,
    pub(super) sort: SortField,
    pub(super) filter: RatingFilter,
    pub(super) last_error: Option<Error>,
}

impl Model {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.snapshot.is_pending()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.last_value()
    }

    /// Derived from the latest snapshot on every call.
    #[must_use]
    pub fn statistics(&self) -> Option<Statistics<'_>> {
        self.snapshot()
            .map(|Snapshot { position, ratings }| Statistics::derive(*position, ratings))
    }

    /// The rating history, filtered and sorted.
    #[must_use]
    pub fn history(&self) -> Vec<&Rating> {
        self.snapshot()
            .map(|snapshot| filter_and_sort(&snapshot.ratings, self.filter, self.sort))
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn sort(&self) -> SortField {
        self.sort
    }

    #[must_use]
    pub const fn filter(&self) -> RatingFilter {
        self.filter
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
