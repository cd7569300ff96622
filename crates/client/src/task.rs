// SPDX-FileCopyrightText: Copyright (C) 2018-2021 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    future::Future,
    sync::atomic::{AtomicUsize, Ordering},
};

/// An asynchronous side effect that finishes with an effect.
pub trait ExecuteTask<E>: Send + 'static {
    type Effect: Send + 'static;

    fn execute(self, env: &E) -> impl Future<Output = Self::Effect> + Send;
}

#[derive(Debug, Default)]
pub struct PendingTasksCounter {
    number_of_pending_tasks: AtomicUsize,
}

impl PendingTasksCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            number_of_pending_tasks: AtomicUsize::new(0),
        }
    }

    pub fn start_pending_task(&self) -> usize {
        let pending_tasks = self.number_of_pending_tasks.fetch_add(1, Ordering::Acquire) + 1;
        debug_assert!(!self.all_pending_tasks_finished());
        pending_tasks
    }

    pub fn finish_pending_task(&self) -> usize {
        debug_assert!(!self.all_pending_tasks_finished());
        self.number_of_pending_tasks.fetch_sub(1, Ordering::Release) - 1
    }

    #[must_use]
    pub fn all_pending_tasks_finished(&self) -> bool {
        self.number_of_pending_tasks.load(Ordering::Acquire) == 0
    }
}
