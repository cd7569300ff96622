// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Drives a screen model through a fixed sequence of intents.

use std::{collections::VecDeque, fmt, sync::Arc};

use countdown_client::{
    Environment, Error, ExecuteTask, TaskSpawner,
    models::{
        auth,
        countdown::{self, ViewState},
        dashboard, onboarding,
    },
};
use infect::{
    MessagePort, MessagesConsumed, Model, ModelRender, TaskContext,
    consume_messages, message_channel,
};
use tokio::signal;

const MESSAGE_CHANNEL_CAPACITY: usize = 100;

pub(crate) trait Screen: Model + fmt::Debug {
    fn is_pending(&self) -> bool;

    fn last_error(&self) -> Option<&Error>;

    /// No further intents should be submitted.
    fn is_final(&self) -> bool {
        false
    }
}

impl Screen for auth::Model {
    fn is_pending(&self) -> bool {
        self.is_pending()
    }

    fn last_error(&self) -> Option<&Error> {
        self.last_error()
    }
}

impl Screen for onboarding::Model {
    fn is_pending(&self) -> bool {
        self.is_pending()
    }

    fn last_error(&self) -> Option<&Error> {
        self.last_error()
    }
}

impl Screen for countdown::Model {
    fn is_pending(&self) -> bool {
        self.is_pending()
    }

    fn last_error(&self) -> Option<&Error> {
        self.last_error()
    }

    fn is_final(&self) -> bool {
        matches!(
            self.view_state(),
            ViewState::NeedsOnboarding | ViewState::Completed | ViewState::Error { .. }
        )
    }
}

impl Screen for dashboard::Model {
    fn is_pending(&self) -> bool {
        self.is_pending()
    }

    fn last_error(&self) -> Option<&Error> {
        self.last_error()
    }
}

struct Script<M: Model> {
    intents: VecDeque<M::Intent>,
}

impl<M: Model> fmt::Debug for Script<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("intents", &self.intents)
            .finish()
    }
}

impl<M: Screen> Script<M> {
    fn next_intent(&mut self, model: &M) -> Option<M::Intent> {
        if model.is_pending() {
            return None;
        }
        if model.last_error().is_some() || model.is_final() {
            if !self.intents.is_empty() {
                log::debug!("Discarding {} remaining intent(s)", self.intents.len());
                self.intents.clear();
            }
            return None;
        }
        self.intents.pop_front()
    }
}

impl<M: Screen> ModelRender for Script<M> {
    type Model = M;

    fn render_model(&mut self, model: &Self::Model, _: M::RenderHint) -> Option<M::Intent> {
        self.next_intent(model)
    }
}

/// Submit the intents one after another until the model becomes idle.
///
/// Stops after the first error.
pub(crate) async fn run_script<M>(
    shared_env: &Arc<Environment>,
    model: &mut M,
    intents: impl IntoIterator<Item = M::Intent>,
) where
    M: Screen + 'static,
    M::Intent: Send + 'static,
    M::Effect: Send + 'static,
    M::Task: ExecuteTask<Environment, Effect = M::Effect>,
{
    let mut script = Script::<M> {
        intents: intents.into_iter().collect(),
    };
    let (message_tx, mut message_rx) = message_channel(MESSAGE_CHANNEL_CAPACITY);
    let mut message_port = MessagePort::new(message_tx);
    let mut task_context = TaskContext {
        message_port: message_port.clone(),
        task_executor: TaskSpawner::<M>::new(Arc::clone(shared_env)),
    };
    let message_loop = async {
        let Some(intent) = script.next_intent(model) else {
            return;
        };
        message_port.submit_intent(intent);
        loop {
            match consume_messages(&mut message_rx, &mut task_context, model, &mut script).await {
                MessagesConsumed::IntentRejected(intent) => {
                    log::warn!("Intent rejected: {intent:?}");
                }
                MessagesConsumed::ChannelClosed => (),
                MessagesConsumed::NoProgress => {
                    if model.is_pending() || !shared_env.all_tasks_finished() {
                        log::debug!("Continuing message loop until all tasks finished");
                        continue;
                    }
                    // Models that did not change are not rendered
                    if let Some(intent) = script.next_intent(model) {
                        message_port.submit_intent(intent);
                        continue;
                    }
                }
            }
            log::debug!("Exiting message loop");
            break;
        }
    };
    tokio::select! {
        () = message_loop => (),
        _ = signal::ctrl_c() => {
            log::info!("Terminating after receiving Ctrl-C/SIGINT...");
        }
    }
}
