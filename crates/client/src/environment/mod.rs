// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, future::Future, marker::PhantomData, sync::Arc, time::Duration};

use discro::tasklet::OnChanged;
use infect::TaskContext;
use reqwest::Client;
use url::Url;

use crate::{
    navigation::Navigation,
    session::{SessionStore, tasklet::on_user_changed},
    task::{ExecuteTask, PendingTasksCounter},
    webapi::ClientEnvironment,
};

/// Shared, immutable environment of all screen models.
#[derive(Debug)]
pub struct Environment {
    service_url: Url,
    client: Client,
    session: SessionStore,
    navigation: Navigation,
    pending_tasks_counter: PendingTasksCounter,
}

// Tasks borrow the environment across threads.
static_assertions::assert_impl_all!(Environment: Send, Sync);

impl Environment {
    pub fn new(
        mut service_url: Url,
        request_timeout: Duration,
        session: SessionStore,
    ) -> anyhow::Result<Self> {
        if !service_url.path().ends_with('/') {
            // Otherwise the last path segment would be replaced when joining
            let path = format!("{}/", service_url.path());
            service_url.set_path(&path);
        }
        let client = Client::builder().timeout(request_timeout).build()?;
        let navigation = Navigation::new(session.is_authenticated());
        Ok(Self {
            service_url,
            client,
            session,
            navigation,
            pending_tasks_counter: PendingTasksCounter::new(),
        })
    }

    #[must_use]
    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    #[must_use]
    pub fn all_tasks_finished(&self) -> bool {
        self.pending_tasks_counter.all_pending_tasks_finished()
    }
}

impl ClientEnvironment for Environment {
    fn client(&self) -> &Client {
        &self.client
    }

    fn join_api_url(&self, query_suffix: &str) -> anyhow::Result<Url> {
        let api_url = self.service_url.join("api/")?.join(query_suffix)?;
        log::debug!("API URL: {api_url}");
        Ok(api_url)
    }

    fn session(&self) -> &SessionStore {
        &self.session
    }

    fn navigation(&self) -> &Navigation {
        &self.navigation
    }
}

/// Keeps the navigation in sync with the session.
///
/// Signing out leaves any guarded screen for the login screen. The
/// returned future finishes after the environment has been dropped.
pub fn on_session_changed(
    shared_env: &Arc<Environment>,
) -> impl Future<Output = ()> + Send + 'static {
    let env = Arc::downgrade(shared_env);
    on_user_changed(shared_env.session.subscribe_changed(), move |user| {
        let Some(env) = env.upgrade() else {
            return OnChanged::Abort;
        };
        let route = env.navigation.current();
        env.navigation.navigate(route, user.is_some());
        OnChanged::Continue
    })
}

/// Spawns the tasks of a screen model onto the tokio runtime.
pub struct TaskSpawner<M> {
    shared_env: Arc<Environment>,
    _model: PhantomData<fn() -> M>,
}

impl<M> TaskSpawner<M> {
    #[must_use]
    pub const fn new(shared_env: Arc<Environment>) -> Self {
        Self {
            shared_env,
            _model: PhantomData,
        }
    }

    #[must_use]
    pub const fn env(&self) -> &Arc<Environment> {
        &self.shared_env
    }
}

impl<M> Clone for TaskSpawner<M> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.shared_env))
    }
}

impl<M> fmt::Debug for TaskSpawner<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskSpawner")
            .field("shared_env", &self.shared_env)
            .finish_non_exhaustive()
    }
}

impl<M> infect::TaskExecutor<Self> for TaskSpawner<M>
where
    M: infect::Model + 'static,
    M::Intent: Send + 'static,
    M::Effect: Send + 'static,
    M::Task: ExecuteTask<Environment, Effect = M::Effect>,
{
    type Intent = M::Intent;
    type Effect = M::Effect;
    type Task = M::Task;

    fn spawn_task(&self, context: TaskContext<Self, Self::Intent, Self::Effect>, task: Self::Task) {
        let started_pending_task = self.shared_env.pending_tasks_counter.start_pending_task();
        debug_assert!(started_pending_task > 0);
        if started_pending_task == 1 {
            log::debug!("Started first pending task");
        }
        let shared_env = Arc::clone(&self.shared_env);
        let TaskContext {
            mut message_port, ..
        } = context;
        tokio::spawn(async move {
            log::debug!("Executing task: {task:?}");
            let effect = task.execute(&*shared_env).await;
            log::debug!("Task finished with effect: {effect:?}");
            // The message loop must not await an effect that has already been received.
            if shared_env.pending_tasks_counter.finish_pending_task() == 0 {
                log::debug!("Finished last pending task");
            }
            message_port.submit_effect(effect);
        });
    }
}
