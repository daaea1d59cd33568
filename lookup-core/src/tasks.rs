//! Keyed timers that report back as actions
//!
//! A [`TaskManager`] owns at most one task per [`TaskKey`]. Arming a key
//! again aborts whatever was armed before, which is what makes
//! search-as-you-type debouncing work:
//!
//! ```ignore
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::current(action_tx)?;
//!
//! // Only fires if no further keystroke arrives within a second
//! tasks.debounce("search", Duration::from_secs(1), async move {
//!     Action::SearchDidComplete { query, generation }
//! });
//!
//! // Drop the pending search
//! tasks.cancel(&"search".into());
//! ```
//!
//! Tasks are spawned on the runtime handle given at construction, so a
//! manager can be armed from synchronous code on any thread.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::Action;

/// Names a task slot. Arming an occupied slot replaces its task.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Debounced tasks keyed by name.
///
/// A task that completes sends its action through `action_tx`. A task that
/// is aborted first sends nothing.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
    handle: Handle,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Spawn onto `handle`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>, handle: Handle) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
            handle,
        }
    }

    /// Spawn onto the runtime this is called from.
    ///
    /// Fails outside a tokio runtime.
    pub fn current(action_tx: mpsc::UnboundedSender<A>) -> Result<Self, TryCurrentError> {
        Ok(Self::new(action_tx, Handle::try_current()?))
    }

    /// Run `future` after `duration`, replacing the task armed under `key`.
    ///
    /// Re-arming before the duration expires restarts the wait, so only the
    /// last call in a burst ever runs.
    pub fn debounce<F>(&mut self, key: impl Into<TaskKey>, duration: Duration, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        tracing::trace!(key = %key.name(), delay_ms = duration.as_millis() as u64, "debounce armed");

        let tx = self.action_tx.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(future.await);
        });

        self.tasks.insert(key, task.abort_handle());
        self
    }

    /// Abort the task under `key`, if any.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(task) = self.tasks.remove(key) {
            task.abort();
        }
    }

    /// Whether a task under `key` is armed and has not finished.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.get(key).is_some_and(|task| !task.is_finished())
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
