//! Cancellable deferred tasks keyed by session id.
//!
//! Hold expiry and exit settlement are scheduled here. A fired task must
//! re-validate the session's state under the site lock before acting, so
//! a stale fire is a no-op. Cancellation is cooperative: callers only
//! cancel while holding the site lock, which guarantees a running task is
//! either still sleeping or blocked on that same lock — never mid-mutation.

use std::future::Future;
use std::time::Duration;

use dashmap::DashMap;
use tokio::task::AbortHandle;

use parkhub_core::types::id::SessionId;

/// Registry of pending deferred tasks, at most one per session.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    tasks: DashMap<SessionId, AbortHandle>,
}

impl TimerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run after `delay`, replacing any pending task
    /// for the same session.
    pub fn schedule<F>(&self, session_id: SessionId, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        if let Some(previous) = self.tasks.insert(session_id, handle.abort_handle()) {
            previous.abort();
        }
    }

    /// Cancel the pending task for a session. Returns whether one was
    /// pending.
    pub fn cancel(&self, session_id: &SessionId) -> bool {
        match self.tasks.remove(session_id) {
            Some((_, handle)) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Forget a task without aborting it. Called from inside the fired
    /// task itself once it has claimed its session.
    pub fn discard(&self, session_id: &SessionId) {
        self.tasks.remove(session_id);
    }

    /// Number of pending tasks.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}
