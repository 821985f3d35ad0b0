//! Cancellable task handles tied to component lifetime.
//!
//! A [`TaskHandle`] aborts its future when dropped, so registering it with
//! `on_cleanup` cancels in-flight work when the owning view unmounts.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

/// Owner of an abortable future. Dropping it aborts the future.
#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn abort(&self) {
        self.abort.abort();
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Wrap `future` so that it resolves to `None` once its handle is aborted.
pub fn abortable<F>(future: F) -> (impl Future<Output = Option<F::Output>>, TaskHandle)
where
    F: Future,
{
    let (abort, registration) = AbortHandle::new_pair();
    let task = Abortable::new(future, registration);
    (async move { task.await.ok() }, TaskHandle { abort })
}

/// Spawn `future` on the local executor, returning its cancellation handle.
#[cfg(feature = "hydrate")]
pub fn spawn_abortable<F>(future: F) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
{
    let (task, handle) = abortable(future);
    leptos::task::spawn_local(async move {
        if task.await.is_none() {
            log::debug!("task aborted before completion");
        }
    });
    handle
}
