//! Remote detail loader.
//!
//! DESIGN
//! ======
//! [`detail_load`] moves the state to `Loading` synchronously and returns the
//! future that awaits the fetch and publishes its resolution. Callers wrap
//! that future with [`crate::util::task::abortable`] (or `spawn_abortable` in
//! the browser) so unmount cancels it before any late update lands.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::blog::{BlogDetail, DetailState};

/// Somewhere a detail view keeps its [`DetailState`].
pub trait DetailCell {
    fn with_state(&self, f: impl FnOnce(&mut DetailState));
}

impl DetailCell for RwSignal<DetailState> {
    fn with_state(&self, f: impl FnOnce(&mut DetailState)) {
        if self.try_update(f).is_none() {
            // The owning view is gone but the task handle did not cancel this load.
            #[cfg(feature = "hydrate")]
            log::debug!("detail state disposed before the load published");
        }
    }
}

impl DetailCell for Rc<RefCell<DetailState>> {
    fn with_state(&self, f: impl FnOnce(&mut DetailState)) {
        f(&mut self.borrow_mut());
    }
}

/// Start the single load for a mounted detail view.
///
/// The state enters `Loading` before this returns. The returned future
/// resolves the state exactly once when `fetch` completes; if `fetch` never
/// completes the state stays `Loading`.
pub fn detail_load<C, Fut>(cell: C, fetch: Fut) -> impl Future<Output = ()>
where
    C: DetailCell,
    Fut: Future<Output = Result<BlogDetail, String>>,
{
    cell.with_state(|state| {
        state.begin();
    });
    async move {
        let outcome = fetch.await;
        cell.with_state(move |state| {
            state.resolve(outcome);
        });
    }
}
