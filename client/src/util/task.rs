//! Async work scoped to the component that started it.
//!
//! Page handlers start simulated API calls that resolve after a delay. The
//! task is tied to the reactive owner of the page, so navigating away aborts
//! it at its next await point and nothing it would have written (a stored
//! token, a notice, a form reset) lands on the next page.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::future::{AbortHandle, Abortable, Aborted};
use leptos::prelude::*;

/// Wrap `fut` so it resolves to `Err(Aborted)` once `owner` is cleaned up.
pub fn abort_on_cleanup<F: Future>(owner: &Owner, fut: F) -> Abortable<F> {
    let (handle, registration) = AbortHandle::new_pair();
    owner.with(|| on_cleanup(move || handle.abort()));
    Abortable::new(fut, registration)
}

/// Spawn `fut` on the local task queue, cancelled when `owner` is cleaned up.
pub fn spawn_scoped(owner: &Owner, fut: impl Future<Output = ()> + 'static) {
    let task = abort_on_cleanup(owner, fut);
    leptos::task::spawn_local(async move {
        if let Err(Aborted) = task.await {
            leptos::logging::log!("task cancelled by component teardown");
        }
    });
}

/// Owner of the component being built, for use with [`spawn_scoped`].
pub fn component_owner() -> Owner {
    Owner::current().unwrap_or_else(Owner::new)
}
