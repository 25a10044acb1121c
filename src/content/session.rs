// src/content/session.rs
//! One page visit as a cancellable scope.
//!
//! A [`PageSession`] owns the task that loads the page and every
//! subscription the page acquired. Closing or dropping the session aborts
//! the load, which drops every in-flight per-card request with it, and
//! releases the subscriptions exactly once. State flows to the view through
//! a watch channel, so a view that has gone away is never updated.

use super::{Page, PageData, PageError, PageState};
use std::future::Future;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A page-scoped side effect (content-protection or audio-unlock listener)
/// whose release hook runs when the page is left.
pub struct Subscription {
    name: String,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(name: impl Into<String>, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            name: name.into(),
            release: Some(Box::new(release)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            log::debug!("Releasing page subscription '{}'", self.name);
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The lifetime of one page visit.
pub struct PageSession<T> {
    page: Page,
    state: watch::Receiver<PageState<T>>,
    task: Option<JoinHandle<()>>,
    subscriptions: Vec<Subscription>,
}

impl<T> PageSession<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Enters the page: starts `load` on the runtime in the `Loading` state.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open<F>(page: Page, load: F) -> Self
    where
        F: Future<Output = Result<PageData<T>, PageError>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(PageState::Loading);
        let task = tokio::spawn(async move {
            let state = PageState::settle(page, load.await);
            // Nobody is watching any more: the view was torn down.
            if tx.send(state).is_err() {
                log::debug!("{} page settled after its view closed", page);
            }
        });

        log::debug!("Opened {} page session", page);
        Self {
            page,
            state: rx,
            task: Some(task),
            subscriptions: Vec::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PageState<T> {
        self.state.borrow().clone()
    }

    /// Waits for the load to reach a terminal state.
    pub async fn settled(&mut self) -> PageState<T> {
        match self.state.wait_for(PageState::is_terminal).await {
            Ok(state) => state.clone(),
            // The load task ended without settling, i.e. it panicked.
            Err(_) => {
                log::error!("{} page load ended without a result", self.page);
                PageState::Errored(format!(
                    "Failed to load {}: internal error",
                    self.page.subject()
                ))
            }
        }
    }

    /// Registers a side effect that must be undone when the page is left.
    pub fn subscribe(&mut self, name: impl Into<String>, release: impl FnOnce() + Send + 'static) {
        self.subscriptions.push(Subscription::new(name, release));
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// Leaves the page: aborts any outstanding work and waits until it has
    /// been dropped, then releases subscriptions.
    pub async fn close(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // A cancelled join error is the expected outcome here.
            let _ = task.await;
        }
        log::debug!("Closed {} page session", self.page);
    }
}

impl<T> Drop for PageSession<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
