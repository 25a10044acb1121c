// src/content/state.rs
//! Page results and the per-visit state machine.

use super::{Degradation, ItemFailure, Page, PageError};
use serde::Serialize;

/// A page view-model together with everything that was degraded to build it.
///
/// An empty `degradations` list means the board matched the expected shape
/// exactly; otherwise the presentation layer decides whether to say so.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData<T> {
    pub view: T,
    pub degradations: Vec<Degradation>,
}

impl<T> PageData<T> {
    pub fn new(view: T, degradations: Vec<Degradation>) -> Self {
        Self { view, degradations }
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    /// Cards dropped because one of their fetches failed.
    pub fn failed_items(&self) -> impl Iterator<Item = &ItemFailure> {
        self.degradations.iter().filter_map(|d| match d {
            Degradation::ItemFailed(failure) => Some(failure),
            _ => None,
        })
    }

    pub fn failure_count(&self) -> usize {
        self.failed_items().count()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageData<U> {
        PageData {
            view: f(self.view),
            degradations: self.degradations,
        }
    }
}

/// Where a page visit stands.
///
/// `Loading` is the initial state; `Ready` and `Errored` are terminal for the
/// visit. There is no retry transition: a new visit starts a new state.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    /// Loaded, possibly with a partial dataset.
    Ready(PageData<T>),
    /// A page-level failure, as shown to the user.
    Errored(String),
}

impl<T> PageState<T> {
    /// Settles a finished load. Failures are logged in full and reduced to
    /// a user-facing message.
    pub fn settle(page: Page, result: Result<PageData<T>, PageError>) -> Self {
        match result {
            Ok(data) => {
                if data.is_degraded() {
                    log::info!(
                        "{} page ready with {} degradation(s)",
                        page,
                        data.degradations.len()
                    );
                }
                Self::Ready(data)
            }
            Err(err) => {
                log::error!("Error loading {} page: {}", page, err);
                Self::Errored(format!(
                    "Failed to load {}: {}",
                    page.subject(),
                    err.user_summary()
                ))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn ready(&self) -> Option<&PageData<T>> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
