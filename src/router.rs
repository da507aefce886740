//! Router Collaborator
//!
//! The facade reads and writes the URL through this one capability trait;
//! it never depends on a concrete routing ecosystem. Framework adapters
//! implement [`Router`] around their own location/history primitives.
//! [`MemoryRouter`] is the in-process implementation used by the crate's
//! tests and by headless hosts.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How a navigation affects history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Append a new history entry.
    Push,
    /// Overwrite the current history entry.
    Replace,
}

/// Read/write access to the URL's search portion.
///
/// `current_search` may return the string with or without a leading `?`;
/// the codec tolerates both. `navigate` receives a serialized query string
/// without the `?` prefix and is fire-and-forget: no completion signal, no
/// error channel, last write wins.
pub trait Router {
    fn current_search(&self) -> String;

    fn navigate(&self, search: &str, mode: NavigationMode);
}

impl<R: Router + ?Sized> Router for &R {
    fn current_search(&self) -> String {
        (**self).current_search()
    }

    fn navigate(&self, search: &str, mode: NavigationMode) {
        (**self).navigate(search, mode)
    }
}

impl<R: Router + ?Sized> Router for Box<R> {
    fn current_search(&self) -> String {
        (**self).current_search()
    }

    fn navigate(&self, search: &str, mode: NavigationMode) {
        (**self).navigate(search, mode)
    }
}

impl<R: Router + ?Sized> Router for Arc<R> {
    fn current_search(&self) -> String {
        (**self).current_search()
    }

    fn navigate(&self, search: &str, mode: NavigationMode) {
        (**self).navigate(search, mode)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    search: String,
    history: Vec<String>,
}

/// In-process router keeping a search string and a navigation history.
///
/// `Push` appends a history entry, `Replace` overwrites the current one,
/// mirroring browser history semantics.
#[derive(Debug, Default)]
pub struct MemoryRouter {
    state: Mutex<MemoryState>,
}

impl MemoryRouter {
    /// Create a router whose history starts at `initial_search`.
    pub fn new(initial_search: impl Into<String>) -> Self {
        let search = initial_search.into();
        MemoryRouter {
            state: Mutex::new(MemoryState {
                history: vec![search.clone()],
                search,
            }),
        }
    }

    /// The current search string.
    pub fn search(&self) -> String {
        self.state.lock().search.clone()
    }

    /// Snapshot of the navigation history, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state.lock().history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.state.lock().history.len()
    }
}

impl Router for MemoryRouter {
    fn current_search(&self) -> String {
        self.state.lock().search.clone()
    }

    fn navigate(&self, search: &str, mode: NavigationMode) {
        let mut state = self.state.lock();
        state.search = search.to_string();
        match mode {
            NavigationMode::Push => state.history.push(search.to_string()),
            NavigationMode::Replace => match state.history.last_mut() {
                Some(current) => *current = search.to_string(),
                None => state.history.push(search.to_string()),
            },
        }
    }
}
