//! In-process session history: the address bar plus back/forward entries.
//!
//! Stands in for a browser's `window.history` / `window.location`. Adapters read the
//! current URL from it and write through [`push`](BrowserHistory::push) (new entry) or
//! [`replace`](BrowserHistory::replace) (mutate current entry).

use std::sync::{Mutex, MutexGuard};

use url::Url;

#[derive(Debug)]
struct HistoryState {
    entries: Vec<Url>,
    index: usize,
}

/// Linear history with a cursor. Pushing discards forward entries.
///
/// **Interaction**: Shared as `Arc<BrowserHistory>` between a [`UrlParamsAdapter`](super::UrlParamsAdapter)
/// and the host, which simulates user navigation with [`navigate`](Self::navigate),
/// [`back`](Self::back) and [`forward`](Self::forward).
#[derive(Debug)]
pub struct BrowserHistory {
    inner: Mutex<HistoryState>,
}

impl BrowserHistory {
    /// History with a single entry at `initial`, which must be an absolute URL.
    pub fn new(initial: &str) -> Result<Self, url::ParseError> {
        Ok(Self::from_url(Url::parse(initial)?))
    }

    pub fn from_url(initial: Url) -> Self {
        Self {
            inner: Mutex::new(HistoryState {
                entries: vec![initial],
                index: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, HistoryState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// URL of the current entry.
    pub fn current(&self) -> Url {
        let state = self.state();
        state.entries[state.index].clone()
    }

    /// Current URL as a string.
    pub fn location(&self) -> String {
        self.current().to_string()
    }

    /// Adds an entry after the current one, dropping any forward entries.
    pub fn push(&self, url: Url) {
        let mut state = self.state();
        let keep = state.index + 1;
        state.entries.truncate(keep);
        state.entries.push(url);
        state.index = keep;
    }

    /// Overwrites the current entry.
    pub fn replace(&self, url: Url) {
        let mut state = self.state();
        let idx = state.index;
        state.entries[idx] = url;
    }

    /// Pushes `href` resolved against the current URL, like following a link.
    pub fn navigate(&self, href: &str) -> Result<(), url::ParseError> {
        let next = self.current().join(href)?;
        self.push(next);
        Ok(())
    }

    /// Moves the cursor back one entry. False if already at the first entry.
    pub fn back(&self) -> bool {
        let mut state = self.state();
        if state.index == 0 {
            return false;
        }
        state.index -= 1;
        true
    }

    /// Moves the cursor forward one entry. False if already at the last entry.
    pub fn forward(&self) -> bool {
        let mut state = self.state();
        if state.index + 1 >= state.entries.len() {
            return false;
        }
        state.index += 1;
        true
    }

    /// Number of entries (`history.length`).
    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor position, 0-based.
    pub fn index(&self) -> usize {
        self.state().index
    }
}
