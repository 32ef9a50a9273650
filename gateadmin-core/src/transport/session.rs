use arc_swap::{ArcSwap, ArcSwapOption};
use std::sync::Arc;

/// Known server version before any response has been seen.
pub const INITIAL_VERSION: &str = "0";

/// Client state shared by every transport built on it.
///
/// Holds the version token last adopted from the server and the bearer token
/// obtained at login. Clones share the same cells, so independently built
/// clients handed the same session observe one known version. Updates are
/// last-writer-wins.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionState>,
}

#[derive(Debug)]
struct SessionState {
    version: ArcSwap<String>,
    token: ArcSwapOption<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_version(INITIAL_VERSION)
    }

    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SessionState {
                version: ArcSwap::from_pointee(version.into()),
                token: ArcSwapOption::empty(),
            }),
        }
    }

    pub fn known_version(&self) -> String {
        self.inner.version.load().as_ref().clone()
    }

    /// Stores `version` and returns the value it replaced.
    pub fn set_known_version(&self, version: impl Into<String>) -> String {
        let previous = self.inner.version.swap(Arc::new(version.into()));
        previous.as_ref().clone()
    }

    pub fn token(&self) -> Option<Arc<String>> {
        self.inner.token.load_full()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.token.load().is_some()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.inner.token.store(Some(Arc::new(token.into())));
    }

    pub fn clear_token(&self) {
        self.inner.token.store(None);
    }

    /// True when both handles point at the same state.
    pub fn shares_state_with(&self, other: &Session) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
