//! The tree store: the one owned piece of mutable state.
//!
//! Holds the last-fetched snapshot and the navigation state, constructed
//! once at startup and passed around by the caller; there are no module
//! globals. Single-threaded by construction (browser event loop), so no
//! synchronization is involved: a refresh that lands while a mutation is
//! in flight is just an earlier overwrite of the same state, and both
//! converge on the latest server truth.

use crate::tree::TreeNode;
use crate::view::{self, ViewModel};

/// Client-owned, ephemeral navigation state. Persists across snapshot
/// refreshes even when the current path stops resolving.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Currently viewed directory; `""` is the root.
    pub current_path: String,
    /// Search filter, kept trimmed and normalized; `""` means no filter.
    pub filter: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeStore {
    snapshot: Option<TreeNode>,
    navigation: NavigationState,
}

impl TreeStore {
    /// A store with no snapshot yet, starting at the given path (decoded
    /// from the URL fragment at load time, root otherwise).
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            snapshot: None,
            navigation: NavigationState {
                current_path: initial_path.into(),
                filter: String::new(),
            },
        }
    }

    /// Install a freshly fetched snapshot, discarding the previous one.
    ///
    /// The navigation path is deliberately left alone even if it no longer
    /// resolves against the new root; the projector then renders the
    /// "nothing to show" view rather than redirecting anywhere.
    pub fn replace_snapshot(&mut self, root: TreeNode) {
        self.snapshot = Some(root);
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.navigation.current_path = path.into();
    }

    /// Store the search filter, normalized once so every later match is a
    /// plain substring test.
    pub fn set_filter(&mut self, text: &str) {
        self.navigation.filter = view::normalize(text.trim());
    }

    pub fn current_path(&self) -> &str {
        &self.navigation.current_path
    }

    pub fn filter(&self) -> &str {
        &self.navigation.filter
    }

    pub fn snapshot(&self) -> Option<&TreeNode> {
        self.snapshot.as_ref()
    }

    /// The node the current path points at in the latest snapshot.
    pub fn resolved(&self) -> Option<&TreeNode> {
        self.snapshot
            .as_ref()
            .and_then(|root| root.resolve(&self.navigation.current_path))
    }

    /// Run the view projector against the current state.
    pub fn project(&self) -> ViewModel {
        view::project(
            self.resolved(),
            &self.navigation.current_path,
            &self.navigation.filter,
        )
    }
}
