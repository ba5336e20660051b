//! Error types for snapshot refreshes and user-triggered mutations.
//!
//! Three categories, matching how failures are surfaced:
//!
//! - [`ParseError`] - the snapshot payload violates the tree invariants
//! - [`SnapshotError`] - a whole-tree refresh failed (transport or parse);
//!   surfaced non-fatally, the last-known-good snapshot stays in place
//! - [`OperationRejected`] - the server refused a mutation; shown to the
//!   user verbatim, then followed by an unconditional refresh

use thiserror::Error;

/// The snapshot payload is not a valid tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Payload is not valid JSON or is missing required fields.
    #[error("invalid JSON: {0}")]
    Json(String),
    /// The server sent `null` (its initial scan has not finished).
    #[error("snapshot is null")]
    NullSnapshot,
    /// The root node must be a directory with an empty path.
    #[error("malformed root node (path {path:?}, is_dir {is_dir})")]
    BadRoot { path: String, is_dir: bool },
    /// A non-directory node carries a children array.
    #[error("non-directory node {0:?} carries children")]
    ChildrenOnFile(String),
    /// The same path occurs twice. Paths are identity keys, and a payload
    /// encoding a cycle necessarily repeats a path, so this check also
    /// rejects cyclic snapshots before any traversal can loop.
    #[error("duplicate path {0:?} in snapshot")]
    DuplicatePath(String),
}

/// A snapshot refresh failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The server could not be reached, or answered with a failure status.
    #[error("transport error: {0}")]
    Transport(String),
    /// The payload arrived but violates the tree invariants.
    #[error("invalid snapshot: {0}")]
    Parse(#[from] ParseError),
}

/// The server returned a non-success status for a mutation, or the request
/// never reached it. Carries the raw server-supplied failure text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperationRejected {
    /// HTTP status, when a response was received at all.
    pub status: Option<u16>,
    /// Failure text for display; never interpreted by the client.
    pub message: String,
}

impl OperationRejected {
    /// A rejection without an HTTP status (request never settled normally).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}
