//! Client-side tree synchronization and navigation state machine for a
//! remote file hierarchy.
//!
//! This crate is the pure half of the treegrid browser client: no DOM, no
//! network, no browser types, so all of it compiles and tests natively.
//!
//! - [`tree`] - snapshot data model, parse-time validation, path lookup
//! - [`fragment`] - path <-> URL-fragment codec
//! - [`store`] - owned snapshot + navigation state
//! - [`view`] - pure projection into a render-agnostic view model
//! - [`api`] - the [`FileApi`] seam over the remote operations
//! - [`coordinator`] - mutation pipeline with its unconditional refresh
//!
//! The browser crate supplies the `FileApi` implementation, the change
//! feed (polling + server push), and the rendering.

pub mod api;
pub mod coordinator;
pub mod error;
pub mod fragment;
pub mod store;
pub mod tree;
pub mod view;

pub use api::{FileApi, FilePayload};
pub use coordinator::{Mutation, MutationReport, apply};
pub use error::{OperationRejected, ParseError, SnapshotError};
pub use store::{NavigationState, TreeStore};
pub use tree::{FileKind, Timestamp, TreeNode};
pub use view::{EntryAction, GridView, ViewEntry, ViewModel};
