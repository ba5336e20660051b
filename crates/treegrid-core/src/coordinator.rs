//! The mutation coordinator.
//!
//! Wraps each user-triggered mutation in the same pipeline: run the
//! operation, then fetch exactly one fresh snapshot no matter how the
//! operation settled. A rejected mutation may still have partially
//! applied server-side, so local state is never trusted; the refresh is
//! unconditional and the server's answer wins.

use crate::api::{FileApi, FilePayload};
use crate::error::{OperationRejected, SnapshotError};
use crate::tree::TreeNode;

/// A user-triggered mutation of the remote hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    Upload { file: FilePayload, directory: String },
    Replace { file: FilePayload, path: String },
    Delete { path: String },
    CreateFolder { path: String },
}

/// How a mutation settled: the server's verdict on the operation itself,
/// and the one snapshot refresh that followed it.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationReport {
    pub outcome: Result<(), OperationRejected>,
    pub refresh: Result<TreeNode, SnapshotError>,
}

/// Run one mutation to completion: operation, then refresh.
pub async fn apply<A: FileApi>(api: &A, mutation: Mutation) -> MutationReport {
    let outcome = match &mutation {
        Mutation::Upload { file, directory } => api.upload(file, directory).await,
        Mutation::Replace { file, path } => api.replace(file, path).await,
        Mutation::Delete { path } => api.remove(path).await,
        Mutation::CreateFolder { path } => api.create_directory(path).await,
    };

    let refresh = api.fetch_snapshot().await;

    MutationReport { outcome, refresh }
}
