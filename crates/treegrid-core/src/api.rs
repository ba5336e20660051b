//! The seam between the state machine and the remote file-system service.
//!
//! [`FileApi`] abstracts the five remote operations so the store and the
//! mutation coordinator never touch the network directly. The browser
//! crate implements it over HTTP; tests implement it with [`mock`].
//!
//! Every operation is fire-once: no retry, no timeout, no cancellation.
//! A failed call is reported exactly once and never resubmitted.

use crate::error::{OperationRejected, SnapshotError};
use crate::tree::TreeNode;

/// File content carried through a mutation, read fully into memory before
/// the request is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePayload {
    /// Original filename, also used as the server-side name.
    pub name: String,
    pub bytes: Vec<u8>,
}

/// The remote operations the client consumes.
///
/// Futures are not required to be `Send`: everything runs on the single
/// browser event loop.
#[allow(async_fn_in_trait)]
pub trait FileApi {
    /// Fetch a whole-tree snapshot.
    async fn fetch_snapshot(&self) -> Result<TreeNode, SnapshotError>;

    /// Upload a new file into the given directory.
    async fn upload(&self, file: &FilePayload, directory: &str) -> Result<(), OperationRejected>;

    /// Replace the content of an existing file.
    async fn replace(&self, file: &FilePayload, path: &str) -> Result<(), OperationRejected>;

    /// Delete the entry at the given path.
    async fn remove(&self, path: &str) -> Result<(), OperationRejected>;

    /// Create a directory; the parent must already exist per the server.
    async fn create_directory(&self, path: &str) -> Result<(), OperationRejected>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    //! A scripted in-memory [`FileApi`] for tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::{FileApi, FilePayload};
    use crate::error::{OperationRejected, SnapshotError};
    use crate::tree::TreeNode;

    /// One recorded call, in arrival order.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        FetchSnapshot,
        Upload { name: String, directory: String },
        Replace { name: String, path: String },
        Remove { path: String },
        CreateDirectory { path: String },
    }

    /// Scripted api: queued snapshot results, queued mutation outcomes,
    /// and a log of every call made. An exhausted snapshot queue yields a
    /// transport error; an exhausted outcome queue yields success.
    #[derive(Default)]
    pub struct MockApi {
        snapshots: RefCell<VecDeque<Result<TreeNode, SnapshotError>>>,
        outcomes: RefCell<VecDeque<Result<(), OperationRejected>>>,
        log: RefCell<Vec<Call>>,
    }

    impl MockApi {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the result of the next snapshot fetch.
        pub fn push_snapshot(&self, result: Result<TreeNode, SnapshotError>) {
            self.snapshots.borrow_mut().push_back(result);
        }

        /// Queue the result of the next mutation.
        pub fn push_outcome(&self, result: Result<(), OperationRejected>) {
            self.outcomes.borrow_mut().push_back(result);
        }

        pub fn calls(&self) -> Vec<Call> {
            self.log.borrow().clone()
        }

        /// How many snapshot fetches have been made.
        pub fn fetch_count(&self) -> usize {
            self.log
                .borrow()
                .iter()
                .filter(|call| matches!(call, Call::FetchSnapshot))
                .count()
        }

        fn record(&self, call: Call) {
            self.log.borrow_mut().push(call);
        }

        fn next_outcome(&self) -> Result<(), OperationRejected> {
            self.outcomes.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    impl FileApi for MockApi {
        async fn fetch_snapshot(&self) -> Result<TreeNode, SnapshotError> {
            self.record(Call::FetchSnapshot);
            self.snapshots
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(SnapshotError::Transport("no scripted snapshot".into())))
        }

        async fn upload(
            &self,
            file: &FilePayload,
            directory: &str,
        ) -> Result<(), OperationRejected> {
            self.record(Call::Upload {
                name: file.name.clone(),
                directory: directory.to_string(),
            });
            self.next_outcome()
        }

        async fn replace(&self, file: &FilePayload, path: &str) -> Result<(), OperationRejected> {
            self.record(Call::Replace {
                name: file.name.clone(),
                path: path.to_string(),
            });
            self.next_outcome()
        }

        async fn remove(&self, path: &str) -> Result<(), OperationRejected> {
            self.record(Call::Remove {
                path: path.to_string(),
            });
            self.next_outcome()
        }

        async fn create_directory(&self, path: &str) -> Result<(), OperationRejected> {
            self.record(Call::CreateDirectory {
                path: path.to_string(),
            });
            self.next_outcome()
        }
    }
}
