//! Application configuration.
//!
//! Centralizes the server endpoints and timing constants. The endpoint
//! shapes themselves are the server's contract; see `api`.

// =============================================================================
// Server Endpoints
// =============================================================================

/// Whole-tree snapshot (JSON; `null` until the server's first scan).
pub const TREE_ENDPOINT: &str = "/api/tree.json";

/// Multipart upload: `file` + `target_path` (directory).
pub const UPLOAD_ENDPOINT: &str = "/api/upload";

/// Multipart replace: `file` + `replace_path` (exact file path).
pub const UPDATE_ENDPOINT: &str = "/api/update";

/// JSON body `{ "path": ... }`.
pub const DELETE_ENDPOINT: &str = "/api/delete";

/// JSON body `{ "path": ... }`.
pub const CREATE_FOLDER_ENDPOINT: &str = "/api/create_folder";

/// Raw content by path; the percent-encoded path is appended.
pub const FILES_ENDPOINT: &str = "/api/files";

/// Server push channel (one-way invalidation events, no payload).
pub const EVENTS_ENDPOINT: &str = "/api/events";

// =============================================================================
// Synchronization
// =============================================================================

/// Fallback polling interval. Fires unconditionally, push channel or not,
/// as the correctness floor for staying synchronized.
pub const POLL_INTERVAL_MS: u32 = 5000;
