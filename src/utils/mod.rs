//! Utility modules for DOM access and display formatting.
//!
//! - [`dom`] - window/hash helpers and the blocking dialogs
//! - [`format`] - file size and modified-time display strings

pub mod dom;
pub mod format;
