//! UI components built with Leptos.
//!
//! - [`browser`] - the file browser (toolbar + navigable grid)

pub mod browser;

pub use browser::Browser;
