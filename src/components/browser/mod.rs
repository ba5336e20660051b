//! File browser UI components.
//!
//! Components:
//! - [`Browser`] - page shell with the toolbar and the grid
//! - [`Toolbar`] - upload form, folder creation, search input
//! - [`Grid`] - renders the projected view model

#[allow(clippy::module_inception)]
mod browser;
mod entry;
mod grid;
mod toolbar;

pub use browser::Browser;
pub use grid::Grid;
pub use toolbar::Toolbar;
