//! Resume explorer UI components.
//!
//! Components:
//! - [`ExplorerWindow`] - Sidebar, path bar, content pane, context menu
//! - [`sidebar`] - Recursive folder tree
//! - [`content`] - Folder grid or rendered file
//! - [`context_menu`] - Right-click menu overlay

mod content;
mod context_menu;
#[allow(clippy::module_inception)]
mod explorer;
mod pathbar;
mod sidebar;

pub use explorer::ExplorerWindow;
