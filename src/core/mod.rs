//! Core logic for the resume explorer and admin editor.
//!
//! This module provides:
//! - [`ItemStore`] read-only item table with tree queries
//! - [`ExplorerState`] selection, expansion, and context menu state
//! - [`options_for`] context menu generation and placement
//! - [`AdminEditor`] resume section editing and validation

pub mod admin;
pub mod error;
mod explorer;
pub mod menu;
mod resume_tree;
mod store;

pub use admin::{AdminEditor, RecordSummary};
pub use explorer::ExplorerState;
pub use store::ItemStore;
