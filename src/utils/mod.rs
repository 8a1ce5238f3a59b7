//! Utility modules for web, DOM, and persistence operations.
//!
//! Provides:
//! - [`dom`] - Window, document, hash, and download helpers
//! - [`storage`] - localStorage persistence and JSON export
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

pub mod dom;
mod markdown;
pub mod storage;

pub use markdown::markdown_to_html;
