//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`window_shell`] - Desktop window chrome around every screen
//! - [`explorer`] - Resume file explorer
//! - [`admin`] - Resume data editor
//! - [`toast`] - Transient notices
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod admin;
pub mod explorer;
pub mod icons;
pub mod router;
pub mod toast;
pub mod window_shell;

pub use router::AppRouter;
