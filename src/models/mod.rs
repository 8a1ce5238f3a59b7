//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Item`], [`ItemIcon`] - Explorer tree items
//! - [`MenuEntry`], [`MenuAction`], [`Notice`] - Context menu rows and results
//! - [`ResumeData`] and its records - Admin-editable resume sections
//! - [`AppRoute`] - Hash-based navigation
//! - [`Theme`] - Light/dark mode

mod item;
mod menu;
mod resume;
mod route;
mod theme;

pub use item::{Item, ItemIcon};
pub use menu::{MenuAction, MenuEntry, MenuOption, Notice, NoticeSlot, Point, Size};
pub use resume::{
    Certification, Experience, FieldErrors, FieldKind, FieldSpec, FormValues, Project,
    ResumeData, Section, SectionRecord,
};
pub use route::AppRoute;
pub use theme::Theme;
