//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::config::SiteConfig;
use crate::core::{AdminEditor, ExplorerState, ItemStore};
use crate::models::{Notice, NoticeSlot, Theme};
use crate::utils::{dom, storage};

/// Build the explorer store, logging any integrity defect.
///
/// A defective tree is still served: lookups tolerate missing ids and
/// traversals are depth-capped.
fn load_store() -> Arc<ItemStore> {
    let store = ItemStore::resume();
    match store.validate() {
        Ok(()) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&format!("Explorer tree loaded: {} items", store.len()).into());
        }
        Err(_err) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&format!("Explorer tree is invalid: {}", _err).into());
        }
    }
    Arc::new(store)
}

/// Global application context shared across all components.
///
/// `Copy` because every field is an arena-backed Leptos handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Explorer selection, expansion, and context menu.
    pub explorer: RwSignal<ExplorerState>,

    /// Admin panel state and the editable resume data.
    pub admin: RwSignal<AdminEditor>,

    /// Current color theme.
    pub theme: RwSignal<Theme>,

    /// Toast message currently shown, with its expiry generation.
    pub notice: RwSignal<NoticeSlot>,

    /// Site metadata from `assets/site.toml`.
    pub site: StoredValue<SiteConfig>,
}

impl AppContext {
    /// Creates the application context.
    ///
    /// Must run inside a reactive owner (the media query hook registers a
    /// listener).
    pub fn new() -> Self {
        let prefers_dark = use_media_query("(prefers-color-scheme: dark)");
        let theme = Theme::resolve(
            storage::stored_theme().as_deref(),
            prefers_dark.get_untracked(),
        );

        Self {
            explorer: RwSignal::new(ExplorerState::new(load_store())),
            admin: RwSignal::new(AdminEditor::new(storage::load_resume())),
            theme: RwSignal::new(theme),
            notice: RwSignal::new(NoticeSlot::default()),
            site: StoredValue::new(SiteConfig::load()),
        }
    }

    /// Show a toast message, replacing any current one.
    pub fn notify(&self, notice: Notice) {
        self.notice.update(|slot| {
            slot.show(notice);
        });
    }

    /// Flip light/dark and remember the choice.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        if let Err(_err) = storage::save_theme(next) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("Theme not saved: {}", _err).into());
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Keeps the `dark` class on `<html>` in sync with the theme
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move |_| {
        dom::set_root_class("dark", ctx.theme.get().is_dark());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: var(--color-bg);
                    color: var(--color-text);
                    font-family: var(--font-ui);
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: var(--color-danger); margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: var(--color-text-muted); margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: var(--color-danger); font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: var(--color-accent);
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 6px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
