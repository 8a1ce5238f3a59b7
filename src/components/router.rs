//! Application router component.
//!
//! Uses native hashchange events instead of leptos_router for true hash
//! routing, so the app works from any static host.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route signal is derived from `#/...`
//! - **WindowShell never re-renders on navigation**: only its body switches
//! - **Toast lives outside the window**: notices survive route changes

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::admin::AdminEditorPage;
use crate::components::explorer::ExplorerWindow;
use crate::components::toast::Toast;
use crate::components::window_shell::WindowShell;
use crate::models::AppRoute;

/// Main application router.
///
/// - `#/` (or anything unknown) → explorer
/// - `#/admin` → resume admin editor
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <WindowShell route=route_memo>
            <Show
                when=move || route_memo.get() == AppRoute::Admin
                fallback=|| view! { <ExplorerWindow /> }
            >
                <AdminEditorPage />
            </Show>
        </WindowShell>
        <Toast />
    }
}
