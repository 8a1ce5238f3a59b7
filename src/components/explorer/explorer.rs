//! Main explorer component.
//!
//! ## Layout
//!
//! - **Left**: folder tree ([`Sidebar`])
//! - **Right**: path bar above the content pane
//! - **Overlay**: context menu, rendered only while open

use leptos::prelude::*;

use super::content::ContentView;
use super::context_menu::ContextMenuOverlay;
use super::pathbar::PathBar;
use super::sidebar::Sidebar;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

#[component]
pub fn ExplorerWindow() -> impl IntoView {
    view! {
        // Suppress the browser menu everywhere inside the window
        <div class=css::explorer on:contextmenu=|ev| ev.prevent_default()>
            <Sidebar />
            <div class=css::main>
                <PathBar />
                <ContentView />
            </div>
            <ContextMenuOverlay />
        </div>
    }
}
