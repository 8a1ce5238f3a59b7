//! Sidebar folder tree.
//!
//! Renders the desktop roots and, below each expanded folder, its children.
//! Click selects, the chevron toggles expansion, right-click opens the
//! context menu. Clicking the blank area below the tree clears the selection.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Item, Point};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/sidebar.module.css");

/// Left indent per nesting level (px).
const INDENT_PX: usize = 14;

/// Open the context menu for `id` at the pointer.
pub(super) fn open_menu_at(ctx: AppContext, id: &str, ev: &MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
    let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
    let viewport = dom::viewport_size();
    ctx.explorer
        .update(|state| state.open_menu(id, pointer, viewport));
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let roots = ctx.explorer.with_untracked(|state| {
        state
            .store()
            .roots()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <aside
            class=css::sidebar
            aria-label="Folders"
            on:click=move |_: MouseEvent| ctx.explorer.update(|state| state.clear_selection())
        >
            <ul class=css::tree role="tree">
                {roots
                    .into_iter()
                    .map(|item| view! { <TreeNode item=item depth=0 /> })
                    .collect_view()}
            </ul>
        </aside>
    }
}

/// One row of the tree plus its children when expanded.
#[component]
fn TreeNode(item: Item, depth: usize) -> AnyView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_folder = item.is_folder();
    let id = StoredValue::new(item.id.clone());

    let expanded = Memo::new(move |_| {
        ctx.explorer
            .with(|state| id.with_value(|id| state.is_expanded(id)))
    });
    let selected = Memo::new(move |_| {
        ctx.explorer
            .with(|state| id.with_value(|id| state.is_selected(id)))
    });
    let children = Memo::new(move |_| {
        if !expanded.get() {
            return Vec::new();
        }
        ctx.explorer.with_untracked(|state| {
            id.with_value(|id| {
                state
                    .store()
                    .children_of(id)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    let icon_item = item.clone();
    let icon = Signal::derive(move || ic::for_item(&icon_item, expanded.get()));
    let chevron = Signal::derive(move || {
        if expanded.get() {
            ic::CHEVRON_DOWN
        } else {
            ic::CHEVRON_RIGHT
        }
    });

    let row_class = move || {
        if selected.get() {
            format!("{} {}", css::row, css::rowSelected)
        } else {
            css::row.to_string()
        }
    };

    let on_select = move |ev: MouseEvent| {
        ev.stop_propagation();
        id.with_value(|id| ctx.explorer.update(|state| state.select(id)));
    };
    let on_toggle = move |ev: MouseEvent| {
        ev.stop_propagation();
        id.with_value(|id| ctx.explorer.update(|state| state.toggle_expand(id)));
    };
    let on_context_menu = move |ev: MouseEvent| {
        id.with_value(|id| open_menu_at(ctx, id, &ev));
    };

    view! {
        <li
            role="treeitem"
            aria-expanded=move || is_folder.then(|| expanded.get().to_string())
            aria-selected=move || selected.get().to_string()
        >
            <div
                class=row_class
                style=format!("padding-left: {}px", 4 + depth * INDENT_PX)
                title=item.details.clone()
                on:click=on_select
                on:contextmenu=on_context_menu
            >
                {if is_folder {
                    view! {
                        <button
                            class=css::chevron
                            aria-label="Toggle folder"
                            on:click=on_toggle
                        >
                            <Icon icon=chevron />
                        </button>
                    }.into_any()
                } else {
                    view! { <span class=css::chevronSpacer></span> }.into_any()
                }}
                <span class=css::icon><Icon icon=icon /></span>
                <span class=css::name>{item.name.clone()}</span>
            </div>
            <Show when=move || expanded.get()>
                <ul class=css::tree role="group">
                    <For
                        each=move || children.get()
                        key=|child| child.id.clone()
                        children=move |child| view! { <TreeNode item=child depth=depth + 1 /> }
                    />
                </ul>
            </Show>
        </li>
    }
    .into_any()
}
