//! Context menu overlay.
//!
//! Positioned at the clamped pointer location stored in the explorer state.
//! Pointer-down outside the menu, Escape, and a window resize dismiss it.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::models::{MenuEntry, MenuOption};

stylance::import_crate_style!(css, "src/components/explorer/context_menu.module.css");

#[component]
pub fn ContextMenuOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let menu_ref = NodeRef::<Div>::new();

    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if !ctx.explorer.with_untracked(|state| state.menu().is_visible()) {
            return;
        }
        let key = ev.key();
        ctx.explorer.update(|state| state.handle_key(&key));
    });

    let pointer_handle = window_event_listener(ev::mousedown, move |ev| {
        if !ctx.explorer.with_untracked(|state| state.menu().is_visible()) {
            return;
        }
        let inside_menu = match (menu_ref.get_untracked(), ev.target()) {
            (Some(menu), Some(target)) => target
                .dyn_into::<web_sys::Node>()
                .is_ok_and(|node| menu.contains(Some(&node))),
            _ => false,
        };
        ctx.explorer
            .update(|state| state.handle_pointer_down(inside_menu));
    });

    // Clamped position is stale after a resize
    let resize_handle = window_event_listener(ev::resize, move |_| {
        if ctx.explorer.with_untracked(|state| state.menu().is_visible()) {
            ctx.explorer.update(|state| state.dismiss_menu());
        }
    });

    on_cleanup(move || {
        key_handle.remove();
        pointer_handle.remove();
        resize_handle.remove();
    });

    let menu = Memo::new(move |_| {
        ctx.explorer.with(|state| {
            let position = state.menu().position()?;
            Some((state.menu_options()?, position))
        })
    });

    move || {
        menu.get().map(|(entries, position)| {
            view! {
                <div
                    node_ref=menu_ref
                    class=css::menu
                    role="menu"
                    style=format!("left: {}px; top: {}px;", position.x, position.y)
                    on:contextmenu=|ev: ev::MouseEvent| ev.prevent_default()
                >
                    {entries
                        .into_iter()
                        .map(|entry| match entry {
                            MenuEntry::Separator => {
                                view! { <div class=css::separator role="separator"></div> }
                                    .into_any()
                            }
                            MenuEntry::Action(option) => {
                                view! { <MenuRow option=option /> }.into_any()
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}

#[component]
fn MenuRow(option: MenuOption) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let MenuOption {
        action,
        label,
        bold,
        disabled,
    } = option;

    let class = if bold {
        format!("{} {}", css::item, css::itemBold)
    } else {
        css::item.to_string()
    };

    let on_click = move |_: ev::MouseEvent| {
        if disabled {
            return;
        }
        let mut notice = None;
        ctx.explorer.update(|state| notice = state.invoke(action));
        if let Some(notice) = notice {
            ctx.notify(notice);
        }
    };

    view! {
        <button class=class role="menuitem" disabled=disabled on:click=on_click>
            {label}
        </button>
    }
}
