//! Content pane.
//!
//! - Nothing selected: hint text
//! - Folder: grid of its children
//! - File: rendered Markdown

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::sidebar::open_menu_at;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Item;
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/explorer/content.module.css");

#[component]
pub fn ContentView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selected = Memo::new(move |_| ctx.explorer.with(|state| state.selected_item().cloned()));

    view! {
        <section class=css::content>
            {move || match selected.get() {
                None => view! { <EmptyHint /> }.into_any(),
                Some(item) if item.is_folder() => view! { <FolderView folder=item /> }.into_any(),
                Some(item) => view! { <FileView file=item /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn EmptyHint() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let tagline = ctx.site.with_value(|site| {
        if site.tagline.is_empty() {
            "Select an item to view its contents".to_string()
        } else {
            site.tagline.clone()
        }
    });

    view! {
        <div class=css::empty>
            <span class=css::emptyIcon><Icon icon=ic::COMPUTER /></span>
            <p>{tagline}</p>
        </div>
    }
}

#[component]
fn FolderView(folder: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (children, total) = ctx.explorer.with_untracked(|state| {
        let store = state.store();
        let children = store
            .children_of(&folder.id)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let total = match store.descendants_of(&folder.id) {
            Ok(all) => all.len(),
            Err(_err) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&format!("Folder listing truncated: {}", _err).into());
                children.len()
            }
        };
        (children, total)
    });
    let summary = match total {
        0 => String::new(),
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    };

    view! {
        <div class=css::folder>
            <h2 class=css::heading>{folder.name.clone()}</h2>
            <p class=css::details>{folder.details.clone()}</p>
            <p class=css::details>{summary}</p>
            {if children.is_empty() {
                view! { <p class=css::emptyFolder>"This folder is empty."</p> }.into_any()
            } else {
                view! {
                    <div class=css::grid role="list">
                        {children
                            .into_iter()
                            .map(|child| view! { <GridItem item=child /> })
                            .collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

/// Folder child tile. Double-click or Enter opens it.
#[component]
fn GridItem(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = StoredValue::new(item.id.clone());
    let icon = ic::for_item(&item, false);

    let open = move || id.with_value(|id| ctx.explorer.update(|state| state.select(id)));

    view! {
        <div
            class=css::tile
            role="listitem"
            tabindex="0"
            title=item.details.clone()
            on:dblclick=move |_: MouseEvent| open()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    open();
                }
            }
            on:contextmenu=move |ev: MouseEvent| id.with_value(|id| open_menu_at(ctx, id, &ev))
        >
            <span class=css::tileIcon><Icon icon=icon /></span>
            <span class=css::tileName>{item.name.clone()}</span>
            <span class=css::tileDetails>{item.details.clone()}</span>
        </div>
    }
}

#[component]
fn FileView(file: Item) -> impl IntoView {
    let html = markdown_to_html(file.content().unwrap_or_default());
    let icon = ic::for_item(&file, false);

    view! {
        <article class=css::file>
            <header class=css::fileHeader>
                <span class=css::fileIcon><Icon icon=icon /></span>
                <div>
                    <h2 class=css::heading>{file.name.clone()}</h2>
                    <p class=css::details>{file.details.clone()}</p>
                </div>
            </header>
            <div class=css::markdown inner_html=html></div>
        </article>
    }
}
