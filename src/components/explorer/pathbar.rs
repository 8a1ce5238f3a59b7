//! Path bar component.
//!
//! Breadcrumb of the current selection with clickable ancestor segments.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Item;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Segment data for path bar rendering.
#[derive(Clone, PartialEq)]
struct PathSegment {
    item: Item,
    /// Last segment (the selection itself) is not clickable
    current: bool,
}

/// Path bar shown above the content pane.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let segments = Memo::new(move |_| {
        ctx.explorer.with(|state| {
            let path = state.current_path();
            let last = path.len().saturating_sub(1);
            path.iter()
                .enumerate()
                .map(|(idx, item)| PathSegment {
                    item: (*item).clone(),
                    current: idx == last,
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <nav class=css::pathbar aria-label="Location">
            {move || {
                let segments = segments.get();
                if segments.is_empty() {
                    return view! {
                        <span class=css::placeholder>"No item selected"</span>
                    }.into_any();
                }

                segments
                    .into_iter()
                    .enumerate()
                    .map(|(idx, seg)| {
                        let show_separator = idx > 0;
                        view! {
                            <>
                                {show_separator.then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                <Segment segment=seg />
                            </>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </nav>
    }
}

#[component]
fn Segment(segment: PathSegment) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let PathSegment { item, current } = segment;
    let icon = ic::for_item(&item, false);
    let Item { id, name, .. } = item;

    let class = if current {
        format!("{} {}", css::segment, css::segmentCurrent)
    } else {
        css::segment.to_string()
    };

    view! {
        <button
            class=class
            disabled=current
            on:click=move |_| ctx.explorer.update(|state| state.select(&id))
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{name}</span>
        </button>
    }
}
