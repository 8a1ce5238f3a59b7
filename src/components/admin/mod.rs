//! Resume admin panel.
//!
//! Tabs for each resume section, record cards, and an inline form for the
//! record being edited. "Save" persists to localStorage; "Export JSON"
//! downloads the same data.

mod form;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use self::form::FormBuilder;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::RecordSummary;
use crate::models::{AppRoute, FieldErrors, FormValues, Notice, Section};
use crate::utils::{dom, storage};

stylance::import_crate_style!(css, "src/components/admin/admin.module.css");

#[component]
pub fn AdminEditorPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let admin = ctx.admin;
    let active = Memo::new(move |_| admin.with(|a| a.active_section()));

    let on_save = move |_: MouseEvent| {
        let result = admin.with_untracked(|a| storage::save_resume(a.data()));
        match result {
            Ok(()) => ctx.notify(Notice::new("Changes saved successfully!")),
            Err(err) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::error_1(&err.to_string().into());
                ctx.notify(Notice::new(format!("Save failed: {}", err)));
            }
        }
    };

    let on_export = move |_: MouseEvent| {
        if let Err(err) = admin.with_untracked(|a| storage::export_resume(a.data())) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&err.to_string().into());
            ctx.notify(Notice::new(format!("Export failed: {}", err)));
        }
    };

    view! {
        <div class=css::page on:contextmenu=|ev: MouseEvent| ev.prevent_default()>
            <header class=css::header>
                <a class=css::back href=AppRoute::Explorer.to_hash()>
                    <Icon icon=ic::BACK />
                    <span>{format!("Back to {}", APP_NAME)}</span>
                </a>
                <h1 class=css::title>{move || format!("Admin Panel - {}", active.get())}</h1>
                <div class=css::headerActions>
                    <button class=css::primary on:click=on_save>
                        <Icon icon=ic::SAVE />
                        "Save"
                    </button>
                    <button class=css::secondary on:click=on_export>
                        <Icon icon=ic::DOWNLOAD />
                        "Export JSON"
                    </button>
                </div>
            </header>

            <nav class=css::tabs role="tablist">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let class = move || {
                            if active.get() == section {
                                format!("{} {}", css::tab, css::tabActive)
                            } else {
                                css::tab.to_string()
                            }
                        };
                        view! {
                            <button
                                class=class
                                role="tab"
                                aria-selected=move || (active.get() == section).to_string()
                                on:click=move |_| admin.update(|a| a.set_section(section))
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class=css::content>
                <SectionBody />
            </main>
        </div>
    }
}

/// Either the edit form or the card list for the active section.
#[component]
fn SectionBody() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let admin = ctx.admin;
    let editing = Memo::new(move |_| admin.with(|a| a.editing_active()));

    move || match editing.get() {
        Some(target) => {
            let heading = admin.with_untracked(|a| a.form_heading()).unwrap_or_default();
            let initial = admin
                .with_untracked(|a| a.form_values())
                .unwrap_or_default();
            let on_submit = move |values: FormValues| -> Result<(), FieldErrors> {
                let mut result = Ok(());
                admin.update(|a| result = a.submit(&values));
                result
            };

            view! {
                <div class=css::formCard>
                    <h2 class=css::formHeading>
                        <Icon icon=ic::EDIT />
                        {heading}
                    </h2>
                    <FormBuilder
                        fields=target.section.fields()
                        initial=initial
                        on_submit=on_submit
                        on_cancel=move |()| admin.update(|a| a.cancel_editing())
                    />
                </div>
            }
            .into_any()
        }
        None => view! { <RecordList /> }.into_any(),
    }
}

#[component]
fn RecordList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let admin = ctx.admin;
    let summaries = Memo::new(move |_| admin.with(|a| a.summaries()));
    let section = Memo::new(move |_| admin.with(|a| a.active_section()));

    let on_add = move |_: MouseEvent| admin.update(|a| a.add_item(dom::timestamp_id()));

    view! {
        <div class=css::list>
            {move || {
                let records = summaries.get();
                if records.is_empty() {
                    return view! {
                        <p class=css::empty>
                            {format!("No {} entries yet.", section.get().singular())}
                        </p>
                    }
                    .into_any();
                }
                records
                    .into_iter()
                    .enumerate()
                    .map(|(index, summary)| view! { <RecordCard index=index summary=summary /> })
                    .collect_view()
                    .into_any()
            }}
            <button class=css::addButton on:click=on_add>
                <Icon icon=ic::PLUS />
                {move || format!("Add New {}", section.get().singular())}
            </button>
        </div>
    }
}

#[component]
fn RecordCard(index: usize, summary: RecordSummary) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let admin = ctx.admin;

    let on_edit = move |_: MouseEvent| {
        admin.update(|a| {
            let section = a.active_section();
            a.start_editing(section, index);
        })
    };
    let on_delete = move |_: MouseEvent| admin.update(|a| a.remove_item(index));

    view! {
        <article class=css::card>
            <div class=css::cardBody>
                <h3 class=css::cardTitle>{summary.title}</h3>
                <dl class=css::cardFields>
                    {summary
                        .fields
                        .into_iter()
                        .map(|field| {
                            let class = if field.wide {
                                format!("{} {}", css::cardField, css::cardFieldWide)
                            } else {
                                css::cardField.to_string()
                            };
                            view! {
                                <div class=class>
                                    <dt>{format!("{}:", field.label)}</dt>
                                    <dd>{field.value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
            </div>
            <div class=css::cardActions>
                <button class=css::iconButton title="Edit" aria-label="Edit" on:click=on_edit>
                    <Icon icon=ic::EDIT />
                </button>
                <button
                    class=format!("{} {}", css::iconButton, css::danger)
                    title="Delete"
                    aria-label="Delete"
                    on:click=on_delete
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </article>
    }
}
