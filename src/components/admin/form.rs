//! Schema-driven record form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::models::{FieldErrors, FieldKind, FieldSpec, FormValues};

stylance::import_crate_style!(css, "src/components/admin/form.module.css");

/// Form for one record, built from its field schema.
///
/// `on_submit` returns the validation errors to show, if any.
#[component]
pub fn FormBuilder(
    fields: &'static [FieldSpec],
    initial: FormValues,
    #[prop(into)] on_submit: Callback<FormValues, Result<(), FieldErrors>>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let values = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match on_submit.run(values.get_untracked()) {
            Ok(()) => errors.set(FieldErrors::new()),
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <form class=css::form on:submit=handle_submit novalidate=true>
            <div class=css::grid>
                {fields
                    .iter()
                    .map(|field| view! { <Field field=*field values=values errors=errors /> })
                    .collect_view()}
            </div>
            <div class=css::buttons>
                <button type="submit" class=css::primary>"Save Changes"</button>
                <button
                    type="button"
                    class=css::secondary
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[component]
fn Field(
    field: FieldSpec,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let key = field.key;
    let input_id = format!("field-{}", key);

    let value = move || values.with(|v| v.get(key).cloned().unwrap_or_default());
    let set_value = move |text: String| {
        values.update(|v| {
            v.insert(key.to_string(), text);
        });
    };
    let error = move || errors.with(|e| e.get(key).cloned());

    let wrapper_class = if field.kind == FieldKind::LongText {
        format!("{} {}", css::field, css::fieldWide)
    } else {
        css::field.to_string()
    };
    let label = if field.required.is_some() {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let input = match field.kind {
        FieldKind::LongText => view! {
            <textarea
                id=input_id.clone()
                class=css::input
                rows=4
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Month | FieldKind::List => {
            let (input_type, placeholder) = match field.kind {
                FieldKind::Month => ("month", ""),
                FieldKind::List => ("text", "Enter items separated by commas"),
                _ => ("text", ""),
            };
            view! {
                <input
                    id=input_id.clone()
                    class=css::input
                    type=input_type
                    placeholder=placeholder
                    prop:value=value
                    on:input=move |ev| set_value(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class=wrapper_class>
            <label class=css::label for=input_id>{label}</label>
            {input}
            {move || error().map(|message| view! { <p class=css::error>{message}</p> })}
        </div>
    }
}
