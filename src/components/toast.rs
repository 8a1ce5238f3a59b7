//! Transient notice display.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::TOAST_DURATION_MS;

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Shows `AppContext::notice` and clears it after [`TOAST_DURATION_MS`].
#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    Effect::new(move |_| {
        let generation = ctx.notice.with(|slot| slot.current().map(|_| slot.generation()));
        let Some(generation) = generation else {
            return;
        };
        Timeout::new(TOAST_DURATION_MS, move || {
            ctx.notice.update(|slot| slot.expire(generation));
        })
        .forget();
    });

    move || {
        ctx.notice.with(|slot| slot.current().cloned()).map(|notice| {
            view! {
                <div class=css::toast role="status" aria-live="polite">
                    {notice.message().to_string()}
                </div>
            }
        })
    }
}
