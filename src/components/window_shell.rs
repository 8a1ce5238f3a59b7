//! Desktop window chrome: traffic lights, title, theme toggle, admin link.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/window_shell.module.css");

#[component]
pub fn WindowShell(route: Memo<AppRoute>, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (title, owner) = ctx
        .site
        .with_value(|site| (site.title.clone(), site.owner.clone()));

    let theme_icon = Signal::derive(move || {
        if ctx.theme.get().is_dark() {
            ic::SUN
        } else {
            ic::MOON
        }
    });
    let theme_label = move || {
        if ctx.theme.get().is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    // Switch to the other screen
    let nav = move || match route.get() {
        AppRoute::Explorer => (AppRoute::Admin, "Admin"),
        AppRoute::Admin => (AppRoute::Explorer, "Explorer"),
    };

    view! {
        <div class=css::desktop>
            <div class=css::window>
                <header class=css::titleBar>
                    <div class=css::trafficLights aria-hidden="true">
                        <span class=format!("{} {}", css::light, css::lightRed)></span>
                        <span class=format!("{} {}", css::light, css::lightYellow)></span>
                        <span class=format!("{} {}", css::light, css::lightGreen)></span>
                    </div>
                    <span class=css::title title=owner>{title}</span>
                    <div class=css::actions>
                        <button class=css::navLink on:click=move |_| nav().0.push()>
                            {move || nav().1}
                        </button>
                        <button
                            class=css::iconButton
                            title=theme_label
                            aria-label=theme_label
                            on:click=move |_| ctx.toggle_theme()
                        >
                            <Icon icon=theme_icon />
                        </button>
                    </div>
                </header>
                <div class=css::body>{children()}</div>
            </div>
        </div>
    }
}
