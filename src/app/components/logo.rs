use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::config::DashboardConfig;

/// Brand mark shared by both logo variants
#[component]
fn LogoMark() -> Element {
    rsx! {
        div { class: "c-logo__mark" }
    }
}

/// Expanded brand: mark plus fading-in brand text, links to the app root
#[component]
pub fn Logo() -> Element {
    let config = use_context::<DashboardConfig>();

    rsx! {
        Link {
            to: Route::Home {},
            class: "c-logo",
            LogoMark {}
            span { class: "c-logo__text", "{config.brand_name}" }
        }
    }
}

/// Collapsed brand: mark only, placeholder anchor
#[component]
pub fn LogoIcon() -> Element {
    rsx! {
        a {
            href: "#",
            class: "c-logo c-logo--icon",
            onclick: move |evt| evt.prevent_default(),
            LogoMark {}
        }
    }
}
