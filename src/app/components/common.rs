use dioxus::prelude::*;

// Page heading used by every routed dashboard view (BEM: c-page)
#[component]
pub fn PageHeader(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "c-page__header",
            h1 { class: "c-page__title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "c-page__subtitle", "{subtitle}" }
            }
        }
    }
}

// Placeholder body for views with nothing to show yet (BEM: c-empty-state)
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            p { "{message}" }
        }
    }
}
