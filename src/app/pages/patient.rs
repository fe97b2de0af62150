use dioxus::prelude::*;

use crate::app::components::{EmptyState, PageHeader};
use crate::app::routes::Route;
use crate::config::DashboardConfig;

#[component]
pub fn Home() -> Element {
    let config = use_context::<DashboardConfig>();

    rsx! {
        div { class: "c-page c-page--home",
            PageHeader {
                title: config.brand_name.clone(),
                subtitle: "Patient portal".to_string(),
            }
            Link { to: Route::Overview {}, class: "c-page__cta", "Open patient dashboard" }
        }
    }
}

// Rendered for the bare "/patient" path until the mount navigation lands
#[component]
pub fn PatientIndex() -> Element {
    rsx! {
        Overview {}
    }
}

#[component]
pub fn Overview() -> Element {
    rsx! {
        div { class: "c-page",
            PageHeader {
                title: "Overview".to_string(),
                subtitle: "Summary of your care at a glance".to_string(),
            }
            EmptyState { message: "No recent activity".to_string() }
        }
    }
}

#[component]
pub fn PatientInformation() -> Element {
    rsx! {
        div { class: "c-page",
            PageHeader {
                title: "Patient Information".to_string(),
                subtitle: "Personal and contact details".to_string(),
            }
            EmptyState { message: "No patient information on file".to_string() }
        }
    }
}

#[component]
pub fn Documents() -> Element {
    rsx! {
        div { class: "c-page",
            PageHeader { title: "Documents".to_string() }
            EmptyState { message: "No documents uploaded yet".to_string() }
        }
    }
}

#[component]
pub fn AppointmentDetails() -> Element {
    rsx! {
        div { class: "c-page",
            PageHeader {
                title: "Appointment Details".to_string(),
                subtitle: "Upcoming and past appointments".to_string(),
            }
            EmptyState { message: "No appointments scheduled".to_string() }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "c-not-found",
            h1 { "Page not found" }
            p { class: "c-not-found__path", "{path}" }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
