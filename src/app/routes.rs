use dioxus::prelude::*;

use crate::app::layouts::SidebarPatient;
use crate::app::pages::{
    AppointmentDetails, Documents, Home, NotFound, Overview, PatientIndex, PatientInformation,
};
use crate::config::DashboardConfig;

// The "/patient" nest must match `DashboardConfig::routing_base`
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},

        #[nest("/patient")]
            #[layout(SidebarPatient)]
                #[route("/")]
                PatientIndex {},
                #[route("/overview")]
                Overview {},
                #[route("/appointmentdetails")]
                PatientInformation {},
                #[route("/documents")]
                Documents {},
                #[route("/appointmentDetails")]
                AppointmentDetails {},
            #[end_layout]
        #[end_nest]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| DashboardConfig::resolve(crate::config::BUILD_OVERRIDE));

    use_effect(|| {
        tracing::info!("Patient dashboard initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn AppShell() -> Element {
    // Bundled by build.rs from assets/css/main.css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Outlet::<Route> {}
    }
}
