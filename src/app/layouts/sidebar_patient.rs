//! Patient dashboard layout.
//!
//! Desktop: a fixed sidebar that widens while hovered. Below the `md`
//! breakpoint: a top bar whose menu button opens a full-screen drawer.
//! The routed view renders beside the sidebar with a matching left margin.

use dioxus::prelude::*;

use crate::app::components::{Icon, Logo, LogoIcon, SidebarLink};
use crate::app::routes::Route;
use crate::config::DashboardConfig;
use crate::domain::models::{
    group_by_section, patient_links, resolve_href, NavIcon, NavigationLink, PresencePhase,
    SidebarEvent,
};
use crate::shared::hooks::{use_presence, use_sidebar_state};
use crate::shared::logging::{
    log_initial_navigation, log_initial_navigation_failed, log_link_outside_base,
};
use crate::shared::utils::{cn, when};

/// A desktop sidebar group ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub heading: Option<String>,
    pub links: Vec<NavigationLink>,
}

pub fn section_views(links: &[NavigationLink], expanded: bool) -> Vec<SectionView> {
    group_by_section(links)
        .into_iter()
        .map(|section| SectionView {
            heading: section.heading(expanded).map(str::to_string),
            links: section.links,
        })
        .collect()
}

pub fn sidebar_class(expanded: bool) -> String {
    cn([
        "c-sidebar",
        when(expanded, "c-sidebar--expanded", "c-sidebar--collapsed"),
    ])
}

pub fn content_class(expanded: bool) -> String {
    cn([
        "c-dashboard__content",
        when(
            expanded,
            "c-dashboard__content--expanded",
            "c-dashboard__content--collapsed",
        ),
    ])
}

pub fn drawer_class(phase: PresencePhase) -> String {
    cn(["c-drawer", phase.modifier_class().unwrap_or_default()])
}

/// A drawer entry; drawer links always show their label
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerLinkView {
    pub link: NavigationLink,
    pub expanded: bool,
}

pub fn drawer_link_views(links: &[NavigationLink]) -> Vec<DrawerLinkView> {
    links
        .iter()
        .map(|link| DrawerLinkView {
            link: link.clone(),
            expanded: true,
        })
        .collect()
}

/// Dashboard route for the mount navigation. Paths that only match the
/// catch-all are rejected so a bad `initial_view` never lands on not-found.
pub fn initial_route(target: &str) -> Result<Route, String> {
    match target.parse::<Route>() {
        Ok(Route::NotFound { .. }) => Err(format!("no dashboard route matches '{}'", target)),
        Ok(route) => Ok(route),
        Err(err) => Err(err.to_string()),
    }
}

/// Fires once per mount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountOnce {
    fired: bool,
}

impl MountOnce {
    /// Returns `true` the first time only
    pub fn take(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

fn validated_links(routing_base: &str) -> Vec<NavigationLink> {
    let links = patient_links();
    for link in &links {
        if !link.resolves_under(routing_base) {
            log_link_outside_base(&link.label, &link.target(routing_base), routing_base);
        }
    }
    links
}

/// Navigate to `target` once, after the first render
fn use_initial_navigation(target: String) {
    let navigator = use_navigator();
    let mut once = use_signal(MountOnce::default);

    use_effect(move || {
        if !once.write().take() {
            return;
        }

        match initial_route(&target) {
            Ok(route) => {
                log_initial_navigation(&target);
                navigator.push(route);
            }
            Err(err) => log_initial_navigation_failed(&target, &err),
        }
    });
}

#[component]
pub fn SidebarPatient() -> Element {
    let config = use_context::<DashboardConfig>();
    let base = config.routing_base.clone();

    let links = use_hook({
        let base = base.clone();
        move || validated_links(&base)
    });
    let mut state = use_sidebar_state();
    let drawer_phase = use_presence(state.drawer_open, config.drawer_transition_ms);

    use_initial_navigation(resolve_href(&base, &config.initial_view));

    let expanded = (state.expanded)();
    let sections = section_views(&links, expanded);
    let drawer_links = drawer_link_views(&links);

    let sidebar_class = sidebar_class(expanded);
    let content_class = content_class(expanded);
    let drawer_class = drawer_class(drawer_phase());
    let sidebar_style = config.sidebar_style();
    let content_style = config.content_style();
    let drawer_style = config.drawer_style();

    rsx! {
        div { class: "c-dashboard",
            // Desktop sidebar
            aside {
                class: "{sidebar_class}",
                style: "{sidebar_style}",
                onmouseenter: move |_| state.dispatch(SidebarEvent::PointerEnter),
                onmouseleave: move |_| state.dispatch(SidebarEvent::PointerLeave),
                div { class: "c-sidebar__inner",
                    div { class: "c-sidebar__scroll",
                        if expanded {
                            Logo {}
                        } else {
                            LogoIcon {}
                        }
                        nav { class: "c-sidebar__nav",
                            for (index, section) in sections.into_iter().enumerate() {
                                div { key: "{index}", class: "c-sidebar__section",
                                    if let Some(heading) = section.heading {
                                        h3 { class: "c-sidebar__heading", "{heading}" }
                                    }
                                    for link in section.links {
                                        SidebarLink {
                                            key: "{link.href}",
                                            link: link.clone(),
                                            routing_base: base.clone(),
                                            expanded,
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Mobile top bar
            div { class: "c-mobile-bar",
                div { class: "c-mobile-bar__row",
                    h1 { class: "c-mobile-bar__title" }
                    button {
                        class: "c-mobile-bar__toggle",
                        aria_label: "Open menu",
                        onclick: move |_| state.dispatch(SidebarEvent::OpenDrawer),
                        Icon { icon: NavIcon::Menu }
                    }
                }
            }

            // Mobile drawer, kept mounted while its exit animation runs
            if drawer_phase().is_mounted() {
                div {
                    class: "{drawer_class}",
                    style: "{drawer_style}",
                    role: "dialog",
                    "aria-modal": "true",
                    div { class: "c-drawer__header",
                        h2 { class: "c-drawer__title", "Menu" }
                        button {
                            class: "c-drawer__close",
                            aria_label: "Close menu",
                            onclick: move |_| state.dispatch(SidebarEvent::CloseDrawer),
                            Icon { icon: NavIcon::Close }
                        }
                    }
                    nav { class: "c-drawer__nav",
                        for view in drawer_links {
                            SidebarLink {
                                key: "{view.link.href}",
                                link: view.link.clone(),
                                routing_base: base.clone(),
                                expanded: view.expanded,
                            }
                        }
                    }
                }
            }

            main { class: "{content_class}", style: "{content_style}",
                Outlet::<Route> {}
            }
        }
    }
}
