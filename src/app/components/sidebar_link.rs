use dioxus::prelude::*;

use crate::app::components::icons::Icon;
use crate::domain::models::NavigationLink;
use crate::shared::utils::{cn, when};

pub fn sidebar_link_class(expanded: bool) -> String {
    cn([
        "c-sidebar-link",
        when(expanded, "c-sidebar-link--expanded", "c-sidebar-link--collapsed"),
    ])
}

/// Label text to render next to the icon
pub fn link_label(link: &NavigationLink, expanded: bool) -> Option<&str> {
    expanded.then_some(link.label.as_str())
}

/// One navigation entry: icon always, label only when expanded
#[component]
pub fn SidebarLink(link: NavigationLink, routing_base: String, expanded: bool) -> Element {
    let target = link.target(&routing_base);
    let class = sidebar_link_class(expanded);
    let label = link_label(&link, expanded).map(str::to_string);

    rsx! {
        Link {
            to: target,
            class: "{class}",
            div { class: "c-sidebar-link__icon",
                Icon { icon: link.icon }
            }
            if let Some(label) = label {
                span { class: "c-sidebar-link__label", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NavIcon;

    #[test]
    fn test_sidebar_link_class_alignment() {
        assert_eq!(sidebar_link_class(true), "c-sidebar-link c-sidebar-link--expanded");
        assert_eq!(sidebar_link_class(false), "c-sidebar-link c-sidebar-link--collapsed");
    }

    #[test]
    fn test_label_shown_only_when_expanded() {
        let link = NavigationLink::new("Documents", "documents", NavIcon::Document);
        assert_eq!(link_label(&link, true), Some("Documents"));
        assert_eq!(link_label(&link, false), None);
    }
}
