use serde::{Deserialize, Serialize};

/// Glyphs available to navigation entries and sidebar controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavIcon {
    AccountTree,
    PersonAdd,
    Document,
    Calendar,
    Menu,
    Close,
}

impl NavIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIcon::AccountTree => "account-tree",
            NavIcon::PersonAdd => "person-add",
            NavIcon::Document => "document",
            NavIcon::Calendar => "calendar",
            NavIcon::Menu => "menu",
            NavIcon::Close => "close",
        }
    }
}

/// One entry of the dashboard navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub label: String,
    /// Route path, relative to the routing base unless it starts with '/'
    pub href: String,
    pub icon: NavIcon,
    #[serde(default)]
    pub section: Option<String>,
}

impl NavigationLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon,
            section: None,
        }
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Absolute route path this link navigates to
    pub fn target(&self, base: &str) -> String {
        resolve_href(base, &self.href)
    }

    /// Whether the resolved target stays under `base`
    pub fn resolves_under(&self, base: &str) -> bool {
        let base = normalize_base(base);
        let target = self.target(base);
        if base.is_empty() {
            return target.starts_with('/');
        }
        target == base
            || target
                .strip_prefix(base)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Resolve a link href against the dashboard routing base
pub fn resolve_href(base: &str, href: &str) -> String {
    if href.starts_with('/') {
        return href.to_string();
    }

    let base = normalize_base(base);
    let href = href.trim_start_matches("./");
    if href.is_empty() {
        return if base.is_empty() { "/".to_string() } else { base.to_string() };
    }

    format!("{}/{}", base, href)
}

/// Links sharing the same `section` value, in first-appearance order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSection {
    pub section: Option<String>,
    pub links: Vec<NavigationLink>,
}

impl LinkSection {
    /// Heading text to render; hidden when collapsed or for unnamed sections
    pub fn heading(&self, expanded: bool) -> Option<&str> {
        if !expanded {
            return None;
        }
        self.section.as_deref().filter(|name| !name.is_empty())
    }
}

/// Group links by their `section`, keeping the order in which each distinct
/// section value first appears. Links without a section form one group.
pub fn group_by_section(links: &[NavigationLink]) -> Vec<LinkSection> {
    let mut sections: Vec<LinkSection> = Vec::new();

    for link in links {
        match sections.iter_mut().find(|s| s.section == link.section) {
            Some(existing) => existing.links.push(link.clone()),
            None => sections.push(LinkSection {
                section: link.section.clone(),
                links: vec![link.clone()],
            }),
        }
    }

    sections
}

/// Number of section headings the desktop sidebar renders
pub fn visible_heading_count(links: &[NavigationLink], expanded: bool) -> usize {
    group_by_section(links)
        .iter()
        .filter(|section| section.heading(expanded).is_some())
        .count()
}

/// Navigation entries of the patient dashboard
pub fn patient_links() -> Vec<NavigationLink> {
    vec![
        NavigationLink::new("Overview", "overview", NavIcon::AccountTree),
        NavigationLink::new("Patient Information", "appointmentdetails", NavIcon::PersonAdd),
        NavigationLink::new("Documents", "documents", NavIcon::Document),
        NavigationLink::new("Appointment Details", "appointmentDetails", NavIcon::Calendar),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn link(label: &str, section: Option<&str>) -> NavigationLink {
        let link = NavigationLink::new(label, label.to_lowercase(), NavIcon::Document);
        match section {
            Some(name) => link.in_section(name),
            None => link,
        }
    }

    #[test]
    fn test_resolve_relative_href() {
        assert_eq!(resolve_href("/patient", "documents"), "/patient/documents");
        assert_eq!(resolve_href("/patient/", "documents"), "/patient/documents");
        assert_eq!(resolve_href("/patient", "./overview"), "/patient/overview");
    }

    #[test]
    fn test_resolve_absolute_and_empty_href() {
        assert_eq!(resolve_href("/patient", "/"), "/");
        assert_eq!(resolve_href("/patient", "/other/page"), "/other/page");
        assert_eq!(resolve_href("/patient", ""), "/patient");
        assert_eq!(resolve_href("/", ""), "/");
        assert_eq!(resolve_href("/", "documents"), "/documents");
    }

    #[test]
    fn test_patient_links_order_and_targets() {
        let links = patient_links();
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Patient Information", "Documents", "Appointment Details"]
        );

        let documents = links.iter().find(|l| l.href == "documents").unwrap();
        assert_eq!(documents.target("/patient"), "/patient/documents");
        assert!(links.iter().all(|l| l.section.is_none()));
    }

    #[test]
    fn test_patient_links_resolve_under_base() {
        assert!(patient_links().iter().all(|l| l.resolves_under("/patient")));
    }

    #[test]
    fn test_resolves_under_rejects_escaping_hrefs() {
        let outside = NavigationLink::new("Home", "/", NavIcon::AccountTree);
        assert!(!outside.resolves_under("/patient"));

        let sibling = NavigationLink::new("Other", "/patients/list", NavIcon::Document);
        assert!(!sibling.resolves_under("/patient"));

        let nested = NavigationLink::new("Nested", "/patient/documents", NavIcon::Document);
        assert!(nested.resolves_under("/patient/"));
    }

    #[test]
    fn test_group_without_sections_is_single_group() {
        let sections = group_by_section(&patient_links());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section, None);
        assert_eq!(sections[0].links.len(), 4);
        assert_eq!(sections[0].heading(true), None);
    }

    #[test]
    fn test_group_keeps_first_appearance_order() {
        let links = vec![
            link("A", Some("Records")),
            link("B", None),
            link("C", Some("Visits")),
            link("D", Some("Records")),
        ];
        let sections = group_by_section(&links);

        let names: Vec<_> = sections.iter().map(|s| s.section.as_deref()).collect();
        assert_eq!(names, vec![Some("Records"), None, Some("Visits")]);

        let records: Vec<_> = sections[0].links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(records, vec!["A", "D"]);
    }

    #[test]
    fn test_headings_hidden_when_collapsed() {
        let links = vec![link("A", Some("Records")), link("B", Some("Visits"))];
        assert_eq!(visible_heading_count(&links, false), 0);
        assert!(group_by_section(&links).iter().all(|s| s.heading(false).is_none()));
    }

    #[test]
    fn test_heading_count_matches_distinct_non_empty_sections() {
        let links = vec![
            link("A", Some("Records")),
            link("B", None),
            link("C", Some("")),
            link("D", Some("Visits")),
            link("E", Some("Records")),
            link("F", Some("Billing")),
        ];

        let distinct: HashSet<_> = links
            .iter()
            .filter_map(|l| l.section.as_deref())
            .filter(|s| !s.is_empty())
            .collect();

        assert_eq!(visible_heading_count(&links, true), distinct.len());
        assert_eq!(visible_heading_count(&links, true), 3);
    }

    #[test]
    fn test_every_link_lands_in_exactly_one_group() {
        let links = vec![
            link("A", Some("Records")),
            link("B", None),
            link("C", Some("Visits")),
            link("D", None),
        ];
        let total: usize = group_by_section(&links).iter().map(|s| s.links.len()).sum();
        assert_eq!(total, links.len());
    }

    #[test]
    fn test_nav_icon_as_str() {
        assert_eq!(NavIcon::AccountTree.as_str(), "account-tree");
        assert_eq!(NavIcon::PersonAdd.as_str(), "person-add");
        assert_eq!(NavIcon::Menu.as_str(), "menu");
        assert_eq!(NavIcon::Close.as_str(), "close");
    }
}
