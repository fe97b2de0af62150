//! Structured logging for the patient dashboard shell
//!
//! Every UI transition is logged with an `operation` field so traces from the
//! browser console and the native shell can be filtered the same way.

use crate::domain::models::{PresencePhase, SidebarEvent};

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    InitialNavigation,
    SidebarHover,
    DrawerToggle,
    DrawerPresence,
    LinkValidation,
    ConfigLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::InitialNavigation => "initial_navigation",
            LogOperation::SidebarHover => "sidebar_hover",
            LogOperation::DrawerToggle => "drawer_toggle",
            LogOperation::DrawerPresence => "drawer_presence",
            LogOperation::LinkValidation => "link_validation",
            LogOperation::ConfigLoad => "config_load",
        }
    }

    pub fn for_event(event: SidebarEvent) -> LogOperation {
        match event {
            SidebarEvent::PointerEnter | SidebarEvent::PointerLeave => LogOperation::SidebarHover,
            SidebarEvent::OpenDrawer | SidebarEvent::CloseDrawer => LogOperation::DrawerToggle,
        }
    }
}

/// Log the one-time navigation performed when the dashboard mounts
pub fn log_initial_navigation(target: &str) {
    tracing::info!(
        operation = LogOperation::InitialNavigation.as_str(),
        target = target,
        "Navigating to initial dashboard view"
    );
}

/// Log an initial view that does not match any dashboard route
pub fn log_initial_navigation_failed(target: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::InitialNavigation.as_str(),
        target = target,
        error = error,
        "Initial dashboard view is not a known route"
    );
}

/// Log a sidebar input event and the resulting flag
pub fn log_sidebar_event(event: SidebarEvent, value: bool, changed: bool) {
    tracing::debug!(
        operation = LogOperation::for_event(event).as_str(),
        event = event.as_str(),
        value = value,
        changed = changed,
        "Sidebar event applied"
    );
}

/// Log a drawer mount phase change
pub fn log_presence_change(from: PresencePhase, to: PresencePhase) {
    tracing::debug!(
        operation = LogOperation::DrawerPresence.as_str(),
        from = from.as_str(),
        to = to.as_str(),
        "Drawer presence changed"
    );
}

/// Log a navigation link whose target escapes the routing base
pub fn log_link_outside_base(label: &str, target: &str, base: &str) {
    tracing::warn!(
        operation = LogOperation::LinkValidation.as_str(),
        label = label,
        target = target,
        routing_base = base,
        "Navigation link resolves outside the dashboard routing base"
    );
}

/// Log a rejected config override; the defaults are used instead
pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::ConfigLoad.as_str(),
        error = error,
        "Dashboard config override rejected, using defaults"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::InitialNavigation.as_str(), "initial_navigation");
        assert_eq!(LogOperation::SidebarHover.as_str(), "sidebar_hover");
        assert_eq!(LogOperation::DrawerToggle.as_str(), "drawer_toggle");
        assert_eq!(LogOperation::DrawerPresence.as_str(), "drawer_presence");
        assert_eq!(LogOperation::LinkValidation.as_str(), "link_validation");
        assert_eq!(LogOperation::ConfigLoad.as_str(), "config_load");
    }

    #[test]
    fn test_log_operation_for_event() {
        assert_eq!(
            LogOperation::for_event(SidebarEvent::PointerLeave).as_str(),
            "sidebar_hover"
        );
        assert_eq!(
            LogOperation::for_event(SidebarEvent::OpenDrawer).as_str(),
            "drawer_toggle"
        );
    }
}
