use dioxus::prelude::*;

use crate::domain::models::{SidebarEvent, SidebarUiState};
use crate::shared::logging::log_sidebar_event;

/// Signal-backed sidebar state, one signal per independent flag
#[derive(Clone, Copy)]
pub struct SidebarState {
    pub expanded: Signal<bool>,
    pub drawer_open: Signal<bool>,
}

impl SidebarState {
    pub fn snapshot(&self) -> SidebarUiState {
        SidebarUiState {
            sidebar_expanded: (self.expanded)(),
            mobile_drawer_open: (self.drawer_open)(),
        }
    }

    /// Apply an input event; only the signal the event owns is written
    pub fn dispatch(&mut self, event: SidebarEvent) {
        let mut next = self.snapshot();
        let changed = next.apply(event);

        match event {
            SidebarEvent::PointerEnter | SidebarEvent::PointerLeave => {
                log_sidebar_event(event, next.sidebar_expanded, changed);
                if changed {
                    self.expanded.set(next.sidebar_expanded);
                }
            }
            SidebarEvent::OpenDrawer | SidebarEvent::CloseDrawer => {
                log_sidebar_event(event, next.mobile_drawer_open, changed);
                if changed {
                    self.drawer_open.set(next.mobile_drawer_open);
                }
            }
        }
    }
}

/// Hook owning the sidebar flags; both start inactive and reset on remount
pub fn use_sidebar_state() -> SidebarState {
    let initial = SidebarUiState::default();
    let expanded = use_signal(|| initial.sidebar_expanded);
    let drawer_open = use_signal(|| initial.mobile_drawer_open);

    SidebarState {
        expanded,
        drawer_open,
    }
}
