/// Input events the dashboard navigation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    PointerEnter,
    PointerLeave,
    OpenDrawer,
    CloseDrawer,
}

impl SidebarEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarEvent::PointerEnter => "pointer_enter",
            SidebarEvent::PointerLeave => "pointer_leave",
            SidebarEvent::OpenDrawer => "open_drawer",
            SidebarEvent::CloseDrawer => "close_drawer",
        }
    }
}

/// Desktop width and mobile drawer visibility.
///
/// The two flags are independent: hover events only touch `sidebar_expanded`,
/// drawer button presses only touch `mobile_drawer_open`. Both start inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarUiState {
    pub sidebar_expanded: bool,
    pub mobile_drawer_open: bool,
}

impl SidebarUiState {
    /// Apply an input event. Returns `true` when a flag changed.
    pub fn apply(&mut self, event: SidebarEvent) -> bool {
        let (flag, value) = match event {
            SidebarEvent::PointerEnter => (&mut self.sidebar_expanded, true),
            SidebarEvent::PointerLeave => (&mut self.sidebar_expanded, false),
            SidebarEvent::OpenDrawer => (&mut self.mobile_drawer_open, true),
            SidebarEvent::CloseDrawer => (&mut self.mobile_drawer_open, false),
        };

        let changed = *flag != value;
        *flag = value;
        changed
    }
}
