// Domain models
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod presence;
pub mod sidebar_state;

pub use navigation::{
    group_by_section, patient_links, resolve_href, visible_heading_count, LinkSection, NavIcon,
    NavigationLink,
};
pub use presence::PresencePhase;
pub use sidebar_state::{SidebarEvent, SidebarUiState};
