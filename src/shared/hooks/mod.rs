// Custom Dioxus hooks
pub mod use_presence;
pub mod use_sidebar_state;

pub use use_presence::use_presence;
pub use use_sidebar_state::{use_sidebar_state, SidebarState};
