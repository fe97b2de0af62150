pub mod common;
pub mod icons;
pub mod logo;
pub mod sidebar_link;

pub use common::{EmptyState, PageHeader};
pub use icons::Icon;
pub use logo::{Logo, LogoIcon};
pub use sidebar_link::SidebarLink;
