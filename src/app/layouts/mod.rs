pub mod sidebar_patient;

pub use sidebar_patient::SidebarPatient;
