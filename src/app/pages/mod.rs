pub mod patient;

pub use patient::{
    AppointmentDetails, Documents, Home, NotFound, Overview, PatientIndex, PatientInformation,
};
