pub mod errors;
pub mod logging;
pub mod utils;

// Dioxus hooks (client and server)
pub mod hooks;
