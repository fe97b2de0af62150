use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid dashboard config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid routing base '{0}': must start with '/'")]
    InvalidRoutingBase(String),

    #[error("Invalid initial view '{0}': must be a relative route segment")]
    InvalidInitialView(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
