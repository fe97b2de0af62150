//! Dashboard configuration.
//!
//! Holds the static knobs of the patient dashboard shell: brand text, the
//! routing base every navigation link resolves under, the view selected on
//! mount, and the animation timings shared between Rust and the stylesheet.
//! `App` provides it to the tree through context. A build can override any
//! field by setting `DASHBOARD_CONFIG` to a JSON object at compile time.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{DashboardError, Result};
use crate::shared::logging::log_config_fallback;

/// JSON override baked in at build time
pub const BUILD_OVERRIDE: Option<&str> = option_env!("DASHBOARD_CONFIG");

pub const DEFAULT_BRAND_NAME: &str = "DelhiCare";
pub const DEFAULT_ROUTING_BASE: &str = "/patient";
pub const DEFAULT_INITIAL_VIEW: &str = "overview";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Text shown next to the brand mark when the sidebar is expanded
    pub brand_name: String,
    /// Absolute path the dashboard routes are nested under
    pub routing_base: String,
    /// Relative route navigated to once when the dashboard mounts
    pub initial_view: String,
    pub drawer_transition_ms: u32,
    pub sidebar_transition_ms: u32,
    pub content_transition_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            routing_base: DEFAULT_ROUTING_BASE.to_string(),
            initial_view: DEFAULT_INITIAL_VIEW.to_string(),
            drawer_transition_ms: 300,
            sidebar_transition_ms: 200,
            content_transition_ms: 300,
        }
    }
}

impl DashboardConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Config from an optional JSON override; an invalid override falls back
    /// to the defaults with a warning.
    pub fn resolve(override_json: Option<&str>) -> Self {
        match override_json.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                log_config_fallback(&err.to_string());
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.routing_base.starts_with('/') {
            return Err(DashboardError::InvalidRoutingBase(self.routing_base.clone()));
        }
        if self.initial_view.is_empty() || self.initial_view.starts_with('/') {
            return Err(DashboardError::InvalidInitialView(self.initial_view.clone()));
        }
        Ok(())
    }

    /// Inline style carrying the drawer duration into the `c-drawer` animation
    pub fn drawer_style(&self) -> String {
        format!("--drawer-duration: {}ms;", self.drawer_transition_ms)
    }

    pub fn sidebar_style(&self) -> String {
        format!("transition-duration: {}ms;", self.sidebar_transition_ms)
    }

    pub fn content_style(&self) -> String {
        format!("transition-duration: {}ms;", self.content_transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brand_name, "DelhiCare");
        assert_eq!(config.routing_base, "/patient");
        assert_eq!(config.initial_view, "overview");
        assert_eq!(config.drawer_transition_ms, 300);
        assert_eq!(config.sidebar_transition_ms, 200);
    }

    #[test]
    fn test_from_json_partial_override_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{ "brand_name": "Clinic" }"#).unwrap();
        assert_eq!(config.brand_name, "Clinic");
        assert_eq!(config.routing_base, DEFAULT_ROUTING_BASE);
        assert_eq!(config.content_transition_ms, 300);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = DashboardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_relative_routing_base() {
        let err = DashboardConfig::from_json(r#"{ "routing_base": "patient" }"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRoutingBase(ref base) if base == "patient"));
    }

    #[test]
    fn test_validate_rejects_absolute_initial_view() {
        let config = DashboardConfig {
            initial_view: "/overview".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DashboardError::InvalidInitialView(_))
        ));
    }

    #[test]
    fn test_resolve_without_override_uses_defaults() {
        assert_eq!(DashboardConfig::resolve(None), DashboardConfig::default());
    }

    #[test]
    fn test_resolve_applies_valid_override() {
        let config = DashboardConfig::resolve(Some(r#"{ "initial_view": "documents" }"#));
        assert_eq!(config.initial_view, "documents");
        assert_eq!(config.routing_base, DEFAULT_ROUTING_BASE);
    }

    #[test]
    fn test_resolve_falls_back_on_invalid_override() {
        assert_eq!(
            DashboardConfig::resolve(Some(r#"{ "routing_base": "patient" }"#)),
            DashboardConfig::default()
        );
        assert_eq!(DashboardConfig::resolve(Some("{ not json")), DashboardConfig::default());
    }

    #[test]
    fn test_drawer_style() {
        let config = DashboardConfig {
            drawer_transition_ms: 450,
            ..Default::default()
        };
        assert_eq!(config.drawer_style(), "--drawer-duration: 450ms;");
        assert_eq!(config.sidebar_style(), "transition-duration: 200ms;");
        assert_eq!(config.content_style(), "transition-duration: 300ms;");
    }
}
