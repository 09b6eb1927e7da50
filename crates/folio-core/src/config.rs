#![forbid(unsafe_code)]

//! Tracker configuration.
//!
//! Every field has a default matching the shipped page, so
//! `TrackerConfig::default()` needs no file at all. With the `config` feature
//! the struct can be loaded from JSON or TOML:
//!
//! ```toml
//! probe_bias_px = 5.0
//! fallback_nav_height_px = 60.0
//! default_id = "home"
//! coalesce_scroll = false
//! ```

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::nav::HOME_ID;
use crate::section::is_valid_id;

/// Selector matching every trackable section on the portfolio page.
pub const DEFAULT_SECTION_SELECTOR: &str = "section[id], div[id='home']";

/// Tuning knobs for the tracker and router.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct TrackerConfig {
    /// Pixels added below the nav bar when probing, so a section becomes
    /// active once its top edge has cleared the bar.
    pub probe_bias_px: f64,

    /// Nav bar height used while the bar is not yet measurable.
    pub fallback_nav_height_px: f64,

    /// Id that is active when no section holds the probe point.
    pub default_id: String,

    /// Merge bursts of scroll/resize events into one recompute per frame.
    pub coalesce_scroll: bool,

    /// CSS selector for sections.
    pub section_selector: String,

    /// CSS selector for the navigation bar element.
    pub nav_selector: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            probe_bias_px: 5.0,
            fallback_nav_height_px: 60.0,
            default_id: HOME_ID.to_owned(),
            coalesce_scroll: false,
            section_selector: DEFAULT_SECTION_SELECTOR.to_owned(),
            nav_selector: "nav".to_owned(),
        }
    }
}

impl TrackerConfig {
    /// Load from a JSON string and validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validated()
    }

    /// Load from a TOML string and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validated()
    }

    /// Serialize to JSON.
    #[cfg(feature = "config")]
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.probe_bias_px.is_finite() || self.probe_bias_px < 0.0 {
            errors.push(format!(
                "probe_bias_px must be finite and >= 0, got {}",
                self.probe_bias_px
            ));
        }

        if !self.fallback_nav_height_px.is_finite() || self.fallback_nav_height_px < 0.0 {
            errors.push(format!(
                "fallback_nav_height_px must be finite and >= 0, got {}",
                self.fallback_nav_height_px
            ));
        }

        if !is_valid_id(&self.default_id) {
            errors.push(format!(
                "default_id must be non-empty without whitespace or '#', got {:?}",
                self.default_id
            ));
        }

        if self.section_selector.trim().is_empty() {
            errors.push("section_selector must not be empty".into());
        }

        if self.nav_selector.trim().is_empty() {
            errors.push("nav_selector must not be empty".into());
        }

        errors
    }

    /// Consume `self`, returning it if valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
