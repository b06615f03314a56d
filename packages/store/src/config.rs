//! # Dashboard configuration: `dashboard.toml`
//!
//! Defines the TOML file that the web binary embeds at compile time
//! (filename: [`DashboardConfig::filename`] = `"dashboard.toml"`). It tells the
//! client where the catalog API lives and tunes a few UI timings.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://green-world-vert.vercel.app"
//! request_timeout_secs = 30     # native builds only; browsers own their timeouts
//!
//! [ui]
//! redirect_delay_ms = 1500      # success banner shown this long before navigating
//! max_image_bytes = 20971520    # 20 MiB upload ceiling
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Remote API origin and request timeout. |
//! | [`UiConfig`] | Post-success redirect delay and image size ceiling. |
//!
//! All structs implement `Default` with the production values, so a missing or
//! empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote catalog API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin every endpoint path is appended to, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. 0 disables it.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// UI timing and upload policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

fn default_base_url() -> String {
    "https://green-world-vert.vercel.app".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_redirect_delay() -> u64 {
    1500
}

fn default_max_image_bytes() -> u64 {
    20 * 1024 * 1024
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to defaults when the text is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}, using defaults: {}", Self::filename(), e);
                Self::default()
            }
        }
    }

    /// API origin with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.ui.max_image_bytes, 20 * 1024 * 1024);
        assert_eq!(config.base_url(), "https://green-world-vert.vercel.app");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:3000/"

            [ui]
            redirect_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.ui.redirect_delay_ms, 0);
        assert_eq!(config.ui.max_image_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = DashboardConfig::from_toml_or_default("[api\nbase_url = 3");
        assert_eq!(config, DashboardConfig::default());
    }
}
