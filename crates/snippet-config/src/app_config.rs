//! Application configuration
//!
//! Configuration loaded from `.snippet-detail.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from `.snippet-detail.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the snippet service (no trailing slash needed)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How many snippets the comparison picker requests (single page)
    #[serde(default = "default_candidate_page_size")]
    pub candidate_page_size: u32,

    /// Sort expression used when listing comparison candidates
    #[serde(default = "default_candidate_sort")]
    pub candidate_sort: String,

    /// syntect theme used for syntax highlighting
    #[serde(default = "default_highlight_theme")]
    pub highlight_theme: String,

    /// Number of notifications kept in history
    #[serde(default = "default_notification_history")]
    pub notification_history: usize,

    /// Where unauthenticated users are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Where users are sent after leaving the detail page
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_candidate_page_size() -> u32 {
    100
}

fn default_candidate_sort() -> String {
    "createdAt,DESC".to_string()
}

fn default_highlight_theme() -> String {
    "base16-ocean.dark".to_string()
}

fn default_notification_history() -> usize {
    100
}

fn default_login_path() -> String {
    "/login.html".to_string()
}

fn default_dashboard_path() -> String {
    "/dashboard.html".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            candidate_page_size: default_candidate_page_size(),
            candidate_sort: default_candidate_sort(),
            highlight_theme: default_highlight_theme(),
            notification_history: default_notification_history(),
            login_path: default_login_path(),
            dashboard_path: default_dashboard_path(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path; unlike [`AppConfig::load`] a
    /// missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Could not parse config file {}", path.display()))
    }

    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.candidate_page_size, 100);
        assert_eq!(config.candidate_sort, "createdAt,DESC");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.login_path, "/login.html");
        assert_eq!(config.dashboard_path, "/dashboard.html");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            base_url = "https://snippets.example.com"
            candidate_page_size = 25
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "https://snippets.example.com");
        assert_eq!(config.candidate_page_size, 25);
        // Other fields should use defaults
        assert_eq!(config.highlight_theme, "base16-ocean.dark");
        assert_eq!(config.notification_history, 100);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = AppConfig::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }
}
