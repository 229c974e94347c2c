//! Configuration and file management for the snippet detail client
//!
//! This crate provides:
//! - Platform directory utilities for config and cache files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, CONFIG_FILE};
pub use paths::{cache_dir, config_dir};
