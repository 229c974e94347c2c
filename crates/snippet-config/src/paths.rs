//! Configuration and cache directory paths
//!
//! Uses platform directories via the `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/snippet-detail/`, `~/.cache/snippet-detail/`
//! - macOS: `~/Library/Application Support/snippet-detail/`, `~/Library/Caches/snippet-detail/`
//! - Windows: `%APPDATA%\snippet-detail\`, `%LOCALAPPDATA%\snippet-detail\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "snippet-detail";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        // Containers without a resolvable home have no cache directory at all
        if let Ok(dir) = cache_dir() {
            assert!(dir.exists());
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
