//! File-based logging using simplelog
//!
//! One log file per rendered snippet, named after it. Debug builds write it
//! to the current directory, release builds to the cache directory
//! (~/.cache/snippet-detail/ on Linux). Connection chatter of the HTTP stack
//! is filtered out so the file shows the page's own actions.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

/// Crates whose records never reach the log file
const QUIET_CRATES: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

fn log_file_name(snippet_id: i64, timestamp: &str) -> String {
    format!("snippet-{}-{}.log", snippet_id, timestamp)
}

fn log_file_path(snippet_id: i64) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let filename = log_file_name(snippet_id, &timestamp);

    if cfg!(debug_assertions) {
        return PathBuf::from(filename);
    }
    match snippet_config::cache_dir() {
        Ok(dir) => dir.join(filename),
        Err(e) => {
            eprintln!("No cache directory ({}), logging to the current directory", e);
            PathBuf::from(filename)
        }
    }
}

/// Level named by `RUST_LOG`, falling back to `default` when unset or unknown
fn resolve_level(rust_log: Option<&str>, default: LevelFilter) -> LevelFilter {
    rust_log
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(default)
}

/// Start logging for the page of `snippet_id`
///
/// Returns the path of the log file.
pub fn init(snippet_id: i64) -> Result<PathBuf> {
    let log_file = log_file_path(snippet_id);

    let default = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let level = resolve_level(std::env::var("RUST_LOG").ok().as_deref(), default);

    let mut builder = ConfigBuilder::new();
    builder.set_time_format_rfc3339();
    for quiet in QUIET_CRATES {
        builder.add_filter_ignore_str(quiet);
    }
    let config = builder
        .set_time_offset_to_local()
        .unwrap_or_else(|b| b) // UTC when the local offset is unknown
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Could not create log file {}", log_file.display()))?;
    WriteLogger::init(level, config, file).context("Could not initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_rust_log() {
        assert_eq!(resolve_level(Some("trace"), LevelFilter::Info), LevelFilter::Trace);
        assert_eq!(resolve_level(Some(" WARN "), LevelFilter::Info), LevelFilter::Warn);
        assert_eq!(resolve_level(Some("off"), LevelFilter::Info), LevelFilter::Off);
    }

    #[test]
    fn test_level_falls_back_to_default() {
        assert_eq!(resolve_level(None, LevelFilter::Debug), LevelFilter::Debug);
        assert_eq!(
            resolve_level(Some("snippet_detail=debug"), LevelFilter::Info),
            LevelFilter::Info
        );
    }

    #[test]
    fn test_file_name_carries_snippet_id() {
        assert_eq!(
            log_file_name(42, "20250105-150400"),
            "snippet-42-20250105-150400.log"
        );
    }
}
