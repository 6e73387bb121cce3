//! # Logging Initialization
//!
//! Centralized setup for the `tracing` subscriber, called once at process
//! start. By default logs go to a daily rolling file in the user cache
//! directory so stdout/stderr stay clean for the MCP stdio transport; with
//! `log_to_file = false` (or when the cache directory is unusable) logs go
//! to stderr with ANSI colors.

use anyhow::Result;
use directories::ProjectDirs;
use std::{io::stderr, path::Path, sync::Once};
use tracing_subscriber::{EnvFilter, fmt::layer, prelude::*};

static INIT: Once = Once::new();

/// Initializes the logging system.
///
/// Respects `RUST_LOG` when set; otherwise defaults to `log_level` globally
/// with `debug` for this crate. Safe to call more than once.
pub fn init_logging(log_level: &str, log_to_file: bool) -> Result<()> {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},promptdeck_mcp=debug")));

        if log_to_file
            && let Some(proj_dirs) = ProjectDirs::from("dev", "Promptdeck", "promptdeck_mcp")
        {
            let log_dir = proj_dirs.cache_dir();

            // tracing_appender::rolling::daily panics on permission errors,
            // so probe writability first and fall back to stderr.
            if test_write_permission(log_dir) {
                let file_appender =
                    tracing_appender::rolling::daily(log_dir, "promptdeck_mcp.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer().with_writer(non_blocking).with_ansi(false))
                    .init();

                // The guard is intentionally leaked to ensure logs are flushed on exit.
                Box::leak(Box::new(guard));
                return;
            }
        }

        // Fallback or explicit stderr logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer().with_writer(stderr).with_ansi(true))
            .init();
    });

    Ok(())
}

/// Test if we can write to the given directory.
fn test_write_permission(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let test_file = dir.join(".promptdeck_log_test");
    match std::fs::write(&test_file, "test") {
        Ok(()) => {
            let _ = std::fs::remove_file(&test_file);
            true
        }
        Err(_) => false,
    }
}
