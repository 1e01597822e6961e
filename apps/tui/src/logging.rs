//! File logging for the terminal app.
//!
//! The alternate screen owns stdout/stderr while the UI runs, so every
//! `log::` call from this crate and from `portfolio_core` goes to a
//! rotating file under the configured log directory.

use std::path::Path;

use color_eyre::eyre::{eyre, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_FILE_BASENAME: &str = "portfolio";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

pub const fn log_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Starts the file logger. Keep the returned handle alive for the process lifetime.
pub fn init_logging(log_dir: &Path, debug: bool) -> Result<LoggerHandle> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| eyre!("Failed to create log directory {}: {e}", log_dir.display()))?;

    let level = log_level(debug);
    let handle = Logger::try_with_str(level)
        .map_err(|e| eyre!("Invalid log level `{level}`: {e}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|e| eyre!("Failed to start logger: {e}"))?;

    log::info!(
        "event=app_start version={} level={level} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_level() {
        assert_eq!(log_level(true), "debug");
        assert_eq!(log_level(false), "info");
    }
}
