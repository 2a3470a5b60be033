//! Tracing setup for the sender binaries.
//!
//! A dispatch run is a batch job, so every event goes to stdout and is also
//! appended to a log file: the console shows progress, the file is what an
//! operator reads after the fact. One line per event, local wall-clock
//! timestamps, no ANSI codes in either sink.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// `YYYY-MM-DD HH:MM:SS` in local time.
struct WallClock;

impl FormatTime for WallClock {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Installs the global subscriber, creating the log file's directory first
/// so a fresh checkout can log to the default `logs/` path.
///
/// Level comes from `RUST_LOG` (default `info`). Call once at startup,
/// after `.env` is loaded.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    if let Some(dir) = Path::new(log_file_path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let file = Arc::new(
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path)?,
    );

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout.and(file))
        .with_timer(WallClock)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global subscriber: {}", e))
}
