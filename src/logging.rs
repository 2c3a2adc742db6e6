//! tracing subscriber setup for the command-line entry point

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogConfig {
    /// Enables debug-level output for this crate
    pub debug: bool,
    /// Writes logs to this file instead of stderr
    pub file: Option<PathBuf>,
    /// Emits JSON lines instead of human-readable text
    pub json: bool,
}

impl LogConfig {
    /// Filter directive used when RUST_LOG is not set
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "apkpure_versions=debug,info"
        } else {
            "info"
        }
    }
}

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the background file writer on drop and must be
/// held for as long as logging is needed.
pub fn init(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let (writer, guard) = match &config.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .context("log file path has no file name")?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let ansi = config.file.is_none();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.with_ansi(ansi).try_init()
    };
    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
