use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const LOG_FILTER_ENV: &str = "QUILL_LOG";
pub const LOG_STDERR_ENV: &str = "QUILL_LOG_STDERR";
const DEFAULT_FILTER: &str = "quill=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// How the subscriber is assembled, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub filter: String,
    /// Mirror warnings and errors to stderr. Stdout belongs to the prompt.
    pub stderr_warnings: bool,
}

impl LogOptions {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(LOG_FILTER_ENV)
            .or_else(|| lookup(EnvFilter::DEFAULT_ENV))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let stderr_warnings = lookup(LOG_STDERR_ENV)
            .is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes"));
        Self {
            filter,
            stderr_warnings,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|e| {
            eprintln!("invalid {LOG_FILTER_ENV} '{}': {e}", self.filter);
            EnvFilter::new(DEFAULT_FILTER)
        })
    }
}

fn log_dir() -> Option<PathBuf> {
    quill::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("quill").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

/// Daily-rolling file log under the data dir.
pub fn init() -> Option<LoggingGuard> {
    let options = LogOptions::from_lookup(|key| std::env::var(key).ok());
    let log_dir = log_dir()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "quill.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(options.env_filter());
    let stderr_layer = options.stderr_warnings.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_filter(LevelFilter::WARN)
    });

    if tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    // The prompt user still sees the panic; the log keeps a copy.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        default_hook(panic_info);
    }));

    tracing::info!(
        log_dir = %log_dir.display(),
        filter = %options.filter,
        stderr = options.stderr_warnings,
        "tracing initialized"
    );

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
