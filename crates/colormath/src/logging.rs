//! Structured logging for colormath
//!
//! The color functions are silent on success. When a constructor rejects a
//! channel it emits a `debug` event under the `colormath::model` or
//! `colormath::convert` target carrying the offending `channel` and `value`.
//!
//! Applications can install a subscriber of their own, or call
//! [`init_logging`] once at startup:
//!
//! ```ignore
//! use colormath::config::LogFormat;
//! use colormath::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig {
//!     level: "debug".to_string(),
//!     format: LogFormat::Json,
//!     file: None,
//! };
//! init_logging(&config)?;
//! ```
//!
//! # Filtering
//!
//! `LogConfig::level` applies to colormath's own targets only, as the
//! directive `colormath=<level>`. `RUST_LOG` supplies directives for every
//! other target; a `colormath` directive in `RUST_LOG` is replaced by the
//! configured one.

pub use crate::config::LogFormat;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

static LOGGING_INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Target prefix shared by every event the crate emits
const CRATE_TARGET: &str = "colormath";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration, the `[logging]` section of `colormath.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level for colormath's targets (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty or json)
    pub format: LogFormat,

    /// Optional path to a log file, appended to
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

impl LogConfig {
    /// The `colormath=<level>` filter directive for this configuration.
    ///
    /// # Returns
    ///
    /// The parsed directive, or [`LogError::InvalidLevel`] when `level` is
    /// not one of the five `tracing` level names.
    pub fn directive(&self) -> std::result::Result<Directive, LogError> {
        let invalid = || LogError::InvalidLevel(self.level.clone());
        let level: Level = self.level.trim().parse().map_err(|_| invalid())?;
        format!("{CRATE_TARGET}={}", level.as_str().to_ascii_lowercase())
            .parse()
            .map_err(|_| invalid())
    }
}

/// Failure to install the colormath subscriber
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("a colormath subscriber is already installed")]
    AlreadyInitialized,

    #[error("unrecognised log level {0:?} (expected trace, debug, info, warn or error)")]
    InvalidLevel(String),

    #[error("cannot open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("another global subscriber is already set: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber described by `config`.
///
/// # Arguments
///
/// * `config` - level, output format and optional log file
///
/// # Returns
///
/// `Ok(())` once the subscriber is active. A second call returns
/// [`LogError::AlreadyInitialized`] wrapped in [`crate::Error::Log`].
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if is_logging_initialized() {
        return Err(LogError::AlreadyInitialized.into());
    }

    // Config directive last so it wins over a `colormath` entry in RUST_LOG
    let directive = config.directive()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(""))
        .add_directive(directive);

    // stderr always, plus the file when configured
    let mut layers = vec![format_layer(config.format, io::stderr, true)];
    if let Some(path) = config.file.as_deref() {
        let file = open_log_file(path).map_err(|source| LogError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        layers.push(format_layer(config.format, Mutex::new(file), false));
    }

    let subscriber = tracing_subscriber::registry().with(layers).with(filter);
    tracing::subscriber::set_global_default(subscriber).map_err(LogError::from)?;
    let _ = LOGGING_INITIALIZED.set(true);

    tracing::info!(
        log_level = %config.level,
        log_format = %config.format,
        log_file = ?config.file,
        "colormath logging initialized"
    );

    Ok(())
}

/// Whether [`init_logging`] has installed the subscriber
pub fn is_logging_initialized() -> bool {
    LOGGING_INITIALIZED.get().is_some()
}

fn format_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_ansi(ansi)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_timer(SystemTime)
            .with_writer(writer)
            .with_target(true)
            .flatten_event(true)
            .boxed(),
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}
