//! Logging initialisation for the `mstrepair` CLI.
//!
//! Diagnostics go to stderr so the report on stdout stays clean. The level
//! comes from `RUST_LOG` (default `info`) and `MSTREPAIR_LOG_FORMAT` picks
//! between `human` and `json` output. `log` records are bridged into
//! `tracing`.

use std::{env, ffi::OsStr, sync::OnceLock};

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const FORMAT_VAR: &str = "MSTREPAIR_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Human,
    Json,
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `MSTREPAIR_LOG_FORMAT` named neither `human` nor `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// Another global subscriber is already installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs the global subscriber once; later calls return `Ok(())`.
///
/// # Errors
/// Returns [`LoggingError`] when the requested format is unknown or a
/// subscriber was installed by someone else first.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let format = select_format(env::var_os(FORMAT_VAR).as_deref())?;
    install(format)?;
    let _ = INSTALLED.set(());
    Ok(())
}

/// Non-UTF-8 values are compared lossily and so end up unsupported.
fn select_format(raw: Option<&OsStr>) -> Result<LogFormat, LoggingError> {
    let Some(raw) = raw else {
        return Ok(LogFormat::Human);
    };
    let value = raw.to_string_lossy().trim().to_ascii_lowercase();
    match value.as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        _ => Err(LoggingError::UnsupportedFormat { provided: value }),
    }
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().with_current_span(true).with_span_list(true).boxed(),
    };

    // Keep an existing `log` backend if one is set.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
