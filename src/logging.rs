//! Tracing subscriber setup
//!
//! The filter comes from `RUST_LOG` when set, otherwise from `--log-level`.
//! Sinks:
//! - stderr (compact) in line-prompt mode
//! - a non-blocking file appender when `--log-file` is given
//!
//! With neither sink enabled no subscriber is installed and events are dropped.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;
use crate::errors::AppError;

/// Install the global subscriber.
///
/// The returned guard flushes the file sink on drop; keep it alive until exit.
pub fn init(settings: &LogSettings) -> Result<Option<WorkerGuard>, AppError> {
    if settings.file.is_none() && !settings.stderr {
        return Ok(None);
    }

    let filter = build_filter(&settings.level)?;

    let (file_layer, guard) = match &settings.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            (Some(layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = settings
        .stderr
        .then(|| layer().compact().with_ansi(settings.ansi).with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}

fn build_filter(level: &str) -> Result<EnvFilter, AppError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(level)?),
    }
}

/// Single, never-rotated file at exactly `path`
fn file_appender(path: &Path) -> Result<RollingFileAppender, AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rostty.log".to_string());

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)?)
}
