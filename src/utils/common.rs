// src/utils/common.rs

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;
use crate::error::{LensError, Result};

pub const DEFAULT_PROGRESS_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. When `log_file` is given,
/// events go to that file through a non-blocking writer and the returned guard
/// must be kept alive until exit to flush it.
pub fn init_tracing(
    format: LogFormat,
    default_level: &str,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = fmt::Subscriber::builder().with_env_filter(filter);

    let init_err = |e: Box<dyn std::error::Error + Send + Sync>| {
        LensError::ConfigError(format!("Failed to initialise logging: {}", e))
    };

    match log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().ok_or_else(|| {
                LensError::ConfigError(format!("Log file path '{}' has no file name", path.display()))
            })?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            match format {
                LogFormat::Text => builder
                    .with_ansi(false)
                    .with_writer(writer)
                    .try_init()
                    .map_err(init_err)?,
                LogFormat::Json => builder.json().with_writer(writer).try_init().map_err(init_err)?,
            }
            Ok(Some(guard))
        }
        None => {
            match format {
                LogFormat::Text => builder
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(init_err)?,
                LogFormat::Json => builder
                    .json()
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(init_err)?,
            }
            Ok(None)
        }
    }
}

/// Creates a progress bar, or a spinner when the total is unknown (0).
pub fn create_progress_bar(total_items: u64, message: &str, template: &str) -> ProgressBar {
    let pb = if total_items == 0 {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::new(total_items)
    };
    pb.set_message(message.to_string());
    pb.set_style(
        ProgressStyle::default_bar()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}
