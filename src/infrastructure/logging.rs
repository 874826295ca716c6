//! Log output setup.
//!
//! Lines go to three sinks:
//! - stdout, filtered by `RUST_LOG` (default `info`)
//! - `<dir>/deployment.<date>.log`, rotated daily, 7 files kept, info and above
//! - `<dir>/errors.log`, errors only

use crate::error::{BlogsyncError, Result};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";
const RETAINED_DAYS: usize = 7;

/// Install the global subscriber
pub fn init(log_dir: &Path) -> Result<()> {
    subscriber(log_dir)?
        .try_init()
        .map_err(|e| BlogsyncError::Logging(e.to_string()))
}

fn subscriber(log_dir: &Path) -> Result<impl Subscriber + Send + Sync> {
    fs::create_dir_all(log_dir)?;

    let general = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("deployment")
        .filename_suffix("log")
        .max_log_files(RETAINED_DAYS)
        .build(log_dir)
        .map_err(|e| BlogsyncError::Logging(e.to_string()))?;

    let errors = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("errors")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| BlogsyncError::Logging(e.to_string()))?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Ok(tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stdout)
                .with_ansi(io::stdout().is_terminal())
                .with_timer(timer())
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_writer(general)
                .with_ansi(false)
                .with_timer(timer())
                .with_filter(LevelFilter::INFO),
        )
        .with(
            fmt::layer()
                .with_writer(errors)
                .with_ansi(false)
                .with_timer(timer())
                .with_filter(LevelFilter::ERROR),
        ))
}

fn timer() -> ChronoLocal {
    ChronoLocal::new(TIME_FORMAT.to_string())
}
