// src/log.rs
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{
    fmt::{self, time::Uptime},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("cannot open log file: {0}")]
    File(#[from] io::Error),
    #[error(transparent)]
    Init(#[from] TryInitError),
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber: stderr always, plus an appended plain-text
/// file when `log_file` is set. Timestamps are elapsed time since start.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(log_file: Option<&Path>) -> Result<(), LogInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_timer(Uptime::default())
                .with_ansi(false)
                .with_writer(Mutex::new(open_append(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(Uptime::default())
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(file_layer)
        .try_init()?;
    Ok(())
}
