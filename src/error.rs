use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
