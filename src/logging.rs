use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::config::data_dir;
use crate::error::AppError;

const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the default log file location.
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

/// Installs a file logger; the terminal itself belongs to the game UI.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, File::create(path)?)?;
    Ok(())
}
