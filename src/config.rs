use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::grid::Grid;
use crate::snake::Cell;

const APP_DIR_NAME: &str = "grid-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Canvas width in pixels; with the cell size it fixes the grid side.
pub const DEFAULT_CANVAS_WIDTH: u16 = 400;

/// Edge of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE: u16 = 20;

/// Fixed tick period in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Score granted per food eaten.
pub const DEFAULT_FOOD_REWARD: u32 = 10;

/// Starting snake, head first.
pub const START_SEGMENTS: [Cell; 3] = [Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)];

/// Smallest grid that still contains the starting snake.
pub const MIN_GRID_SIZE: u16 = 11;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("grid of {size}x{size} cells is too small, need at least {min}x{min}")]
    GridTooSmall { size: u16, min: u16 },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Core game parameters derived from [`Settings`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rules {
    pub grid: Grid,
    pub food_reward: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            grid: Grid::new(DEFAULT_CANVAS_WIDTH / DEFAULT_CELL_SIZE),
            food_reward: DEFAULT_FOOD_REWARD,
        }
    }
}

/// User-tunable settings, read from a JSON file and overridden by CLI flags.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub canvas_width: u16,
    pub cell_size: u16,
    pub tick_interval_ms: u64,
    pub food_reward: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            food_reward: DEFAULT_FOOD_REWARD,
        }
    }
}

impl Settings {
    /// Loads settings from `explicit`, or from the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => load_from_path(path),
            None => {
                let path = default_config_path();
                if path.exists() {
                    load_from_path(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validates the settings and derives the core game rules.
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(Rules {
            grid: Grid::from_canvas(self.canvas_width, self.cell_size)?,
            food_reward: self.food_reward,
        })
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Returns the directory holding runtime data such as the log file.
#[must_use]
pub fn data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}

fn load_from_path(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Colors applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub board_bg: Color,
    pub border_fg: Color,
    pub snake_body: Color,
    pub snake_head: Color,
    pub food: Color,
    pub score: Color,
    pub hint_enabled: Color,
    pub hint_disabled: Color,
    pub menu_title: Color,
}

/// Light board with a green snake and red food.
pub const PALETTE: Palette = Palette {
    board_bg: Color::Rgb(0xf0, 0xf0, 0xf0),
    border_fg: Color::Rgb(0x45, 0xa0, 0x49),
    snake_body: Color::Rgb(0x4c, 0xaf, 0x50),
    snake_head: Color::Rgb(0x2e, 0x7d, 0x32),
    food: Color::Rgb(0xff, 0x44, 0x44),
    score: Color::Rgb(0x4c, 0xaf, 0x50),
    hint_enabled: Color::White,
    hint_disabled: Color::DarkGray,
    menu_title: Color::Rgb(0xff, 0x44, 0x44),
};

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Snake segment glyph, one per terminal column.
pub const GLYPH_SNAKE: &str = "█";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Poll interval while no game is running.
pub const IDLE_POLL_INTERVAL_MS: u64 = 250;
