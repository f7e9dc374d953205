//! Game configuration (frame pacing, logging, gameplay tuning). Loaded from galaxian.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::Mode;

const CONFIG_FILE: &str = "galaxian.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Every gameplay constant the simulation reads. Distances are world units,
/// speeds are world units per tick, intervals are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship_speed: f32,
    /// Ship x is clamped to `[-ship_limit, ship_limit]`.
    pub ship_limit: f32,
    pub shot_speed: f32,
    /// Player shots spawn this far above the ship.
    pub shot_offset: f32,
    pub shot_ceiling: f32,

    pub alien_speed_normal: f32,
    pub alien_speed_hard: f32,
    pub alien_left_limit: f32,
    pub alien_right_limit: f32,

    pub color_change_interval_ms: u64,
    pub descent_interval_ms: u64,
    /// Delay before the second alien of a descent wave peels off.
    pub descent_gap_ms: u64,
    pub descent_speed: f32,
    pub dive_frequency: f32,
    pub dive_drift: f32,
    /// Diving aliens open fire once they drop below this row.
    pub lower_row_y: f32,
    /// Diving aliens below this y return home.
    pub descent_floor: f32,

    pub burst_size: u32,
    pub burst_interval_normal_ms: u64,
    pub burst_interval_hard_ms: u64,
    pub alien_shot_speed: f32,
    pub alien_shot_floor: f32,
    pub alien_shot_side_limit: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_speed: 0.05,
            ship_limit: 3.5,
            shot_speed: 0.1,
            shot_offset: 0.3,
            shot_ceiling: 3.5,
            alien_speed_normal: 0.02,
            alien_speed_hard: 0.05,
            alien_left_limit: -3.0,
            alien_right_limit: 3.0,
            color_change_interval_ms: 3000,
            descent_interval_ms: 5000,
            descent_gap_ms: 1000,
            descent_speed: 0.04,
            dive_frequency: 2.0,
            dive_drift: 0.02,
            lower_row_y: 1.5,
            descent_floor: -3.0,
            burst_size: 3,
            burst_interval_normal_ms: 500,
            burst_interval_hard_ms: 200,
            alien_shot_speed: 0.08,
            alien_shot_floor: -3.5,
            alien_shot_side_limit: 4.0,
        }
    }
}

impl Tuning {
    pub fn alien_speed(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Normal => self.alien_speed_normal,
            Mode::Hard => self.alien_speed_hard,
        }
    }

    pub fn burst_interval_ms(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Normal => self.burst_interval_normal_ms,
            Mode::Hard => self.burst_interval_hard_ms,
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speeds = [
            ("ship_speed", self.ship_speed),
            ("shot_speed", self.shot_speed),
            ("alien_speed_normal", self.alien_speed_normal),
            ("alien_speed_hard", self.alien_speed_hard),
            ("descent_speed", self.descent_speed),
            ("alien_shot_speed", self.alien_shot_speed),
            ("ship_limit", self.ship_limit),
            ("alien_shot_side_limit", self.alien_shot_side_limit),
        ];
        for (field, value) in speeds {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: value as f64,
                });
            }
        }

        let intervals = [
            ("color_change_interval_ms", self.color_change_interval_ms),
            ("descent_interval_ms", self.descent_interval_ms),
            ("burst_interval_normal_ms", self.burst_interval_normal_ms),
            ("burst_interval_hard_ms", self.burst_interval_hard_ms),
        ];
        for (field, value) in intervals {
            if value == 0 {
                return Err(ConfigError::OutOfRange { field, value: 0.0 });
            }
        }

        if self.alien_left_limit >= self.alien_right_limit {
            return Err(ConfigError::OutOfRange {
                field: "alien_left_limit",
                value: self.alien_left_limit as f64,
            });
        }
        Ok(())
    }
}

/// Startup settings for the terminal binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Target frame length in milliseconds (one simulation tick per frame).
    #[serde(default = "default_frame_millis")]
    pub frame_millis: u64,
    /// Skip straight to hard mode on the title screen's default choice.
    #[serde(default)]
    pub start_hard: bool,
    /// Log output goes here; the terminal is busy drawing the game.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// env_logger filter used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub tuning: Tuning,
}

fn default_frame_millis() -> u64 {
    16
}
fn default_log_file() -> PathBuf {
    PathBuf::from("galaxian.log")
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_millis: default_frame_millis(),
            start_hard: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            tuning: Tuning::default(),
        }
    }
}

impl GameConfig {
    /// Load config from `galaxian.ron` in the current directory. A missing
    /// file is not an error and yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&data)
    }

    pub fn from_ron(data: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(data)?;
        config.tuning.validate()?;
        if config.frame_millis == 0 {
            return Err(ConfigError::OutOfRange {
                field: "frame_millis",
                value: 0.0,
            });
        }
        Ok(config)
    }

    pub fn start_mode(&self) -> Mode {
        if self.start_hard {
            Mode::Hard
        } else {
            Mode::Normal
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE)
}
