use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::models::DayKey;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted blobs
    pub data_dir: PathBuf,
    /// The fixed program everything is computed against
    pub program: ProgramConfig,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shapeup");
        Self {
            data_dir,
            program: ProgramConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Self::default();

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        // Apply environment variable overrides
        if let Ok(data_dir) = std::env::var("SHAPEUP_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        config.program.validate()?;
        Ok(config)
    }

    /// Default config file path: ~/.config/shapeup/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shapeup")
            .join("config.yaml")
    }
}

/// Two-tier daily step targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepTargets {
    /// Target on the long (activity) day
    pub long_day: u32,
    /// Target on every other day
    pub default: u32,
}

impl Default for StepTargets {
    fn default() -> Self {
        Self {
            long_day: 9000,
            default: 12000,
        }
    }
}

/// A scheduled workout for one weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub name: String,
    pub description: String,
}

/// The fixed program: anchor date, length, and the per-weekday tables.
///
/// Weekday numbers are ISO (1 = Monday .. 7 = Sunday). Nothing else in the
/// code compares weekday numbers directly; the long day, shopping days,
/// cooking days and step targets all read from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Calendar date of week 1, day 1
    pub start_date: NaiveDate,
    /// Fixed program length in days
    pub total_days: u32,
    /// ISO weekday of the higher-calorie, lower-step-target day
    pub long_day: u8,
    /// ISO weekdays for grocery shopping
    pub shopping_days: Vec<u8>,
    /// ISO weekdays for meal prep
    pub cooking_days: Vec<u8>,
    /// Daily step targets
    pub steps_target: StepTargets,
    /// Scheduled workout per ISO weekday
    pub workouts: BTreeMap<u8, Workout>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        let schedule = [
            (1, "Legs Light/Rehab", "Terminal knee extensions, wall sits, single-leg balance"),
            (2, "Basketball", "30 min game time - monitor knee closely"),
            (3, "Push Day", "Bench press, overhead press, dips, triceps"),
            (4, "Pull Day", "Rows, pull-ups, deadlifts, biceps, face pulls"),
            (5, "Legs Heavy", "Squats, leg press, lunges, hamstring curls"),
            (6, "Rest & Recovery", "Active recovery, stretching, foam rolling"),
            (7, "Upper Compound", "Compound movements, full upper body"),
        ];
        let workouts = schedule
            .into_iter()
            .map(|(day, name, description)| {
                (
                    day,
                    Workout {
                        name: name.to_string(),
                        description: description.to_string(),
                    },
                )
            })
            .collect();

        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap_or_default(),
            total_days: 56,
            long_day: 2,
            shopping_days: vec![7],
            cooking_days: vec![3, 7],
            steps_target: StepTargets::default(),
            workouts,
        }
    }
}

impl ProgramConfig {
    /// Number of weeks, counting a trailing short week.
    pub fn total_weeks(&self) -> u32 {
        self.total_days.div_ceil(7)
    }

    /// Whether the day falls inside the program.
    pub fn contains(&self, key: DayKey) -> bool {
        key.day_number() <= self.total_days
    }

    /// Every program day in order, w1d1 first.
    pub fn days(&self) -> impl Iterator<Item = DayKey> {
        // from_day_number is infallible for n >= 1
        (1..=self.total_days).filter_map(|n| DayKey::from_day_number(n).ok())
    }

    pub fn is_long_day(&self, weekday: Weekday) -> bool {
        iso_number(weekday) == self.long_day
    }

    pub fn is_shopping_day(&self, weekday: Weekday) -> bool {
        self.shopping_days.contains(&iso_number(weekday))
    }

    pub fn is_cooking_day(&self, weekday: Weekday) -> bool {
        self.cooking_days.contains(&iso_number(weekday))
    }

    pub fn step_target(&self, weekday: Weekday) -> u32 {
        if self.is_long_day(weekday) {
            self.steps_target.long_day
        } else {
            self.steps_target.default
        }
    }

    pub fn workout_for(&self, weekday: Weekday) -> Option<&Workout> {
        self.workouts.get(&iso_number(weekday))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.total_days == 0 {
            return Err(ConfigError::InvalidProgram(
                "total_days must be at least 1".to_string(),
            ));
        }
        let weekdays = std::iter::once(self.long_day)
            .chain(self.shopping_days.iter().copied())
            .chain(self.cooking_days.iter().copied())
            .chain(self.workouts.keys().copied());
        for weekday in weekdays {
            if !(1..=7).contains(&weekday) {
                return Err(ConfigError::InvalidProgram(format!(
                    "weekday {} out of range 1-7",
                    weekday
                )));
            }
        }
        Ok(())
    }
}

fn iso_number(weekday: Weekday) -> u8 {
    weekday.number_from_monday() as u8
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidProgram(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    e
                )
            }
            ConfigError::InvalidProgram(msg) => {
                write!(f, "Invalid program configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
