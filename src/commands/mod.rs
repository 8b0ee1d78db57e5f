mod config_cmd;
mod log;
mod plan_cmd;
mod progress;
mod show;
mod theme;

pub use config_cmd::ConfigCommand;
pub use log::LogCommand;
pub use plan_cmd::PlanCommand;
pub use progress::{ChartCommand, GoalCommand, ProgressCommand};
pub use show::{CalendarCommand, ShowCommand};
pub use theme::ThemeCommand;

use chrono::Local;
use clap::{Args, ValueEnum};

use crate::calendar::day_for_date;
use crate::config::Config;
use crate::models::DayKey;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Day selection shared by all commands that address a program day.
#[derive(Args)]
pub struct DaySelection {
    /// Program week (1-based); defaults to today's
    #[arg(long, short)]
    pub week: Option<u32>,

    /// Day within the week (1-7); defaults to today's
    #[arg(long, short)]
    pub day: Option<u32>,
}

impl DaySelection {
    /// Resolves to a program day, defaulting to today's calendar date.
    /// Days outside the program are an error, not a wraparound.
    pub fn resolve(&self, config: &Config) -> Result<DayKey, Box<dyn std::error::Error>> {
        match (self.week, self.day) {
            (Some(week), Some(day)) => {
                let key = DayKey::new(week, day)?;
                if !config.program.contains(key) {
                    return Err(format!(
                        "{} is outside the {}-day program",
                        key, config.program.total_days
                    )
                    .into());
                }
                Ok(key)
            }
            (None, None) => {
                let today = Local::now().date_naive();
                day_for_date(&config.program, today).ok_or_else(|| {
                    format!(
                        "Today ({}) is outside the program; pass --week and --day",
                        today
                    )
                    .into()
                })
            }
            _ => Err("Provide both --week and --day, or neither".into()),
        }
    }
}
