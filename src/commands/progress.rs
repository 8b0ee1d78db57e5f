use clap::{Args, ValueEnum};
use serde_json::json;

use crate::config::Config;
use crate::metrics::{
    aggregate_stats, composition_series, goal_projection, overall_progress, steps_series,
    week_progress, weight_series,
};
use crate::store::TrackerStore;

use super::OutputFormat;

#[derive(Args)]
pub struct ProgressCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ProgressCommand {
    pub fn run(
        &self,
        store: &TrackerStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let program = &config.program;
        let records = store.records();

        let overall = overall_progress(records, program);
        let weeks: Vec<f64> = (1..=program.total_weeks())
            .map(|week| week_progress(records, week))
            .collect();
        let stats = aggregate_stats(records);
        let average_weight = store.average_weight();

        match self.format {
            OutputFormat::Json => {
                let payload = json!({
                    "overall_percent": overall,
                    "weeks_percent": weeks,
                    "stats": stats,
                    "average_weight": average_weight,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Text => {
                println!("Overall progress: {:.1}%", overall);
                for (i, week) in weeks.iter().enumerate() {
                    println!("  Week {}: {:.0}%", i + 1, week);
                }
                println!();
                println!("Days with meals logged: {}", stats.days_with_meals_logged);
                println!("Workouts completed: {}", stats.workouts_completed);
                println!("Average steps: {}", stats.average_steps);
                match average_weight {
                    Some(avg) => println!("Average weight: {:.1} kg", avg),
                    None => println!("Average weight: no readings yet"),
                }
            }
        }

        Ok(())
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartSeries {
    Weight,
    Steps,
    Composition,
}

#[derive(Args)]
pub struct ChartCommand {
    /// Which series to print
    pub series: ChartSeries,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ChartCommand {
    pub fn run(
        &self,
        store: &TrackerStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let program = &config.program;

        match self.series {
            ChartSeries::Weight => {
                let series = weight_series(store.weights(), program);
                match self.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
                    OutputFormat::Text => {
                        if series.is_empty() {
                            println!("No weight readings yet");
                        }
                        for point in series {
                            println!("{}  {:.1} kg", point.day_label, point.weight);
                        }
                    }
                }
            }
            ChartSeries::Steps => {
                let series = steps_series(store.records(), program);
                match self.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
                    OutputFormat::Text => {
                        if series.is_empty() {
                            println!("No step counts yet");
                        }
                        for point in series {
                            println!(
                                "{}  {:>6} / {}",
                                point.day_label, point.steps, point.target
                            );
                        }
                    }
                }
            }
            ChartSeries::Composition => {
                let series = composition_series(store.records(), program);
                match self.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
                    OutputFormat::Text => {
                        if series.is_empty() {
                            println!("No days with both weight and body fat yet");
                        }
                        for point in series {
                            println!(
                                "{}  {:.1} kg (fat {:.1} kg, lean {:.1} kg)",
                                point.day_label, point.weight, point.fat_mass, point.lean_mass
                            );
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[derive(Args)]
pub struct GoalCommand {
    /// Target body-fat percentage
    pub target: f64,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl GoalCommand {
    pub fn run(
        &self,
        store: &TrackerStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let Some(projection) = goal_projection(store.records(), &config.program, self.target)
        else {
            println!("Log a weight and body-fat reading first");
            return Ok(());
        };

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&projection)?);
            }
            OutputFormat::Text => {
                println!("Goal: {:.1}% body fat", projection.goal_body_fat);
                println!("{}", "=".repeat(30));
                println!(
                    "Current: {:.1} kg at {:.1}% ({:.1} kg fat, {:.1} kg lean)",
                    projection.current_weight,
                    projection.current_body_fat,
                    projection.current_fat_mass,
                    projection.lean_mass
                );
                println!(
                    "Goal weight: {:.1} kg ({:.1} kg fat)",
                    projection.goal_weight, projection.goal_fat_mass
                );
                println!("Weight to lose: {:.1} kg", projection.weight_to_lose);
                println!("Fat to lose: {:.1} kg", projection.fat_to_lose);
            }
        }

        Ok(())
    }
}
