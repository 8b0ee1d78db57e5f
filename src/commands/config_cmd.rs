use clap::{Args, Subcommand};

use crate::config::Config;

use super::OutputFormat;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the resolved configuration
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        let program = &config.program;

                        println!("Configuration");
                        println!("=============\n");
                        println!("data_dir: {}", config.data_dir.display());
                        println!("start_date: {}", program.start_date);
                        println!(
                            "program: {} days ({} weeks)",
                            program.total_days,
                            program.total_weeks()
                        );
                        println!("long_day: {}", program.long_day);
                        println!("shopping_days: {:?}", program.shopping_days);
                        println!("cooking_days: {:?}", program.cooking_days);
                        println!(
                            "steps_target: {} (long day {})",
                            program.steps_target.default, program.steps_target.long_day
                        );
                        println!("workouts:");
                        for (weekday, workout) in &program.workouts {
                            println!("  {}: {} - {}", weekday, workout.name, workout.description);
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
