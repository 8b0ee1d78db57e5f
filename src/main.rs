use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod calendar;
mod commands;
mod config;
mod metrics;
mod models;
mod plan;
mod store;

use commands::{
    CalendarCommand, ChartCommand, ConfigCommand, GoalCommand, LogCommand, PlanCommand,
    ProgressCommand, ShowCommand, ThemeCommand,
};
use config::Config;
use store::{BlobStorage, TrackerStore};

#[derive(Parser)]
#[command(name = "shapeup")]
#[command(version)]
#[command(about = "A daily tracker for a fixed-length training program", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one day's plan and logged values
    Show(ShowCommand),

    /// Show the per-day completion grid
    Calendar(CalendarCommand),

    /// Log meals, weight, steps and the rest of the day
    Log(LogCommand),

    /// Show overall and weekly progress
    Progress(ProgressCommand),

    /// Print a chart series
    Chart(ChartCommand),

    /// Project a goal weight from a target body-fat percentage
    Goal(GoalCommand),

    /// Show the meal plan reference
    Plan(PlanCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Manage the display theme
    Theme(ThemeCommand),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shapeup=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Show(cmd)) => {
            let store = open_store(&config)?;
            cmd.run(&store, &config)?;
        }
        Some(Commands::Calendar(cmd)) => {
            let store = open_store(&config)?;
            cmd.run(&store, &config)?;
        }
        Some(Commands::Log(cmd)) => {
            let mut store = open_store(&config)?;
            cmd.run(&mut store, &config)?;
        }
        Some(Commands::Progress(cmd)) => {
            let store = open_store(&config)?;
            cmd.run(&store, &config)?;
        }
        Some(Commands::Chart(cmd)) => {
            let store = open_store(&config)?;
            cmd.run(&store, &config)?;
        }
        Some(Commands::Goal(cmd)) => {
            let store = open_store(&config)?;
            cmd.run(&store, &config)?;
        }
        Some(Commands::Plan(cmd)) => {
            cmd.run(&config)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        Some(Commands::Theme(cmd)) => {
            let mut store = open_store(&config)?;
            cmd.run(&mut store)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn open_store(config: &Config) -> Result<TrackerStore, Box<dyn std::error::Error>> {
    let storage = BlobStorage::new(config.data_dir.clone());
    Ok(TrackerStore::open(storage)?)
}
