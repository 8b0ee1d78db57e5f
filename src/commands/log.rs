use clap::{Args, Subcommand, ValueEnum};

use crate::config::Config;
use crate::models::{MealSlot, RecordPatch, SleepPatch};
use crate::store::{TrackerStore, WaterAdjust};

use super::DaySelection;

#[derive(Clone, Copy, ValueEnum)]
pub enum WaterDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KneeState {
    Good,
    Sore,
}

#[derive(Args)]
pub struct LogCommand {
    #[command(flatten)]
    pub day: DaySelection,

    #[command(subcommand)]
    pub command: LogSubcommand,
}

#[derive(Subcommand)]
pub enum LogSubcommand {
    /// Toggle a meal slot's checked state
    Meal {
        /// Meal slot (morning, lunch, snack, dinner, evening)
        slot: MealSlot,
    },

    /// Toggle whether the scheduled workout was completed
    Workout,

    /// Record the day's weight in kilograms
    Weight {
        /// Weight in kg
        kg: f64,
    },

    /// Record the day's step count
    Steps {
        /// Step count
        count: u32,
    },

    /// Record the day's body-fat percentage
    Bodyfat {
        /// Body fat in percent
        percent: f64,
    },

    /// Record bed and wake times; total hours are derived
    Sleep {
        /// Bed time (HH:MM)
        #[arg(long)]
        bed: Option<String>,

        /// Wake time (HH:MM)
        #[arg(long)]
        wake: Option<String>,
    },

    /// Adjust water intake by 0.5 L
    Water {
        /// Direction of the adjustment
        direction: WaterDirection,
    },

    /// Record how the knee felt
    Knee {
        /// Knee state
        state: KneeState,
    },

    /// Set the day's journal note
    Note {
        /// Note text
        text: String,
    },
}

impl LogCommand {
    pub fn run(
        &self,
        store: &mut TrackerStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let key = self.day.resolve(config)?;

        let outcome = match &self.command {
            LogSubcommand::Meal { slot } => {
                let outcome = store.toggle_meal(key, *slot)?;
                let state = if outcome.record.meal_checked(*slot) {
                    "checked"
                } else {
                    "unchecked"
                };
                println!("{}: {} {}", key, *slot, state);
                outcome
            }
            LogSubcommand::Workout => {
                let outcome = store.toggle_workout(key)?;
                let state = if outcome.record.workout {
                    "completed"
                } else {
                    "not completed"
                };
                println!("{}: workout {}", key, state);
                outcome
            }
            LogSubcommand::Weight { kg } => {
                let outcome = store.set_weight(key, *kg)?;
                println!("{}: weight {} kg", key, kg);
                outcome
            }
            LogSubcommand::Steps { count } => {
                let outcome = store.update(key, RecordPatch::steps(*count))?;
                println!("{}: {} steps", key, count);
                outcome
            }
            LogSubcommand::Bodyfat { percent } => {
                let outcome = store.update(key, RecordPatch::body_fat(*percent))?;
                println!("{}: body fat {}%", key, percent);
                outcome
            }
            LogSubcommand::Sleep { bed, wake } => {
                if bed.is_none() && wake.is_none() {
                    return Err("Provide --bed and/or --wake".into());
                }
                let outcome = store.update(
                    key,
                    RecordPatch::sleep(SleepPatch {
                        bed_time: bed.clone(),
                        wake_time: wake.clone(),
                    }),
                )?;
                match outcome.record.sleep.total {
                    Some(total) => println!("{}: sleep {:.1} h", key, total),
                    None => println!("{}: sleep times noted", key),
                }
                outcome
            }
            LogSubcommand::Water { direction } => {
                let direction = match direction {
                    WaterDirection::Up => WaterAdjust::Up,
                    WaterDirection::Down => WaterAdjust::Down,
                };
                let outcome = store.adjust_water(key, direction)?;
                println!("{}: water {:.1} L", key, outcome.record.water);
                outcome
            }
            LogSubcommand::Knee { state } => {
                let ok = matches!(state, KneeState::Good);
                let outcome = store.update(key, RecordPatch::knee_ok(ok))?;
                println!("{}: knee {}", key, if ok { "good" } else { "sore" });
                outcome
            }
            LogSubcommand::Note { text } => {
                let outcome = store.update(key, RecordPatch::notes(text.clone()))?;
                println!("{}: note saved", key);
                outcome
            }
        };

        if outcome.celebration_started {
            println!("All meals logged for {} - nice work! 🎉", key);
        }

        Ok(())
    }
}
