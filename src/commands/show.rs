use clap::Args;

use crate::calendar::{date_for_day, format_display_date, weekday_for_day, weekday_name};
use crate::config::Config;
use crate::metrics::{day_completion_status, CompletionStatus};
use crate::plan::{meal_plan, DayKind};
use crate::store::TrackerStore;

use super::DaySelection;

#[derive(Args)]
pub struct ShowCommand {
    #[command(flatten)]
    pub day: DaySelection,
}

impl ShowCommand {
    pub fn run(
        &self,
        store: &TrackerStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let key = self.day.resolve(config)?;
        let program = &config.program;
        let record = store.get(key);
        let date = date_for_day(program, key);
        let weekday = weekday_for_day(program, key);

        println!(
            "{} - day {} of {} ({})",
            format_display_date(date),
            key.day_number(),
            program.total_days,
            key
        );
        println!("{}", "=".repeat(40));

        if let Some(workout) = program.workout_for(weekday) {
            let mark = if record.workout { "x" } else { " " };
            println!("Workout: [{}] {} - {}", mark, workout.name, workout.description);
        }

        let kind = if program.is_long_day(weekday) {
            DayKind::Long
        } else {
            DayKind::Regular
        };
        let plan = meal_plan(kind);
        println!("\nMeals ({}):", weekday_name(program, key));
        for meal in &plan.meals {
            let mark = if record.meal_checked(meal.slot) { "x" } else { " " };
            println!(
                "  [{}] {:<8} {} (P {}g / C {}g / {} cal)",
                mark, meal.slot, meal.item, meal.protein_g, meal.carbs_g, meal.calories
            );
        }
        let totals = plan.total_macros();
        println!(
            "  Total: {}g protein, {}g carbs, {} cal",
            totals.protein_g, totals.carbs_g, totals.calories
        );

        println!();
        match record.steps {
            Some(steps) => println!(
                "Steps: {} / target {}",
                steps,
                program.step_target(weekday)
            ),
            None => println!("Steps: not logged (target {})", program.step_target(weekday)),
        }
        match record.weight {
            Some(weight) => println!("Weight: {:.1} kg", weight),
            None => println!("Weight: not logged"),
        }
        if let Some(body_fat) = record.body_fat {
            println!("Body fat: {:.1}%", body_fat);
        }
        match record.sleep.total {
            Some(total) => println!(
                "Sleep: {:.1} h ({} - {})",
                total, record.sleep.bed_time, record.sleep.wake_time
            ),
            None => println!("Sleep: not logged"),
        }
        println!("Water: {:.1} L", record.water);
        if let Some(knee_ok) = record.knee_ok {
            println!("Knee: {}", if knee_ok { "good" } else { "sore" });
        }
        if !record.notes.is_empty() {
            println!("Notes: {}", record.notes);
        }

        println!(
            "\nStatus: {}",
            status_name(day_completion_status(store.records(), key))
        );

        if program.is_shopping_day(weekday) {
            println!("Reminder: shopping day - restock chicken, rice and YoPro");
        }
        if program.is_cooking_day(weekday) {
            println!("Reminder: prep day - batch-cook meals for the coming days");
        }

        Ok(())
    }
}

#[derive(Args)]
pub struct CalendarCommand {}

impl CalendarCommand {
    pub fn run(
        &self,
        store: &TrackerStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let program = &config.program;

        println!("Program calendar ({} days)", program.total_days);
        println!("  . empty   - started   o partial   * complete\n");

        let mut current_week = 0;
        for key in program.days() {
            if key.week() != current_week {
                if current_week != 0 {
                    println!();
                }
                current_week = key.week();
                print!("Week {}: ", current_week);
            }
            let status = day_completion_status(store.records(), key);
            print!("{} ", status_char(status));
        }
        println!();

        Ok(())
    }
}

fn status_name(status: CompletionStatus) -> &'static str {
    match status {
        CompletionStatus::Empty => "empty",
        CompletionStatus::Started => "started",
        CompletionStatus::Partial => "partial",
        CompletionStatus::Complete => "complete",
    }
}

fn status_char(status: CompletionStatus) -> char {
    match status {
        CompletionStatus::Empty => '.',
        CompletionStatus::Started => '-',
        CompletionStatus::Partial => 'o',
        CompletionStatus::Complete => '*',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_rendering() {
        assert_eq!(status_name(CompletionStatus::Partial), "partial");
        assert_eq!(status_char(CompletionStatus::Complete), '*');
        assert_eq!(status_char(CompletionStatus::Empty), '.');
    }
}
