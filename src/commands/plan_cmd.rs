use clap::Args;

use crate::config::Config;
use crate::plan::{meal_plan, DayKind, DayMealPlan};

#[derive(Args)]
pub struct PlanCommand {
    /// ISO weekday (1 = Monday .. 7 = Sunday); shows both plans when omitted
    #[arg(long, short = 'W', value_parser = clap::value_parser!(u8).range(1..=7))]
    pub weekday: Option<u8>,
}

impl PlanCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let program = &config.program;

        match self.weekday {
            Some(weekday) => {
                let kind = if weekday == program.long_day {
                    DayKind::Long
                } else {
                    DayKind::Regular
                };
                print_plan(&meal_plan(kind));
            }
            None => {
                println!("Regular day");
                print_plan(&meal_plan(DayKind::Regular));
                println!();
                println!("Long day");
                print_plan(&meal_plan(DayKind::Long));
            }
        }

        if !program.shopping_days.is_empty() {
            println!("\nShopping days (ISO weekdays): {:?}", program.shopping_days);
        }
        if !program.cooking_days.is_empty() {
            println!("Prep days (ISO weekdays): {:?}", program.cooking_days);
        }

        Ok(())
    }
}

fn print_plan(plan: &DayMealPlan) {
    println!("{}", "=".repeat(40));
    for meal in &plan.meals {
        println!(
            "  {:<8} {} (P {}g / C {}g / {} cal)",
            meal.slot, meal.item, meal.protein_g, meal.carbs_g, meal.calories
        );
    }
    let totals = plan.total_macros();
    println!(
        "  Total: {}g protein, {}g carbs, {} cal",
        totals.protein_g, totals.carbs_g, totals.calories
    );
}
