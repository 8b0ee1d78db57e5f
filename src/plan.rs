//! The canonical meal plan.
//!
//! Every day uses one of two fixed plans. The long (activity) day raises
//! carbs and calories for morning, lunch, snack and dinner; the evening slot
//! is the same on every day. All values are constants; nothing here reads or
//! writes state.

use serde::Serialize;

use crate::models::MealSlot;

/// Which of the two fixed plans a day uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Regular,
    Long,
}

/// One slot of the plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedMeal {
    pub slot: MealSlot,
    pub item: &'static str,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub calories: u32,
}

/// Macro totals across a whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Macros {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub calories: u32,
}

/// The five planned meals of a day, in slot order.
#[derive(Debug, Clone, Serialize)]
pub struct DayMealPlan {
    pub kind_is_long: bool,
    pub meals: [PlannedMeal; 5],
}

impl DayMealPlan {
    pub fn meal(&self, slot: MealSlot) -> &PlannedMeal {
        // ALL and `meals` share slot order
        &self.meals[MealSlot::ALL.iter().position(|s| *s == slot).unwrap_or(0)]
    }

    /// Exact sum of the per-slot constants.
    pub fn total_macros(&self) -> Macros {
        self.meals.iter().fold(
            Macros {
                protein_g: 0,
                carbs_g: 0,
                calories: 0,
            },
            |acc, meal| Macros {
                protein_g: acc.protein_g + meal.protein_g,
                carbs_g: acc.carbs_g + meal.carbs_g,
                calories: acc.calories + meal.calories,
            },
        )
    }
}

/// The fixed plan for a day kind.
pub fn meal_plan(kind: DayKind) -> DayMealPlan {
    let long = kind == DayKind::Long;
    DayMealPlan {
        kind_is_long: long,
        meals: [
            PlannedMeal {
                slot: MealSlot::Morning,
                item: "YoPro sachet + banana (optional)",
                protein_g: 15,
                carbs_g: if long { 27 } else { 0 },
                calories: if long { 205 } else { 100 },
            },
            PlannedMeal {
                slot: MealSlot::Lunch,
                item: if long {
                    "250g chicken + 150g rice + veggies"
                } else {
                    "250g chicken + 120g rice + veggies"
                },
                protein_g: 75,
                carbs_g: if long { 70 } else { 55 },
                calories: if long { 650 } else { 580 },
            },
            PlannedMeal {
                slot: MealSlot::Snack,
                item: if long {
                    "Protein shake + banana + 2 rice cakes"
                } else {
                    "Protein shake + fruit (optional)"
                },
                protein_g: if long { 28 } else { 26 },
                carbs_g: if long { 45 } else { 25 },
                calories: if long { 285 } else { 215 },
            },
            PlannedMeal {
                slot: MealSlot::Dinner,
                item: if long {
                    "250g chicken + 120g rice + veggies"
                } else {
                    "250g chicken + 100g rice + veggies"
                },
                protein_g: 75,
                carbs_g: if long { 58 } else { 50 },
                calories: 600,
            },
            PlannedMeal {
                slot: MealSlot::Evening,
                item: "YoPro sachet",
                protein_g: 15,
                carbs_g: 0,
                calories: 100,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_five_slots_in_order() {
        for kind in [DayKind::Regular, DayKind::Long] {
            let plan = meal_plan(kind);
            let slots: Vec<MealSlot> = plan.meals.iter().map(|m| m.slot).collect();
            assert_eq!(slots, MealSlot::ALL);
        }
    }

    #[test]
    fn test_regular_totals() {
        let totals = meal_plan(DayKind::Regular).total_macros();
        assert_eq!(totals.protein_g, 206);
        assert_eq!(totals.carbs_g, 130);
        assert_eq!(totals.calories, 1595);
    }

    #[test]
    fn test_long_day_totals() {
        let totals = meal_plan(DayKind::Long).total_macros();
        assert_eq!(totals.protein_g, 208);
        assert_eq!(totals.carbs_g, 200);
        assert_eq!(totals.calories, 1840);
    }

    #[test]
    fn test_long_day_raises_carbs_not_evening() {
        let regular = meal_plan(DayKind::Regular);
        let long = meal_plan(DayKind::Long);

        for slot in [MealSlot::Morning, MealSlot::Lunch, MealSlot::Snack, MealSlot::Dinner] {
            assert!(long.meal(slot).carbs_g > regular.meal(slot).carbs_g, "{}", slot);
        }

        let regular_evening = regular.meal(MealSlot::Evening);
        let long_evening = long.meal(MealSlot::Evening);
        assert_eq!(regular_evening.item, long_evening.item);
        assert_eq!(regular_evening.calories, long_evening.calories);
        assert_eq!(regular_evening.carbs_g, long_evening.carbs_g);
    }
}
