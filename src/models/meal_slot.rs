use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five fixed meal slots of a program day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Morning,
    Lunch,
    Snack,
    Dinner,
    Evening,
}

impl MealSlot {
    /// All five slots in plan order.
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Morning,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
        MealSlot::Evening,
    ];

    /// Slots that must be checked for the celebration and the
    /// calendar `complete` status. Snack is excluded.
    pub const REQUIRED: [MealSlot; 4] = [
        MealSlot::Morning,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Evening,
    ];

    /// Slots counted toward overall and weekly progress.
    pub const MAINS: [MealSlot; 3] = [MealSlot::Morning, MealSlot::Lunch, MealSlot::Dinner];
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealSlot::Morning => write!(f, "morning"),
            MealSlot::Lunch => write!(f, "lunch"),
            MealSlot::Snack => write!(f, "snack"),
            MealSlot::Dinner => write!(f, "dinner"),
            MealSlot::Evening => write!(f, "evening"),
        }
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(MealSlot::Morning),
            "lunch" => Ok(MealSlot::Lunch),
            "snack" => Ok(MealSlot::Snack),
            "dinner" => Ok(MealSlot::Dinner),
            "evening" => Ok(MealSlot::Evening),
            _ => Err(format!(
                "Invalid meal slot '{}'. Valid options: morning, lunch, snack, dinner, evening",
                s
            )),
        }
    }
}
