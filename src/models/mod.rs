mod daily_record;
mod day_key;
mod meal_slot;

pub use daily_record::{DailyRecord, RecordPatch, SleepLog, SleepPatch};
pub use day_key::{DayKey, DayKeyError};
pub use meal_slot::MealSlot;
