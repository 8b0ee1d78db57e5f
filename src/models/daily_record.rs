//! Daily records and merge-patch updates.
//!
//! A record is created lazily on first write and mutated only through
//! [`RecordPatch::apply`]: present patch fields overwrite, omitted fields are
//! retained, and the `meals` and `sleep` sub-objects merge field-by-field
//! rather than being replaced wholesale.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::meal_slot::MealSlot;

/// Logged bed and wake times plus the derived total.
///
/// `total` is recomputed whenever a patch touches either time: hours between
/// bed and wake (wake rolls past midnight when earlier than bed), rounded to
/// one decimal, or `None` while either time is missing or unparseable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SleepLog {
    #[serde(default)]
    pub bed_time: String,
    #[serde(default)]
    pub wake_time: String,
    pub total: Option<f64>,
}

impl SleepLog {
    /// Derived sleep hours from the two `HH:MM` strings.
    pub fn derive_total(&self) -> Option<f64> {
        let bed = parse_minutes(&self.bed_time)?;
        let mut wake = parse_minutes(&self.wake_time)?;
        if wake < bed {
            wake += 24 * 60;
        }
        Some((((wake - bed) as f64 / 60.0) * 10.0).round() / 10.0)
    }
}

fn parse_minutes(time: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

/// One program day's log. All fields except `meals`, `workout`, `water` and
/// `notes` are optional: absent means not logged, which serialization must
/// keep distinguishable from zero or false.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyRecord {
    pub meals: BTreeMap<MealSlot, bool>,
    pub steps: Option<u32>,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub sleep: SleepLog,
    pub workout: bool,
    pub knee_ok: Option<bool>,
    pub water: f64,
    pub notes: String,
}

impl DailyRecord {
    /// True when the slot has been checked. Unset slots read as unchecked.
    pub fn meal_checked(&self, slot: MealSlot) -> bool {
        self.meals.get(&slot).copied().unwrap_or(false)
    }

    /// All four celebration-relevant slots checked (snack excluded).
    pub fn required_meals_checked(&self) -> bool {
        MealSlot::REQUIRED.iter().all(|s| self.meal_checked(*s))
    }

    /// Morning, lunch and dinner checked; the progress-counting condition.
    pub fn mains_checked(&self) -> bool {
        MealSlot::MAINS.iter().all(|s| self.meal_checked(*s))
    }
}

/// Merge-patch for a daily record. `None` fields leave the record untouched;
/// a patch never clears a logged value back to absent.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub meals: BTreeMap<MealSlot, bool>,
    pub steps: Option<u32>,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub sleep: Option<SleepPatch>,
    pub workout: Option<bool>,
    pub knee_ok: Option<bool>,
    pub water: Option<f64>,
    pub notes: Option<String>,
}

/// Field-by-field patch for the sleep sub-object.
#[derive(Debug, Clone, Default)]
pub struct SleepPatch {
    pub bed_time: Option<String>,
    pub wake_time: Option<String>,
}

impl RecordPatch {
    pub fn meal(slot: MealSlot, checked: bool) -> Self {
        Self {
            meals: BTreeMap::from([(slot, checked)]),
            ..Self::default()
        }
    }

    pub fn weight(kg: f64) -> Self {
        Self {
            weight: Some(kg),
            ..Self::default()
        }
    }

    pub fn steps(steps: u32) -> Self {
        Self {
            steps: Some(steps),
            ..Self::default()
        }
    }

    pub fn body_fat(percent: f64) -> Self {
        Self {
            body_fat: Some(percent),
            ..Self::default()
        }
    }

    pub fn workout(done: bool) -> Self {
        Self {
            workout: Some(done),
            ..Self::default()
        }
    }

    pub fn knee_ok(ok: bool) -> Self {
        Self {
            knee_ok: Some(ok),
            ..Self::default()
        }
    }

    pub fn water(liters: f64) -> Self {
        Self {
            water: Some(liters),
            ..Self::default()
        }
    }

    pub fn notes(text: impl Into<String>) -> Self {
        Self {
            notes: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn sleep(patch: SleepPatch) -> Self {
        Self {
            sleep: Some(patch),
            ..Self::default()
        }
    }

    /// Applies the patch to `record`. Meals merge per-slot; sleep times merge
    /// independently and the total is re-derived afterward.
    pub fn apply(&self, record: &mut DailyRecord) {
        for (slot, checked) in &self.meals {
            record.meals.insert(*slot, *checked);
        }
        if let Some(steps) = self.steps {
            record.steps = Some(steps);
        }
        if let Some(weight) = self.weight {
            record.weight = Some(weight);
        }
        if let Some(body_fat) = self.body_fat {
            record.body_fat = Some(body_fat);
        }
        if let Some(sleep) = &self.sleep {
            if let Some(bed) = &sleep.bed_time {
                record.sleep.bed_time = bed.clone();
            }
            if let Some(wake) = &sleep.wake_time {
                record.sleep.wake_time = wake.clone();
            }
            record.sleep.total = record.sleep.derive_total();
        }
        if let Some(workout) = self.workout {
            record.workout = workout;
        }
        if let Some(knee_ok) = self.knee_ok {
            record.knee_ok = Some(knee_ok);
        }
        if let Some(water) = self.water {
            record.water = water;
        }
        if let Some(notes) = &self.notes {
            record.notes = notes.clone();
        }
    }
}
