//! Derived progress metrics and chart series.
//!
//! Everything here is a pure read over the record map, the weight index and
//! the program configuration. Series walk the full program-day range in
//! order, never map insertion order.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::calendar::weekday_for_day;
use crate::config::ProgramConfig;
use crate::models::{DailyRecord, DayKey};

/// Four-tier classification of how thoroughly a day was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    Empty,
    Started,
    Partial,
    Complete,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightPoint {
    pub day_label: String,
    pub weight: f64,
    pub week: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepsPoint {
    pub day_label: String,
    pub steps: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositionPoint {
    pub day_label: String,
    pub weight: f64,
    pub fat_mass: f64,
    pub lean_mass: f64,
}

/// Goal weight derived from the latest composition entry by holding lean
/// mass constant.
#[derive(Debug, Clone, Serialize)]
pub struct GoalProjection {
    pub current_weight: f64,
    pub current_body_fat: f64,
    pub current_fat_mass: f64,
    pub lean_mass: f64,
    pub goal_body_fat: f64,
    pub goal_weight: f64,
    pub goal_fat_mass: f64,
    pub weight_to_lose: f64,
    pub fat_to_lose: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub days_with_meals_logged: usize,
    pub workouts_completed: usize,
    pub average_steps: u32,
}

type Records = BTreeMap<DayKey, DailyRecord>;
type Weights = BTreeMap<DayKey, f64>;

/// Percentage of the whole program fully done: the three main meals checked
/// and the workout completed. Unlogged days count as incomplete, so the
/// denominator is the fixed program length.
pub fn overall_progress(records: &Records, program: &ProgramConfig) -> f64 {
    let completed = records
        .values()
        .filter(|r| r.mains_checked() && r.workout)
        .count();
    100.0 * completed as f64 / program.total_days as f64
}

/// Percentage of one week's seven days with the three main meals checked.
pub fn week_progress(records: &Records, week: u32) -> f64 {
    let completed = (1..=7)
        .filter_map(|day| DayKey::new(week, day).ok())
        .filter(|key| records.get(key).is_some_and(|r| r.mains_checked()))
        .count();
    100.0 * completed as f64 / 7.0
}

/// Status of one day, scored over four facts: all required meal slots
/// checked, workout done, weight logged, steps logged.
///
/// Score 4 is complete, 2 or 3 partial, 1 started, 0 or no record empty.
/// The bucketing is deliberately non-linear. Recomputed on every call: a
/// later edit can regress a previously complete day.
pub fn day_completion_status(records: &Records, key: DayKey) -> CompletionStatus {
    let Some(record) = records.get(&key) else {
        return CompletionStatus::Empty;
    };

    let score = [
        record.required_meals_checked(),
        record.workout,
        record.weight.is_some(),
        record.steps.is_some(),
    ]
    .iter()
    .filter(|b| **b)
    .count();

    match score {
        4 => CompletionStatus::Complete,
        2 | 3 => CompletionStatus::Partial,
        1 => CompletionStatus::Started,
        _ => CompletionStatus::Empty,
    }
}

/// Weight readings in program order, one point per day with a reading.
pub fn weight_series(weights: &Weights, program: &ProgramConfig) -> Vec<WeightPoint> {
    program
        .days()
        .filter_map(|key| {
            weights.get(&key).map(|weight| WeightPoint {
                day_label: key.label(),
                weight: *weight,
                week: key.week(),
            })
        })
        .collect()
}

/// Logged step counts in program order, against the two-tier target for
/// that day's calendar weekday.
pub fn steps_series(records: &Records, program: &ProgramConfig) -> Vec<StepsPoint> {
    program
        .days()
        .filter_map(|key| {
            let steps = records.get(&key)?.steps?;
            Some(StepsPoint {
                day_label: key.label(),
                steps,
                target: program.step_target(weekday_for_day(program, key)),
            })
        })
        .collect()
}

/// Body composition in program order, for days with both weight and
/// body-fat readings.
pub fn composition_series(records: &Records, program: &ProgramConfig) -> Vec<CompositionPoint> {
    program
        .days()
        .filter_map(|key| {
            let record = records.get(&key)?;
            let weight = record.weight?;
            let body_fat = record.body_fat?;
            let fat_mass = weight * body_fat / 100.0;
            Some(CompositionPoint {
                day_label: key.label(),
                weight,
                fat_mass,
                lean_mass: weight - fat_mass,
            })
        })
        .collect()
}

/// Projects the weight at a goal body-fat percentage from the most recent
/// composition entry, holding lean mass constant. `None` while no day has
/// both weight and body fat, or for a goal of 100% or more.
pub fn goal_projection(
    records: &Records,
    program: &ProgramConfig,
    goal_body_fat: f64,
) -> Option<GoalProjection> {
    if goal_body_fat >= 100.0 {
        return None;
    }

    let latest = composition_series(records, program).pop()?;
    let goal_weight = latest.lean_mass / (1.0 - goal_body_fat / 100.0);
    let goal_fat_mass = goal_weight - latest.lean_mass;

    Some(GoalProjection {
        current_weight: latest.weight,
        current_body_fat: latest.fat_mass / latest.weight * 100.0,
        current_fat_mass: latest.fat_mass,
        lean_mass: latest.lean_mass,
        goal_body_fat,
        goal_weight,
        goal_fat_mass,
        weight_to_lose: latest.weight - goal_weight,
        fat_to_lose: latest.fat_mass - goal_fat_mass,
    })
}

/// Totals over the logged history. The steps mean divides by the number of
/// logged days, floored at one so an empty log yields zero.
pub fn aggregate_stats(records: &Records) -> AggregateStats {
    let days_with_meals_logged = records.values().filter(|r| r.mains_checked()).count();
    let workouts_completed = records.values().filter(|r| r.workout).count();

    let total_steps: u64 = records
        .values()
        .filter_map(|r| r.steps)
        .map(u64::from)
        .sum();
    let average_steps =
        (total_steps as f64 / records.len().max(1) as f64).round() as u32;

    AggregateStats {
        days_with_meals_logged,
        workouts_completed,
        average_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSlot, RecordPatch};

    fn key(week: u32, day: u32) -> DayKey {
        DayKey::new(week, day).unwrap()
    }

    fn record(patches: &[RecordPatch]) -> DailyRecord {
        let mut record = DailyRecord::default();
        for patch in patches {
            patch.apply(&mut record);
        }
        record
    }

    fn full_meals() -> Vec<RecordPatch> {
        MealSlot::REQUIRED
            .iter()
            .map(|s| RecordPatch::meal(*s, true))
            .collect()
    }

    fn qualifying_day() -> DailyRecord {
        let mut patches = full_meals();
        patches.push(RecordPatch::workout(true));
        record(&patches)
    }

    #[test]
    fn test_overall_progress_quarter_done() {
        let program = ProgramConfig::default();
        assert_eq!(program.total_days, 56);

        let mut records = Records::new();
        for n in 1..=14 {
            records.insert(DayKey::from_day_number(n).unwrap(), qualifying_day());
        }
        assert_eq!(overall_progress(&records, &program), 25.0);
    }

    #[test]
    fn test_overall_progress_needs_workout() {
        let program = ProgramConfig::default();
        let mut records = Records::new();
        records.insert(key(1, 1), record(&full_meals()));
        assert_eq!(overall_progress(&records, &program), 0.0);
    }

    #[test]
    fn test_week_progress() {
        let mut records = Records::new();
        // Mains only; workout and evening are irrelevant here.
        let mains: Vec<RecordPatch> = MealSlot::MAINS
            .iter()
            .map(|s| RecordPatch::meal(*s, true))
            .collect();
        records.insert(key(2, 1), record(&mains));
        records.insert(key(2, 4), record(&mains));
        // Other weeks do not count.
        records.insert(key(3, 1), record(&mains));

        let progress = week_progress(&records, 2);
        assert!((progress - 100.0 * 2.0 / 7.0).abs() < 1e-9);
        assert_eq!(week_progress(&records, 4), 0.0);
    }

    #[test]
    fn test_day_completion_status_all_sixteen_combinations() {
        let program_day = key(1, 1);
        for bits in 0u32..16 {
            let meals = bits & 1 != 0;
            let workout = bits & 2 != 0;
            let weight = bits & 4 != 0;
            let steps = bits & 8 != 0;

            let mut patches = Vec::new();
            if meals {
                patches.extend(full_meals());
            }
            if workout {
                patches.push(RecordPatch::workout(true));
            }
            if weight {
                patches.push(RecordPatch::weight(92.0));
            }
            if steps {
                patches.push(RecordPatch::steps(10000));
            }

            let mut records = Records::new();
            records.insert(program_day, record(&patches));

            let score = bits.count_ones();
            let expected = match score {
                4 => CompletionStatus::Complete,
                2 | 3 => CompletionStatus::Partial,
                1 => CompletionStatus::Started,
                _ => CompletionStatus::Empty,
            };
            assert_eq!(
                day_completion_status(&records, program_day),
                expected,
                "bits {:04b}",
                bits
            );
        }
    }

    #[test]
    fn test_day_completion_status_no_record() {
        let records = Records::new();
        assert_eq!(
            day_completion_status(&records, key(5, 5)),
            CompletionStatus::Empty
        );
    }

    #[test]
    fn test_completion_can_regress() {
        let day = key(1, 1);
        let mut patches = full_meals();
        patches.push(RecordPatch::workout(true));
        patches.push(RecordPatch::weight(92.0));
        patches.push(RecordPatch::steps(9000));

        let mut records = Records::new();
        records.insert(day, record(&patches));
        assert_eq!(day_completion_status(&records, day), CompletionStatus::Complete);

        // Unchecking a meal drops the day back to partial.
        RecordPatch::meal(MealSlot::Dinner, false)
            .apply(records.get_mut(&day).unwrap());
        assert_eq!(day_completion_status(&records, day), CompletionStatus::Partial);
    }

    #[test]
    fn test_weight_series_in_program_order() {
        let program = ProgramConfig::default();
        let mut weights = Weights::new();
        // Inserted out of program order on purpose.
        weights.insert(key(5, 2), 91.0);
        weights.insert(key(1, 3), 94.0);
        weights.insert(key(2, 6), 93.1);

        let series = weight_series(&weights, &program);
        let labels: Vec<&str> = series.iter().map(|p| p.day_label.as_str()).collect();
        assert_eq!(labels, vec!["W1D3", "W2D6", "W5D2"]);
        assert_eq!(series[0].weight, 94.0);
        assert_eq!(series[2].week, 5);
    }

    #[test]
    fn test_steps_series_two_tier_targets() {
        let program = ProgramConfig::default();
        let mut records = Records::new();
        // Default anchor is a Sunday, so w1d3 is a Tuesday (the long day).
        records.insert(key(1, 3), record(&[RecordPatch::steps(8500)]));
        records.insert(key(1, 4), record(&[RecordPatch::steps(12500)]));

        let series = steps_series(&records, &program);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].target, 9000);
        assert_eq!(series[1].target, 12000);
    }

    #[test]
    fn test_composition_series_requires_both_readings() {
        let program = ProgramConfig::default();
        let mut records = Records::new();
        records.insert(
            key(1, 1),
            record(&[RecordPatch::weight(94.0), RecordPatch::body_fat(26.6)]),
        );
        records.insert(key(1, 2), record(&[RecordPatch::weight(93.5)]));

        let series = composition_series(&records, &program);
        assert_eq!(series.len(), 1);
        let point = &series[0];
        assert!((point.fat_mass - 25.004).abs() < 1e-9);
        assert!((point.lean_mass - 68.996).abs() < 1e-9);
    }

    #[test]
    fn test_goal_projection() {
        let program = ProgramConfig::default();
        let mut records = Records::new();
        records.insert(
            key(1, 1),
            record(&[RecordPatch::weight(94.0), RecordPatch::body_fat(26.6)]),
        );

        let projection = goal_projection(&records, &program, 12.0).unwrap();
        assert!((projection.lean_mass - 69.0).abs() < 0.1);
        assert!((projection.goal_weight - 78.4).abs() < 0.1);
        assert!((projection.weight_to_lose - 15.6).abs() < 0.1);
        assert!((projection.fat_to_lose - (projection.current_fat_mass - projection.goal_fat_mass)).abs() < 1e-9);
    }

    #[test]
    fn test_goal_projection_uses_latest_entry() {
        let program = ProgramConfig::default();
        let mut records = Records::new();
        records.insert(
            key(1, 1),
            record(&[RecordPatch::weight(96.0), RecordPatch::body_fat(28.0)]),
        );
        records.insert(
            key(3, 2),
            record(&[RecordPatch::weight(94.0), RecordPatch::body_fat(26.6)]),
        );

        let projection = goal_projection(&records, &program, 12.0).unwrap();
        assert_eq!(projection.current_weight, 94.0);
    }

    #[test]
    fn test_goal_projection_none_without_composition() {
        let program = ProgramConfig::default();
        let mut records = Records::new();
        records.insert(key(1, 1), record(&[RecordPatch::weight(94.0)]));

        assert!(goal_projection(&records, &program, 12.0).is_none());
        assert!(goal_projection(&records, &program, 100.0).is_none());
    }

    #[test]
    fn test_aggregate_stats() {
        let mut records = Records::new();
        let mains: Vec<RecordPatch> = MealSlot::MAINS
            .iter()
            .map(|s| RecordPatch::meal(*s, true))
            .collect();
        records.insert(key(1, 1), record(&mains));
        records.insert(
            key(1, 2),
            record(&[RecordPatch::workout(true), RecordPatch::steps(9000)]),
        );
        records.insert(key(1, 3), record(&[RecordPatch::steps(12000)]));

        let stats = aggregate_stats(&records);
        assert_eq!(stats.days_with_meals_logged, 1);
        assert_eq!(stats.workouts_completed, 1);
        assert_eq!(stats.average_steps, 7000);
    }

    #[test]
    fn test_aggregate_stats_empty_log() {
        let stats = aggregate_stats(&Records::new());
        assert_eq!(
            stats,
            AggregateStats {
                days_with_meals_logged: 0,
                workouts_completed: 0,
                average_steps: 0,
            }
        );
    }
}
