//! The tracker's state: daily records, the derived weight index, and the
//! theme flag, persisted as three JSON blobs.
//!
//! The daily record is the single source of truth for weight. The weight
//! index is rebuilt from the records on open and refreshed on every weight
//! write; its blob is saved for chart consumers but never read back as truth,
//! so the two can not diverge.

mod celebration;
mod storage;

pub use celebration::Celebration;
pub use storage::{BlobStorage, StorageError, StoreKey};

use std::collections::BTreeMap;
use std::time::Instant;

use thiserror::Error;

use crate::models::{DailyRecord, DayKey, MealSlot, RecordPatch};

/// Errors from store update and persistence operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of a record update.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub record: DailyRecord,
    /// Whether this update crossed into all required meals checked and
    /// started a celebration.
    pub celebration_started: bool,
}

/// Direction for the fixed-step water adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterAdjust {
    Up,
    Down,
}

/// In-memory tracker state plus its persistence glue.
pub struct TrackerStore {
    records: BTreeMap<DayKey, DailyRecord>,
    weights: BTreeMap<DayKey, f64>,
    theme_dark: bool,
    celebration: Celebration,
    storage: BlobStorage,
}

impl TrackerStore {
    /// Opens the store, loading prior state from disk.
    ///
    /// Absent blobs mean a first run and yield empty state. A malformed blob
    /// is logged and treated as absent; the session starts fresh rather than
    /// failing.
    pub fn open(storage: BlobStorage) -> Result<Self, StoreError> {
        let records: BTreeMap<DayKey, DailyRecord> = match storage.load(StoreKey::DailyRecords)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Malformed daily-records blob, starting fresh: {}", e);
                    BTreeMap::new()
                }
            },
            None => BTreeMap::new(),
        };

        let theme_dark = match storage.load(StoreKey::Theme)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(flag) => flag,
                Err(e) => {
                    tracing::warn!("Malformed theme blob, using default: {}", e);
                    false
                }
            },
            None => false,
        };

        // The weight index is derived, never loaded as truth.
        let weights = records
            .iter()
            .filter_map(|(key, record)| record.weight.map(|w| (*key, w)))
            .collect();

        Ok(Self {
            records,
            weights,
            theme_dark,
            celebration: Celebration::new(),
            storage,
        })
    }

    /// The stored record for a day, or the default record if none exists.
    /// Reading never creates an entry.
    pub fn get(&self, key: DayKey) -> DailyRecord {
        self.records.get(&key).cloned().unwrap_or_default()
    }

    pub fn records(&self) -> &BTreeMap<DayKey, DailyRecord> {
        &self.records
    }

    pub fn weights(&self) -> &BTreeMap<DayKey, f64> {
        &self.weights
    }

    /// Merge-patches a day's record, persists, and reports whether the
    /// update started a celebration.
    pub fn update(&mut self, key: DayKey, patch: RecordPatch) -> Result<UpdateOutcome, StoreError> {
        self.update_at(key, patch, Instant::now())
    }

    /// [`update`](Self::update) with an explicit clock, for tests.
    pub fn update_at(
        &mut self,
        key: DayKey,
        patch: RecordPatch,
        now: Instant,
    ) -> Result<UpdateOutcome, StoreError> {
        let touched_weight = patch.weight.is_some();

        let record = self.records.entry(key).or_default();
        patch.apply(record);
        let record = record.clone();

        if let Some(weight) = record.weight {
            self.weights.insert(key, weight);
        }

        let celebration_started =
            record.required_meals_checked() && self.celebration.activate(now);

        // Persist after mutating: on failure the in-memory state stays the
        // source of truth for the session and the error propagates out.
        self.persist_records()?;
        if touched_weight {
            self.persist_weights()?;
        }

        Ok(UpdateOutcome {
            record,
            celebration_started,
        })
    }

    /// Flips one meal slot's checked state.
    pub fn toggle_meal(&mut self, key: DayKey, slot: MealSlot) -> Result<UpdateOutcome, StoreError> {
        let checked = self.get(key).meal_checked(slot);
        self.update(key, RecordPatch::meal(slot, !checked))
    }

    /// Flips the workout-completed flag, so a mis-logged workout can be
    /// corrected.
    pub fn toggle_workout(&mut self, key: DayKey) -> Result<UpdateOutcome, StoreError> {
        let done = self.get(key).workout;
        self.update(key, RecordPatch::workout(!done))
    }

    /// Moves water by one 0.5 L step, floor-clamped at zero.
    pub fn adjust_water(&mut self, key: DayKey, direction: WaterAdjust) -> Result<UpdateOutcome, StoreError> {
        let current = self.get(key).water;
        let water = match direction {
            WaterAdjust::Up => current + 0.5,
            WaterAdjust::Down => (current - 0.5).max(0.0),
        };
        self.update(key, RecordPatch::water(water))
    }

    /// Records a weight reading in kilograms. The record field is the source
    /// of truth; the index entry and weight blob are refreshed alongside.
    pub fn set_weight(&mut self, key: DayKey, kg: f64) -> Result<UpdateOutcome, StoreError> {
        self.update(key, RecordPatch::weight(kg))
    }

    /// Arithmetic mean of all weight readings, `None` when none are logged.
    /// Stored values are never rounded; display rounding is the caller's.
    pub fn average_weight(&self) -> Option<f64> {
        if self.weights.is_empty() {
            return None;
        }
        Some(self.weights.values().sum::<f64>() / self.weights.len() as f64)
    }

    pub fn theme_dark(&self) -> bool {
        self.theme_dark
    }

    /// Flips and persists the theme flag, returning the new value.
    pub fn toggle_theme(&mut self) -> Result<bool, StoreError> {
        self.theme_dark = !self.theme_dark;
        let blob = serde_json::to_string(&self.theme_dark)?;
        self.storage.save(StoreKey::Theme, &blob)?;
        Ok(self.theme_dark)
    }

    pub fn celebration_active(&self, now: Instant) -> bool {
        self.celebration.is_active(now)
    }

    fn persist_records(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.records)?;
        self.storage.save(StoreKey::DailyRecords, &blob)?;
        tracing::debug!("Saved {} daily records", self.records.len());
        Ok(())
    }

    fn persist_weights(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.weights)?;
        self.storage.save(StoreKey::WeightHistory, &blob)?;
        tracing::debug!("Saved {} weight readings", self.weights.len());
        Ok(())
    }
}
