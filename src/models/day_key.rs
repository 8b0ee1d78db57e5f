//! Program day identifiers.
//!
//! A program day is addressed by `(week, day)` with `week >= 1` and
//! `day` in `1..=7`, and rendered as the canonical string `w{week}d{day}`.
//! Both persisted blobs are keyed by this string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur constructing or parsing a day key.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DayKeyError {
    #[error("Invalid week {0}: must be at least 1")]
    InvalidWeek(u32),

    #[error("Invalid day {0}: must be between 1 and 7")]
    InvalidDay(u32),

    #[error("Invalid day key '{0}': expected w{{week}}d{{day}}")]
    Malformed(String),
}

/// A program day, ordered by program sequence (week, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DayKey {
    week: u32,
    day: u32,
}

impl DayKey {
    pub fn new(week: u32, day: u32) -> Result<Self, DayKeyError> {
        if week < 1 {
            return Err(DayKeyError::InvalidWeek(week));
        }
        if !(1..=7).contains(&day) {
            return Err(DayKeyError::InvalidDay(day));
        }
        Ok(Self { week, day })
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// 1-based position within the program: w1d1 is day 1.
    pub fn day_number(&self) -> u32 {
        (self.week - 1) * 7 + self.day
    }

    /// Inverse of [`day_number`](Self::day_number); `n` must be at least 1.
    pub fn from_day_number(n: u32) -> Result<Self, DayKeyError> {
        if n < 1 {
            return Err(DayKeyError::InvalidDay(n));
        }
        Ok(Self {
            week: (n - 1) / 7 + 1,
            day: (n - 1) % 7 + 1,
        })
    }

    /// Short chart label, e.g. `W3D2`.
    pub fn label(&self) -> String {
        format!("W{}D{}", self.week, self.day)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}d{}", self.week, self.day)
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DayKeyError::Malformed(s.to_string());

        let rest = s.strip_prefix('w').ok_or_else(malformed)?;
        let (week_str, day_str) = rest.split_once('d').ok_or_else(malformed)?;
        let week: u32 = week_str.parse().map_err(|_| malformed())?;
        let day: u32 = day_str.parse().map_err(|_| malformed())?;

        let key = Self::new(week, day)?;
        // Canonical form only: reject leading zeros and the like.
        if key.to_string() != s {
            return Err(malformed());
        }
        Ok(key)
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for DayKey {
    type Error = DayKeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let key = DayKey::new(3, 5).unwrap();
        assert_eq!(key.week(), 3);
        assert_eq!(key.day(), 5);
        assert_eq!(key.day_number(), 19);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(DayKey::new(0, 1), Err(DayKeyError::InvalidWeek(0)));
        assert_eq!(DayKey::new(1, 0), Err(DayKeyError::InvalidDay(0)));
        assert_eq!(DayKey::new(1, 8), Err(DayKeyError::InvalidDay(8)));
    }

    #[test]
    fn test_display_and_parse_roundtrip() {
        let key = DayKey::new(8, 7).unwrap();
        assert_eq!(key.to_string(), "w8d7");
        assert_eq!("w8d7".parse::<DayKey>().unwrap(), key);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<DayKey>().is_err());
        assert!("w1".parse::<DayKey>().is_err());
        assert!("d1w1".parse::<DayKey>().is_err());
        assert!("w0d1".parse::<DayKey>().is_err());
        assert!("w1d8".parse::<DayKey>().is_err());
        assert!("w01d1".parse::<DayKey>().is_err());
        assert!("w1d1x".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_from_day_number_inverse() {
        for n in 1..=57 {
            let key = DayKey::from_day_number(n).unwrap();
            assert_eq!(key.day_number(), n);
        }
        assert_eq!(DayKey::from_day_number(8).unwrap(), DayKey::new(2, 1).unwrap());
        assert!(DayKey::from_day_number(0).is_err());
    }

    #[test]
    fn test_ordering_is_program_order() {
        let mut keys = vec![
            DayKey::new(2, 1).unwrap(),
            DayKey::new(1, 7).unwrap(),
            DayKey::new(1, 1).unwrap(),
        ];
        keys.sort();
        assert_eq!(keys[0].label(), "W1D1");
        assert_eq!(keys[1].label(), "W1D7");
        assert_eq!(keys[2].label(), "W2D1");
    }

    #[test]
    fn test_serde_as_string() {
        let key = DayKey::new(2, 4).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"w2d4\"");

        let parsed: DayKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);

        assert!(serde_json::from_str::<DayKey>("\"w1d9\"").is_err());
    }
}
