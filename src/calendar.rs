//! Mapping between program days and calendar dates.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::config::ProgramConfig;
use crate::models::DayKey;

/// Calendar date of a program day: anchor + (week-1)*7 + (day-1).
pub fn date_for_day(program: &ProgramConfig, key: DayKey) -> NaiveDate {
    let offset = key.day_number() - 1;
    program
        .start_date
        .checked_add_days(Days::new(offset as u64))
        .unwrap_or(program.start_date)
}

/// Weekday of a program day, taken from the resulting calendar date rather
/// than the raw day index, so labels stay correct for any anchor weekday.
pub fn weekday_for_day(program: &ProgramConfig, key: DayKey) -> Weekday {
    date_for_day(program, key).weekday()
}

/// Full English weekday name for a program day.
pub fn weekday_name(program: &ProgramConfig, key: DayKey) -> &'static str {
    match weekday_for_day(program, key) {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Short display form, e.g. "Sun, Jan 12".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Program day for a calendar date, `None` outside the program range.
pub fn day_for_date(program: &ProgramConfig, date: NaiveDate) -> Option<DayKey> {
    let offset = (date - program.start_date).num_days();
    if offset < 0 || offset >= program.total_days as i64 {
        return None;
    }
    DayKey::from_day_number(offset as u32 + 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProgramConfig;

    fn program() -> ProgramConfig {
        ProgramConfig::default()
    }

    #[test]
    fn test_date_for_day_offsets() {
        let program = program();
        let anchor = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();

        assert_eq!(date_for_day(&program, DayKey::new(1, 1).unwrap()), anchor);
        assert_eq!(
            date_for_day(&program, DayKey::new(1, 7).unwrap()),
            NaiveDate::from_ymd_opt(2025, 1, 18).unwrap()
        );
        assert_eq!(
            date_for_day(&program, DayKey::new(2, 1).unwrap()),
            NaiveDate::from_ymd_opt(2025, 1, 19).unwrap()
        );
        assert_eq!(
            date_for_day(&program, DayKey::new(8, 7).unwrap()),
            NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()
        );
    }

    #[test]
    fn test_weekday_from_real_date() {
        // The default anchor (2025-01-12) is a Sunday, so w1d1 is Sunday
        // regardless of its day index.
        let program = program();
        assert_eq!(weekday_name(&program, DayKey::new(1, 1).unwrap()), "Sunday");
        assert_eq!(weekday_name(&program, DayKey::new(1, 2).unwrap()), "Monday");
        assert_eq!(weekday_name(&program, DayKey::new(2, 1).unwrap()), "Sunday");
    }

    #[test]
    fn test_monday_anchor_relabels() {
        let program = ProgramConfig {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
            ..ProgramConfig::default()
        };
        assert_eq!(weekday_name(&program, DayKey::new(1, 1).unwrap()), "Monday");
        assert_eq!(weekday_for_day(&program, DayKey::new(1, 2).unwrap()), Weekday::Tue);
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        assert_eq!(format_display_date(date), "Sun, Jan 12");

        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(format_display_date(date), "Mon, Mar 3");
    }

    #[test]
    fn test_day_for_date_inverse() {
        let program = program();
        for key in program.days() {
            let date = date_for_day(&program, key);
            assert_eq!(day_for_date(&program, date), Some(key));
        }
    }

    #[test]
    fn test_day_for_date_out_of_range() {
        let program = program();
        let before = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
        let first = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

        assert_eq!(day_for_date(&program, before), None);
        assert_eq!(day_for_date(&program, first), Some(DayKey::new(1, 1).unwrap()));
        assert_eq!(day_for_date(&program, last), Some(DayKey::new(8, 7).unwrap()));
        assert_eq!(day_for_date(&program, after), None);
    }
}
