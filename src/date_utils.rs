//! Date utilities - Countdown arithmetic and RSVP deadline checks
//!
//! All wedding dates are local wall-clock values; callers pass `now` so the
//! functions stay deterministic.

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Time from `now` until `target`, all zeros once `target` has passed
    pub fn until(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let total = (target - now).num_seconds();
        if total <= 0 {
            return Self::default();
        }
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// The deadline day itself is still open, only the day after counts as passed
pub fn has_deadline_passed(deadline: NaiveDate, today: NaiveDate) -> bool {
    today > deadline
}

/// Time left to answer: until the end of the deadline day
pub fn time_until_deadline(deadline: NaiveDate, now: NaiveDateTime) -> TimeLeft {
    let close = deadline
        .checked_add_days(Days::new(1))
        .unwrap_or(deadline)
        .and_hms_opt(0, 0, 0)
        .unwrap_or(now);
    TimeLeft::until(close, now)
}

pub fn remaining_time_text(left: &TimeLeft) -> String {
    match (left.days, left.hours, left.minutes) {
        (0, 0, _) => "less than an hour".to_string(),
        (0, hours, minutes) => format!("{} hours and {} minutes", hours, minutes),
        (1, _, _) => "1 day".to_string(),
        (days, _, _) => format!("{} days", days),
    }
}

/// `August 12, 2027`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `8/12/2027, 4:05:09 PM`, the timestamp format of locally created entries
pub fn entry_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn countdown_splits_into_units() {
        let left = TimeLeft::until(at("2027-08-12T16:00:00"), at("2027-08-10T14:58:30"));
        assert_eq!(
            left,
            TimeLeft { days: 2, hours: 1, minutes: 1, seconds: 30 }
        );
    }

    #[test]
    fn countdown_is_zero_once_passed() {
        let left = TimeLeft::until(at("2027-08-12T16:00:00"), at("2027-08-12T16:00:01"));
        assert!(left.is_zero());
    }

    #[test]
    fn deadline_day_is_still_open() {
        let deadline = day("2027-07-15");
        assert!(!has_deadline_passed(deadline, day("2027-07-14")));
        assert!(!has_deadline_passed(deadline, day("2027-07-15")));
        assert!(has_deadline_passed(deadline, day("2027-07-16")));
    }

    #[test]
    fn remaining_time_wording() {
        let deadline = day("2027-07-15");
        let text = |now: &str| remaining_time_text(&time_until_deadline(deadline, at(now)));

        assert_eq!(text("2027-07-01T12:00:00"), "14 days");
        assert_eq!(text("2027-07-14T12:00:00"), "1 day");
        assert_eq!(text("2027-07-15T20:30:00"), "3 hours and 30 minutes");
        assert_eq!(text("2027-07-15T23:30:00"), "less than an hour");
        assert_eq!(text("2027-07-20T10:00:00"), "less than an hour");
    }

    #[test]
    fn formats_dates_for_display() {
        assert_eq!(format_long_date(day("2027-08-02")), "August 2, 2027");
        let now = Utc.with_ymd_and_hms(2027, 8, 12, 16, 5, 9).unwrap();
        assert_eq!(entry_timestamp(&now), "8/12/2027, 4:05:09 PM");
    }
}
