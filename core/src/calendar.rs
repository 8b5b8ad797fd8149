//! Planning calendar: week/day-of-week to date mapping.
//!
//! Weeks are anchored at January 1 of the planning year. Day 0 of
//! week 1 is the Sunday on or before January 1, so the first week
//! usually starts in the previous December and week 52 can end
//! before December 31.

use crate::{
    error::{PlanError, PlanResult},
    types::{DayIndex, Hours, WeekNumber, DAYS_PER_WEEK, WEEKDAY_HOURS, WEEKEND_HOURS},
};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Calendar date for `day` (Sunday-first) of `week` in `year`.
pub fn date_for(year: i32, week: WeekNumber, day: DayIndex) -> PlanResult<NaiveDate> {
    if day >= DAYS_PER_WEEK {
        return Err(PlanError::DayOutOfRange { day });
    }
    let out_of_range = || PlanError::DateOutOfRange { year, week, day };

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(out_of_range)?;
    let offset = (i64::from(week) - 1) * i64::from(DAYS_PER_WEEK) + i64::from(day)
        - i64::from(jan1.weekday().num_days_from_sunday());

    jan1.checked_add_signed(Duration::days(offset))
        .ok_or_else(out_of_range)
}

/// Monday..Friday.
#[inline]
pub fn is_weekday(day: DayIndex) -> bool {
    (1..=5).contains(&day)
}

/// Standard shift length for a day of week.
#[inline]
pub fn standard_hours(day: DayIndex) -> Hours {
    if is_weekday(day) {
        WEEKDAY_HOURS
    } else {
        WEEKEND_HOURS
    }
}

/// Sunday-first index of a chrono weekday.
#[inline]
pub fn day_index(weekday: Weekday) -> DayIndex {
    weekday.num_days_from_sunday() as DayIndex
}

pub fn weekday_from_index(day: DayIndex) -> PlanResult<Weekday> {
    match day {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(PlanError::DayOutOfRange { day }),
    }
}

/// Three-letter English label, e.g. "Mon".
pub fn day_label(day: DayIndex) -> PlanResult<String> {
    Ok(weekday_from_index(day)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_one_of_2026_starts_in_december() {
        // 2026-01-01 is a Thursday.
        let sunday = date_for(2026, 1, 0).unwrap();
        let monday = date_for(2026, 1, 1).unwrap();
        assert_eq!(sunday, NaiveDate::from_ymd_opt(2025, 12, 28).unwrap());
        assert_eq!(monday, NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
    }

    #[test]
    fn dates_match_their_day_index() {
        for year in [2023, 2024, 2026, 2028] {
            for week in 1..=52 {
                for day in 0..DAYS_PER_WEEK {
                    let date = date_for(year, week, day).unwrap();
                    assert_eq!(day_index(date.weekday()), day, "{year} w{week} d{day}");
                }
            }
        }
    }

    #[test]
    fn consecutive_days_are_consecutive_dates() {
        let mut prev = date_for(2026, 1, 0).unwrap();
        for week in 1..=52 {
            for day in 0..DAYS_PER_WEEK {
                if week == 1 && day == 0 {
                    continue;
                }
                let date = date_for(2026, week, day).unwrap();
                assert_eq!(date, prev.succ_opt().unwrap());
                prev = date;
            }
        }
    }

    #[test]
    fn jan1_on_sunday_starts_week_one() {
        // 2023-01-01 is a Sunday.
        assert_eq!(
            date_for(2023, 1, 0).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
    }

    #[test]
    fn rejects_bad_day() {
        assert!(matches!(date_for(2026, 1, 7), Err(PlanError::DayOutOfRange { day: 7 })));
        assert!(weekday_from_index(9).is_err());
    }

    #[test]
    fn standard_hours_split_weekday_and_weekend() {
        assert_eq!(standard_hours(0), 11.0);
        assert_eq!(standard_hours(6), 11.0);
        for day in 1..=5 {
            assert_eq!(standard_hours(day), 12.0);
        }
        assert_eq!(day_label(1).unwrap(), "Mon");
    }
}
