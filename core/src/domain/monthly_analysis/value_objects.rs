use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// Widest offsets in use, UTC-14:00 to UTC+14:00.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Clone)]
pub struct MonthlyAnalysisInput {
    pub user_id: Uuid,
    pub year: i32,
    pub month: u32,
    pub utc_offset_minutes: i32,
}

/// A calendar month in the user's local time, with its UTC bounds
/// `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
    pub offset: FixedOffset,
    pub first_day: NaiveDate,
    pub days_in_month: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32, utc_offset_minutes: i32) -> Result<Self, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::InvalidInput(format!("invalid month {month}")));
        }
        if utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(CoreError::InvalidInput(format!(
                "utc offset out of range: {utc_offset_minutes}"
            )));
        }

        let offset = FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
            CoreError::InvalidInput(format!("invalid utc offset {utc_offset_minutes}"))
        })?;
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| CoreError::InvalidInput(format!("invalid year {year}")))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next_first_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or_else(|| CoreError::InvalidInput(format!("invalid year {year}")))?;

        Ok(Self {
            year,
            month,
            offset,
            first_day,
            days_in_month: (next_first_day - first_day).num_days() as u32,
            start: local_midnight(offset, first_day)?,
            end: local_midnight(offset, next_first_day)?,
        })
    }

    pub fn previous(&self) -> Result<Self, CoreError> {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month, self.offset.local_minus_utc() / 60)
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Day of month of `timestamp` on the user's clock.
    pub fn local_day(&self, timestamp: DateTime<Utc>) -> u32 {
        timestamp.with_timezone(&self.offset).day()
    }

    pub fn local_hour(&self, timestamp: DateTime<Utc>) -> u32 {
        timestamp.with_timezone(&self.offset).hour()
    }

    /// Days of the month that have already started at `now`: the full month
    /// for a past month, none for a future one.
    pub fn days_elapsed(&self, now: DateTime<Utc>) -> u32 {
        if now < self.start {
            0
        } else if now >= self.end {
            self.days_in_month
        } else {
            self.local_day(now)
        }
    }

    pub fn day(&self, day_of_month: u32) -> NaiveDate {
        self.first_day + Days::new(u64::from(day_of_month.saturating_sub(1)))
    }
}

fn local_midnight(offset: FixedOffset, day: NaiveDate) -> Result<DateTime<Utc>, CoreError> {
    offset
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CoreError::InvalidInput(format!("invalid date {day}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_of_leap_year_has_29_days() {
        let window = MonthWindow::new(2024, 2, 0).unwrap();

        assert_eq!(window.days_in_month, 29);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn previous_of_january_is_december_of_prior_year() {
        let window = MonthWindow::new(2025, 1, 60).unwrap();
        let previous = window.previous().unwrap();

        assert_eq!((previous.year, previous.month), (2024, 12));
        assert_eq!(previous.offset, window.offset);
        assert_eq!(previous.end, window.start);
    }

    #[test]
    fn positive_offset_moves_bounds_earlier_in_utc() {
        let window = MonthWindow::new(2025, 3, 120).unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 2, 28, 22, 0, 0).unwrap());
    }

    #[test]
    fn rejects_invalid_month_and_offset() {
        assert!(matches!(
            MonthWindow::new(2025, 13, 0),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            MonthWindow::new(2025, 0, 0),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            MonthWindow::new(2025, 5, 900),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn days_elapsed_depends_on_now() {
        let window = MonthWindow::new(2025, 6, 0).unwrap();

        let before = Utc.with_ymd_and_hms(2025, 5, 20, 0, 0, 0).unwrap();
        let during = Utc.with_ymd_and_hms(2025, 6, 12, 18, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();

        assert_eq!(window.days_elapsed(before), 0);
        assert_eq!(window.days_elapsed(during), 12);
        assert_eq!(window.days_elapsed(after), 30);
    }
}
