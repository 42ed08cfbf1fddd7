//! Civil (Gregorian, timezone-free) dates.

use std::fmt;
use std::str::FromStr;

use crate::epoch::{civil_from_days, days_from_civil, month_length};
use crate::error::CalendarError;
use crate::month::YearMonth;
use crate::weekday::Weekday;

/// Weekday of the day-number epoch (1970-01-01 was a Thursday).
const EPOCH_WEEKDAY: Weekday = Weekday::Thursday;

/// Day numbers beyond this magnitude are outside the supported years anyway.
const MAX_DAY_NUMBER: u64 = 400_000_000;

/// A proleptic Gregorian calendar date with no time-of-day or timezone.
///
/// Months are 0-based (0 = January, 11 = December). Only the textual
/// `YYYY-MM-DD` form produced by [`fmt::Display`] and accepted by
/// [`FromStr`] uses the conventional 1-based month.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Smallest supported year.
    pub const MIN_YEAR: i32 = -1_000_000;
    /// Largest supported year.
    pub const MAX_YEAR: i32 = 1_000_000;

    /// Creates a new `CivilDate` from year, 0-based month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 0..=11,
    /// [`CalendarError::InvalidDate`] if `day` is not in
    /// `1..=days_in_month(year, month)`, and [`CalendarError::OutOfRange`]
    /// if `year` is outside [`Self::MIN_YEAR`]..=[`Self::MAX_YEAR`].
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(CalendarError::OutOfRange {
                year: i64::from(year),
            });
        }
        if month > 11 {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = month_length(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDate {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from a day number (days since 1970-01-01).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the resulting year is not
    /// supported.
    pub fn from_days_since_epoch(days: i64) -> Result<Self, CalendarError> {
        if days.unsigned_abs() > MAX_DAY_NUMBER {
            return Err(CalendarError::OutOfRange {
                year: 1970 + days / 365,
            });
        }
        let (year, month, day) = civil_from_days(days);
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (Self::MIN_YEAR..=Self::MAX_YEAR).contains(y))
            .ok_or(CalendarError::OutOfRange { year })?;
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month (0..=11).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month this date belongs to.
    pub fn year_month(self) -> YearMonth {
        YearMonth::from_date(self)
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        let shift = self.days_since_epoch() + EPOCH_WEEKDAY.index() as i64;
        Weekday::from_index(shift.rem_euclid(7) as usize)
    }

    /// Returns the date `n` days later (`n` may be negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the
    /// supported year range.
    pub fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        let days = self
            .days_since_epoch()
            .checked_add(n)
            .ok_or(CalendarError::OutOfRange {
                year: i64::from(self.year),
            })?;
        Self::from_days_since_epoch(days)
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] past the last supported day.
    pub fn next(self) -> Result<Self, CalendarError> {
        if self.day < month_length(self.year, self.month) {
            return Ok(Self {
                day: self.day + 1,
                ..self
            });
        }
        self.add_days(1)
    }

    /// Returns the preceding day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] before the first supported day.
    pub fn prev(self) -> Result<Self, CalendarError> {
        if self.day > 1 {
            return Ok(Self {
                day: self.day - 1,
                ..self
            });
        }
        self.add_days(-1)
    }

    /// Signed number of days from `self` to `other`; positive when `other`
    /// is later.
    pub fn days_until(self, other: CivilDate) -> i64 {
        other.days_since_epoch() - self.days_since_epoch()
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` with a 1-based month; a leading `-` marks a
    /// year before year 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::Parse {
            input: s.to_string(),
            expected: "YYYY-MM-DD",
        };
        let (negative, body) = match s.trim().strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.trim()),
        };
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err());
        };
        let year: i32 = y.parse().map_err(|_| parse_err())?;
        let month: u8 = m.parse().map_err(|_| parse_err())?;
        let day: u8 = d.parse().map_err(|_| parse_err())?;
        if month == 0 {
            return Err(parse_err());
        }
        let year = if negative { -year } else { year };
        Self::new(year, month - 1, day)
    }
}

/// Returns the day of the week of `date` (Saturday = index 0).
///
/// ```
/// use shiftcal_calendar::{CivilDate, Weekday, day_of_week};
///
/// let date = CivilDate::new(2024, 3, 1).unwrap(); // April 1, 2024
/// assert_eq!(day_of_week(date), Weekday::Monday);
/// assert_eq!(day_of_week(date).index(), 2);
/// ```
pub fn day_of_week(date: CivilDate) -> Weekday {
    date.weekday()
}

/// Returns the date `n` days after `date` (`n` may be negative).
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result leaves the supported
/// year range.
pub fn add_days(date: CivilDate, n: i64) -> Result<CivilDate, CalendarError> {
    date.add_days(n)
}

/// Signed day count from `d1` to `d2`; positive when `d2` is after `d1`.
pub fn days_between(d1: CivilDate, d2: CivilDate) -> i64 {
    d1.days_until(d2)
}
