//! A single calendar month with year context.

use std::fmt;
use std::str::FromStr;

use crate::date::CivilDate;
use crate::epoch::month_length;
use crate::error::CalendarError;

/// A calendar month: year plus 0-based month (0 = January).
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 0..=11
    /// and [`CalendarError::OutOfRange`] for unsupported years.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        // Day 1 exists in every month, so this only checks year and month.
        CivilDate::new(year, month, 1).map(Self::from_date)
    }

    /// Returns the month that contains `date`.
    pub fn from_date(date: CivilDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month (0..=11).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Number of days in this month.
    pub fn days(self) -> u8 {
        month_length(self.year, self.month)
    }

    /// The first day of the month.
    pub fn first_day(self) -> CivilDate {
        // YearMonth always holds a supported year and a valid month.
        self.date(1).expect("day 1 exists in every month")
    }

    /// The last day of the month.
    pub fn last_day(self) -> CivilDate {
        self.date(self.days())
            .expect("days() is a valid day of the month")
    }

    /// Returns the given day of this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if `day` does not exist.
    pub fn date(self, day: u8) -> Result<CivilDate, CalendarError> {
        CivilDate::new(self.year, self.month, day)
    }

    /// Returns the following month, wrapping December to January of the
    /// next year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] past the last supported year.
    pub fn next(self) -> Result<Self, CalendarError> {
        if self.month == 11 {
            Self::new(self.year.saturating_add(1), 0)
        } else {
            Ok(Self {
                month: self.month + 1,
                ..self
            })
        }
    }

    /// Returns the preceding month, wrapping January to December of the
    /// previous year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] before the first supported year.
    pub fn prev(self) -> Result<Self, CalendarError> {
        if self.month == 0 {
            Self::new(self.year.saturating_sub(1), 11)
        } else {
            Ok(Self {
                month: self.month - 1,
                ..self
            })
        }
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(self, other: YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// Iterates the months from `self` up to, but excluding, `end`.
    ///
    /// ```
    /// use shiftcal_calendar::YearMonth;
    ///
    /// let nov = YearMonth::new(2024, 10).unwrap();
    /// let feb = YearMonth::new(2025, 1).unwrap();
    /// let months: Vec<String> = nov.iter_until(feb).map(|m| m.to_string()).collect();
    /// assert_eq!(months, ["2024-11", "2024-12", "2025-01"]);
    /// ```
    pub fn iter_until(self, end: YearMonth) -> MonthSpan {
        MonthSpan {
            next: self.ordinal(),
            end: end.ordinal(),
        }
    }

    /// Months since January of year 0.
    fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }

    /// Inverse of [`YearMonth::ordinal`] for ordinals between two valid months.
    fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u8,
        }
    }
}

/// Half-open run of consecutive months, from [`YearMonth::iter_until`].
///
/// Every yielded month lies between two valid months, so iteration never
/// fails. [`Iterator::nth`] jumps in constant time.
#[derive(Debug, Clone)]
pub struct MonthSpan {
    next: i64,
    end: i64,
}

impl Iterator for MonthSpan {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        if self.next >= self.end {
            return None;
        }
        let month = YearMonth::from_ordinal(self.next);
        self.next += 1;
        Some(month)
    }

    fn nth(&mut self, n: usize) -> Option<YearMonth> {
        let skip = i64::try_from(n).unwrap_or(i64::MAX);
        self.next = self.next.saturating_add(skip).min(self.end);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthSpan {}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    /// Parses `YYYY-MM` with a 1-based month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::Parse {
            input: s.to_string(),
            expected: "YYYY-MM",
        };
        let (y, m) = s.trim().rsplit_once('-').ok_or_else(parse_err)?;
        let year: i32 = y.parse().map_err(|_| parse_err())?;
        let month: u8 = m.parse().map_err(|_| parse_err())?;
        if month == 0 {
            return Err(parse_err());
        }
        Self::new(year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(y: i32, m: u8) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn new_rejects_month_12() {
        assert_eq!(
            YearMonth::new(2024, 12).unwrap_err(),
            CalendarError::InvalidMonth { month: 12 }
        );
    }

    #[test]
    fn days_and_bounds() {
        let feb = ym(2024, 1);
        assert_eq!(feb.days(), 29);
        assert_eq!(feb.first_day(), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(feb.last_day(), CivilDate::new(2024, 1, 29).unwrap());
        assert!(feb.date(30).is_err());
    }

    #[test]
    fn next_wraps_december() {
        assert_eq!(ym(2024, 11).next().unwrap(), ym(2025, 0));
        assert_eq!(ym(2024, 3).next().unwrap(), ym(2024, 4));
    }

    #[test]
    fn prev_wraps_january() {
        assert_eq!(ym(2025, 0).prev().unwrap(), ym(2024, 11));
        assert_eq!(ym(2024, 4).prev().unwrap(), ym(2024, 3));
    }

    #[test]
    fn next_past_max_year_fails() {
        let last = ym(CivilDate::MAX_YEAR, 11);
        assert!(matches!(last.next(), Err(CalendarError::OutOfRange { .. })));
    }

    #[test]
    fn months_until_is_signed() {
        assert_eq!(ym(2024, 10).months_until(ym(2025, 1)), 3);
        assert_eq!(ym(2025, 1).months_until(ym(2024, 10)), -3);
        assert_eq!(ym(-1, 11).months_until(ym(0, 0)), 1);
    }

    #[test]
    fn iter_until_crosses_years() {
        let months: Vec<YearMonth> = ym(2023, 10).iter_until(ym(2024, 2)).collect();
        assert_eq!(months, vec![ym(2023, 10), ym(2023, 11), ym(2024, 0), ym(2024, 1)]);
        assert_eq!(ym(2024, 0).iter_until(ym(2025, 0)).len(), 12);
    }

    #[test]
    fn iter_until_empty_when_end_not_after_start() {
        assert_eq!(ym(2024, 5).iter_until(ym(2024, 5)).next(), None);
        assert_eq!(ym(2024, 5).iter_until(ym(2023, 0)).len(), 0);
    }

    #[test]
    fn iter_until_nth_jumps() {
        let mut span = ym(2020, 0).iter_until(ym(2030, 0));
        assert_eq!(span.nth(11), Some(ym(2020, 11)));
        assert_eq!(span.next(), Some(ym(2021, 0)));
        assert_eq!(span.nth(usize::MAX), None);
        assert_eq!(span.next(), None);
    }

    #[test]
    fn iter_until_negative_years() {
        let months: Vec<YearMonth> = ym(-1, 11).iter_until(ym(0, 1)).collect();
        assert_eq!(months, vec![ym(-1, 11), ym(0, 0)]);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(ym(2024, 2).to_string(), "2024-03");
        assert_eq!("2024-03".parse::<YearMonth>().unwrap(), ym(2024, 2));
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("2024".parse::<YearMonth>().is_err());
        assert!("2024-00".parse::<YearMonth>().is_err());
    }

    #[test]
    fn from_date() {
        let d = CivilDate::new(2023, 6, 19).unwrap();
        assert_eq!(YearMonth::from_date(d), ym(2023, 6));
        assert_eq!(d.year_month(), ym(2023, 6));
    }
}
