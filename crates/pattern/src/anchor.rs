//! The single (date, index) pair that pins a pattern to the calendar.

use shiftcal_calendar::{CalendarError, CivilDate};
use tracing::debug;

use crate::error::PatternError;

/// Ties one calendar date to one pattern slot.
///
/// The anchor itself does not know the pattern length; the range of
/// `index` is checked when an indexer is built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    date: CivilDate,
    index: usize,
}

impl Anchor {
    /// Creates an anchor pinning `date` to pattern slot `index`.
    pub fn new(date: CivilDate, index: usize) -> Self {
        Self { date, index }
    }

    /// The anchor written when a pattern is saved: `today` holds slot 0.
    pub fn saved_today(today: CivilDate) -> Self {
        Self::new(today, 0)
    }

    /// Rebuilds an anchor from a stored 0-based month and today's date.
    ///
    /// Only the month was stored, so the day is taken from `today` and the
    /// year is inferred: a saved month later in the year than today's month
    /// must belong to the previous year.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Calendar`] wrapping
    /// [`CalendarError::InvalidMonth`] for a month outside 0..=11, or
    /// [`CalendarError::InvalidDate`] when today's day does not exist in the
    /// saved month (e.g. the 31st and a 30-day month).
    ///
    /// ```
    /// use shiftcal_calendar::CivilDate;
    /// use shiftcal_pattern::Anchor;
    ///
    /// let today = CivilDate::new(2025, 1, 10).unwrap(); // Feb 10, 2025
    /// let anchor = Anchor::from_saved_month(today, 10).unwrap(); // November
    /// assert_eq!(anchor.date(), CivilDate::new(2024, 10, 10).unwrap());
    /// assert_eq!(anchor.index(), 0);
    /// ```
    pub fn from_saved_month(today: CivilDate, saved_month: u8) -> Result<Self, PatternError> {
        if saved_month > 11 {
            return Err(CalendarError::InvalidMonth { month: saved_month }.into());
        }
        let year = if saved_month <= today.month() {
            today.year()
        } else {
            today.year() - 1
        };
        let date = CivilDate::new(year, saved_month, today.day())?;
        debug!(%today, saved_month, anchor = %date, "reconstructed anchor from saved month");
        Ok(Self::saved_today(date))
    }

    /// The anchored date.
    pub fn date(self) -> CivilDate {
        self.date
    }

    /// The pattern slot held by [`Anchor::date`].
    pub fn index(self) -> usize {
        self.index
    }

    /// Checks that the index addresses a slot of a pattern of length `len`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyPattern`] if `len == 0` and
    /// [`PatternError::InvalidAnchorIndex`] if `index >= len`.
    pub fn validate(self, len: usize) -> Result<(), PatternError> {
        if len == 0 {
            return Err(PatternError::EmptyPattern);
        }
        if self.index >= len {
            return Err(PatternError::InvalidAnchorIndex {
                index: self.index,
                len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn saved_today_is_index_zero() {
        let a = Anchor::saved_today(date(2024, 2, 15));
        assert_eq!(a.date(), date(2024, 2, 15));
        assert_eq!(a.index(), 0);
    }

    #[test]
    fn saved_month_same_year() {
        let a = Anchor::from_saved_month(date(2024, 5, 20), 3).unwrap();
        assert_eq!(a.date(), date(2024, 3, 20));
    }

    #[test]
    fn saved_month_is_current_month() {
        let a = Anchor::from_saved_month(date(2024, 5, 20), 5).unwrap();
        assert_eq!(a.date(), date(2024, 5, 20));
    }

    #[test]
    fn saved_month_after_today_is_last_year() {
        let a = Anchor::from_saved_month(date(2025, 1, 3), 10).unwrap();
        assert_eq!(a.date(), date(2024, 10, 3));
    }

    #[test]
    fn saved_month_missing_day_fails() {
        let err = Anchor::from_saved_month(date(2024, 4, 31), 3).unwrap_err();
        assert!(matches!(
            err,
            PatternError::Calendar(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn saved_month_out_of_range() {
        assert_eq!(
            Anchor::from_saved_month(date(2024, 4, 1), 12).unwrap_err(),
            PatternError::Calendar(CalendarError::InvalidMonth { month: 12 })
        );
    }

    #[test]
    fn validate_checks_range() {
        let a = Anchor::new(date(2024, 0, 1), 2);
        assert!(a.validate(3).is_ok());
        assert_eq!(
            a.validate(2).unwrap_err(),
            PatternError::InvalidAnchorIndex { index: 2, len: 2 }
        );
        assert_eq!(a.validate(0).unwrap_err(), PatternError::EmptyPattern);
    }
}
