//! Consecutive date and month sequences.

use crate::date::CivilDate;
use crate::error::CalendarError;
use crate::month::YearMonth;

/// Generates a contiguous sequence of civil dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates.
/// Month and year boundaries (including February 29) are handled by
/// [`CivilDate::next`].
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the sequence runs past the last
/// supported date.
///
/// # Example
///
/// ```
/// use shiftcal_calendar::{CivilDate, date_sequence};
///
/// let start = CivilDate::new(2024, 11, 30).unwrap();
/// let dates = date_sequence(start, 4).unwrap();
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[3], CivilDate::new(2025, 0, 2).unwrap());
/// ```
pub fn date_sequence(start: CivilDate, n_days: usize) -> Result<Vec<CivilDate>, CalendarError> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return Ok(dates);
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next()?;
        dates.push(current);
    }
    Ok(dates)
}

/// Generates `n_months` consecutive months starting at `start`, wrapping
/// December to January of the following year.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the sequence runs past the last
/// supported year.
pub fn month_sequence(start: YearMonth, n_months: usize) -> Result<Vec<YearMonth>, CalendarError> {
    let mut months = Vec::with_capacity(n_months);
    if n_months == 0 {
        return Ok(months);
    }
    months.push(start);
    let mut current = start;
    for _ in 1..n_months {
        current = current.next()?;
        months.push(current);
    }
    Ok(months)
}
