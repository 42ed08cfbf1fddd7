//! Month length tables and closed-form day-number conversions.
//!
//! Day numbers count days since 1970-01-01 in the proleptic Gregorian
//! calendar. The conversions work in 400-year eras (146 097 days each),
//! shifted so that the year starts on March 1 and the leap day falls at
//! the end of the shifted year.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in one 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Day number of 0000-03-01 relative to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Returns `true` if `year` is a Gregorian leap year.
///
/// ```
/// use shiftcal_calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a 0-based `month` of `year` (28..=31).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 0..=11.
///
/// ```
/// use shiftcal_calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1).unwrap(), 29);
/// assert_eq!(days_in_month(2023, 1).unwrap(), 28);
/// ```
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if month > 11 {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_length(year, month))
}

/// Month length for an already-validated 0-based month.
pub(crate) fn month_length(year: i32, month: u8) -> u8 {
    if month == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Converts a validated civil date (0-based month) to a day number.
pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let m = i64::from(month) + 1;
    let d = i64::from(day);
    let y = i64::from(year) - i64::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Converts a day number back to `(year, 0-based month, day)`.
///
/// The year is returned as `i64`; range checking is the caller's job.
pub(crate) fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, (month - 1) as u8, day as u8)
}
