//! Error types for the shiftcal-calendar crate.

/// Error type for all fallible operations in the shiftcal-calendar crate.
///
/// Months are 0-based throughout (0 = January, 11 = December), so the
/// values carried here are 0-based as well.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 0..=11.
    #[error("invalid month: {month} (must be 0..=11)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day is outside `1..=days_in_month(year, month)`.
    #[error("invalid date: day {day} of month {month} in {year} (max {max_day})")]
    InvalidDate {
        /// Year of the rejected date.
        year: i32,
        /// 0-based month of the rejected date.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a year or a day offset leaves the supported range.
    #[error("date out of supported range (year {year})")]
    OutOfRange {
        /// The year that could not be represented.
        year: i64,
    },

    /// Returned when a textual date or month cannot be parsed.
    #[error("cannot parse {input:?}: expected {expected}")]
    Parse {
        /// The rejected input text.
        input: String,
        /// Description of the accepted format.
        expected: &'static str,
    },
}
