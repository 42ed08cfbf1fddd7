//! Error types for the shiftcal-layout crate.

use shiftcal_calendar::CalendarError;
use shiftcal_pattern::PatternError;

/// Error type for all fallible operations in the shiftcal-layout crate.
///
/// A zero month count is not an error: it yields an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Returned when the padding block is not a positive multiple of 7.
    #[error("block size must be a positive multiple of 7, got {block_size}")]
    InvalidBlockSize {
        /// The rejected block size.
        block_size: usize,
    },

    /// Pattern or anchor validation failure.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Calendar failure, e.g. a month range running past the supported years.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
