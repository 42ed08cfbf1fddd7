//! Error types for the shiftcal-pattern crate.

use shiftcal_calendar::CalendarError;

/// Error type for all fallible operations in the shiftcal-pattern crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Returned when a pattern has no labels, so no index space exists.
    #[error("pattern is empty")]
    EmptyPattern,

    /// Returned when a label is empty or whitespace only.
    #[error("pattern label at position {position} is empty")]
    EmptyLabel {
        /// 0-based position of the offending label.
        position: usize,
    },

    /// Returned when an anchor index does not address a pattern slot.
    #[error("anchor index {index} out of range for pattern of length {len}")]
    InvalidAnchorIndex {
        /// The anchor index that was provided.
        index: usize,
        /// Length of the pattern it was checked against.
        len: usize,
    },

    /// Calendar validation failure while building an anchor.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(PatternError::EmptyPattern.to_string(), "pattern is empty");
        assert_eq!(
            PatternError::InvalidAnchorIndex { index: 3, len: 3 }.to_string(),
            "anchor index 3 out of range for pattern of length 3"
        );
        assert_eq!(
            PatternError::EmptyLabel { position: 1 }.to_string(),
            "pattern label at position 1 is empty"
        );
    }

    #[test]
    fn calendar_error_is_transparent() {
        let inner = CalendarError::InvalidMonth { month: 12 };
        let err = PatternError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<PatternError>();
    }
}
