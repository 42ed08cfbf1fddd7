//! Closed-form pattern index lookup.

use shiftcal_calendar::CivilDate;
use tracing::trace;

use crate::anchor::Anchor;
use crate::error::PatternError;
use crate::pattern::Pattern;
use crate::span::month_span_days;

/// Resolves the pattern slot of any date from one [`Anchor`].
///
/// For every pair of dates `d1`, `d2` the indices differ by
/// `days_between(d1, d2)` modulo the pattern length, in either direction
/// and across any number of month or year boundaries.
#[derive(Debug, Clone, Copy)]
pub struct PatternIndexer<'p> {
    pattern: &'p Pattern,
    anchor: Anchor,
}

impl<'p> PatternIndexer<'p> {
    /// Builds an indexer for `pattern` pinned by `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidAnchorIndex`] if the anchor index is
    /// not a slot of `pattern`.
    pub fn new(pattern: &'p Pattern, anchor: Anchor) -> Result<Self, PatternError> {
        anchor.validate(pattern.len())?;
        trace!(anchor = %anchor.date(), index = anchor.index(), len = pattern.len(), "pattern indexer ready");
        Ok(Self { pattern, anchor })
    }

    /// The anchor this indexer resolves from.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The pattern being indexed.
    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// Signed day offset of `date` from the anchor date.
    pub fn offset(&self, date: CivilDate) -> i64 {
        month_span_days(self.anchor.date(), date)
    }

    /// Pattern slot of `date`, in `0..pattern.len()`.
    pub fn index(&self, date: CivilDate) -> usize {
        wrap_index(self.anchor.index(), self.offset(date), self.pattern.len())
    }

    /// Label assigned to `date`.
    pub fn label(&self, date: CivilDate) -> &'p str {
        self.pattern.label(self.index(date))
    }
}

/// Pattern slot of `date` for a pattern of length `len`, without building
/// an indexer.
///
/// # Errors
///
/// Returns [`PatternError::EmptyPattern`] if `len == 0` and
/// [`PatternError::InvalidAnchorIndex`] if the anchor index is not below
/// `len`.
///
/// ```
/// use shiftcal_calendar::CivilDate;
/// use shiftcal_pattern::{Anchor, pattern_index};
///
/// let anchor = Anchor::new(CivilDate::new(2024, 2, 15).unwrap(), 0);
/// let apr1 = CivilDate::new(2024, 3, 1).unwrap();
/// assert_eq!(pattern_index(anchor, 3, apr1).unwrap(), 2);
/// ```
pub fn pattern_index(anchor: Anchor, len: usize, date: CivilDate) -> Result<usize, PatternError> {
    anchor.validate(len)?;
    let offset = month_span_days(anchor.date(), date);
    Ok(wrap_index(anchor.index(), offset, len))
}

/// `((index + offset) mod len + len) mod len`, for `len >= 1`.
fn wrap_index(index: usize, offset: i64, len: usize) -> usize {
    let len = len as i64;
    let shifted = (index as i64 % len) + (offset % len);
    ((shifted % len + len) % len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    fn abc() -> Pattern {
        Pattern::new(["A", "B", "C"]).unwrap()
    }

    #[test]
    fn anchor_identity() {
        let p = abc();
        for index in 0..3 {
            let anchor = Anchor::new(date(2024, 2, 15), index);
            let ix = PatternIndexer::new(&p, anchor).unwrap();
            assert_eq!(ix.index(anchor.date()), index);
        }
    }

    #[test]
    fn march_scenario() {
        let p = abc();
        let ix = PatternIndexer::new(&p, Anchor::new(date(2024, 2, 15), 0)).unwrap();
        assert_eq!(ix.index(date(2024, 2, 16)), 1);
        assert_eq!(ix.index(date(2024, 2, 14)), 2);
        assert_eq!(ix.index(date(2024, 3, 1)), 2);
        assert_eq!(ix.label(date(2024, 3, 1)), "C");
        assert_eq!(ix.offset(date(2024, 3, 1)), 17);
    }

    #[test]
    fn year_rollover_scenario() {
        let p = abc();
        let ix = PatternIndexer::new(&p, Anchor::new(date(2023, 11, 28), 0)).unwrap();
        assert_eq!(ix.index(date(2024, 0, 2)), 2);
    }

    #[test]
    fn rejects_out_of_range_anchor() {
        let p = abc();
        assert_eq!(
            PatternIndexer::new(&p, Anchor::new(date(2024, 0, 1), 3)).unwrap_err(),
            PatternError::InvalidAnchorIndex { index: 3, len: 3 }
        );
    }

    #[test]
    fn free_function_rejects_zero_length() {
        let anchor = Anchor::new(date(2024, 0, 1), 0);
        assert_eq!(
            pattern_index(anchor, 0, date(2024, 0, 2)).unwrap_err(),
            PatternError::EmptyPattern
        );
    }

    #[test]
    fn single_label_pattern_is_constant() {
        let p = Pattern::new(["X"]).unwrap();
        let ix = PatternIndexer::new(&p, Anchor::new(date(2024, 0, 1), 0)).unwrap();
        assert_eq!(ix.index(date(1999, 6, 4)), 0);
        assert_eq!(ix.index(date(2077, 11, 31)), 0);
    }

    #[test]
    fn wrap_index_normalizes_negative_offsets() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(1, -4, 3), 0);
        assert_eq!(wrap_index(2, 7, 4), 1);
        assert_eq!(wrap_index(0, i64::MIN + 1, 7), ((i64::MIN + 1).rem_euclid(7)) as usize);
    }
}
