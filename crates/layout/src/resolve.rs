//! Infers the month to show as "current" from a viewport position.

use shiftcal_calendar::YearMonth;
use tracing::trace;

use crate::sequence::LayoutSequence;

/// Cells at the end of a sequence within which a visible last cell pins the
/// final month.
pub const DEFAULT_BOTTOM_TAIL: usize = 10;

/// Outcome of a visible-month lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleMonth {
    /// A month was found from the viewport.
    Resolved(YearMonth),
    /// Nothing could be resolved; the caller's previous month is kept.
    Retained(YearMonth),
    /// Nothing could be resolved and there was no previous month.
    Unresolved,
}

impl VisibleMonth {
    /// The month to display, if any.
    pub fn month(self) -> Option<YearMonth> {
        match self {
            VisibleMonth::Resolved(m) | VisibleMonth::Retained(m) => Some(m),
            VisibleMonth::Unresolved => None,
        }
    }

    /// Returns `true` if the month came from the viewport itself.
    pub fn is_resolved(self) -> bool {
        matches!(self, VisibleMonth::Resolved(_))
    }
}

/// Resolves the visible month of a [`LayoutSequence`] viewport.
///
/// Lookups never fail: positions on blank or header cells are resolved from
/// the nearest day cell, and a sequence without day cells yields the
/// caller's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMonthResolver {
    bottom_tail: usize,
}

impl Default for VisibleMonthResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibleMonthResolver {
    /// Creates a resolver with a bottom tail of [`DEFAULT_BOTTOM_TAIL`].
    pub fn new() -> Self {
        Self {
            bottom_tail: DEFAULT_BOTTOM_TAIL,
        }
    }

    /// Sets how close to the end the last visible cell must be to pin the
    /// final month.
    pub fn with_bottom_tail(mut self, bottom_tail: usize) -> Self {
        self.bottom_tail = bottom_tail;
        self
    }

    /// Returns the month to report for a viewport whose topmost cell is
    /// `first_visible` and bottom cell, when known, is `last_visible`.
    ///
    /// - A day cell at `first_visible` gives its own month.
    /// - A blank or header cell takes the month of the nearest day cell;
    ///   on equal distance the earlier day wins, so the month just scrolled
    ///   past stays until it has fully left the top.
    /// - When `last_visible` reaches the final `bottom_tail` cells and the
    ///   last day cell belongs to the final month, the final month wins.
    /// - Without any day cell the outcome is `fallback`, if given.
    ///
    /// A `first_visible` past the end is treated as the last cell.
    pub fn resolve(
        &self,
        sequence: &LayoutSequence,
        first_visible: usize,
        last_visible: Option<usize>,
        fallback: Option<YearMonth>,
    ) -> VisibleMonth {
        let cells = sequence.cells();
        if cells.is_empty() {
            return retain(fallback);
        }

        if let Some(last) = last_visible {
            if let Some(month) = self.bottom_month(sequence, last) {
                trace!(last, %month, "viewport at bottom: pinning final month");
                return VisibleMonth::Resolved(month);
            }
        }

        let first = first_visible.min(cells.len() - 1);
        if let Some(month) = cells[first].day_month() {
            return VisibleMonth::Resolved(month);
        }

        let backward = cells[..first]
            .iter()
            .rev()
            .enumerate()
            .find_map(|(i, c)| c.day_month().map(|m| (i + 1, m)));
        let forward = cells[first + 1..]
            .iter()
            .enumerate()
            .find_map(|(i, c)| c.day_month().map(|m| (i + 1, m)));
        trace!(first, ?backward, ?forward, "scanned for nearest day");

        match (backward, forward) {
            (Some((db, before)), Some((df, after))) => {
                VisibleMonth::Resolved(if db <= df { before } else { after })
            }
            (Some((_, month)), None) | (None, Some((_, month))) => VisibleMonth::Resolved(month),
            (None, None) => retain(fallback),
        }
    }

    /// The final month, when `last_visible` sits in the bottom tail and the
    /// last day cell belongs to that month.
    fn bottom_month(&self, sequence: &LayoutSequence, last_visible: usize) -> Option<YearMonth> {
        // The last cell itself always counts as the bottom.
        let tail = self.bottom_tail.max(1);
        if last_visible.saturating_add(tail) < sequence.len() {
            return None;
        }
        let final_month = sequence.months().last()?.month();
        let last_day_month = sequence.cells().iter().rev().find_map(|c| c.day_month())?;
        (last_day_month == final_month).then_some(final_month)
    }
}

fn retain(fallback: Option<YearMonth>) -> VisibleMonth {
    fallback.map_or(VisibleMonth::Unresolved, VisibleMonth::Retained)
}

/// Resolves the visible month with the default bottom tail.
///
/// See [`VisibleMonthResolver::resolve`].
pub fn resolve_visible_month(
    sequence: &LayoutSequence,
    first_visible: usize,
    last_visible: Option<usize>,
    fallback: Option<YearMonth>,
) -> VisibleMonth {
    VisibleMonthResolver::default().resolve(sequence, first_visible, last_visible, fallback)
}
