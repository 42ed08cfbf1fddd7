//! Typed grid cells.

use shiftcal_calendar::{CivilDate, YearMonth};

/// One day of the grid with its resolved pattern slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayCell {
    /// The calendar date shown in the cell.
    pub date: CivilDate,
    /// Label of the pattern slot assigned to `date`.
    pub label: String,
    /// The pattern slot itself, in `0..pattern.len()`.
    pub pattern_index: usize,
    /// Whether `date` is the caller-supplied "today".
    pub is_today: bool,
}

/// A cell of the flattened multi-month grid.
///
/// Rendering dispatches on the variant: `Day` cells carry content, `Blank`
/// cells pad weeks and blocks, and `MonthHeader` cells title each month and
/// span a full grid row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarCell {
    Day(DayCell),
    Blank,
    MonthHeader(YearMonth),
}

impl CalendarCell {
    /// Returns `true` for `Day` cells.
    pub fn is_day(&self) -> bool {
        matches!(self, CalendarCell::Day(_))
    }

    /// Returns `true` for `Blank` cells.
    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarCell::Blank)
    }

    /// Returns `true` for `MonthHeader` cells.
    pub fn is_header(&self) -> bool {
        matches!(self, CalendarCell::MonthHeader(_))
    }

    /// Returns the day payload of a `Day` cell.
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            CalendarCell::Day(day) => Some(day),
            _ => None,
        }
    }

    /// Month of a `Day` cell.
    pub fn day_month(&self) -> Option<YearMonth> {
        self.as_day().map(|d| d.date.year_month())
    }
}
