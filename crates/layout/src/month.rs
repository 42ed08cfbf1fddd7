//! Cells of a single month: leading alignment blanks, then one day cell per
//! day of the month.

use shiftcal_calendar::{Weekday, YearMonth, date_sequence};
use shiftcal_pattern::PatternIndexer;

use crate::cell::{CalendarCell, DayCell};
use crate::config::LayoutConfig;
use crate::error::LayoutError;

/// The cells of one month, without trailing padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    month: YearMonth,
    leading_blanks: usize,
    cells: Vec<CalendarCell>,
}

impl MonthLayout {
    /// The month laid out.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Number of blank cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    /// Number of day cells (the month length).
    pub fn day_count(&self) -> usize {
        self.cells.len() - self.leading_blanks
    }

    /// Leading blanks plus day cells.
    pub fn used_cells(&self) -> usize {
        self.cells.len()
    }

    /// The cells in grid order.
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Consumes the layout, returning its cells.
    pub fn into_cells(self) -> Vec<CalendarCell> {
        self.cells
    }
}

/// Blank cells needed before day 1 of `month` so that it lands in its
/// weekday column of a grid starting on `week_start`.
///
/// ```
/// use shiftcal_calendar::{Weekday, YearMonth};
/// use shiftcal_layout::leading_blanks;
///
/// // April 1, 2024 is a Monday: third column of a Saturday-first week.
/// let april = YearMonth::new(2024, 3).unwrap();
/// assert_eq!(leading_blanks(april, Weekday::Saturday), 2);
/// assert_eq!(leading_blanks(april, Weekday::Monday), 0);
/// ```
pub fn leading_blanks(month: YearMonth, week_start: Weekday) -> usize {
    month.first_day().weekday().offset_from(week_start)
}

/// Lays out one month: leading blanks, then a day cell for every day from 1
/// to the month length, each labelled with its pattern slot.
///
/// # Errors
///
/// Returns [`LayoutError::Calendar`] only if the month's days cannot be
/// enumerated, which cannot happen for a valid [`YearMonth`].
pub fn build_month(
    month: YearMonth,
    indexer: &PatternIndexer<'_>,
    config: &LayoutConfig,
) -> Result<MonthLayout, LayoutError> {
    let leading = leading_blanks(month, config.week_start());
    let days = usize::from(month.days());
    let today = config.today();

    let mut cells = Vec::with_capacity(leading + days);
    cells.extend(std::iter::repeat_n(CalendarCell::Blank, leading));
    for date in date_sequence(month.first_day(), days)? {
        let pattern_index = indexer.index(date);
        cells.push(CalendarCell::Day(DayCell {
            date,
            label: indexer.pattern().label(pattern_index).to_string(),
            pattern_index,
            is_today: today == Some(date),
        }));
    }

    Ok(MonthLayout {
        month,
        leading_blanks: leading,
        cells,
    })
}
