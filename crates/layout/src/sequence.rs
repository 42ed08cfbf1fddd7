//! Multi-month flattened layout.

use std::ops::Range;

use shiftcal_calendar::{CalendarError, CivilDate, YearMonth};
use shiftcal_pattern::{Anchor, Pattern, PatternIndexer};
use tracing::debug;

use crate::cell::{CalendarCell, DayCell};
use crate::config::{LayoutConfig, WEEK_LEN};
use crate::error::LayoutError;
use crate::month::build_month;

/// Upper bound on the months reserved up front; longer ranges grow on demand.
const MAX_PREALLOC_MONTHS: usize = 120;

/// Where one month sits inside a [`LayoutSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRegion {
    month: YearMonth,
    header: usize,
    first_day: usize,
    end: usize,
}

impl MonthRegion {
    /// The month of this region.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Index of the month's header cell.
    pub fn header(&self) -> usize {
        self.header
    }

    /// Index of the month's day 1 cell.
    pub fn first_day(&self) -> usize {
        self.first_day
    }

    /// Cells after the header: leading blanks, days and trailing padding.
    pub fn body(&self) -> Range<usize> {
        self.header + 1..self.end
    }

    /// Returns `true` if `index` falls on the header or the body.
    pub fn contains(&self, index: usize) -> bool {
        (self.header..self.end).contains(&index)
    }
}

/// A flat, row-aligned list of cells covering consecutive months.
///
/// Every month contributes one `MonthHeader` cell followed by a body whose
/// length is a multiple of the block size (itself a multiple of 7), so each
/// body is a whole number of week rows. Day cells are strictly
/// date-ordered with no gaps or duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSequence {
    cells: Vec<CalendarCell>,
    regions: Vec<MonthRegion>,
}

impl LayoutSequence {
    /// All cells in grid order.
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no months were laid out.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `index`.
    pub fn get(&self, index: usize) -> Option<&CalendarCell> {
        self.cells.get(index)
    }

    /// One region per month, in order.
    pub fn months(&self) -> &[MonthRegion] {
        &self.regions
    }

    /// The region containing `index`.
    pub fn region_at(&self, index: usize) -> Option<&MonthRegion> {
        let pos = self.regions.partition_point(|r| r.end <= index);
        self.regions.get(pos).filter(|r| r.contains(index))
    }

    /// Index of the header cell of `month`, for jumping to a month.
    pub fn header_index(&self, month: YearMonth) -> Option<usize> {
        self.region_of(month).map(MonthRegion::header)
    }

    /// Index of the cell showing `date`.
    pub fn position_of(&self, date: CivilDate) -> Option<usize> {
        self.region_of(date.year_month())
            .map(|r| r.first_day + usize::from(date.day()) - 1)
    }

    /// All day cells in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(CalendarCell::as_day)
    }

    /// Each month's region with its body split into 7-cell week rows.
    pub fn month_rows(
        &self,
    ) -> impl Iterator<Item = (&MonthRegion, std::slice::Chunks<'_, CalendarCell>)> {
        self.regions
            .iter()
            .map(|region| (region, self.cells[region.body()].chunks(WEEK_LEN)))
    }

    fn region_of(&self, month: YearMonth) -> Option<&MonthRegion> {
        self.regions
            .binary_search_by(|r| r.month.cmp(&month))
            .ok()
            .map(|i| &self.regions[i])
    }
}

/// Lays out `month_count` consecutive months starting at `start`.
///
/// For each month: one header cell, the month's leading blanks and day
/// cells, then trailing blanks up to the next multiple of
/// [`LayoutConfig::block_size`]. The anchor is resolved once and reused for
/// every month, so the pattern runs on unbroken across month and year
/// boundaries. `month_count == 0` yields an empty sequence.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidBlockSize`] for an invalid configuration,
/// [`LayoutError::Pattern`] if the anchor index is out of range for
/// `pattern`, and [`LayoutError::Calendar`] if the range runs past the last
/// supported year, checked before any cell is laid out. Nothing is returned
/// on error.
///
/// # Example
///
/// ```
/// use shiftcal_calendar::{CalendarError, CivilDate, YearMonth};
/// use shiftcal_layout::{LayoutConfig, build_sequence};
/// use shiftcal_pattern::{Anchor, Pattern};
///
/// let pattern = Pattern::parse("A B C").unwrap();
/// let anchor = Anchor::saved_today(CivilDate::new(2024, 2, 15).unwrap());
/// let start = YearMonth::new(2024, 2).unwrap();
///
/// let seq = build_sequence(&pattern, anchor, start, 2, &LayoutConfig::new()).unwrap();
/// assert_eq!(seq.months().len(), 2);
/// assert_eq!(seq.len(), 2 * (1 + 42));
/// ```
#[tracing::instrument(skip(pattern, config), fields(len = pattern.len()))]
pub fn build_sequence(
    pattern: &Pattern,
    anchor: Anchor,
    start: YearMonth,
    month_count: usize,
    config: &LayoutConfig,
) -> Result<LayoutSequence, LayoutError> {
    config.validate()?;
    let indexer = PatternIndexer::new(pattern, anchor)?;
    let block = config.block_size();
    check_month_range(start, month_count)?;

    let reserved = month_count.min(MAX_PREALLOC_MONTHS);
    let mut cells = Vec::with_capacity(reserved.saturating_mul(block.saturating_add(1)));
    let mut regions = Vec::with_capacity(reserved);
    let mut month = start;

    for n in 0..month_count {
        if n > 0 {
            month = month.next()?;
        }
        let header = cells.len();
        cells.push(CalendarCell::MonthHeader(month));

        let layout = build_month(month, &indexer, config)?;
        let used = layout.used_cells();
        let first_day = header + 1 + layout.leading_blanks();
        cells.extend(layout.into_cells());

        let trailing = (block - used % block) % block;
        cells.extend(std::iter::repeat_n(CalendarCell::Blank, trailing));

        debug!(%month, header, used, trailing, "month laid out");
        regions.push(MonthRegion {
            month,
            header,
            first_day,
            end: cells.len(),
        });
    }

    Ok(LayoutSequence { cells, regions })
}

/// Fails if `month_count` months from `start` run past December of
/// [`CivilDate::MAX_YEAR`].
fn check_month_range(start: YearMonth, month_count: usize) -> Result<(), CalendarError> {
    let available = start.months_until(YearMonth::new(CivilDate::MAX_YEAR, 11)?) + 1;
    let requested = i64::try_from(month_count).unwrap_or(i64::MAX);
    if requested > available {
        let last_year = i64::from(start.year())
            .saturating_add(i64::from(start.month()).saturating_add(requested - 1) / 12);
        return Err(CalendarError::OutOfRange { year: last_year });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Pattern {
        Pattern::new(["A", "B", "C"]).unwrap()
    }

    fn anchor() -> Anchor {
        Anchor::new(CivilDate::new(2024, 2, 15).unwrap(), 0)
    }

    fn ym(y: i32, m: u8) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn zero_months_is_empty() {
        let seq = build_sequence(&abc(), anchor(), ym(2024, 0), 0, &LayoutConfig::new()).unwrap();
        assert!(seq.is_empty());
        assert!(seq.months().is_empty());
        assert_eq!(seq.region_at(0), None);
    }

    #[test]
    fn single_month_layout() {
        let seq = build_sequence(&abc(), anchor(), ym(2024, 3), 1, &LayoutConfig::new()).unwrap();
        assert_eq!(seq.len(), 43);
        assert_eq!(seq.get(0), Some(&CalendarCell::MonthHeader(ym(2024, 3))));
        assert!(seq.get(1).unwrap().is_blank());
        assert!(seq.get(2).unwrap().is_blank());
        assert!(seq.get(3).unwrap().is_day());
        // 2 leading + 30 days = 32 used, 10 trailing.
        assert!(seq.cells()[33..].iter().all(CalendarCell::is_blank));
        assert_eq!(seq.cells()[33..].len(), 10);
    }

    #[test]
    fn week_sized_blocks_pad_to_rows_only() {
        let config = LayoutConfig::new().with_block_size(7);
        // April 2024: 2 + 30 = 32 used, padded to 35.
        let seq = build_sequence(&abc(), anchor(), ym(2024, 3), 1, &config).unwrap();
        assert_eq!(seq.len(), 1 + 35);
    }

    #[test]
    fn exact_fit_adds_no_trailing_row() {
        // February 2025 starts on a Saturday and has 28 days: 4 full weeks.
        let config = LayoutConfig::new().with_block_size(7);
        let seq = build_sequence(&abc(), anchor(), ym(2025, 1), 1, &config).unwrap();
        assert_eq!(seq.len(), 1 + 28);
        assert!(seq.cells().last().unwrap().is_day());
    }

    #[test]
    fn regions_and_positions() {
        let seq = build_sequence(&abc(), anchor(), ym(2024, 10), 3, &LayoutConfig::new()).unwrap();
        let months: Vec<YearMonth> = seq.months().iter().map(MonthRegion::month).collect();
        assert_eq!(months, vec![ym(2024, 10), ym(2024, 11), ym(2025, 0)]);

        assert_eq!(seq.header_index(ym(2024, 11)), Some(43));
        assert_eq!(seq.header_index(ym(2025, 1)), None);

        let jan2 = CivilDate::new(2025, 0, 2).unwrap();
        let pos = seq.position_of(jan2).unwrap();
        assert_eq!(seq.get(pos).unwrap().as_day().unwrap().date, jan2);

        assert_eq!(seq.region_at(43).unwrap().month(), ym(2024, 11));
        assert_eq!(seq.region_at(42).unwrap().month(), ym(2024, 10));
        assert_eq!(seq.region_at(seq.len()), None);
    }

    #[test]
    fn rows_are_full_weeks() {
        let seq = build_sequence(&abc(), anchor(), ym(2024, 3), 2, &LayoutConfig::new()).unwrap();
        let mut seen = Vec::new();
        for (region, rows) in seq.month_rows() {
            let rows: Vec<_> = rows.collect();
            assert_eq!(rows.len(), 6);
            assert!(rows.iter().all(|r| r.len() == 7));
            seen.push(region.month());
        }
        assert_eq!(seen, vec![ym(2024, 3), ym(2024, 4)]);
    }

    #[test]
    fn invalid_anchor_is_rejected_before_layout() {
        let bad = Anchor::new(CivilDate::new(2024, 0, 1).unwrap(), 5);
        let err = build_sequence(&abc(), bad, ym(2024, 0), 3, &LayoutConfig::new()).unwrap_err();
        assert!(matches!(err, LayoutError::Pattern(_)));
    }

    #[test]
    fn invalid_block_size_is_rejected() {
        let config = LayoutConfig::new().with_block_size(10);
        let err = build_sequence(&abc(), anchor(), ym(2024, 0), 1, &config).unwrap_err();
        assert_eq!(err, LayoutError::InvalidBlockSize { block_size: 10 });
    }

    #[test]
    fn range_past_max_year_fails() {
        let start = ym(shiftcal_calendar::CivilDate::MAX_YEAR, 11);
        let err = build_sequence(&abc(), anchor(), start, 2, &LayoutConfig::new()).unwrap_err();
        assert!(matches!(err, LayoutError::Calendar(_)));
    }

    #[test]
    fn huge_month_count_is_out_of_range() {
        for count in [usize::MAX, usize::MAX / 8, u32::MAX as usize] {
            let err = build_sequence(&abc(), anchor(), ym(2024, 0), count, &LayoutConfig::new())
                .unwrap_err();
            assert!(
                matches!(err, LayoutError::Calendar(CalendarError::OutOfRange { .. })),
                "{count}: {err:?}"
            );
        }
    }

    #[test]
    fn month_range_ends_at_last_supported_december() {
        let max = shiftcal_calendar::CivilDate::MAX_YEAR;
        let start = ym(max, 0);
        let near = Anchor::new(start.first_day(), 0);
        let seq = build_sequence(&abc(), near, start, 12, &LayoutConfig::new()).unwrap();
        assert_eq!(seq.months().last().unwrap().month(), ym(max, 11));

        let err = build_sequence(&abc(), near, start, 13, &LayoutConfig::new()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Calendar(CalendarError::OutOfRange {
                year: i64::from(max) + 1
            })
        );
    }
}
