//! Visible-month resolution against built sequences.

use shiftcal_calendar::{CivilDate, YearMonth};
use shiftcal_layout::{
    CalendarCell, LayoutConfig, LayoutSequence, VisibleMonth, build_sequence,
    resolve_visible_month,
};
use shiftcal_pattern::{Anchor, Pattern};

fn year_of_months(start: YearMonth, block: usize) -> LayoutSequence {
    let pattern = Pattern::parse("A B C").unwrap();
    let anchor = Anchor::saved_today(CivilDate::new(2024, 2, 15).unwrap());
    let config = LayoutConfig::new().with_block_size(block);
    build_sequence(&pattern, anchor, start, 12, &config).unwrap()
}

#[test]
fn every_day_cell_resolves_to_its_month() {
    let seq = year_of_months(YearMonth::new(2024, 0).unwrap(), 42);
    for (i, cell) in seq.cells().iter().enumerate() {
        if let CalendarCell::Day(day) = cell {
            assert_eq!(
                resolve_visible_month(&seq, i, None, None),
                VisibleMonth::Resolved(day.date.year_month())
            );
        }
    }
}

#[test]
fn leading_blanks_adjacent_to_day_one_resolve_forward() {
    for block in [7, 42] {
        let seq = year_of_months(YearMonth::new(2024, 0).unwrap(), block);
        for region in seq.months().iter().skip(1) {
            if region.first_day() == region.header() + 1 {
                continue;
            }
            let blank = region.first_day() - 1;
            assert!(seq.get(blank).unwrap().is_blank());
            assert_eq!(
                resolve_visible_month(&seq, blank, None, None),
                VisibleMonth::Resolved(region.month()),
                "block {block}, {}",
                region.month()
            );
        }
    }
}

#[test]
fn every_position_resolves_to_an_adjacent_month() {
    let seq = year_of_months(YearMonth::new(2024, 5).unwrap(), 42);
    for i in 0..seq.len() {
        let region = seq.region_at(i).unwrap();
        let got = resolve_visible_month(&seq, i, None, None).month().unwrap();
        let distance = region.month().months_until(got);
        assert!((-1..=1).contains(&distance), "cell {i}: {got} vs {}", region.month());
    }
}

#[test]
fn scrolling_to_the_bottom_reports_the_final_month() {
    let seq = year_of_months(YearMonth::new(2024, 0).unwrap(), 42);
    let december = YearMonth::new(2024, 11).unwrap();
    let november_body = seq.months()[10].body();
    // Top of the viewport still inside November's padding.
    let top = november_body.end - 1;
    assert_eq!(
        resolve_visible_month(&seq, top, Some(seq.len() - 1), None),
        VisibleMonth::Resolved(december)
    );
}

#[test]
fn fallback_is_never_used_when_days_exist() {
    let seq = year_of_months(YearMonth::new(2024, 0).unwrap(), 42);
    let fallback = Some(YearMonth::new(1999, 0).unwrap());
    for i in (0..seq.len()).step_by(5) {
        assert!(resolve_visible_month(&seq, i, None, fallback).is_resolved());
    }
}
