use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::RenderArgs;
use crate::config::{LabelsToml, ShiftcalConfig};
use crate::convert::*;

use shiftcal_calendar::{CivilDate, Weekday};
use shiftcal_layout::{
    CalendarCell, LayoutSequence, WEEK_LEN, build_sequence, month_title, weekday_header,
};

/// Execute the `render` subcommand.
pub fn run(args: RenderArgs, config: &ShiftcalConfig, today: CivilDate) -> Result<()> {
    let _cmd = info_span!("render").entered();

    let pattern = build_pattern(&config.pattern)?;
    let anchor = build_anchor(&config.pattern, today)?;
    let layout = build_layout_config(&config.layout, today)?;
    let start = resolve_start(&config.layout, args.range.start.as_deref(), today)?;
    let months = args.range.months.unwrap_or(config.layout.months);

    info!(%start, months, labels = pattern.len(), anchor = %anchor.date(), "laying out months");
    let seq = build_sequence(&pattern, anchor, start, months, &layout)
        .context("failed to lay out months")?;
    info!(cells = seq.len(), "layout complete");

    let text = render_text(&seq, &config.labels, layout.week_start());
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())
        .context("failed to write calendar")?;
    Ok(())
}

/// Formats every month of `seq` as a title line, a weekday header and
/// 7-column rows. Rows holding no day cells are skipped. Today's date is
/// marked with `*`.
pub fn render_text(seq: &LayoutSequence, labels: &LabelsToml, week_start: Weekday) -> String {
    let header = weekday_header(&labels.weekdays, week_start);
    let label_width = seq
        .days()
        .map(|d| d.label.chars().count())
        .max()
        .unwrap_or(0);
    let width = header
        .iter()
        .map(|h| h.chars().count())
        .max()
        .unwrap_or(0)
        .max(label_width + 3);

    let mut text = String::new();
    for (n, (region, rows)) in seq.month_rows().enumerate() {
        if n > 0 {
            text.push('\n');
        }
        text.push_str(&month_title(&labels.months, region.month()));
        text.push('\n');
        push_row(&mut text, header.iter().map(|h| h.to_string()), width);

        for row in rows {
            if !row.iter().any(CalendarCell::is_day) {
                continue;
            }
            push_row(&mut text, row.iter().map(cell_text), width);
        }
    }
    text
}

fn cell_text(cell: &CalendarCell) -> String {
    match cell {
        CalendarCell::Day(day) => {
            let mark = if day.is_today { '*' } else { ' ' };
            format!("{:>2}{mark}{}", day.date.day(), day.label)
        }
        CalendarCell::Blank | CalendarCell::MonthHeader(_) => String::new(),
    }
}

fn push_row(text: &mut String, cells: impl Iterator<Item = String>, width: usize) {
    let row: Vec<String> = cells
        .take(WEEK_LEN)
        .map(|c| format!("{c:<width$}"))
        .collect();
    text.push_str(row.join(" ").trim_end());
    text.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftcal_calendar::YearMonth;
    use shiftcal_layout::LayoutConfig;
    use shiftcal_pattern::{Anchor, Pattern};

    fn render(start: YearMonth, months: usize, today: CivilDate) -> String {
        let pattern = Pattern::parse("A B C").unwrap();
        let anchor = Anchor::new(CivilDate::new(2024, 2, 15).unwrap(), 0);
        let config = LayoutConfig::new().with_today(today);
        let seq = build_sequence(&pattern, anchor, start, months, &config).unwrap();
        render_text(&seq, &LabelsToml::default(), Weekday::Saturday)
    }

    #[test]
    fn march_2024_grid() {
        let today = CivilDate::new(2024, 2, 15).unwrap();
        let text = render(YearMonth::new(2024, 2).unwrap(), 1, today);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "March 2024");
        assert!(lines[1].starts_with("Sat"));
        assert!(lines[1].ends_with("Fri"));
        // March 1, 2024 is a Friday: last column of the first row.
        assert_eq!(lines[2].trim(), "1 B");
        // Anchor day carries label A and the today marker.
        assert!(lines.iter().any(|l| l.contains("15*A")));
        // 1 partial row + 4 full rows + 1 row holding Mar 30-31.
        assert_eq!(lines.len(), 2 + 6);
    }

    #[test]
    fn months_are_separated_by_blank_line() {
        let today = CivilDate::new(2000, 0, 1).unwrap();
        let text = render(YearMonth::new(2024, 10).unwrap(), 2, today);
        assert!(text.contains("\nDecember 2024\n"));
        assert!(text.contains("\n\nDecember 2024"));
        assert!(text.starts_with("November 2024\n"));
        assert!(!text.contains('*'));
    }
}
