//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use shiftcal_calendar::{CivilDate, Weekday, YearMonth};
use shiftcal_layout::{LayoutConfig, VisibleMonthResolver};
use shiftcal_pattern::{Anchor, Pattern};

/// Parses a weekday name (`"saturday"`, `"mon"`, ...) into a [`Weekday`].
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match Weekday::from_name(s) {
        Some(w) => Ok(w),
        None => bail!("unknown weekday: {s:?}"),
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<CivilDate> {
    s.parse().with_context(|| format!("invalid date {s:?}"))
}

/// Parses a `YYYY-MM` month.
pub fn parse_month(s: &str) -> Result<YearMonth> {
    s.parse().with_context(|| format!("invalid month {s:?}"))
}

/// Builds the label cycle from `[pattern].labels`.
pub fn build_pattern(t: &PatternToml) -> Result<Pattern> {
    Pattern::parse(&t.labels).context("invalid [pattern].labels")
}

/// Builds the anchor from either `[pattern].anchor` or the legacy
/// `[pattern].saved_month`, resolved against `today`.
pub fn build_anchor(t: &PatternToml, today: CivilDate) -> Result<Anchor> {
    let anchor = match (&t.anchor, t.saved_month) {
        (Some(date), None) => Anchor::new(parse_date(date)?, t.anchor_index),
        (None, Some(month)) => {
            let saved = Anchor::from_saved_month(today, month)
                .context("cannot reconstruct anchor from [pattern].saved_month")?;
            Anchor::new(saved.date(), t.anchor_index)
        }
        (Some(_), Some(_)) => {
            bail!("[pattern] must set either anchor or saved_month, not both")
        }
        (None, None) => bail!("[pattern] requires anchor (YYYY-MM-DD) or saved_month"),
    };
    Ok(anchor)
}

/// Builds the grid geometry from `[layout]`, marking `today`.
pub fn build_layout_config(t: &LayoutToml, today: CivilDate) -> Result<LayoutConfig> {
    let config = LayoutConfig::new()
        .with_block_size(t.block_size)
        .with_week_start(parse_weekday(&t.week_start)?)
        .with_today(today);
    config.validate().context("invalid [layout] section")?;
    Ok(config)
}

/// Builds the viewport resolver from `[layout]`.
pub fn build_resolver(t: &LayoutToml) -> VisibleMonthResolver {
    VisibleMonthResolver::new().with_bottom_tail(t.bottom_tail)
}

/// First month to lay out: CLI override, then `[layout].start`, then the
/// month containing `today`.
pub fn resolve_start(
    t: &LayoutToml,
    cli_start: Option<&str>,
    today: CivilDate,
) -> Result<YearMonth> {
    match cli_start.or(t.start.as_deref()) {
        Some(s) => parse_month(s),
        None => Ok(today.year_month()),
    }
}
