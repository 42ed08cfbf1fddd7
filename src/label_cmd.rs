use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use crate::cli::LabelArgs;
use crate::config::ShiftcalConfig;
use crate::convert::*;

use shiftcal_calendar::CivilDate;
use shiftcal_pattern::PatternIndexer;

/// Execute the `label` subcommand.
pub fn run(args: LabelArgs, config: &ShiftcalConfig, today: CivilDate) -> Result<()> {
    let _cmd = info_span!("label").entered();

    let pattern = build_pattern(&config.pattern)?;
    let anchor = build_anchor(&config.pattern, today)?;
    let indexer = PatternIndexer::new(&pattern, anchor).context("invalid anchor")?;

    let mut out = std::io::stdout().lock();
    for s in &args.dates {
        let date = parse_date(s)?;
        let offset = indexer.offset(date);
        debug!(%date, offset, "labelling date");
        writeln!(out, "{date}  {}  {}", indexer.index(date), indexer.label(date))
            .context("failed to write label")?;
    }
    Ok(())
}
