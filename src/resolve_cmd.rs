use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::ResolveArgs;
use crate::config::ShiftcalConfig;
use crate::convert::*;

use shiftcal_calendar::CivilDate;
use shiftcal_layout::{VisibleMonth, build_sequence, month_title};

/// Execute the `resolve` subcommand.
pub fn run(args: ResolveArgs, config: &ShiftcalConfig, today: CivilDate) -> Result<()> {
    let _cmd = info_span!("resolve").entered();

    let pattern = build_pattern(&config.pattern)?;
    let anchor = build_anchor(&config.pattern, today)?;
    let layout = build_layout_config(&config.layout, today)?;
    let start = resolve_start(&config.layout, args.range.start.as_deref(), today)?;
    let months = args.range.months.unwrap_or(config.layout.months);
    let fallback = args.fallback.as_deref().map(parse_month).transpose()?;

    let seq = build_sequence(&pattern, anchor, start, months, &layout)
        .context("failed to lay out months")?;
    info!(
        cells = seq.len(),
        first = args.first,
        last = ?args.last,
        "resolving viewport"
    );

    let resolver = build_resolver(&config.layout);
    match resolver.resolve(&seq, args.first, args.last, fallback) {
        VisibleMonth::Resolved(month) => {
            println!("{month}  {}", month_title(&config.labels.months, month));
        }
        VisibleMonth::Retained(month) => {
            println!(
                "{month}  {} (retained)",
                month_title(&config.labels.months, month)
            );
        }
        VisibleMonth::Unresolved => println!("unresolved"),
    }
    Ok(())
}
