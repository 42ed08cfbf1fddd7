use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shift-pattern calendar: cyclic day labels over a scrollable month grid.
#[derive(Parser)]
#[command(
    name = "shiftcal",
    version,
    about = "Cyclic shift-pattern calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "shiftcal.toml")]
    pub config: PathBuf,

    /// Date to treat as today (YYYY-MM-DD); defaults to the local date.
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print consecutive months as a 7-column grid of labelled days.
    Render(RenderArgs),
    /// Print the pattern slot and label of individual dates.
    Label(LabelArgs),
    /// Report the month a grid viewport is showing.
    Resolve(ResolveArgs),
}

/// Month range shared by the grid-producing subcommands.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First month to lay out (YYYY-MM); overrides [layout].start.
    #[arg(long)]
    pub start: Option<String>,

    /// Number of months to lay out; overrides [layout].months.
    #[arg(long)]
    pub months: Option<usize>,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub range: RangeArgs,
}

/// Arguments for the `label` subcommand.
#[derive(clap::Args)]
pub struct LabelArgs {
    /// Dates to look up (YYYY-MM-DD).
    #[arg(required = true)]
    pub dates: Vec<String>,
}

/// Arguments for the `resolve` subcommand.
#[derive(clap::Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Index of the topmost visible cell.
    #[arg(long)]
    pub first: usize,

    /// Index of the bottom visible cell.
    #[arg(long)]
    pub last: Option<usize>,

    /// Month shown before this lookup (YYYY-MM), kept if nothing resolves.
    #[arg(long)]
    pub fallback: Option<String>,
}
