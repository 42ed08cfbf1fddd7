mod cli;
mod config;
mod convert;
mod label_cmd;
mod logging;
mod render_cmd;
mod resolve_cmd;

use std::process;

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::ShiftcalConfig;

use shiftcal_calendar::CivilDate;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = today(cli.today.as_deref())?;
    let config = ShiftcalConfig::load(&cli.config)?;

    match cli.command {
        Command::Render(args) => render_cmd::run(args, &config, today),
        Command::Label(args) => label_cmd::run(args, &config, today),
        Command::Resolve(args) => resolve_cmd::run(args, &config, today),
    }
}

/// `--today` if given, otherwise the local calendar date.
fn today(arg: Option<&str>) -> Result<CivilDate> {
    if let Some(s) = arg {
        return convert::parse_date(s);
    }
    let now = chrono::Local::now().date_naive();
    // chrono months are 1-based; day and month fit in u8.
    Ok(CivilDate::new(now.year(), now.month0() as u8, now.day() as u8)?)
}
