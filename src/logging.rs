use tracing_subscriber::EnvFilter;

/// Workspace crate targets whose events are shown at the `-v` level.
const CRATE_TARGETS: &[&str] = &[
    "shiftcal",
    "shiftcal_calendar",
    "shiftcal_layout",
    "shiftcal_pattern",
];

/// Initialize tracing for the shiftcal binary.
///
/// Events are written to stderr. Stdout carries only the rendered grids,
/// labels and resolved months, so `shiftcal render -vv > march.txt` keeps
/// the file free of log lines.
///
/// The level for every shiftcal crate follows [`level_for`]. A set
/// `RUST_LOG` replaces that filter entirely.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Maps the `-v` count to a level: none -> warn, `-v` -> info,
/// `-vv` -> debug (one event per laid-out month), `-vvv` -> trace
/// (viewport resolution steps).
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `target=level` directives for every shiftcal crate.
fn default_filter(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
