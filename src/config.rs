use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level shiftcal configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShiftcalConfig {
    /// Pattern text and anchor.
    pub pattern: PatternToml,

    /// Grid layout settings.
    #[serde(default)]
    pub layout: LayoutToml,

    /// Display names for weekdays and months.
    #[serde(default)]
    pub labels: LabelsToml,
}

impl ShiftcalConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// Pattern settings. Exactly one of `anchor` or `saved_month` must be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternToml {
    /// Labels separated by whitespace, e.g. `"day day night night off off"`.
    pub labels: String,
    /// Date (YYYY-MM-DD) holding slot `anchor_index`.
    #[serde(default)]
    pub anchor: Option<String>,
    /// Legacy form: 0-based month in which the pattern was saved.
    #[serde(default)]
    pub saved_month: Option<u8>,
    #[serde(default)]
    pub anchor_index: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    /// First month (YYYY-MM); defaults to the month of today.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default = "default_months")]
    pub months: usize,
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Cells at the end of the grid in which the final month is pinned.
    #[serde(default = "default_bottom_tail")]
    pub bottom_tail: usize,
}

impl Default for LayoutToml {
    fn default() -> Self {
        Self {
            start: None,
            months: default_months(),
            block_size: default_block_size(),
            week_start: default_week_start(),
            bottom_tail: default_bottom_tail(),
        }
    }
}

fn default_months() -> usize {
    12
}
fn default_block_size() -> usize {
    shiftcal_layout::DEFAULT_BLOCK_SIZE
}
fn default_week_start() -> String {
    "saturday".to_string()
}
fn default_bottom_tail() -> usize {
    shiftcal_layout::DEFAULT_BOTTOM_TAIL
}

/// Opaque display names; weekdays are listed Saturday first.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelsToml {
    #[serde(default = "default_weekdays")]
    pub weekdays: [String; 7],
    #[serde(default = "default_month_names")]
    pub months: [String; 12],
}

impl Default for LabelsToml {
    fn default() -> Self {
        Self {
            weekdays: default_weekdays(),
            months: default_month_names(),
        }
    }
}

fn default_weekdays() -> [String; 7] {
    ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"].map(String::from)
}
fn default_month_names() -> [String; 12] {
    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .map(String::from)
}
