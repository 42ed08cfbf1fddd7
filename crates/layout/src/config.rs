//! Layout parameters.

use shiftcal_calendar::{CivilDate, Weekday};

use crate::error::LayoutError;

/// Columns in the grid: one calendar week.
pub const WEEK_LEN: usize = 7;

/// Default padding block: six week rows, one full screen of days.
pub const DEFAULT_BLOCK_SIZE: usize = 6 * WEEK_LEN;

/// Configuration for building a layout sequence.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use shiftcal_calendar::Weekday;
/// use shiftcal_layout::LayoutConfig;
///
/// let config = LayoutConfig::new()
///     .with_block_size(7)
///     .with_week_start(Weekday::Monday);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Every month body is padded to a multiple of this many cells.
    block_size: usize,
    /// Weekday shown in the first grid column.
    week_start: Weekday,
    /// Date flagged as today in the produced day cells.
    today: Option<CivilDate>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Creates a configuration with the defaults.
    ///
    /// Defaults: `block_size = 42`, `week_start = Saturday`, no today.
    pub fn new() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            week_start: Weekday::Saturday,
            today: None,
        }
    }

    /// Sets the padding block size (a positive multiple of 7).
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Sets the weekday of the first grid column.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets the date to flag as today.
    pub fn with_today(mut self, today: CivilDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Returns the padding block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the weekday of the first grid column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Returns the date flagged as today, if any.
    pub fn today(&self) -> Option<CivilDate> {
        self.today
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidBlockSize`] unless the block size is a
    /// positive multiple of [`WEEK_LEN`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.block_size == 0 || self.block_size % WEEK_LEN != 0 {
            return Err(LayoutError::InvalidBlockSize {
                block_size: self.block_size,
            });
        }
        Ok(())
    }
}
