//! # shiftcal-layout
//!
//! Lays out consecutive months as one flat, row-aligned sequence of typed
//! cells for a 7-column virtualized grid, and infers which month a viewport
//! is showing from its position in that sequence.
//!
//! ## Architecture
//!
//! ```text
//! build_sequence()
//!   ├─ LayoutConfig::validate()
//!   ├─ PatternIndexer::new()        (shiftcal-pattern, once per call)
//!   └─ per month:
//!        ├─ MonthHeader cell
//!        ├─ build_month()           (month.rs: leading blanks + days)
//!        └─ trailing blanks to the block size
//!
//! resolve_visible_month()           (resolve.rs)
//!   ├─ bottom-tail override
//!   └─ nearest day cell, ties backward
//! ```
//!
//! # Quick start
//!
//! ```
//! use shiftcal_calendar::{CivilDate, YearMonth};
//! use shiftcal_layout::{LayoutConfig, VisibleMonth, build_sequence, resolve_visible_month};
//! use shiftcal_pattern::{Anchor, Pattern};
//!
//! let pattern = Pattern::parse("day night off").unwrap();
//! let today = CivilDate::new(2024, 2, 15).unwrap();
//! let config = LayoutConfig::new().with_today(today);
//!
//! let seq = build_sequence(
//!     &pattern,
//!     Anchor::saved_today(today),
//!     YearMonth::new(2024, 2).unwrap(),
//!     3,
//!     &config,
//! )
//! .unwrap();
//!
//! let april = seq.header_index(YearMonth::new(2024, 3).unwrap()).unwrap();
//! assert_eq!(
//!     resolve_visible_month(&seq, april, None, None),
//!     VisibleMonth::Resolved(YearMonth::new(2024, 3).unwrap())
//! );
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod labels;
pub mod month;
pub mod resolve;
pub mod sequence;

pub use cell::{CalendarCell, DayCell};
pub use config::{DEFAULT_BLOCK_SIZE, LayoutConfig, WEEK_LEN};
pub use error::LayoutError;
pub use labels::{month_title, weekday_header};
pub use month::{MonthLayout, build_month, leading_blanks};
pub use resolve::{DEFAULT_BOTTOM_TAIL, VisibleMonth, VisibleMonthResolver, resolve_visible_month};
pub use sequence::{LayoutSequence, MonthRegion, build_sequence};
