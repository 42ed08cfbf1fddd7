//! # shiftcal-pattern
//!
//! Maps every civil date to a slot of a cyclic label pattern, given one
//! anchor `(date, index)` pair.
//!
//! The slot of a date is
//! `((anchor.index + offset) mod len + len) mod len`, where `offset` is the
//! signed day distance from the anchor date, counted by whole-month span
//! summation ([`month_span_days`]). No day-by-day walking is involved, so a
//! lookup years away from the anchor costs the same as one next to it.
//!
//! ## Quick Start
//!
//! ```
//! use shiftcal_calendar::CivilDate;
//! use shiftcal_pattern::{Anchor, Pattern, PatternIndexer};
//!
//! let pattern = Pattern::parse("A B C").unwrap();
//! let anchor = Anchor::saved_today(CivilDate::new(2024, 2, 15).unwrap());
//! let indexer = PatternIndexer::new(&pattern, anchor).unwrap();
//!
//! assert_eq!(indexer.index(CivilDate::new(2024, 2, 16).unwrap()), 1);
//! assert_eq!(indexer.label(CivilDate::new(2024, 2, 14).unwrap()), "C");
//! ```

mod anchor;
mod error;
mod indexer;
mod pattern;
mod span;

pub use anchor::Anchor;
pub use error::PatternError;
pub use indexer::{PatternIndexer, pattern_index};
pub use pattern::Pattern;
pub use span::month_span_days;
