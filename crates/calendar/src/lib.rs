//! # shiftcal-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, with no
//! time-of-day and no timezone.
//!
//! Conventions used across the workspace:
//!
//! - months are 0-based (0 = January, 11 = December) everywhere except the
//!   textual `YYYY-MM-DD` / `YYYY-MM` forms;
//! - the week starts on Saturday (`Weekday::Saturday.index() == 0`).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDate"] -->|".days_since_epoch()"| B["day number"]
//!     B -->|"CivilDate::from_days_since_epoch()"| A
//!     A -->|".weekday()"| C["Weekday"]
//!     A -->|".year_month()"| D["YearMonth"]
//!     D -->|".next()"| D
//!     A -->|"date_sequence()"| E["Vec of CivilDate"]
//!     D -->|"month_sequence()"| F["Vec of YearMonth"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use shiftcal_calendar::{CivilDate, Weekday, days_between, days_in_month};
//!
//! assert_eq!(days_in_month(2024, 1).unwrap(), 29);
//!
//! let a = CivilDate::new(2024, 2, 15).unwrap(); // March 15, 2024
//! let b = a.add_days(17).unwrap();
//! assert_eq!(b.to_string(), "2024-04-01");
//! assert_eq!(days_between(a, b), 17);
//! assert_eq!(b.weekday(), Weekday::Monday);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Civil date, weekday and day arithmetic |
//! | `month` | Year-month value with rollover |
//! | `weekday` | Saturday-first weekday enum |
//! | `epoch` | Month lengths and day-number conversions |
//! | `sequence` | Consecutive date and month sequences |
//! | `error` | Error types |

mod date;
mod epoch;
mod error;
mod month;
mod sequence;
mod weekday;

pub use date::{CivilDate, add_days, day_of_week, days_between};
pub use epoch::{days_in_month, days_in_year, is_leap_year};
pub use error::CalendarError;
pub use month::{MonthSpan, YearMonth};
pub use sequence::{date_sequence, month_sequence};
pub use weekday::Weekday;
