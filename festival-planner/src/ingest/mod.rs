//! Readers for timetable and line-up files.
//!
//! Both readers turn text into validated domain values, or report the first
//! problem found together with its line number.

mod error;
mod lineup;
mod schedule;

pub use error::{FormatError, FormatErrorKind, ReadError};
pub use lineup::{parse_line_up, read_line_up};
pub use schedule::{parse_timetable, read_timetable};
