//! Line-up file reader.
//!
//! Each line describes one event as `ACT: session SESSION at VENUE`, e.g.
//! `The Band: session 3 at Arena`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{Event, LineUp, Session, Venue};

use super::error::{FormatError, FormatErrorKind, ReadError};

static EVENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_ ]+): session \+?([0-9]+) at (\S+)$").expect("valid event regex")
});

/// Read a line-up file.
pub fn read_line_up(path: impl AsRef<Path>) -> Result<LineUp, ReadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let line_up = parse_line_up(&text)?;
    debug!(path = %path.display(), events = line_up.len(), "read line-up");
    Ok(line_up)
}

/// Parse a line-up from text.
pub fn parse_line_up(text: &str) -> Result<LineUp, FormatError> {
    let mut line_up = LineUp::new();

    for (idx, line) in text.lines().enumerate() {
        let number = idx + 1;
        let event = parse_event(number, line)?;
        line_up
            .add(event)
            .map_err(|_| FormatError::new(number, FormatErrorKind::SlotTaken))?;
    }

    Ok(line_up)
}

fn parse_event(number: usize, line: &str) -> Result<Event, FormatError> {
    let caps = EVENT_LINE
        .captures(line)
        .ok_or_else(|| FormatError::new(number, FormatErrorKind::EventFormat))?;
    let (act, digits, venue) = (&caps[1], &caps[2], &caps[3]);

    // Session numbers are limited to the signed 32-bit range.
    let value: i32 = digits.parse().map_err(|_| {
        FormatError::new(number, FormatErrorKind::SessionNotInteger(digits.to_string()))
    })?;
    let session = u32::try_from(value)
        .ok()
        .and_then(|n| Session::new(n).ok())
        .ok_or_else(|| {
            FormatError::new(number, FormatErrorKind::SessionNotPositive(digits.to_string()))
        })?;
    let venue = Venue::parse(venue).map_err(|e| FormatError::new(number, e.into()))?;

    Event::new(venue, session, act)
        .map_err(|_| FormatError::new(number, FormatErrorKind::EventFormat))
}
