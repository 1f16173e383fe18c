//! Timetable file reader.
//!
//! The first line holds the number of sessions `N`. It is followed by zero
//! or more venue blocks, each made of:
//!
//! 1. a line with the venue name,
//! 2. `N` lines, one per session in order, holding the session number and
//!    the venues served by shuttles leaving at the end of that session,
//! 3. an empty line.
//!
//! ```text
//! 2
//! Arena
//! 1 Tent Field
//! 2
//!
//! Tent
//! 1
//! 2 Arena
//!
//! ```

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::domain::{Service, Session, Venue};
use crate::timetable::ShuttleTimetable;

use super::error::{FormatError, FormatErrorKind, ReadError};

/// Read a timetable file.
pub fn read_timetable(path: impl AsRef<Path>) -> Result<ShuttleTimetable, ReadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let timetable = parse_timetable(&text)?;
    debug!(path = %path.display(), services = timetable.len(), "read timetable");
    Ok(timetable)
}

/// Parse a timetable from text.
pub fn parse_timetable(text: &str) -> Result<ShuttleTimetable, FormatError> {
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));
    let mut timetable = ShuttleTimetable::new();
    let mut sources: HashSet<Venue> = HashSet::new();

    let session_count = match lines.next() {
        Some((number, line)) => parse_session_count(number, line)?,
        None => return Err(FormatError::new(1, FormatErrorKind::MissingSessionCount)),
    };

    while let Some((number, line)) = lines.next() {
        let source = parse_source_venue(number, line, &mut sources)?;
        let mut last_line = number;

        for expected in 1..=session_count {
            let Some((number, line)) = lines.next() else {
                return Err(FormatError::new(
                    last_line + 1,
                    FormatErrorKind::NotEnoughSessions(source),
                ));
            };
            last_line = number;
            parse_services(number, line, &source, expected, &mut timetable)?;
        }

        match lines.next() {
            Some((_, "")) => {}
            Some((number, _)) => {
                return Err(FormatError::new(number, FormatErrorKind::EmptyLineExpected));
            }
            None => {
                return Err(FormatError::new(
                    last_line + 1,
                    FormatErrorKind::EmptyLineExpected,
                ));
            }
        }
    }

    Ok(timetable)
}

fn parse_session_count(number: usize, line: &str) -> Result<u32, FormatError> {
    let mut tokens = line.split_whitespace();

    let count = tokens
        .next()
        .and_then(|t| t.parse::<i32>().ok())
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .ok_or_else(|| FormatError::new(number, FormatErrorKind::InvalidSessionCount))?;

    if tokens.next().is_some() {
        return Err(FormatError::new(number, FormatErrorKind::ExtraInformation));
    }

    Ok(count)
}

fn parse_source_venue(
    number: usize,
    line: &str,
    sources: &mut HashSet<Venue>,
) -> Result<Venue, FormatError> {
    let mut tokens = line.split_whitespace();

    let name = tokens
        .next()
        .ok_or_else(|| FormatError::new(number, FormatErrorKind::MissingVenueName))?;
    let venue = Venue::parse(name).map_err(|e| FormatError::new(number, e.into()))?;

    if sources.contains(&venue) {
        return Err(FormatError::new(
            number,
            FormatErrorKind::DuplicateSourceVenue(venue),
        ));
    }
    if tokens.next().is_some() {
        return Err(FormatError::new(number, FormatErrorKind::ExtraInformation));
    }

    sources.insert(venue.clone());
    Ok(venue)
}

fn parse_services(
    number: usize,
    line: &str,
    source: &Venue,
    expected: u32,
    timetable: &mut ShuttleTimetable,
) -> Result<(), FormatError> {
    let mut tokens = line.split_whitespace();

    let found = tokens
        .next()
        .and_then(|t| t.parse::<i32>().ok())
        .map(i64::from)
        .ok_or_else(|| {
            FormatError::new(number, FormatErrorKind::MissingSessionNumber { expected })
        })?;
    if found != i64::from(expected) {
        return Err(FormatError::new(
            number,
            FormatErrorKind::WrongSessionNumber { expected, found },
        ));
    }
    let session = Session::new(expected)
        .map_err(|_| FormatError::new(number, FormatErrorKind::InvalidSessionCount))?;

    for name in tokens {
        let destination = Venue::parse(name).map_err(|e| FormatError::new(number, e.into()))?;
        let service = Service::new(source.clone(), destination, session)
            .map_err(|e| FormatError::new(number, e.into()))?;
        timetable
            .add_service(service)
            .map_err(|_| FormatError::new(number, FormatErrorKind::DuplicateService))?;
    }

    Ok(())
}
