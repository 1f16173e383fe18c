//! Ingestion error types.

use crate::domain::{InvalidVenue, SelfLoopService, Venue};

/// A problem with the contents of a timetable or line-up file.
///
/// `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Line {line}: {kind}")]
pub struct FormatError {
    pub line: usize,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub(crate) fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }
}

/// What was wrong with the offending line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    /// The timetable is empty
    #[error("number of sessions not specified")]
    MissingSessionCount,

    /// The first timetable line is not a positive integer
    #[error("invalid number of sessions")]
    InvalidSessionCount,

    /// More tokens than the line should hold
    #[error("extra information on line")]
    ExtraInformation,

    /// A venue block starts with a blank line
    #[error("no venue name given")]
    MissingVenueName,

    /// A venue has more than one block
    #[error("duplicate source venue {0}")]
    DuplicateSourceVenue(Venue),

    /// The input ends before every session of a venue is listed
    #[error("not enough sessions for {0}")]
    NotEnoughSessions(Venue),

    /// A session line does not start with a number
    #[error("missing session number {expected}")]
    MissingSessionNumber { expected: u32 },

    /// Session lines are out of order
    #[error("wrong session number. Expected {expected} but was {found}")]
    WrongSessionNumber { expected: u32, found: i64 },

    #[error(transparent)]
    SelfLoop(#[from] SelfLoopService),

    #[error("duplicate service detected")]
    DuplicateService,

    #[error(transparent)]
    InvalidVenue(#[from] InvalidVenue),

    /// A venue block is not terminated by an empty line
    #[error("empty line expected")]
    EmptyLineExpected,

    /// A line-up line does not match `ACT: session SESSION at VENUE`
    #[error("event incorrectly formatted")]
    EventFormat,

    #[error("event incorrectly formatted. {0} is not an integer")]
    SessionNotInteger(String),

    #[error("event incorrectly formatted. {0} is not a positive integer")]
    SessionNotPositive(String),

    #[error("more than one event scheduled for the same venue and session")]
    SlotTaken,
}

/// Errors from reading a timetable or line-up file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but its contents are invalid
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}
