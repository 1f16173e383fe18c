//! Session numbers.

use std::fmt;
use std::num::NonZeroU32;

/// Error returned when constructing a session from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid session: {value} is not a positive integer")]
pub struct InvalidSession {
    value: u32,
}

/// A discrete time slot of the festival, numbered from 1.
///
/// Services depart at the end of a session and arrive in time for the next
/// one, so the session after `s` is the earliest in which a traveller who
/// takes a shuttle during `s` can be somewhere else.
///
/// # Examples
///
/// ```
/// use festival_planner::domain::Session;
///
/// let first = Session::new(1).unwrap();
/// assert_eq!(first.get(), 1);
/// assert_eq!(first.next().get(), 2);
///
/// assert!(Session::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Session(NonZeroU32);

impl Session {
    /// The first session of the festival.
    pub const FIRST: Session = Session(NonZeroU32::MIN);

    /// Create a session from its number. Zero is rejected.
    pub fn new(value: u32) -> Result<Self, InvalidSession> {
        NonZeroU32::new(value)
            .map(Session)
            .ok_or(InvalidSession { value })
    }

    /// Returns the session number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the following session.
    ///
    /// Saturates at `u32::MAX`, far beyond any festival schedule.
    pub fn next(self) -> Session {
        Session(self.0.saturating_add(1))
    }
}

impl TryFrom<u32> for Session {
    type Error = InvalidSession;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Session::new(value)
    }
}

impl From<Session> for u32 {
    fn from(session: Session) -> Self {
        session.get()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
