//! Line-up events.

use std::fmt;

use super::{Session, Venue};

/// Error returned when constructing an event with an empty act.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid event: act must not be empty")]
pub struct InvalidEvent;

/// A performance scheduled at one venue for one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    venue: Venue,
    session: Session,
    act: String,
}

impl Event {
    /// Create an event. The act description must be non-empty.
    pub fn new(
        venue: Venue,
        session: Session,
        act: impl Into<String>,
    ) -> Result<Self, InvalidEvent> {
        let act = act.into();
        if act.is_empty() {
            return Err(InvalidEvent);
        }

        Ok(Self {
            venue,
            session,
            act,
        })
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn act(&self) -> &str {
        &self.act
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: session {} at {}", self.act, self.session, self.venue)
    }
}
