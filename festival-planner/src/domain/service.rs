//! Shuttle services.

use std::fmt;

use super::{Session, Venue};

/// Error returned when a service would depart and arrive at the same venue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("source and destination must be distinct for a service (venue {venue})")]
pub struct SelfLoopService {
    venue: Venue,
}

/// A directed shuttle connection between two venues at one session.
///
/// A service departs `source` at the end of `session` and arrives at
/// `destination` in time for the following session. Source and destination
/// always differ.
///
/// # Examples
///
/// ```
/// use festival_planner::domain::{Service, Session, Venue};
///
/// let arena = Venue::parse("Arena").unwrap();
/// let tent = Venue::parse("Tent").unwrap();
/// let s1 = Session::new(1).unwrap();
///
/// let service = Service::new(arena.clone(), tent, s1).unwrap();
/// assert_eq!(service.source(), &arena);
///
/// assert!(Service::new(arena.clone(), arena, s1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Service {
    // Field order gives the timetable's iteration order.
    source: Venue,
    session: Session,
    destination: Venue,
}

impl Service {
    /// Create a service. Fails if `source == destination`.
    pub fn new(
        source: Venue,
        destination: Venue,
        session: Session,
    ) -> Result<Self, SelfLoopService> {
        if source == destination {
            return Err(SelfLoopService { venue: source });
        }

        Ok(Self {
            source,
            session,
            destination,
        })
    }

    /// The venue the service departs from.
    pub fn source(&self) -> &Venue {
        &self.source
    }

    /// The venue the service arrives at.
    pub fn destination(&self) -> &Venue {
        &self.destination
    }

    /// The session at whose end the service departs.
    pub fn session(&self) -> Session {
        self.session
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (session {})",
            self.source, self.destination, self.session
        )
    }
}
