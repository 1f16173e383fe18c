//! The festival's shuttle timetable.
//!
//! Holds every shuttle service and indexes them by departure venue and
//! session, so the planner can ask "where can I get to from here, leaving
//! at the end of this session?" without scanning the whole timetable.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound;

use crate::domain::{Service, Session, Venue};

/// Error returned when adding a service that is already in the timetable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate service detected: {0}")]
pub struct DuplicateService(pub Service);

static NO_DESTINATIONS: BTreeSet<Venue> = BTreeSet::new();

/// A set of shuttle services.
///
/// No two services are equal, and no service is a self-loop (the latter is
/// guaranteed by [`Service::new`]). Cloning produces an independent copy.
#[derive(Debug, Clone, Default)]
pub struct ShuttleTimetable {
    services: BTreeSet<Service>,
    /// Map from source to departure session to the venues one service away.
    adjacency: HashMap<Venue, BTreeMap<Session, BTreeSet<Venue>>>,
}

impl ShuttleTimetable {
    /// Create an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a timetable from services, rejecting the first duplicate.
    pub fn from_services<I>(services: I) -> Result<Self, DuplicateService>
    where
        I: IntoIterator<Item = Service>,
    {
        let mut timetable = Self::new();
        for service in services {
            timetable.add_service(service)?;
        }
        Ok(timetable)
    }

    /// Add a service to the timetable.
    ///
    /// Returns an error, leaving the timetable unchanged, if an equal
    /// service is already present.
    pub fn add_service(&mut self, service: Service) -> Result<(), DuplicateService> {
        if self.services.contains(&service) {
            return Err(DuplicateService(service));
        }

        debug_assert_ne!(service.source(), service.destination());

        self.adjacency
            .entry(service.source().clone())
            .or_default()
            .entry(service.session())
            .or_default()
            .insert(service.destination().clone());
        self.services.insert(service);
        Ok(())
    }

    /// Check whether an equal service is in the timetable.
    pub fn has_service(&self, service: &Service) -> bool {
        self.services.contains(service)
    }

    /// Venues reachable from `venue` by a single service departing at the
    /// end of `session`.
    ///
    /// Never contains `venue` itself.
    pub fn destinations(&self, venue: &Venue, session: Session) -> &BTreeSet<Venue> {
        self.adjacency
            .get(venue)
            .and_then(|by_session| by_session.get(&session))
            .unwrap_or(&NO_DESTINATIONS)
    }

    /// Departures from `venue` at sessions in `from..until`, in session order.
    ///
    /// Only sessions with at least one service are yielded, so the cost does
    /// not depend on the width of the range.
    pub fn departures(
        &self,
        venue: &Venue,
        from: Session,
        until: Session,
    ) -> impl Iterator<Item = (Session, &BTreeSet<Venue>)> {
        let range = (from < until).then_some((Bound::Included(from), Bound::Excluded(until)));
        self.adjacency
            .get(venue)
            .zip(range)
            .into_iter()
            .flat_map(|(by_session, range)| by_session.range(range))
            .map(|(&session, destinations)| (session, destinations))
    }

    /// Iterate over all services, ordered by source, session, then destination.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    /// Every venue that appears as a source or destination of a service.
    pub fn venues(&self) -> BTreeSet<&Venue> {
        self.services
            .iter()
            .flat_map(|s| [s.source(), s.destination()])
            .collect()
    }

    /// The latest session at which any service departs.
    pub fn last_session(&self) -> Option<Session> {
        self.services.iter().map(Service::session).max()
    }

    /// Returns the number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if there are no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShuttleTimetable {
    type Item = &'a Service;
    type IntoIter = std::collections::btree_set::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}
