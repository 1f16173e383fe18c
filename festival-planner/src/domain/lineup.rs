//! Festival line-up.

use std::collections::HashMap;

use super::{Event, Session, Venue};

/// Error returned when two events would occupy the same venue and session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("more than one event scheduled at {venue} for session {session}")]
pub struct SlotTaken {
    pub venue: Venue,
    pub session: Session,
}

/// The events of a festival, in the order they were added.
///
/// At most one event may be scheduled at a venue for a given session.
/// Different venues may host events in the same session.
#[derive(Debug, Clone, Default)]
pub struct LineUp {
    events: Vec<Event>,
    /// Map from (venue, session) to index into `events`.
    slots: HashMap<(Venue, Session), usize>,
}

impl LineUp {
    /// Create an empty line-up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event. Fails if its venue is already booked for its session.
    pub fn add(&mut self, event: Event) -> Result<(), SlotTaken> {
        let slot = (event.venue().clone(), event.session());
        if self.slots.contains_key(&slot) {
            let (venue, session) = slot;
            return Err(SlotTaken { venue, session });
        }

        self.slots.insert(slot, self.events.len());
        self.events.push(event);
        Ok(())
    }

    /// Get the event at a venue for a session, if any.
    pub fn at(&self, venue: &Venue, session: Session) -> Option<&Event> {
        self.slots
            .get(&(venue.clone(), session))
            .map(|&idx| &self.events[idx])
    }

    /// Get all events scheduled for a session, in insertion order.
    pub fn in_session(&self, session: Session) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.session() == session)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a LineUp {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(venue: &str, session: u32, act: &str) -> Event {
        Event::new(
            Venue::parse(venue).unwrap(),
            Session::new(session).unwrap(),
            act,
        )
        .unwrap()
    }

    #[test]
    fn empty_line_up() {
        let line_up = LineUp::new();
        assert!(line_up.is_empty());
        assert_eq!(line_up.len(), 0);
        assert!(line_up.iter().next().is_none());
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut line_up = LineUp::new();
        line_up.add(event("Tent", 2, "Second")).unwrap();
        line_up.add(event("Arena", 1, "First")).unwrap();

        let acts: Vec<&str> = line_up.iter().map(Event::act).collect();
        assert_eq!(acts, vec!["Second", "First"]);
    }

    #[test]
    fn reject_same_venue_same_session() {
        let mut line_up = LineUp::new();
        line_up.add(event("Arena", 1, "First")).unwrap();

        let err = line_up.add(event("Arena", 1, "Clash")).unwrap_err();
        assert_eq!(err.venue, Venue::parse("Arena").unwrap());
        assert_eq!(err.session, Session::FIRST);
        assert_eq!(
            err.to_string(),
            "more than one event scheduled at Arena for session 1"
        );
        assert_eq!(line_up.len(), 1);
    }

    #[test]
    fn same_session_different_venues_allowed() {
        let mut line_up = LineUp::new();
        line_up.add(event("Arena", 1, "First")).unwrap();
        line_up.add(event("Tent", 1, "Other")).unwrap();
        line_up.add(event("Arena", 2, "Later")).unwrap();

        assert_eq!(line_up.len(), 3);
        assert_eq!(line_up.in_session(Session::FIRST).count(), 2);
    }

    #[test]
    fn lookup_by_slot() {
        let mut line_up = LineUp::new();
        line_up.add(event("Arena", 1, "First")).unwrap();

        let arena = Venue::parse("Arena").unwrap();
        assert_eq!(line_up.at(&arena, Session::FIRST).map(Event::act), Some("First"));
        assert!(line_up.at(&arena, Session::new(2).unwrap()).is_none());
    }
}
