//! Reachability search and plan compatibility.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{Event, Session, Venue};
use crate::timetable::ShuttleTimetable;

use super::config::PlannerConfig;

/// Outcome of checking a plan of events.
///
/// `index` is the position in the plan of the later event of the first
/// offending adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanVerdict {
    /// Every event can be attended in order.
    Compatible,

    /// Two adjacent events are in the same session.
    SameSession { index: usize },

    /// An event is in an earlier session than the one before it.
    OutOfOrder { index: usize },

    /// An event cannot be reached in time from the one before it.
    Unreachable { index: usize },
}

impl PlanVerdict {
    /// Returns true if the plan is compatible.
    pub fn is_compatible(&self) -> bool {
        matches!(self, PlanVerdict::Compatible)
    }

    /// Index of the offending event, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            PlanVerdict::Compatible => None,
            PlanVerdict::SameSession { index }
            | PlanVerdict::OutOfOrder { index }
            | PlanVerdict::Unreachable { index } => Some(*index),
        }
    }
}

/// Verdict for an adjacent pair that needs no reachability search.
///
/// Returns `None` when the pair is compatible iff `next` is reachable from
/// `previous`.
pub(crate) fn pair_verdict(index: usize, previous: &Event, next: &Event) -> Option<PlanVerdict> {
    if previous.session() == next.session() {
        return Some(PlanVerdict::SameSession { index });
    }
    if next.session() < previous.session() {
        return Some(PlanVerdict::OutOfOrder { index });
    }
    None
}

/// Helps a festival-goer plan their day.
///
/// The planner owns its own copy of the timetable, taken at construction, so
/// later changes to the caller's timetable are never observed. A changed
/// schedule needs a new planner.
#[derive(Debug, Clone)]
pub struct DayPlanner {
    timetable: ShuttleTimetable,
    config: PlannerConfig,
}

impl DayPlanner {
    /// Create a planner over a copy of `timetable`.
    pub fn new(timetable: &ShuttleTimetable) -> Self {
        Self::with_config(timetable, PlannerConfig::default())
    }

    /// Create a planner over a copy of `timetable` with explicit configuration.
    pub fn with_config(timetable: &ShuttleTimetable, config: PlannerConfig) -> Self {
        Self {
            timetable: timetable.clone(),
            config,
        }
    }

    /// The planner's own copy of the timetable.
    pub fn timetable(&self) -> &ShuttleTimetable {
        &self.timetable
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Check whether someone at `source_venue` for `source_session` can be
    /// at `destination_venue` in time for `destination_session`.
    ///
    /// Waiting at a venue is always possible, travelling back in time never
    /// is, and changing venue takes at least one session.
    pub fn can_reach(
        &self,
        source_venue: &Venue,
        source_session: Session,
        destination_venue: &Venue,
        destination_session: Session,
    ) -> bool {
        let reachable = if self.config.memoize {
            let mut search = MemoSearch {
                timetable: &self.timetable,
                goal: destination_venue,
                goal_session: destination_session,
                memo: HashMap::new(),
            };
            search.reach(source_venue, source_session)
        } else {
            reach_unmemoized(
                &self.timetable,
                source_venue,
                source_session,
                destination_venue,
                destination_session,
            )
        };

        trace!(
            from = %source_venue,
            from_session = %source_session,
            to = %destination_venue,
            to_session = %destination_session,
            reachable,
            "can_reach"
        );
        reachable
    }

    /// Check whether `destination` can be reached in time after attending
    /// `source`.
    pub fn can_reach_event(&self, source: &Event, destination: &Event) -> bool {
        self.can_reach(
            source.venue(),
            source.session(),
            destination.venue(),
            destination.session(),
        )
    }

    /// Check whether the events of `plan` can be attended in order.
    ///
    /// The plan must be ordered by session. Empty and single-event plans are
    /// compatible.
    pub fn compatible(&self, plan: &[Event]) -> bool {
        self.check(plan).is_compatible()
    }

    /// Check a plan and report the first offending adjacent pair.
    pub fn check(&self, plan: &[Event]) -> PlanVerdict {
        for (index, pair) in plan.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
            let (previous, next) = (&pair[0], &pair[1]);

            let verdict = pair_verdict(index, previous, next).or_else(|| {
                (!self.can_reach_event(previous, next)).then_some(PlanVerdict::Unreachable { index })
            });

            if let Some(verdict) = verdict {
                debug!(events = plan.len(), ?verdict, "plan incompatible");
                return verdict;
            }
        }

        debug!(events = plan.len(), "plan compatible");
        PlanVerdict::Compatible
    }
}

/// The reachability rules, applied literally.
fn reach_unmemoized(
    timetable: &ShuttleTimetable,
    venue: &Venue,
    session: Session,
    goal: &Venue,
    goal_session: Session,
) -> bool {
    if let Some(answer) = base_case(venue, session, goal, goal_session) {
        return answer;
    }

    timetable
        .departures(venue, session, goal_session)
        .any(|(t, destinations)| {
            destinations
                .iter()
                .any(|v| reach_unmemoized(timetable, v, t.next(), goal, goal_session))
        })
}

/// Answers that need no services, in precedence order.
fn base_case(venue: &Venue, session: Session, goal: &Venue, goal_session: Session) -> Option<bool> {
    // No travelling back in time.
    if goal_session < session {
        return Some(false);
    }
    // Same session: only possible without moving.
    if goal_session == session {
        return Some(venue == goal);
    }
    // Waiting in place.
    if venue == goal {
        return Some(true);
    }
    None
}

/// Search towards one fixed goal, remembering every (venue, session) node
/// already decided.
struct MemoSearch<'a> {
    timetable: &'a ShuttleTimetable,
    goal: &'a Venue,
    goal_session: Session,
    memo: HashMap<(&'a Venue, Session), bool>,
}

impl<'a> MemoSearch<'a> {
    fn reach(&mut self, venue: &'a Venue, session: Session) -> bool {
        if let Some(answer) = base_case(venue, session, self.goal, self.goal_session) {
            return answer;
        }
        if let Some(&answer) = self.memo.get(&(venue, session)) {
            return answer;
        }

        let timetable = self.timetable;
        let answer = timetable
            .departures(venue, session, self.goal_session)
            .any(|(t, destinations)| destinations.iter().any(|v| self.reach(v, t.next())));

        self.memo.insert((venue, session), answer);
        answer
    }
}
