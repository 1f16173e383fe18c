//! Day planner: reachability over the shuttle timetable.
//!
//! This module answers the question "having been at this venue for this
//! session, can I be at that venue in time for that session?" and uses it
//! to decide whether a festival-goer's plan of events can be attended in
//! order.
//!
//! The search runs over a time-expanded graph: every (venue, session) pair
//! is a node, waiting at a venue moves to the next session of the same
//! venue, and a service departing at the end of session `s` leads to its
//! destination at session `s + 1`.

mod config;
mod day;


pub use config::PlannerConfig;
pub use day::{DayPlanner, PlanVerdict};
pub(crate) use day::pair_verdict;
