//! Festival shuttle planner.
//!
//! Models the shuttle services running between festival venues over a day
//! of numbered sessions, and answers: "can I get from this event to that
//! one in time?" A plan of events is compatible when every event can be
//! reached from the one before it.

pub mod cache;
pub mod config;
pub mod domain;
pub mod ingest;
pub mod planner;
pub mod timetable;
pub mod web;
