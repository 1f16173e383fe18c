//! Domain types for the festival planner.
//!
//! This module contains the value types that describe a festival: venues,
//! sessions, shuttle services and line-up events. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod event;
mod lineup;
mod service;
mod session;
mod venue;

pub use event::{Event, InvalidEvent};
pub use lineup::{LineUp, SlotTaken};
pub use service::{SelfLoopService, Service};
pub use session::{InvalidSession, Session};
pub use venue::{InvalidVenue, Venue};
