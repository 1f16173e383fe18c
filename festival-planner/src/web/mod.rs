//! Web layer for the festival planner.
//!
//! Provides JSON endpoints for inspecting the timetable and checking plans.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
