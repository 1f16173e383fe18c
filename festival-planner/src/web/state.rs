//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedPlanner;
use crate::domain::LineUp;

/// Shared application state.
///
/// Contains everything needed to handle requests. Nothing here is mutated
/// after startup.
#[derive(Clone)]
pub struct AppState {
    /// Day planner with cached answers
    pub planner: Arc<CachedPlanner>,

    /// The festival line-up (empty if none was loaded)
    pub line_up: Arc<LineUp>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: CachedPlanner, line_up: LineUp) -> Self {
        Self {
            planner: Arc::new(planner),
            line_up: Arc::new(line_up),
        }
    }
}
