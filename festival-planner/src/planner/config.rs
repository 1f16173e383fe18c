//! Configuration for the day planner.

/// Configuration parameters for reachability search.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Remember the outcome of each (venue, session) sub-search within a
    /// single query.
    ///
    /// Answers are identical either way. Without memoization, dense
    /// timetables can revisit the same node along many different paths.
    pub memoize: bool,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(memoize: bool) -> Self {
        Self { memoize }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { memoize: true }
    }
}
