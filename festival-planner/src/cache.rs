//! Caching layer for reachability queries.
//!
//! A planner's timetable never changes, so `can_reach` answers stay valid
//! for the planner's whole lifetime. The cache only bounds how many of them
//! are kept.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, trace};

use crate::domain::{Event, Session, Venue};
use crate::planner::{DayPlanner, PlanVerdict, pair_verdict};

/// Cache key: (source venue, source session, destination venue, destination session).
type ReachKey = (Venue, Session, Venue, Session);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached answers.
    pub max_capacity: u64,

    /// Evict answers not read for this long.
    pub time_to_idle: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_idle: Duration::from_secs(30 * 60),
        }
    }
}

/// Day planner with cached reachability answers.
pub struct CachedPlanner {
    planner: DayPlanner,
    answers: MokaCache<ReachKey, bool>,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(planner: DayPlanner, config: &CacheConfig) -> Self {
        let answers = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_idle(config.time_to_idle)
            .build();

        Self { planner, answers }
    }

    /// Cached [`DayPlanner::can_reach`].
    pub async fn can_reach(
        &self,
        source_venue: &Venue,
        source_session: Session,
        destination_venue: &Venue,
        destination_session: Session,
    ) -> bool {
        let key = (
            source_venue.clone(),
            source_session,
            destination_venue.clone(),
            destination_session,
        );

        // Concurrent misses on one key share a single computation.
        self.answers
            .get_with(key, async {
                trace!(from = %source_venue, to = %destination_venue, "reach cache miss");
                self.planner.can_reach(
                    source_venue,
                    source_session,
                    destination_venue,
                    destination_session,
                )
            })
            .await
    }

    /// Cached [`DayPlanner::check`].
    pub async fn check(&self, plan: &[Event]) -> PlanVerdict {
        for (index, pair) in plan.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
            let (previous, next) = (&pair[0], &pair[1]);

            if let Some(verdict) = pair_verdict(index, previous, next) {
                debug!(events = plan.len(), ?verdict, "plan incompatible");
                return verdict;
            }
            let reachable = self
                .can_reach(
                    previous.venue(),
                    previous.session(),
                    next.venue(),
                    next.session(),
                )
                .await;
            if !reachable {
                let verdict = PlanVerdict::Unreachable { index };
                debug!(events = plan.len(), ?verdict, "plan incompatible");
                return verdict;
            }
        }

        debug!(events = plan.len(), "plan compatible");
        PlanVerdict::Compatible
    }

    /// Cached [`DayPlanner::compatible`].
    pub async fn compatible(&self, plan: &[Event]) -> bool {
        self.check(plan).await.is_compatible()
    }

    /// Access the underlying planner for operations that bypass cache.
    pub fn planner(&self) -> &DayPlanner {
        &self.planner
    }

    /// Get cache statistics.
    ///
    /// Moka updates its counters lazily; call [`run_pending_tasks`] first
    /// for an exact figure.
    ///
    /// [`run_pending_tasks`]: CachedPlanner::run_pending_tasks
    pub fn cache_entry_count(&self) -> u64 {
        self.answers.entry_count()
    }

    /// Flush pending cache maintenance.
    pub async fn run_pending_tasks(&self) {
        self.answers.run_pending_tasks().await;
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.answers.invalidate_all();
    }
}
