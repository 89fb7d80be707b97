use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::controller::dashboard::DashboardData;

/// One completed load cycle plus when it finished.
#[derive(Clone, Debug)]
pub struct CachedCycle {
    pub data: DashboardData,
    pub cached_time: String,
}

/// Holder for the most recently completed cycle. Overlapping cycles may both
/// write; the last one to finish wins.
pub type CycleCache = Arc<RwLock<Option<CachedCycle>>>;

pub const CACHE_DURATION: chrono::Duration = chrono::Duration::minutes(5);

#[must_use]
pub fn new_cycle_cache() -> CycleCache {
    Arc::new(RwLock::new(None))
}

pub async fn store_cycle(cache: &CycleCache, data: DashboardData) -> CachedCycle {
    let cycle = CachedCycle {
        data,
        cached_time: Utc::now().to_rfc3339(),
    };
    let mut slot = cache.write().await;
    *slot = Some(cycle.clone());
    cycle
}

/// The cached cycle, but only while it is younger than `max_age`.
pub async fn fresh_cycle(cache: &CycleCache, max_age: chrono::Duration) -> Option<CachedCycle> {
    let slot = cache.read().await;
    let cached = slot.as_ref()?;
    let cached_time = DateTime::parse_from_rfc3339(&cached.cached_time)
        .ok()?
        .with_timezone(&Utc);
    if Utc::now() - cached_time < max_age {
        Some(cached.clone())
    } else {
        None
    }
}

/// The cached cycle regardless of age. The predictions toggle reads this so
/// flipping the source never refetches.
pub async fn latest_cycle(cache: &CycleCache) -> Option<CachedCycle> {
    cache.read().await.clone()
}

/// "3m, 12s" style age stamp for the refresh line.
#[must_use]
pub fn age_display(cached_time: &str) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(cached_time) else {
        return "just now".to_string();
    };
    let elapsed = Utc::now() - parsed.with_timezone(&Utc);
    let time_since = elapsed.num_seconds().max(0);
    let minutes = time_since / 60;
    let seconds = time_since % 60;
    format!("{minutes}m, {seconds}s")
}
