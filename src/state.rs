use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::config::Config;
use crate::types::activity::RawActivity;

/// Shared service state: the configuration and a TTL-bounded cache of raw
/// activity snapshots keyed by source. Aggregates are never cached; every
/// request recomputes them from the snapshot.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    cache: Arc<DashMap<String, CachedSnapshot>>,
}

struct CachedSnapshot {
    activities: Vec<RawActivity>,
    inserted_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn insert(&self, key: String, activities: Vec<RawActivity>) {
        self.cache.insert(
            key,
            CachedSnapshot {
                activities,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<Vec<RawActivity>> {
        self.cache.get(key).and_then(|entry| {
            if entry.inserted_at.elapsed() < self.config.cache_ttl {
                Some(entry.activities.clone())
            } else {
                None
            }
        })
    }

    pub fn evict_expired(&self, ttl: Duration) {
        let now = Instant::now();
        self.cache
            .retain(|_, cached| now.duration_since(cached.inserted_at) < ttl);
        tracing::info!("Cache eviction complete. Current size: {}", self.cache.len());
    }
}
