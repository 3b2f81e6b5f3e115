use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Maximum number of cached poster URLs kept at once
const MAX_ENTRIES: usize = 4096;

struct CacheEntry {
    poster: Option<String>,
    expires_at: Instant,
}

/// Bounded in-process TTL cache for poster lookups, keyed by TMDB id.
///
/// Negative results (no poster available) are cached too, so a movie with a
/// missing poster does not trigger a fresh API call on every request.
#[derive(Clone)]
pub struct PosterCache {
    entries: Arc<RwLock<HashMap<u64, CacheEntry>>>,
    ttl: Duration,
}

impl PosterCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the cached lookup result for `tmdb_id`, if present and fresh.
    ///
    /// The outer `Option` distinguishes a cache miss from a cached
    /// "no poster" result.
    pub async fn get(&self, tmdb_id: u64) -> Option<Option<String>> {
        let entries = self.entries.read().await;
        entries
            .get(&tmdb_id)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.poster.clone())
    }

    pub async fn insert(&self, tmdb_id: u64, poster: Option<String>) {
        let mut entries = self.entries.write().await;

        if entries.len() >= MAX_ENTRIES {
            let now = Instant::now();
            entries.retain(|_, entry| entry.expires_at > now);
            if entries.len() >= MAX_ENTRIES {
                tracing::debug!(tmdb_id, "Poster cache full, skipping insert");
                return;
            }
        }

        entries.insert(
            tmdb_id,
            CacheEntry {
                poster,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn miss_then_hit() {
        let cache = PosterCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(603).await, None);

        cache.insert(603, Some("http://img/matrix.jpg".to_string())).await;
        assert_eq!(
            cache.get(603).await,
            Some(Some("http://img/matrix.jpg".to_string()))
        );
    }

    #[tokio::test]
    async fn caches_negative_results() {
        let cache = PosterCache::new(Duration::from_secs(60));
        cache.insert(42, None).await;
        assert_eq!(cache.get(42).await, Some(None));
    }

    #[tokio::test]
    async fn expired_entries_are_misses() {
        let cache = PosterCache::new(Duration::from_millis(0));
        cache.insert(603, Some("http://img/matrix.jpg".to_string())).await;
        assert_eq!(cache.get(603).await, None);
    }
}
