use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Remembers which candidate query string a free-text location last resolved
/// to, so repeat lookups skip the fallback sequence. Entries expire after
/// `ttl`; expired entries are dropped on read and by the cleanup task.
pub struct ResolutionCache {
    entries: DashMap<String, CachedCandidate>,
    ttl: Duration,
}

struct CachedCandidate {
    candidate: String,
    expires_at: Instant,
}

impl ResolutionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Candidate query that previously resolved for this location, if still fresh.
    pub fn get(&self, location: &str) -> Option<String> {
        let key = normalize_cache_key(location);
        let entry = self.entries.get(&key)?;
        if entry.expires_at > Instant::now() {
            Some(entry.candidate.clone())
        } else {
            drop(entry);
            self.entries.remove(&key);
            None
        }
    }

    /// Remember the candidate query that resolved for this location.
    pub fn insert(&self, location: &str, candidate: &str) {
        self.entries.insert(
            normalize_cache_key(location),
            CachedCandidate {
                candidate: candidate.to_string(),
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Drop a remembered candidate that no longer resolves.
    pub fn invalidate(&self, location: &str) {
        self.entries.remove(&normalize_cache_key(location));
    }

    /// Remove expired entries.
    pub fn cleanup(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.expires_at > now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a location string for cache keying: lowercase, trimmed.
pub fn normalize_cache_key(location: &str) -> String {
    location.trim().to_lowercase()
}

/// Create a resolution cache with 24-hour TTL
pub fn create_resolution_cache() -> Arc<ResolutionCache> {
    Arc::new(ResolutionCache::new(Duration::from_secs(24 * 60 * 60)))
}

/// Start a background task that cleans up expired cache entries hourly
pub fn start_cache_cleanup_task(cache: Arc<ResolutionCache>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60 * 60)); // 1 hour
        loop {
            interval.tick().await;
            let before = cache.len();
            cache.cleanup();
            let after = cache.len();
            if before != after {
                tracing::debug!(
                    removed = before - after,
                    remaining = after,
                    "Resolution cache cleanup completed"
                );
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_insert_and_get() {
        let cache = ResolutionCache::new(Duration::from_secs(60));
        cache.insert("Pune", "Pune,India");
        assert_eq!(cache.get("Pune"), Some("Pune,India".to_string()));
    }

    #[test]
    fn test_cache_key_normalization() {
        let cache = ResolutionCache::new(Duration::from_secs(60));
        cache.insert("  PUNE  ", "Pune,India");
        assert_eq!(cache.get("pune"), Some("Pune,India".to_string()));
    }

    #[test]
    fn test_cache_miss() {
        let cache = ResolutionCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_cache_ttl_expiry() {
        let cache = ResolutionCache::new(Duration::from_millis(1));
        cache.insert("pune", "Pune,India");
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cache.get("pune"), None);
    }

    #[test]
    fn test_cache_invalidate() {
        let cache = ResolutionCache::new(Duration::from_secs(60));
        cache.insert("pune", "Pune,India");
        cache.invalidate("pune");
        assert_eq!(cache.get("pune"), None);
    }

    #[test]
    fn test_cache_cleanup() {
        let cache = ResolutionCache::new(Duration::from_millis(1));
        cache.insert("pune", "Pune,India");
        cache.insert("agra", "Agra,IN");
        std::thread::sleep(Duration::from_millis(10));
        cache.cleanup();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_normalize_cache_key() {
        assert_eq!(normalize_cache_key("  Pune  "), "pune");
        assert_eq!(normalize_cache_key("NEW DELHI"), "new delhi");
        assert_eq!(normalize_cache_key("London,GB"), "london,gb");
    }
}
