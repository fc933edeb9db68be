use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cache entry with TTL
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// In-memory cache for rendered SVG documents, keyed by request shape.
/// Only successful renders are stored; error cards are always rebuilt so a
/// transient upstream failure never sticks for the full TTL.
#[derive(Debug)]
pub struct SvgCache {
    entries: RwLock<HashMap<String, CacheEntry<String>>>,
    ttl: Duration,
}

impl Default for SvgCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(6 * 60 * 60))
    }
}

impl SvgCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Get a cached document, treating expired entries as absent
    pub fn get(&self, key: &str) -> Option<String> {
        let cache = self.entries.read().ok()?;
        let entry = cache.get(key)?;

        if entry.is_expired() {
            return None;
        }

        Some(entry.value.clone())
    }

    /// Cache a rendered document under the given key
    pub fn set(&self, key: String, svg: String) {
        if let Ok(mut cache) = self.entries.write() {
            cache.insert(key, CacheEntry::new(svg, self.ttl));
        }
    }

    /// Clean up expired entries
    pub fn cleanup_expired(&self) {
        if let Ok(mut cache) = self.entries.write() {
            cache.retain(|_, entry| !entry.is_expired());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all cache entries
    pub fn clear(&self) {
        if let Ok(mut cache) = self.entries.write() {
            cache.clear();
        }
    }
}

/// Cache key builder for consistent key generation
pub struct CacheKey;

impl CacheKey {
    pub fn trophy(username: &str, theme: &str, columns: u32) -> String {
        format!("trophy:{}:{}:{}", username, theme, columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cache_entry_expiration() {
        let entry = CacheEntry::new("test_value".to_string(), Duration::from_millis(10));
        assert!(!entry.is_expired());

        std::thread::sleep(Duration::from_millis(15));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_cache_basic_operations() {
        let cache = SvgCache::default();

        cache.set(
            CacheKey::trophy("octocat", "dark_high_contrast", 3),
            "<svg/>".to_string(),
        );
        let retrieved = cache.get("trophy:octocat:dark_high_contrast:3");
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap(), "<svg/>");

        // Non-existent key
        assert!(cache.get("trophy:nobody:dark_high_contrast:3").is_none());

        cache.set(CacheKey::trophy("octocat", "classic_gamer", 3), "<svg/>".to_string());
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("trophy:octocat:dark_high_contrast:3").is_none());
    }

    #[test]
    fn test_expired_entries_are_misses() {
        let cache = SvgCache::new(Duration::from_millis(10));
        cache.set("k".to_string(), "<svg/>".to_string());
        assert!(cache.get("k").is_some());

        std::thread::sleep(Duration::from_millis(15));
        assert!(cache.get("k").is_none());

        cache.cleanup_expired();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_key_generation() {
        assert_eq!(
            CacheKey::trophy("octocat", "classic_gamer", 4),
            "trophy:octocat:classic_gamer:4"
        );
    }
}
