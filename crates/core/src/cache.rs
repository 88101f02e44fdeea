//! Explicit cache value object for read-mostly collaborator data.
//!
//! Lookup collaborators (account/loan metadata, authorization data) are
//! read-mostly, and callers sometimes want to avoid re-fetching on every
//! operation. Rather than hiding a lazily-populated field inside a service,
//! the cached value is an explicit object owned by the caller, with a visible
//! freshness policy and a visible `invalidate`.

use chrono::{DateTime, Duration, Utc};

/// A cached value with an explicit load time and optional time-to-live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedValue<T> {
    value: Option<T>,
    loaded_at: Option<DateTime<Utc>>,
    ttl: Option<Duration>,
}

impl<T> CachedValue<T> {
    /// An empty cache with no freshness limit.
    pub fn empty() -> Self {
        Self {
            value: None,
            loaded_at: None,
            ttl: None,
        }
    }

    /// An empty cache whose entries expire `ttl` after being stored.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            value: None,
            loaded_at: None,
            ttl: Some(ttl),
        }
    }

    /// Store a freshly loaded value.
    pub fn store(&mut self, value: T, now: DateTime<Utc>) {
        self.value = Some(value);
        self.loaded_at = Some(now);
    }

    /// The cached value, if present and still fresh at `now`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&T> {
        let loaded_at = self.loaded_at?;
        if let Some(ttl) = self.ttl {
            if now - loaded_at > ttl {
                return None;
            }
        }
        self.value.as_ref()
    }

    /// Drop the cached value; the next `get` misses until `store` is called.
    pub fn invalidate(&mut self) {
        self.value = None;
        self.loaded_at = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> Default for CachedValue<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_until_invalidated() {
        let now = Utc::now();
        let mut cache = CachedValue::empty();
        assert!(cache.get(now).is_none());

        cache.store(42u32, now);
        assert_eq!(cache.get(now), Some(&42));

        cache.invalidate();
        assert!(cache.get(now).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn ttl_expires_entries() {
        let now = Utc::now();
        let mut cache = CachedValue::with_ttl(Duration::minutes(30));
        cache.store("roles", now);

        assert_eq!(cache.get(now + Duration::minutes(29)), Some(&"roles"));
        assert!(cache.get(now + Duration::minutes(31)).is_none());
    }
}
