//! Last-known-location cache
//!
//! Browsers send a client id with their recommendation requests so a farmer
//! who reopens the planner without granting geolocation again still gets
//! results for their farm. Entries live in memory only.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use shared::Location;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::CacheConfig;

/// A remembered location
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CachedLocation {
    pub location: Location,
    pub area: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

/// In-memory map of client id to last known location
pub struct LocationCache {
    entries: RwLock<HashMap<Uuid, CachedLocation>>,
    ttl: Option<Duration>,
    max_entries: usize,
}

impl LocationCache {
    /// Create a cache. A `ttl_seconds` of 0 keeps entries forever; a
    /// `max_entries` of 0 stores nothing. TTLs too large for a `Duration`
    /// also keep entries forever.
    pub fn new(ttl_seconds: i64, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::try_seconds(ttl_seconds).filter(|_| ttl_seconds > 0),
            max_entries,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl_seconds, config.max_entries)
    }

    fn is_expired(&self, entry: &CachedLocation, now: DateTime<Utc>) -> bool {
        self.ttl
            .map(|ttl| now - entry.updated_at > ttl)
            .unwrap_or(false)
    }

    /// Fetch a client's location, dropping it if it has expired
    pub async fn get(&self, client_id: Uuid) -> Option<CachedLocation> {
        self.get_at(client_id, Utc::now()).await
    }

    pub(crate) async fn get_at(
        &self,
        client_id: Uuid,
        now: DateTime<Utc>,
    ) -> Option<CachedLocation> {
        {
            let entries = self.entries.read().await;
            match entries.get(&client_id) {
                None => return None,
                Some(entry) if !self.is_expired(entry, now) => return Some(entry.clone()),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        // Re-check under the write lock, a concurrent put may have refreshed it
        if entries
            .get(&client_id)
            .is_some_and(|entry| self.is_expired(entry, now))
        {
            entries.remove(&client_id);
            tracing::debug!(%client_id, "Dropped expired cached location");
            return None;
        }
        entries.get(&client_id).cloned()
    }

    /// Remember a client's location, evicting the oldest entry when full
    pub async fn put(
        &self,
        client_id: Uuid,
        location: Location,
        area: Option<f64>,
    ) -> CachedLocation {
        self.put_at(client_id, location, area, Utc::now()).await
    }

    pub(crate) async fn put_at(
        &self,
        client_id: Uuid,
        location: Location,
        area: Option<f64>,
        now: DateTime<Utc>,
    ) -> CachedLocation {
        let entry = CachedLocation {
            location,
            area,
            updated_at: now,
        };

        if self.max_entries == 0 {
            return entry;
        }

        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, cached| !self.is_expired(cached, now));
        if entries.len() < before {
            tracing::debug!(dropped = before - entries.len(), "Pruned expired cached locations");
        }

        if !entries.contains_key(&client_id) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, cached)| cached.updated_at)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                tracing::debug!(evicted = %oldest, "Location cache full, evicted oldest entry");
            }
        }
        entries.insert(client_id, entry.clone());
        entry
    }

    /// Forget a client's location. Returns whether anything was stored.
    pub async fn remove(&self, client_id: Uuid) -> bool {
        self.entries.write().await.remove(&client_id).is_some()
    }

    /// Number of unexpired entries
    pub async fn len(&self) -> usize {
        self.len_at(Utc::now()).await
    }

    pub(crate) async fn len_at(&self, now: DateTime<Utc>) -> usize {
        self.entries
            .read()
            .await
            .values()
            .filter(|cached| !self.is_expired(cached, now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Location {
        Location::new(28.6, 77.2)
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = LocationCache::new(60, 10);
        let id = Uuid::new_v4();

        cache.put(id, delhi(), Some(2.0)).await;
        let cached = cache.get(id).await.expect("entry should be cached");

        assert_eq!(cached.location, delhi());
        assert_eq!(cached.area, Some(2.0));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_client() {
        let cache = LocationCache::new(60, 10);
        assert!(cache.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = LocationCache::new(60, 10);
        let id = Uuid::new_v4();

        cache.put(id, delhi(), None).await;
        cache.put(id, Location::new(12.97, 77.59), None).await;

        assert_eq!(cache.get(id).await.unwrap().location, Location::new(12.97, 77.59));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_dropped() {
        let cache = LocationCache::new(60, 10);
        let id = Uuid::new_v4();
        let stored_at = Utc::now();

        cache.put_at(id, delhi(), None, stored_at).await;

        assert!(cache.get_at(id, stored_at + Duration::seconds(59)).await.is_some());
        assert!(cache.get_at(id, stored_at + Duration::seconds(61)).await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_zero_ttl_never_expires() {
        let cache = LocationCache::new(0, 10);
        let id = Uuid::new_v4();
        let stored_at = Utc::now();

        cache.put_at(id, delhi(), None, stored_at).await;
        assert!(cache
            .get_at(id, stored_at + Duration::days(3650))
            .await
            .is_some());
    }

    #[tokio::test]
    async fn test_evicts_oldest_when_full() {
        let cache = LocationCache::new(0, 2);
        let (first, second, third) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let now = Utc::now();

        cache.put_at(first, delhi(), None, now).await;
        cache.put_at(second, delhi(), None, now + Duration::seconds(1)).await;
        cache.put_at(third, delhi(), None, now + Duration::seconds(2)).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get(first).await.is_none());
        assert!(cache.get(second).await.is_some());
        assert!(cache.get(third).await.is_some());
    }

    #[tokio::test]
    async fn test_len_skips_expired_entries() {
        let cache = LocationCache::new(60, 10);
        let stored_at = Utc::now();

        cache.put_at(Uuid::new_v4(), delhi(), None, stored_at).await;
        let later = stored_at + Duration::seconds(30);
        cache.put_at(Uuid::new_v4(), delhi(), None, later).await;

        assert_eq!(cache.len_at(stored_at + Duration::seconds(59)).await, 2);
        assert_eq!(cache.len_at(stored_at + Duration::seconds(61)).await, 1);
        assert_eq!(cache.len_at(stored_at + Duration::seconds(120)).await, 0);
    }

    #[tokio::test]
    async fn test_put_prunes_expired_entries() {
        let cache = LocationCache::new(60, 2);
        let (first, second, third) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let now = Utc::now();

        cache.put_at(first, delhi(), None, now).await;
        cache.put_at(second, delhi(), None, now + Duration::seconds(1)).await;
        cache.put_at(third, delhi(), None, now + Duration::seconds(100)).await;

        let entries = cache.entries.read().await;
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key(&third));
    }

    #[test]
    fn test_oversized_ttl_does_not_panic() {
        let cache = LocationCache::new(i64::MAX, 10);
        assert!(cache.ttl.is_none());

        let cache = LocationCache::from_config(&CacheConfig {
            ttl_seconds: i64::MAX / 1000 + 1,
            max_entries: 10,
        });
        assert!(cache.ttl.is_none());
    }

    #[tokio::test]
    async fn test_zero_capacity_stores_nothing() {
        let cache = LocationCache::new(60, 0);
        let id = Uuid::new_v4();

        let entry = cache.put(id, delhi(), None).await;
        assert_eq!(entry.location, delhi());
        assert!(cache.get(id).await.is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let cache = LocationCache::new(60, 10);
        let id = Uuid::new_v4();

        cache.put(id, delhi(), None).await;
        assert!(cache.remove(id).await);
        assert!(!cache.remove(id).await);
        assert!(cache.get(id).await.is_none());
    }
}
