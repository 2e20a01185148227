use hashbrown::HashMap as FastHashMap;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Pathname → metadata memo.
///
/// Entries are keyed by the exact pathname string and are never evicted; the
/// route set is immutable after construction, so a cached entry can never
/// disagree with a fresh lookup.
#[derive(Debug)]
pub struct MetadataCache<M> {
    map: RwLock<FastHashMap<Box<str>, Arc<M>>>,
    stats: CacheStats,
}

impl<M> MetadataCache<M> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(FastHashMap::with_capacity(capacity)),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&self, pathname: &str) -> Option<Arc<M>> {
        let hit = self.map.read().get(pathname).cloned();
        match hit {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        hit
    }

    /// Stores `metadata` under `pathname`, returning whichever value ends up
    /// cached. A concurrent resolution of the same pathname keeps the first
    /// stored instance.
    pub fn insert(&self, pathname: &str, metadata: Arc<M>) -> Arc<M> {
        let guard = self.map.upgradable_read();
        if let Some(existing) = guard.get(pathname) {
            return existing.clone();
        }
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        guard
            .entry(pathname.into())
            .or_insert(metadata)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    pub fn clear(&self) {
        let mut guard = self.map.write();
        guard.clear();
        guard.shrink_to_fit();
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
