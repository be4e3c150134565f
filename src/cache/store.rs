use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use super::key::CacheKey;
use crate::error::ConsoleResult;

/// Lifecycle of one cached query.
///
/// `Idle → Fetching → {Success | Error}`; invalidation moves a settled entry
/// to `Stale`, and the next read refetches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched (or removed).
    Idle,
    /// A fetch is in flight.
    Fetching,
    /// The last fetch succeeded.
    Success,
    /// The last fetch failed.
    Error,
    /// Invalidated; the next read refetches.
    Stale,
}

type Value = Arc<dyn Any + Send + Sync>;

struct Entry {
    status: QueryStatus,
    value: Option<Value>,
    error: Option<String>,
    fetched_at: Option<Instant>,
    // Drawn from the cache-wide counter on creation and on every
    // invalidation, so a fetch that started before either never settles as
    // fresh.
    generation: u64,
}

impl Entry {
    fn idle(generation: u64) -> Self {
        Self {
            status: QueryStatus::Idle,
            value: None,
            error: None,
            fetched_at: None,
            generation,
        }
    }
}

/// In-memory query cache keyed by [`CacheKey`].
///
/// Values are stored type-erased and cloned out on read. Locks are only held
/// for map access, never while a fetch is awaited.
#[derive(Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<CacheKey, Entry>>,
    generations: AtomicU64,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read();
        f.debug_map()
            .entries(entries.iter().map(|(k, e)| (k.to_string(), e.status)))
            .finish()
    }
}

impl QueryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value if it is fresh, otherwise runs `fetcher`.
    ///
    /// A value is fresh when the last fetch succeeded less than `stale_time`
    /// ago and nothing invalidated it since. A failed fetch records the error
    /// (keeping any previous value for [`QueryCache::peek`]) and returns it.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: &CacheKey,
        stale_time: Duration,
        fetcher: F,
    ) -> ConsoleResult<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ConsoleResult<T>>,
    {
        if let Some(value) = self.fresh::<T>(key, stale_time) {
            debug!(key = %key, "Cache hit");
            return Ok(value);
        }

        let generation = self.begin_fetch(key);
        debug!(key = %key, "Cache miss, fetching");
        let result = fetcher().await;

        let mut entries = self.entries.write();
        // Removed while in flight: the result is not cached.
        if let Some(entry) = entries.get_mut(key) {
            let invalidated = entry.generation != generation;
            if invalidated && entry.status != QueryStatus::Fetching {
                // A newer fetch already settled this entry.
                debug!(key = %key, "Discarding superseded fetch");
                return result;
            }
            match &result {
                Ok(value) => {
                    entry.value = Some(Arc::new(value.clone()));
                    entry.error = None;
                    entry.fetched_at = Some(Instant::now());
                    entry.status = if invalidated {
                        QueryStatus::Stale
                    } else {
                        QueryStatus::Success
                    };
                }
                Err(error) => {
                    entry.error = Some(error.user_message());
                    entry.status = QueryStatus::Error;
                }
            }
        }
        result
    }

    /// Stores `value` as a fresh success, replacing whatever was there.
    pub fn set<T: Send + Sync + 'static>(&self, key: CacheKey, value: T) {
        let mut entries = self.entries.write();
        let entry = entries
            .entry(key)
            .or_insert_with(|| Entry::idle(self.next_generation()));
        entry.value = Some(Arc::new(value));
        entry.error = None;
        entry.fetched_at = Some(Instant::now());
        entry.status = QueryStatus::Success;
    }

    /// Returns the last value stored under `key`, fresh or not.
    pub fn peek<T: Clone + 'static>(&self, key: &CacheKey) -> Option<T> {
        let entries = self.entries.read();
        entries
            .get(key)
            .and_then(|e| e.value.as_ref())
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    }

    /// Returns the state of `key`; unknown keys are [`QueryStatus::Idle`].
    pub fn status(&self, key: &CacheKey) -> QueryStatus {
        self.entries
            .read()
            .get(key)
            .map_or(QueryStatus::Idle, |e| e.status)
    }

    /// Returns the message of the last failed fetch of `key`.
    pub fn error(&self, key: &CacheKey) -> Option<String> {
        self.entries.read().get(key).and_then(|e| e.error.clone())
    }

    /// Marks every entry under `prefix` stale. Returns how many were touched.
    pub fn invalidate(&self, prefix: &CacheKey) -> usize {
        let mut entries = self.entries.write();
        let mut touched = 0;
        for (key, entry) in entries.iter_mut().filter(|(k, _)| k.starts_with(prefix)) {
            entry.generation = self.next_generation();
            if matches!(entry.status, QueryStatus::Success | QueryStatus::Error) {
                entry.status = QueryStatus::Stale;
            }
            touched += 1;
            debug!(key = %key, "Invalidated");
        }
        touched
    }

    /// Drops every entry under `prefix`. Returns how many were dropped.
    pub fn remove(&self, prefix: &CacheKey) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|k, _| !k.starts_with(prefix));
        before - entries.len()
    }

    /// Drops everything.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn fresh<T: Clone + 'static>(&self, key: &CacheKey, stale_time: Duration) -> Option<T> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        if entry.status != QueryStatus::Success {
            return None;
        }
        if entry.fetched_at?.elapsed() >= stale_time {
            return None;
        }
        entry.value.as_ref()?.downcast_ref::<T>().cloned()
    }

    fn next_generation(&self) -> u64 {
        self.generations.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn begin_fetch(&self, key: &CacheKey) -> u64 {
        let mut entries = self.entries.write();
        let entry = entries
            .entry(key.clone())
            .or_insert_with(|| Entry::idle(self.next_generation()));
        entry.status = QueryStatus::Fetching;
        entry.generation
    }
}
