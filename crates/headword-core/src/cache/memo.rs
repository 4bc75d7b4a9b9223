use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, debug_span};

use super::{CacheError, LruCache};
use crate::corpus::Corpus;
use crate::matcher::{Matcher, SearchResult};

/// Anything that can answer a search; the seam the cache memoizes over.
pub trait Searcher: Send + Sync {
    fn search(&self, query: &str, exact_match: bool, limit: usize) -> SearchResult;
}

impl Searcher for Matcher {
    fn search(&self, query: &str, exact_match: bool, limit: usize) -> SearchResult {
        Matcher::search(self, query, exact_match, limit)
    }
}

/// Cache key. The query is kept exactly as given (case and whitespace
/// included); only the matcher lower-cases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub query: String,
    pub exact_match: bool,
    pub limit: usize,
}

impl QueryKey {
    pub fn new(query: &str, exact_match: bool, limit: usize) -> Self {
        Self {
            query: query.to_string(),
            exact_match,
            limit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
    pub capacity: usize,
}

/// Memoizing wrapper around a [`Searcher`].
///
/// The lock is held across the whole check-compute-store sequence, so two
/// callers missing on the same key never both run the search; the second
/// one blocks and then hits. Misses on different keys are serialized too.
pub struct SearchCache<S = Matcher> {
    searcher: S,
    lru: Mutex<LruCache<QueryKey, Arc<SearchResult>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl SearchCache<Matcher> {
    pub fn for_corpus(corpus: Arc<Corpus>, capacity: usize) -> Result<Self, CacheError> {
        Self::new(Matcher::new(corpus), capacity)
    }
}

impl<S: Searcher> SearchCache<S> {
    pub fn new(searcher: S, capacity: usize) -> Result<Self, CacheError> {
        Ok(Self {
            searcher,
            lru: Mutex::new(LruCache::new(capacity)?),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        })
    }

    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    /// Memoized [`Searcher::search`].
    pub fn cached_search(
        &self,
        query: &str,
        exact_match: bool,
        limit: usize,
    ) -> Arc<SearchResult> {
        let key = QueryKey::new(query, exact_match, limit);
        let mut lru = self.lock();

        if let Some(hit) = lru.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(hit);
        }

        let _span = debug_span!("cache_miss", query, exact_match, limit).entered();
        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = Arc::new(self.searcher.search(query, exact_match, limit));
        if let Some((evicted, _)) = lru.put(key, Arc::clone(&result)) {
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(evicted = evicted.query.as_str(), "evicted");
        }
        result
    }

    /// Cached value for a key, without computing or touching recency.
    pub fn peek(&self, query: &str, exact_match: bool, limit: usize) -> Option<Arc<SearchResult>> {
        self.lock()
            .peek(&QueryKey::new(query, exact_match, limit))
            .cloned()
    }

    /// Drop one key so the next lookup recomputes it.
    pub fn evict(&self, query: &str, exact_match: bool, limit: usize) -> bool {
        self.lock()
            .evict(&QueryKey::new(query, exact_match, limit))
            .is_some()
    }

    /// Drop every cached key, starting a new cache generation.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn stats(&self) -> CacheStats {
        let lru = self.lock();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            len: lru.len(),
            capacity: lru.capacity(),
        }
    }

    // A panic inside the searcher leaves the LRU untouched (the put never
    // happened), so a poisoned lock still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, LruCache<QueryKey, Arc<SearchResult>>> {
        self.lru.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
