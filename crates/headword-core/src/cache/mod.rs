//! Memoization of search results.
//!
//! `LruCache` is a fixed-capacity map with least-recently-used eviction.
//! `SearchCache` wraps a [`Searcher`] with one, computing each distinct
//! `(query, exact_match, limit)` key at most once while it stays cached.

mod lru;
mod memo;

pub use lru::LruCache;
pub use memo::{CacheStats, QueryKey, SearchCache, Searcher};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache capacity must be positive")]
    ZeroCapacity,
}
