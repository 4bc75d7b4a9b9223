use serde::Serialize;

use headword_core::cache::{CacheError, CacheStats};
use headword_core::corpus::{CorpusError, CorpusStats, Entry};
use headword_core::settings::SettingsError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("no entry found for '{0}'")]
    NotFound(String),
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One category group of a parsed definition, with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSenses {
    pub category: Option<String>,
    /// `None` when the category is missing or not configured.
    pub name: Option<String>,
    pub senses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedItem {
    #[serde(flatten)]
    pub entry: Entry,
    pub parsed: Vec<NamedSenses>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconStats {
    pub corpus: CorpusStats,
    pub search_cache: CacheStatsRecord,
    pub small_cache: CacheStatsRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStatsRecord {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
    pub capacity: usize,
}

impl From<CacheStats> for CacheStatsRecord {
    fn from(s: CacheStats) -> Self {
        Self {
            hits: s.hits,
            misses: s.misses,
            evictions: s.evictions,
            len: s.len,
            capacity: s.capacity,
        }
    }
}
