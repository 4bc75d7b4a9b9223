use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug_span;

use headword_core::cache::SearchCache;
use headword_core::corpus::{self, Corpus, Entry};
use headword_core::definition;
use headword_core::matcher::SearchResult;
use headword_core::settings::{settings, Category, Settings};

use super::{LexiconError, LexiconStats, NamedSenses, ParsedItem};

/// Lookup service over one corpus.
///
/// Owns two memoizing caches: a large one for searches and single-word
/// lookups, and a small one for comma-separated batch lookups.
pub struct Lexicon {
    corpus: Arc<Corpus>,
    search_cache: SearchCache,
    small_cache: SearchCache,
    default_limit: usize,
    suggest_limit: usize,
    categories: Vec<Category>,
}

impl Lexicon {
    /// Build with the global settings.
    pub fn new(corpus: Arc<Corpus>) -> Result<Self, LexiconError> {
        Self::with_settings(corpus, settings())
    }

    pub fn with_settings(corpus: Arc<Corpus>, s: &Settings) -> Result<Self, LexiconError> {
        Ok(Self {
            search_cache: SearchCache::for_corpus(Arc::clone(&corpus), s.cache.search_capacity)?,
            small_cache: SearchCache::for_corpus(Arc::clone(&corpus), s.cache.small_capacity)?,
            corpus,
            default_limit: s.search.default_limit,
            suggest_limit: s.search.suggest_limit,
            categories: s.categories.clone(),
        })
    }

    /// Load a corpus file (JSON or `HWDX` snapshot) and build with the
    /// global settings.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        Self::new(corpus::load(path)?)
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        self.corpus.metadata()
    }

    /// Memoized search. `limit <= 0` returns every match.
    pub fn cached_search(&self, query: &str, exact_match: bool, limit: i64) -> Arc<SearchResult> {
        self.search_cache
            .cached_search(query, exact_match, unbounded_if_negative(limit))
    }

    /// Substring search with the configured default limit.
    pub fn search(&self, query: &str) -> Arc<SearchResult> {
        self.search_cache
            .cached_search(query.trim(), false, self.default_limit)
    }

    /// Headwords for autocompletion, at most `limit` (or the configured
    /// suggestion limit).
    pub fn suggest(&self, query: &str, limit: Option<usize>) -> Vec<String> {
        let limit = limit.unwrap_or(self.suggest_limit);
        let result = self.search_cache.cached_search(query.trim(), false, limit);
        result.words().take(limit).map(str::to_string).collect()
    }

    /// The entry whose headword equals `word`, ignoring case and
    /// surrounding whitespace. With duplicate headwords the first one wins.
    pub fn item(&self, word: &str) -> Result<Entry, LexiconError> {
        let word = word.trim();
        let result = self
            .search_cache
            .cached_search(word, true, self.default_limit);
        exact_first(&result).ok_or_else(|| LexiconError::NotFound(word.to_string()))
    }

    /// [`item`](Self::item) plus its definition grouped by named category.
    pub fn item_parsed(&self, word: &str) -> Result<ParsedItem, LexiconError> {
        let entry = self.item(word)?;
        Ok(self.parse_item(entry))
    }

    /// Parse several comma-separated words, skipping any without an entry.
    /// Results keep the order of the input.
    pub fn items_parsed(&self, words: &str) -> Vec<(String, ParsedItem)> {
        let _span = debug_span!("items_parsed", words).entered();
        words
            .trim()
            .split(',')
            .map(str::trim)
            .filter_map(|w| {
                let result = self.small_cache.cached_search(w, true, self.default_limit);
                exact_first(&result).map(|e| (w.to_string(), self.parse_item(e)))
            })
            .collect()
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            corpus: self.corpus.stats(),
            search_cache: self.search_cache.stats().into(),
            small_cache: self.small_cache.stats().into(),
        }
    }

    /// Forget all memoized results.
    pub fn clear_caches(&self) {
        self.search_cache.clear();
        self.small_cache.clear();
    }

    fn parse_item(&self, entry: Entry) -> ParsedItem {
        let abbrevs: Vec<&str> = self.categories.iter().map(|c| c.abbrev.as_str()).collect();
        let parsed = definition::unpack(&entry.definition, &abbrevs)
            .into_iter()
            .map(|g| NamedSenses {
                name: g.category.as_deref().and_then(|c| self.category_name(c)),
                category: g.category,
                senses: g.senses,
            })
            .collect();
        ParsedItem { entry, parsed }
    }

    fn category_name(&self, abbrev: &str) -> Option<String> {
        self.categories
            .iter()
            .find(|c| c.abbrev == abbrev)
            .map(|c| c.name.clone())
    }
}

fn unbounded_if_negative(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

fn exact_first(result: &SearchResult) -> Option<Entry> {
    if !result.exact_found {
        return None;
    }
    result.entries.first().cloned()
}
