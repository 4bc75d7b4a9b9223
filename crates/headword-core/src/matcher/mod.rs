//! Headword matching and ranking.
//!
//! A query is compared case-insensitively against every headword in the
//! corpus. Matches are grouped into [`MatchBucket`]s, each bucket is sorted
//! alphabetically, and the buckets are concatenated in priority order.

mod fallback;

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::corpus::{Corpus, Entry};

/// Match class of a headword relative to a query, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchBucket {
    Equal,
    PrefixMatch,
    SuffixMatch,
    Other,
}

impl MatchBucket {
    const ALL: [MatchBucket; 4] = [
        MatchBucket::Equal,
        MatchBucket::PrefixMatch,
        MatchBucket::SuffixMatch,
        MatchBucket::Other,
    ];

    /// Classify a lower-cased headword against a lower-cased query.
    /// Returns `None` when the query does not occur in the word at all.
    pub fn classify(word_lower: &str, query_lower: &str) -> Option<Self> {
        if word_lower == query_lower {
            Some(Self::Equal)
        } else if word_lower.starts_with(query_lower) {
            Some(Self::PrefixMatch)
        } else if word_lower.ends_with(query_lower) {
            Some(Self::SuffixMatch)
        } else if word_lower.contains(query_lower) {
            Some(Self::Other)
        } else {
            None
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of a search: the (possibly truncated) ranked entries, whether an
/// exact headword match was among them, and whether truncation dropped any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub entries: Vec<Entry>,
    pub exact_found: bool,
    pub has_more: bool,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }
}

/// Search the corpus.
///
/// - `exact_match`: only headwords equal to the query (ignoring case).
/// - `limit`: maximum number of entries returned; `0` means unbounded.
///
/// An empty or whitespace-only query yields an empty result. A non-exact
/// query with no hits that looks like an English plural is retried once as
/// an exact lookup of the singular.
pub fn search(corpus: &Corpus, query: &str, exact_match: bool, limit: usize) -> SearchResult {
    let _span = debug_span!("search", query, exact_match, limit).entered();
    if query.trim().is_empty() {
        return SearchResult::default();
    }

    let ql = query.to_lowercase();
    let mut buckets: [Vec<(String, &Entry)>; 4] = Default::default();
    for entry in corpus.all_entries() {
        let wl = entry.word.to_lowercase();
        let bucket = if exact_match {
            if wl != ql {
                continue;
            }
            MatchBucket::Equal
        } else {
            match MatchBucket::classify(&wl, &ql) {
                Some(b) => b,
                None => continue,
            }
        };
        buckets[bucket.index()].push((wl, entry));
    }

    for bucket in &mut buckets {
        bucket.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let exact_found = !buckets[MatchBucket::Equal.index()].is_empty();
    let total: usize = buckets.iter().map(|b| b.len()).sum();
    debug!(
        equal = buckets[MatchBucket::Equal.index()].len(),
        prefix = buckets[MatchBucket::PrefixMatch.index()].len(),
        suffix = buckets[MatchBucket::SuffixMatch.index()].len(),
        other = buckets[MatchBucket::Other.index()].len(),
    );

    if total == 0 {
        if let Some(singular) = fallback::plural_retry(query, exact_match) {
            debug!(singular, "plural fallback");
            return search(corpus, singular, true, limit);
        }
    }

    let take = if limit == 0 { total } else { limit.min(total) };
    let entries: Vec<Entry> = MatchBucket::ALL
        .iter()
        .flat_map(|b| buckets[b.index()].iter())
        .take(take)
        .map(|(_, e)| (*e).clone())
        .collect();

    SearchResult {
        entries,
        exact_found,
        has_more: limit > 0 && total > limit,
    }
}

/// Shared handle pairing a corpus with [`search`].
#[derive(Clone)]
pub struct Matcher {
    corpus: Arc<Corpus>,
}

impl Matcher {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn search(&self, query: &str, exact_match: bool, limit: usize) -> SearchResult {
        search(&self.corpus, query, exact_match, limit)
    }
}
