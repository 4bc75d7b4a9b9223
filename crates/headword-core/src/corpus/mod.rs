//! The immutable headword collection searched by the matcher.
//!
//! A `Corpus` is built once, validated once, and then shared read-only as
//! `Arc<Corpus>`. It can be loaded from JSON or from a compiled `HWDX`
//! snapshot (see [`snapshot`]); [`load`] picks the format by magic bytes.

mod entry;
mod snapshot;
mod source;
#[cfg(test)]
mod tests;

pub use entry::Entry;
pub use snapshot::{MAGIC, VERSION};
pub use source::from_json_str;

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, debug_span};

/// Unified error type for corpus loading, validation and snapshot I/O.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected HWDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch (expected {expected:#010x}, found {actual:#010x})")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

/// Counts shown by `hwtool stats` and the engine's `stats()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct CorpusStats {
    pub entries: usize,
    pub originals: usize,
    pub additions: usize,
    pub duplicates: usize,
    pub capitalized: usize,
    pub multiword: usize,
    pub non_ascii: usize,
    pub without_ipa_uk: usize,
    pub without_ipa_us: usize,
}

pub struct Corpus {
    entries: Vec<Entry>,
    metadata: BTreeMap<String, String>,
}

impl Corpus {
    /// Validate entries and order them case-insensitively by headword.
    ///
    /// Duplicate headwords are kept; their relative order is preserved.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Result<Self, CorpusError> {
        let mut entries: Vec<Entry> = entries.into_iter().collect();
        for (index, e) in entries.iter().enumerate() {
            validate_entry(index, e)?;
        }

        let mut keyed: Vec<(String, Entry)> = entries
            .drain(..)
            .map(|e| (e.word.to_lowercase(), e))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Self {
            entries: keyed.into_iter().map(|(_, e)| e).collect(),
            metadata: BTreeMap::new(),
        })
    }

    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Every entry, ordered by lower-cased headword.
    pub fn all_entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Entries that appear in the printed source.
    pub fn originals(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.is_addition())
    }

    /// Entries added after the printed source (`page_num == 0`).
    pub fn additions(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_addition())
    }

    pub fn capitalized(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_capitalized())
    }

    pub fn multiword(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_multiword())
    }

    pub fn non_ascii(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.is_ascii())
    }

    /// Headwords that occur more than once, with their occurrence count.
    pub fn duplicates(&self) -> Vec<(&str, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for e in &self.entries {
            *counts.entry(e.word.as_str()).or_default() += 1;
        }
        counts.retain(|_, n| *n > 1);
        counts.into_iter().collect()
    }

    /// Entries whose definition lists the given word category.
    ///
    /// `abbrev` may be given with or without its trailing dot (`"n"` or `"n."`).
    pub fn in_category<'a>(&'a self, abbrev: &str) -> impl Iterator<Item = &'a Entry> + 'a {
        let needle = format!("{}. ", abbrev.trim_end_matches('.'));
        self.entries
            .iter()
            .filter(move |e| e.definition.contains(&needle))
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            entries: self.len(),
            originals: self.originals().count(),
            additions: self.additions().count(),
            duplicates: self.duplicates().len(),
            capitalized: self.capitalized().count(),
            multiword: self.multiword().count(),
            non_ascii: self.non_ascii().count(),
            without_ipa_uk: self.entries.iter().filter(|e| e.ipa_uk.is_empty()).count(),
            without_ipa_us: self.entries.iter().filter(|e| e.ipa_us.is_empty()).count(),
        }
    }
}

fn validate_entry(index: usize, e: &Entry) -> Result<(), CorpusError> {
    if e.word.is_empty() {
        return Err(CorpusError::InvalidEntry {
            index,
            reason: "empty headword".to_string(),
        });
    }
    if e.word.trim() != e.word {
        return Err(CorpusError::InvalidEntry {
            index,
            reason: format!("headword '{}' has surrounding whitespace", e.word),
        });
    }
    Ok(())
}

/// Load a corpus file, detecting a compiled snapshot by its magic bytes and
/// falling back to JSON otherwise.
pub fn load(path: &Path) -> Result<Arc<Corpus>, CorpusError> {
    let _span = debug_span!("load_corpus", path = %path.display()).entered();

    let mut magic = [0u8; 4];
    let is_snapshot = {
        let mut file = File::open(path)?;
        file.read_exact(&mut magic).is_ok() && &magic == MAGIC
    };

    let corpus = if is_snapshot {
        Corpus::open(path)?
    } else {
        from_json_str(&fs::read_to_string(path)?)?
    };

    debug!(
        entries = corpus.len(),
        metadata = corpus.metadata.len(),
        is_snapshot
    );
    Ok(Arc::new(corpus))
}
