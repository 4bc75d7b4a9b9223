use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Corpus, CorpusError, Entry};

/// Accepted JSON layouts: a bare entry array, or an object carrying
/// metadata alongside the entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCorpus {
    Entries(Vec<Entry>),
    Document {
        #[serde(default)]
        metadata: BTreeMap<String, String>,
        entries: Vec<Entry>,
    },
}

/// Parse and validate a JSON corpus.
pub fn from_json_str(json: &str) -> Result<Corpus, CorpusError> {
    let (entries, metadata) = match serde_json::from_str::<JsonCorpus>(json)? {
        JsonCorpus::Entries(entries) => (entries, BTreeMap::new()),
        JsonCorpus::Document { metadata, entries } => (entries, metadata),
    };
    Ok(Corpus::from_entries(entries)?.with_metadata(metadata))
}
