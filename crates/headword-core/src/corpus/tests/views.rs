use std::collections::BTreeMap;

use super::sample_corpus;
use crate::corpus::{from_json_str, Corpus, CorpusError, Entry};

#[test]
fn test_entries_sorted_case_insensitively() {
    let corpus = sample_corpus();
    let words: Vec<&str> = corpus.all_entries().iter().map(|e| e.word.as_str()).collect();
    assert_eq!(
        words,
        vec!["abstract", "café", "horse", "Horse Guards", "quickly", "run", "run"]
    );
}

#[test]
fn test_duplicates_preserve_insertion_order() {
    let corpus = sample_corpus();
    let runs: Vec<&str> = corpus
        .all_entries()
        .iter()
        .filter(|e| e.word == "run")
        .map(|e| e.definition.as_str())
        .collect();
    assert_eq!(runs, vec!["s. hlaupa", "n. hlaup"]);
    assert_eq!(corpus.duplicates(), vec![("run", 2)]);
}

#[test]
fn test_views() {
    let corpus = sample_corpus();
    assert_eq!(corpus.additions().count(), 2);
    assert_eq!(corpus.originals().count(), 5);
    assert_eq!(
        corpus.capitalized().map(|e| e.word.as_str()).collect::<Vec<_>>(),
        vec!["Horse Guards"]
    );
    assert_eq!(corpus.multiword().count(), 1);
    assert_eq!(
        corpus.non_ascii().map(|e| e.word.as_str()).collect::<Vec<_>>(),
        vec!["café"]
    );
}

#[test]
fn test_in_category_accepts_either_form() {
    let corpus = sample_corpus();
    let nouns: Vec<&str> = corpus.in_category("n").map(|e| e.word.as_str()).collect();
    assert_eq!(
        nouns,
        vec!["abstract", "café", "horse", "Horse Guards", "run"]
    );
    assert_eq!(corpus.in_category("ao.").count(), 1);
    assert_eq!(corpus.in_category("zz").count(), 0);
}

#[test]
fn test_stats() {
    let stats = sample_corpus().stats();
    assert_eq!(stats.entries, 7);
    assert_eq!(stats.additions, 2);
    assert_eq!(stats.originals, 5);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(stats.without_ipa_uk, 6);
}

#[test]
fn test_reject_empty_headword() {
    let err = Corpus::from_entries(vec![Entry::new("ok", "n. x"), Entry::new("", "n. y")])
        .err()
        .unwrap();
    assert!(matches!(err, CorpusError::InvalidEntry { index: 1, .. }));
}

#[test]
fn test_reject_padded_headword() {
    let err = Corpus::from_entries(vec![Entry::new(" cat", "n. köttur")])
        .err()
        .unwrap();
    assert!(err.to_string().contains("surrounding whitespace"));
}

#[test]
fn test_json_array() {
    let json = r#"[
        {"word": "cat", "definition": "n. köttur", "page_num": 70},
        {"word": "dog", "definition": "n. hundur", "ipa_uk": "dɒɡ", "syllables": "dog"}
    ]"#;
    let corpus = from_json_str(json).unwrap();
    assert_eq!(corpus.len(), 2);
    assert!(corpus.metadata().is_empty());
    let dog = &corpus.all_entries()[1];
    assert_eq!(dog.ipa_uk, "dɒɡ");
    assert_eq!(dog.ipa_us, "");
    assert_eq!(dog.page_num, 0);
    assert_eq!(dog.syllables.as_deref(), Some("dog"));
}

#[test]
fn test_json_document_with_metadata() {
    let json = r#"{
        "metadata": {"version": "2025-01", "source": "test"},
        "entries": [{"word": "cat", "definition": "n. köttur"}]
    }"#;
    let corpus = from_json_str(json).unwrap();
    let mut expected = BTreeMap::new();
    expected.insert("source".to_string(), "test".to_string());
    expected.insert("version".to_string(), "2025-01".to_string());
    assert_eq!(corpus.metadata(), &expected);
}

#[test]
fn test_json_missing_definition() {
    let err = from_json_str(r#"[{"word": "cat"}]"#).err().unwrap();
    assert!(matches!(err, CorpusError::Json(_)));
}
