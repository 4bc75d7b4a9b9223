use std::io::Write;
use std::sync::Arc;

use headword_core::corpus::{Corpus, Entry};
use headword_core::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};

use super::{Lexicon, LexiconError};

fn make_lexicon() -> Lexicon {
    let corpus = Corpus::from_entries(vec![
        Entry::new("cat", "n. köttur; s. hýða").with_page(70),
        Entry::new("catalog", "n. skrá").with_page(71),
        Entry::new("bobcat", "n. gaupa").with_page(0),
        Entry::new("horse", "n. hestur; s. ríða; n. klár").with_page(210),
        Entry::new("run", "s. hlaupa").with_page(380),
        Entry::new("run", "n. hlaup").with_page(380),
        Entry::new("lead", "intro; n. blý").with_page(250),
    ])
    .unwrap();
    let settings = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
    Lexicon::with_settings(Arc::new(corpus), &settings).unwrap()
}

#[test]
fn test_cached_search_negative_limit_is_unbounded() {
    let lex = make_lexicon();
    let r = lex.cached_search("cat", false, -1);
    assert_eq!(r.words().collect::<Vec<_>>(), vec!["cat", "catalog", "bobcat"]);
    assert!(!r.has_more);

    let r = lex.cached_search("cat", false, 1);
    assert_eq!(r.entries.len(), 1);
    assert!(r.has_more);
}

#[test]
fn test_search_trims_and_memoizes() {
    let lex = make_lexicon();
    let a = lex.search("  horse ");
    let b = lex.search("horse");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(lex.stats().search_cache.misses, 1);
    assert_eq!(lex.stats().search_cache.hits, 1);
}

#[test]
fn test_suggest() {
    let lex = make_lexicon();
    assert_eq!(lex.suggest("ca", None), vec!["cat", "catalog", "bobcat"]);
    assert_eq!(lex.suggest("cat", Some(2)), vec!["cat", "catalog"]);
    assert!(lex.suggest("", None).is_empty());
}

#[test]
fn test_item() {
    let lex = make_lexicon();
    let e = lex.item(" CAT ").unwrap();
    assert_eq!(e.word, "cat");
    assert_eq!(e.page_num, 70);

    // Duplicate headwords: the first in corpus order wins.
    assert_eq!(lex.item("run").unwrap().definition, "s. hlaupa");
}

#[test]
fn test_item_is_exact_without_plural_fallback() {
    let lex = make_lexicon();
    let err = lex.item("horses").unwrap_err();
    assert_eq!(err.to_string(), "no entry found for 'horses'");
    assert_eq!(lex.search("horses").words().collect::<Vec<_>>(), vec!["horse"]);
}

#[test]
fn test_item_not_found() {
    let lex = make_lexicon();
    assert!(matches!(lex.item("zebra"), Err(LexiconError::NotFound(w)) if w == "zebra"));
    assert!(matches!(lex.item("ca"), Err(LexiconError::NotFound(_))));
}

#[test]
fn test_item_parsed_names_categories() {
    let lex = make_lexicon();
    let item = lex.item_parsed("horse").unwrap();
    assert_eq!(item.entry.word, "horse");
    assert_eq!(item.parsed.len(), 2);
    assert_eq!(item.parsed[0].category.as_deref(), Some("n."));
    assert_eq!(item.parsed[0].name.as_deref(), Some("nafnorð"));
    assert_eq!(item.parsed[0].senses, vec!["hestur", "klár"]);
    assert_eq!(item.parsed[1].name.as_deref(), Some("sagnorð"));

    let lead = lex.item_parsed("lead").unwrap();
    assert_eq!(lead.parsed[0].category, None);
    assert_eq!(lead.parsed[0].name, None);
    assert_eq!(lead.parsed[0].senses, vec!["intro"]);
}

#[test]
fn test_items_parsed_skips_misses() {
    let lex = make_lexicon();
    let items = lex.items_parsed(" horse, zebra ,cat");
    let words: Vec<&str> = items.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["horse", "cat"]);
    assert_eq!(items[1].1.parsed[1].senses, vec!["hýða"]);
    assert_eq!(lex.stats().small_cache.misses, 3);
    assert_eq!(lex.stats().search_cache.misses, 0);
}

#[test]
fn test_parsed_item_json_shape() {
    let lex = make_lexicon();
    let item = lex.item_parsed("cat").unwrap();
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["word"], "cat");
    assert_eq!(json["page_num"], 70);
    assert_eq!(json["parsed"][0]["name"], "nafnorð");
}

#[test]
fn test_clear_caches() {
    let lex = make_lexicon();
    lex.search("cat");
    lex.items_parsed("cat");
    lex.clear_caches();
    let stats = lex.stats();
    assert_eq!(stats.search_cache.len, 0);
    assert_eq!(stats.small_cache.len, 0);
    assert_eq!(stats.corpus.entries, 7);
}

#[test]
fn test_open_json_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dict.json");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(br#"{"metadata": {"name": "test"}, "entries": [{"word": "ox", "definition": "n. uxi"}]}"#)
        .unwrap();
    drop(f);

    let lex = Lexicon::open(&path).unwrap();
    assert_eq!(lex.metadata().get("name").map(String::as_str), Some("test"));
    assert_eq!(lex.search("oxs").words().collect::<Vec<_>>(), vec!["ox"]);
}
