use std::path::Path;
use std::process;

use headword_engine::Lexicon;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn open(corpus_file: &str) -> Lexicon {
    die!(
        Lexicon::open(Path::new(corpus_file)),
        "Error loading corpus: {}"
    )
}

pub fn search(corpus_file: &str, query: &str, exact: bool, limit: i64, json: bool) {
    let lexicon = open(corpus_file);
    let result = lexicon.cached_search(query.trim(), exact, limit);

    if json {
        let out = serde_json::json!({
            "exact_found": result.exact_found,
            "has_more": result.has_more,
            "entries": result.entries,
        });
        println!("{}", die!(serde_json::to_string_pretty(&out), "Error: {}"));
        return;
    }

    if result.is_empty() {
        println!("(no matches)");
        return;
    }
    for (i, e) in result.entries.iter().enumerate() {
        println!("{:3}. {}  {}", i + 1, e.word, e.definition);
    }
    if result.has_more {
        println!("... more results (raise -n or pass -n 0)");
    }
    if !exact && !result.exact_found {
        eprintln!("note: no exact headword match for '{}'", query.trim());
    }
}

pub fn suggest(corpus_file: &str, query: &str, limit: Option<usize>) {
    let lexicon = open(corpus_file);
    for word in lexicon.suggest(query, limit) {
        println!("{word}");
    }
}

pub fn item(corpus_file: &str, word: &str, parsed: bool, json: bool) {
    let lexicon = open(corpus_file);

    if parsed {
        let item = die!(lexicon.item_parsed(word), "Error: {}");
        if json {
            println!("{}", die!(serde_json::to_string_pretty(&item), "Error: {}"));
            return;
        }
        println!("{} (page {})", item.entry.word, item.entry.page_num);
        for group in &item.parsed {
            let label = match (&group.category, &group.name) {
                (Some(c), Some(n)) => format!("{c} ({n})"),
                (Some(c), None) => c.clone(),
                (None, _) => "-".to_string(),
            };
            println!("  {label}: {}", group.senses.join("; "));
        }
        return;
    }

    let entry = die!(lexicon.item(word), "Error: {}");
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&entry), "Error: {}"));
        return;
    }
    println!("{}", entry.word);
    println!("  definition: {}", entry.definition);
    if !entry.ipa_uk.is_empty() {
        println!("  ipa (uk):   {}", entry.ipa_uk);
    }
    if !entry.ipa_us.is_empty() {
        println!("  ipa (us):   {}", entry.ipa_us);
    }
    if let Some(syl) = &entry.syllables {
        println!("  syllables:  {syl}");
    }
    println!("  page:       {}", entry.page_num);
}
