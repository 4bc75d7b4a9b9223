use std::fs;
use std::path::Path;
use std::process;

use headword_engine::corpus::{self, Corpus, MAGIC};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn compile(input_file: &str, output_file: &str) {
    eprintln!("Reading {input_file}...");
    let corpus = die!(
        corpus::load(Path::new(input_file)),
        "Error reading corpus: {}"
    );
    eprintln!(
        "Compiling {} entries ({} metadata keys)...",
        corpus.len(),
        corpus.metadata().len()
    );
    die!(
        corpus.save(Path::new(output_file)),
        "Error writing {output_file}: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} MB)",
        file_size as f64 / 1_048_576.0
    );
}

pub fn info(file: &str) {
    let data = die!(fs::read(file), "Error reading {file}: {}");
    let is_snapshot = data.get(..4) == Some(MAGIC.as_slice());

    let corpus = if is_snapshot {
        die!(Corpus::from_bytes(&data), "Error reading snapshot: {}")
    } else {
        die!(
            std::str::from_utf8(&data)
                .map_err(|e| e.to_string())
                .and_then(|s| corpus::from_json_str(s).map_err(|e| e.to_string())),
            "Error reading JSON corpus: {}"
        )
    };

    println!("File:    {file}");
    println!(
        "Format:  {}",
        if is_snapshot {
            "HWDX snapshot"
        } else {
            "JSON"
        }
    );
    println!("Size:    {:.1} KB", data.len() as f64 / 1024.0);
    println!("Entries: {}", corpus.len());
    for (key, value) in corpus.metadata() {
        println!("  {key} = {value}");
    }
}

pub fn stats(corpus_file: &str) {
    let corpus = die!(
        corpus::load(Path::new(corpus_file)),
        "Error loading corpus: {}"
    );
    let stats = corpus.stats();
    let json = die!(serde_json::to_string_pretty(&stats), "Error: {}");
    println!("{json}");

    let dups = corpus.duplicates();
    if !dups.is_empty() {
        eprintln!("Top duplicated headwords:");
        let mut dups = dups;
        dups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        for (word, count) in dups.iter().take(10) {
            eprintln!("  {word} x{count}");
        }
    }
}
