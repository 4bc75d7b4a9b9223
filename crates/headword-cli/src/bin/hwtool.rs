use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use headword_cli::commands::{config_ops, corpus_ops, query_ops};
use headword_engine::api;

#[derive(Parser)]
#[command(name = "hwtool", about = "Headword corpus and lookup tool")]
struct Cli {
    /// Custom settings TOML (replaces the embedded defaults)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSONL traces to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON corpus into an HWDX snapshot
    Compile {
        /// Input JSON file
        input_file: String,
        /// Output snapshot file
        output_file: String,
    },
    /// Show corpus file info (format auto-detected by magic bytes)
    Info {
        /// Corpus file (.json or .hwdx)
        file: String,
    },
    /// Search headwords (ranked: equal, prefix, suffix, other)
    Search {
        /// Corpus file
        corpus_file: String,
        /// Query string
        query: String,
        /// Only whole-headword matches
        #[arg(long)]
        exact: bool,
        /// Maximum number of results (0 or less for all)
        #[arg(short, long, default_value = "50", allow_negative_numbers = true)]
        n: i64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Autocomplete headwords
    Suggest {
        /// Corpus file
        corpus_file: String,
        /// Query prefix
        query: String,
        /// Number of suggestions (default: settings search.suggest_limit)
        #[arg(short, long)]
        n: Option<usize>,
    },
    /// Look up a single headword (exact, case-insensitive)
    Item {
        /// Corpus file
        corpus_file: String,
        /// Headword
        word: String,
        /// Group the definition by word category
        #[arg(long)]
        parsed: bool,
        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show corpus statistics as JSON
    Stats {
        /// Corpus file
        corpus_file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        api::trace_init(Path::new(dir));
    }
    if let Some(file) = &cli.settings {
        if let Err(e) = api::settings_load_config(Path::new(file)) {
            eprintln!("Error loading settings: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Compile {
            input_file,
            output_file,
        } => corpus_ops::compile(&input_file, &output_file),
        Command::Info { file } => corpus_ops::info(&file),
        Command::Search {
            corpus_file,
            query,
            exact,
            n,
            json,
        } => query_ops::search(&corpus_file, &query, exact, n, json),
        Command::Suggest {
            corpus_file,
            query,
            n,
        } => query_ops::suggest(&corpus_file, &query, n),
        Command::Item {
            corpus_file,
            word,
            parsed,
            json,
        } => query_ops::item(&corpus_file, &word, parsed, json),
        Command::Stats { corpus_file } => corpus_ops::stats(&corpus_file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
