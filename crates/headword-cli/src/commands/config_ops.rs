use std::fs;
use std::process;

use headword_engine::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: default_limit={}, suggest_limit={}, search_capacity={}, small_capacity={}, {} categories",
        s.search.default_limit,
        s.search.suggest_limit,
        s.cache.search_capacity,
        s.cache.small_capacity,
        s.categories.len()
    );
}
