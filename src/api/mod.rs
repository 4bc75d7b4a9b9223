//! Service layer over the lookup core: the `Lexicon` object and the value
//! types it hands to outer layers (HTTP handlers, the CLI).

mod engine;
#[cfg(test)]
mod tests;
mod types;

pub use engine::Lexicon;
pub use types::{CacheStatsRecord, LexiconError, LexiconStats, NamedSenses, ParsedItem};

use std::path::Path;

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Replace the global settings with the TOML file at `path`.
/// Must run before anything reads the settings.
pub fn settings_load_config(path: &Path) -> Result<(), LexiconError> {
    let content = std::fs::read_to_string(path).map_err(|e| LexiconError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    headword_core::settings::init_custom(content)?;
    Ok(())
}

pub fn settings_default_config() -> &'static str {
    headword_core::settings::DEFAULT_SETTINGS_TOML
}

pub fn trace_init(log_dir: &Path) {
    crate::trace_init::init_tracing(log_dir);
}
