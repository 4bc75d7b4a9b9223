//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
    pub cache: CacheSettings,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Settings {
    /// Human-readable name for a category abbreviation such as `"n."`.
    pub fn category_name(&self, abbrev: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.abbrev == abbrev)
            .map(|c| c.name.as_str())
    }

    /// Category abbreviations in configured order.
    pub fn category_abbrevs(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.abbrev.as_str()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub default_limit: usize,
    pub suggest_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub search_capacity: usize,
    pub small_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub abbrev: String,
    pub name: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(search.default_limit);
    check_positive_usize!(search.suggest_limit);
    check_positive_usize!(cache.search_capacity);
    check_positive_usize!(cache.small_capacity);

    let mut seen = HashSet::new();
    for (i, c) in s.categories.iter().enumerate() {
        if c.abbrev.len() < 2 || !c.abbrev.ends_with('.') || c.abbrev.contains(char::is_whitespace)
        {
            return Err(SettingsError::InvalidValue {
                field: format!("categories[{i}].abbrev"),
                reason: format!("'{}' must be a word followed by '.'", c.abbrev),
            });
        }
        if !seen.insert(c.abbrev.as_str()) {
            return Err(SettingsError::InvalidValue {
                field: format!("categories[{i}].abbrev"),
                reason: format!("duplicate category '{}'", c.abbrev),
            });
        }
    }

    Ok(())
}
