use serde::{Deserialize, Serialize};

/// One headword record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    /// Raw marked-up definition text, e.g. `"n. hestur; l. sterkur"`.
    pub definition: String,
    #[serde(default)]
    pub ipa_uk: String,
    #[serde(default)]
    pub ipa_us: String,
    /// Page in the printed source; 0 when the entry was added later.
    #[serde(default)]
    pub page_num: u32,
    #[serde(default)]
    pub syllables: Option<String>,
}

impl Entry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            ipa_uk: String::new(),
            ipa_us: String::new(),
            page_num: 0,
            syllables: None,
        }
    }

    pub fn with_page(mut self, page_num: u32) -> Self {
        self.page_num = page_num;
        self
    }

    pub fn with_ipa(mut self, uk: impl Into<String>, us: impl Into<String>) -> Self {
        self.ipa_uk = uk.into();
        self.ipa_us = us.into();
        self
    }

    /// Not present in the printed source.
    pub fn is_addition(&self) -> bool {
        self.page_num == 0
    }

    pub fn is_multiword(&self) -> bool {
        self.word.contains(' ')
    }

    pub fn is_capitalized(&self) -> bool {
        self.word.starts_with(|c: char| c.is_ascii_uppercase())
    }

    pub fn is_ascii(&self) -> bool {
        self.word.is_ascii()
    }
}
