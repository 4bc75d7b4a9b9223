//! Splitting raw definitions into word-category groups.
//!
//! A definition such as `"s. hlaupa; renna; n. hlaup"` is a `;`-separated
//! list of senses where a sense may open with a category abbreviation.
//! Senses following a category belong to it until the next one appears.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionGroup {
    /// Category abbreviation (e.g. `"n."`), or `None` for senses that
    /// precede any category.
    pub category: Option<String>,
    pub senses: Vec<String>,
}

/// Find the first category (in the given order) that `segment` opens with,
/// ignoring leading whitespace. Returns the category and the byte offset in
/// `segment` just past it.
pub fn starts_with_category<'c, S: AsRef<str>>(
    segment: &str,
    categories: &'c [S],
) -> Option<(&'c str, usize)> {
    let trimmed = segment.trim_start();
    let lead = segment.len() - trimmed.len();
    for c in categories {
        let cat: &'c str = c.as_ref();
        if !cat.is_empty() && trimmed.starts_with(cat) {
            return Some((cat, lead + cat.len()));
        }
    }
    None
}

/// Group the senses of a definition by category, keeping first-seen order.
/// A category that reappears later appends to its existing group.
pub fn unpack<S: AsRef<str>>(definition: &str, categories: &[S]) -> Vec<DefinitionGroup> {
    let mut groups: Vec<DefinitionGroup> = Vec::new();
    let mut current: Option<String> = None;

    for segment in definition.split(';') {
        let sense = match starts_with_category(segment, categories) {
            Some((cat, end)) => {
                current = Some(cat.to_string());
                segment[end..].trim()
            }
            None => segment.trim(),
        };

        match groups.iter_mut().find(|g| g.category == current) {
            Some(group) => group.senses.push(sense.to_string()),
            None => groups.push(DefinitionGroup {
                category: current.clone(),
                senses: vec![sense.to_string()],
            }),
        }
    }

    groups
}
