//! Retry policy for inflected queries that found nothing.

/// Shortest query (in characters) eligible for the plural retry.
const MIN_PLURAL_LEN: usize = 3;

/// If a substring search came back empty, return the singular form to look
/// up exactly instead.
///
/// Only fires for non-exact searches, so the exact retry can never trigger
/// it again. The check on the trailing `s` is case-sensitive.
pub(super) fn plural_retry(query: &str, exact_match: bool) -> Option<&str> {
    if exact_match || query.chars().count() < MIN_PLURAL_LEN {
        return None;
    }
    query.strip_suffix('s')
}
