use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// How a cached pattern is anchored against the subject string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchoring {
    /// Pattern must match from the first character.
    Start,
    /// Pattern must match the whole string.
    Full,
}

/// Concurrent cache of compiled metadata patterns.
///
/// Patterns come from metadata as sources like `[2-9]\d{9}`; anchoring is
/// done by wrapping them in a non-capturing group so alternations such as
/// `1|12` behave like a full match instead of a leftmost-first search.
pub struct RegexCache {
    cache: DashMap<(Anchoring, String), Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_anchored_regex(
        &self,
        pattern: &str,
        anchoring: Anchoring,
    ) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        let key = (anchoring, pattern.to_string());
        if let Some(regex) = self.cache.get(&key) {
            return Ok(regex.value().clone());
        }
        let entry = self.cache.entry(key).or_try_insert_with(|| {
            let source = match anchoring {
                Anchoring::Start => fast_cat::concat_str!("^(?:", pattern, ")"),
                Anchoring::Full => fast_cat::concat_str!("^(?:", pattern, ")$"),
            };
            regex::Regex::new(&source).map(Arc::new)
        })?;
        Ok(entry.value().clone())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_anchoring_handles_alternations() {
        let cache = RegexCache::with_capacity(4);
        let regex = cache.get_anchored_regex("1|12", Anchoring::Full).unwrap();
        assert!(regex.is_match("12"));
        assert!(!regex.is_match("123"));

        let regex = cache.get_anchored_regex("1|12", Anchoring::Start).unwrap();
        assert!(regex.is_match("123"));
        assert!(!regex.is_match("212"));
    }

    #[test]
    fn compiled_patterns_are_reused() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_anchored_regex(r"\d{3}", Anchoring::Full).unwrap();
        let second = cache.get_anchored_regex(r"\d{3}", Anchoring::Full).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        cache.get_anchored_regex(r"\d{3}", Anchoring::Start).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let cache = RegexCache::with_capacity(1);
        assert!(cache.get_anchored_regex("(", Anchoring::Full).is_err());
        assert_eq!(cache.len(), 0);
    }
}
