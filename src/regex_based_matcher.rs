// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use log::error;

use crate::{
    interfaces,
    metadata::NumberPattern,
    regexp_cache::{Anchoring, InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: Arc<RegexCache>,
}

impl RegexBasedMatcher {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::with_cache(Arc::new(RegexCache::with_capacity(128)))
    }

    /// Matcher compiling its patterns into `cache`, which may be shared with
    /// the formatter.
    pub fn with_cache(cache: Arc<RegexCache>) -> Self {
        Self { cache }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        let anchoring = if allow_prefix_match {
            Anchoring::Start
        } else {
            Anchoring::Full
        };
        let regexp = self.cache.get_anchored_regex(number_pattern, anchoring)?;
        Ok(regexp.is_match(phone_number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        number_pattern: &NumberPattern,
        allow_prefix_match: bool,
    ) -> bool {
        let national_number_pattern = &number_pattern.national_number_pattern;
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return false;
        }
        match self.match_number(number, national_number_pattern, allow_prefix_match) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex {}: {}", national_number_pattern, err);
                false
            }
        }
    }

    fn match_leading_digits(&self, number: &str, leading_digits_pattern: &str) -> Option<usize> {
        if leading_digits_pattern.is_empty() {
            return None;
        }
        match self
            .cache
            .get_anchored_regex(leading_digits_pattern, Anchoring::Start)
        {
            Ok(regexp) => regexp.find(number).map(|found| found.end()),
            Err(err) => {
                error!("Invalid leading digits regex {}: {}", leading_digits_pattern, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::MatcherApi;

    #[test]
    fn full_and_prefix_matching() {
        let matcher = RegexBasedMatcher::new();
        let pattern = NumberPattern::new(r"[2-9]\d{9}", &[10]);

        assert!(matcher.match_national_number("2025550123", &pattern, false));
        assert!(!matcher.match_national_number("20255501234", &pattern, false));
        assert!(matcher.match_national_number("20255501234", &pattern, true));
        assert!(!matcher.match_national_number("1025550123", &pattern, true));
    }

    #[test]
    fn empty_and_invalid_patterns_never_match() {
        let matcher = RegexBasedMatcher::new();
        assert!(!matcher.match_national_number("123", &NumberPattern::default(), true));
        assert!(!matcher.match_national_number("123", &NumberPattern::new("(12", &[3]), false));
        assert_eq!(matcher.match_leading_digits("123", "(1"), None);
    }

    #[test]
    fn leading_digits_report_matched_length() {
        let matcher = RegexBasedMatcher::new();
        assert_eq!(matcher.match_leading_digits("2423571234", "242"), Some(3));
        assert_eq!(matcher.match_leading_digits("2423571234", "2|24"), Some(1));
        assert_eq!(matcher.match_leading_digits("7012345678", "33|7"), Some(1));
        assert_eq!(matcher.match_leading_digits("4951234567", "33|7"), None);
        assert_eq!(matcher.match_leading_digits("4951234567", ""), None);
    }

    #[test]
    fn patterns_compile_into_the_given_cache() {
        let cache = Arc::new(RegexCache::with_capacity(4));
        let matcher = RegexBasedMatcher::with_cache(cache.clone());
        let pattern = NumberPattern::new(r"[2-9]\d{9}", &[10]);

        assert!(matcher.match_national_number("2025550123", &pattern, false));
        assert!(matcher.match_national_number("2025550123", &pattern, false));
        assert_eq!(cache.len(), 1);
        assert!(matcher.match_national_number("20255501234", &pattern, true));
        assert_eq!(cache.len(), 2);
    }
}
