// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use std::{collections::HashMap, sync::Arc};

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::{
    helper_constants::{
        CAPTURE_UP_TO_SECOND_NUMBER_START, DIGITS, MIN_LENGTH_FOR_NSN, PLUS_CHARS, STAR_SIGN,
        VALID_ALPHA, VALID_PUNCTUATION,
    },
    helper_functions::create_extn_pattern,
};

/// Fixed regular expressions and character mappings used while normalizing
/// input and building formatting templates. Built once per engine family and
/// shared between engines derived with `with_config`.
pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Patterns coming from metadata, shared with the engine's matcher.
    pub regexp_cache: Arc<RegexCache>,

    /// Keypad digit of every upper case letter.
    pub alpha_mappings: HashMap<char, char>,
    /// `alpha_mappings` plus ASCII digits mapped to themselves.
    pub alpha_phone_mappings: HashMap<char, char>,

    /// First character a number may start with: a plus sign or any decimal
    /// digit. Everything before it is dropped.
    pub valid_start_char_pattern: Regex,

    /// Text before a `/ x` style marker that introduces a second number.
    pub capture_up_to_second_number_start_pattern: Regex,

    /// Trailing characters to trim: anything but letters, digits and `#`,
    /// which may end an extension.
    pub unwanted_end_char_pattern: Regex,

    /// Extension at the end of the input, label and digits.
    pub extn_pattern: Regex,

    /// Whole-input check that something looks like a number: three digits or
    /// more among punctuation and letters, or two bare digits. An extension is
    /// only cut off when what stays in front of it passes.
    pub valid_phone_number_pattern: Regex,

    /// Three letters or more make a vanity number.
    pub valid_alpha_phone_pattern: Regex,

    /// Matches the first `$n` group reference of a format template. Not fixed
    /// to `$1` because some national patterns do not use their first group.
    pub first_group_capturing_pattern: Regex,

    pub plus_chars_pattern: Regex,

    /// Templates usable while typing: `$1` first, then only group references
    /// and punctuation.
    pub is_format_eligible_as_you_type_formatting_regex: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        let ascii_digit_mappings = ('0'..='9').map(|digit| (digit, digit));

        let keypad = [
            ('2', "ABC"),
            ('3', "DEF"),
            ('4', "GHI"),
            ('5', "JKL"),
            ('6', "MNO"),
            ('7', "PQRS"),
            ('8', "TUV"),
            ('9', "WXYZ"),
        ];
        let mut alpha_map = HashMap::with_capacity(26);
        for (digit, letters) in keypad {
            for letter in letters.chars() {
                alpha_map.insert(letter, digit);
            }
        }
        // Upper case only; callers look up upper cased chars.
        self.alpha_mappings = alpha_map;

        let mut combined_map = HashMap::with_capacity(36);
        combined_map.extend(self.alpha_mappings.iter());
        combined_map.extend(ascii_digit_mappings);
        self.alpha_phone_mappings = combined_map;
    }

    #[cfg(test)]
    pub fn new() -> Self {
        Self::with_cache(Arc::new(RegexCache::with_capacity(128)))
    }

    pub fn with_cache(regexp_cache: Arc<RegexCache>) -> Self {
        let extn_patterns_for_parsing = create_extn_pattern(true);
        let valid_phone_number = format!(
            // moved 2-digits pattern to an end for match full number first
            "[{}]*(?:[{}{}]*{}){{3,}}[{}{}{}{}]*|{}{{{}}}",
            PLUS_CHARS,
            VALID_PUNCTUATION, STAR_SIGN, DIGITS,
            VALID_PUNCTUATION, STAR_SIGN, DIGITS, VALID_ALPHA,
            DIGITS, MIN_LENGTH_FOR_NSN,
        );

        // Patterns below are constants; failing to compile one is a bug that
        // the tests of this module catch.
        let mut instance = Self {
            regexp_cache,
            alpha_mappings: Default::default(),
            alpha_phone_mappings: Default::default(),
            valid_start_char_pattern: Regex::new(&format!("[{}{}]", PLUS_CHARS, DIGITS)).unwrap(),
            capture_up_to_second_number_start_pattern: Regex::new(CAPTURE_UP_TO_SECOND_NUMBER_START).unwrap(),
            unwanted_end_char_pattern: Regex::new("[^\\p{N}\\p{L}#]").unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", &extn_patterns_for_parsing)).unwrap(),
            valid_phone_number_pattern: Regex::new(&format!("(?i)^(?:{})$", &valid_phone_number)).unwrap(),
            valid_alpha_phone_pattern: Regex::new("(?:.*?[A-Za-z]){3}").unwrap(),
            first_group_capturing_pattern: Regex::new("(\\$\\d)").unwrap(),
            plus_chars_pattern: Regex::new(&format!("^[{}]+", PLUS_CHARS)).unwrap(),
            is_format_eligible_as_you_type_formatting_regex: Regex::new(&format!(
                "^[{}]*\\$1[{}]*(?:\\$\\d[{}]*)*$",
                VALID_PUNCTUATION, VALID_PUNCTUATION, VALID_PUNCTUATION
            ))
            .unwrap(),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberRegExpsAndMappings;

    #[test]
    fn check_regexps_are_compiling() {
        PhoneNumberRegExpsAndMappings::new();
    }

    #[test]
    fn extension_pattern_matches_common_labels() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        for input in [
            "(202) 555-0123 ext. 1234",
            "(202) 555-0123 x1234",
            "(202) 555-0123 extension 1234",
            "(202) 555-0123;ext=1234",
            "(202) 555-0123,,1234",
            "(202) 555-0123 - 1234#",
        ] {
            assert!(reg_exps.extn_pattern.is_match(input), "no extension found in {input}");
        }
        assert!(!reg_exps.extn_pattern.is_match("(202) 555-0123"));
        assert!(!reg_exps.extn_pattern.is_match("+44 20 3555 0123"));
    }

    #[test]
    fn viable_numbers() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        assert!(reg_exps.valid_phone_number_pattern.is_match("+1 (202) 555-0123"));
        assert!(reg_exps.valid_phone_number_pattern.is_match("15"));
        assert!(reg_exps.valid_phone_number_pattern.is_match("1-800-FLOWERS"));
        assert!(!reg_exps.valid_phone_number_pattern.is_match("1"));
        assert!(!reg_exps.valid_phone_number_pattern.is_match("abc"));
    }

    #[test]
    fn format_eligibility() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        let eligible = &reg_exps.is_format_eligible_as_you_type_formatting_regex;
        assert!(eligible.is_match("$1 $2 $3"));
        assert!(eligible.is_match("($1) $2-$3"));
        assert!(!eligible.is_match("*$1"));
        assert!(!eligible.is_match("$2 $3"));
    }

    #[test]
    fn alpha_mappings_cover_keypad() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        assert_eq!(reg_exps.alpha_mappings.len(), 26);
        assert_eq!(reg_exps.alpha_phone_mappings.get(&'S'), Some(&'7'));
        assert_eq!(reg_exps.alpha_phone_mappings.get(&'0'), Some(&'0'));
        assert_eq!(reg_exps.alpha_phone_mappings.get(&'s'), None);
    }
}
