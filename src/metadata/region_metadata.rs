// Copyright (C) 2009 The Libphonenumber Authors
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

use std::ops::RangeInclusive;

use crate::engine::PhoneNumberType;

/// Describes one family of national numbers: the pattern every member must
/// fully match and the digit counts members may have.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberPattern {
    /// Regular expression source, matched against the whole national
    /// significant number. An empty pattern never matches.
    pub national_number_pattern: String,
    /// Possible lengths of the national significant number. An empty list on
    /// a type pattern means "same as the general pattern".
    pub possible_lengths: Vec<usize>,
    /// Lengths of numbers that can only be dialled inside a local area.
    pub possible_lengths_local_only: Vec<usize>,
    pub example_number: Option<String>,
}

impl NumberPattern {
    pub fn new(national_number_pattern: impl Into<String>, possible_lengths: &[usize]) -> Self {
        Self {
            national_number_pattern: national_number_pattern.into(),
            possible_lengths: possible_lengths.to_vec(),
            ..Default::default()
        }
    }

    pub fn with_local_only_lengths(mut self, lengths: &[usize]) -> Self {
        self.possible_lengths_local_only = lengths.to_vec();
        self
    }

    pub fn with_example_number(mut self, example_number: impl Into<String>) -> Self {
        self.example_number = Some(example_number.into());
        self
    }

    /// Returns `true` if the pattern carries anything usable for matching.
    pub fn has_data(&self) -> bool {
        !self.national_number_pattern.is_empty()
            || !self.possible_lengths.is_empty()
            || self.example_number.is_some()
    }
}

/// A type tag bound to the pattern its numbers follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePattern {
    pub number_type: PhoneNumberType,
    pub pattern: NumberPattern,
}

impl TypePattern {
    pub fn new(number_type: PhoneNumberType, pattern: NumberPattern) -> Self {
        Self { number_type, pattern }
    }
}

/// Rule for splitting a national number into groups and rendering them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRule {
    /// Group-split pattern, e.g. `(\d{3})(\d{3})(\d{4})`.
    pub pattern: String,
    /// National template, e.g. `$1 $2 $3`.
    pub format: String,
    /// International template. `None` means "same as `format`", the literal
    /// `"NA"` means the rule must not be used for international output.
    pub intl_format: Option<String>,
    /// Leading digits patterns, each one more detailed than the previous.
    /// The n-th pattern applies once at least `n + 3` digits are known.
    pub leading_digits_patterns: Vec<String>,
    /// Rule applied to the first group in national format. `$NP` stands for
    /// the region's national prefix and `$FG` for the first group.
    pub national_prefix_formatting_rule: Option<String>,
}

impl FormatRule {
    pub fn new(pattern: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            format: format.into(),
            ..Default::default()
        }
    }

    pub fn with_leading_digits(mut self, leading_digits: impl Into<String>) -> Self {
        self.leading_digits_patterns.push(leading_digits.into());
        self
    }

    pub fn with_intl_format(mut self, intl_format: impl Into<String>) -> Self {
        self.intl_format = Some(intl_format.into());
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.national_prefix_formatting_rule = Some(rule.into());
        self
    }

    /// Template used for international output, `None` when the rule is
    /// national-only.
    pub fn international_template(&self) -> Option<&str> {
        match self.intl_format.as_deref() {
            Some("NA") => None,
            Some(intl_format) => Some(intl_format),
            None => Some(&self.format),
        }
    }
}

/// Dialing rules of one region (or of one non-geographical entity).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMetadata {
    /// ISO 3166-1 alpha-2 code, or `"001"` for non-geographical entities.
    pub id: String,
    pub country_code: u16,
    /// Marks the region whose rules are used for a calling code shared by
    /// several regions (US for NANPA, RU for +7).
    pub main_country_for_code: bool,
    /// Pattern telling this region apart from others sharing its calling code.
    pub leading_digits: Option<String>,
    /// International (IDD) prefix pattern, e.g. `011` or `00`.
    pub international_prefix: Option<String>,
    /// Prefix dialled domestically in front of the national number.
    pub national_prefix: Option<String>,
    /// Pattern used to recognise the national prefix while parsing. Falls
    /// back to `national_prefix` when absent.
    pub national_prefix_for_parsing: Option<String>,
    pub general_desc: NumberPattern,
    pub type_patterns: Vec<TypePattern>,
    pub number_formats: Vec<FormatRule>,
}

impl RegionMetadata {
    pub fn new(id: impl Into<String>, country_code: u16, general_desc: NumberPattern) -> Self {
        Self {
            id: id.into(),
            country_code,
            general_desc,
            ..Default::default()
        }
    }

    pub fn main_country_for_code(mut self) -> Self {
        self.main_country_for_code = true;
        self
    }

    pub fn with_leading_digits(mut self, leading_digits: impl Into<String>) -> Self {
        self.leading_digits = Some(leading_digits.into());
        self
    }

    pub fn with_international_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.international_prefix = Some(prefix.into());
        self
    }

    pub fn with_national_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.national_prefix = Some(prefix.into());
        self
    }

    pub fn with_national_prefix_for_parsing(mut self, pattern: impl Into<String>) -> Self {
        self.national_prefix_for_parsing = Some(pattern.into());
        self
    }

    pub fn with_type(mut self, number_type: PhoneNumberType, pattern: NumberPattern) -> Self {
        self.type_patterns.push(TypePattern::new(number_type, pattern));
        self
    }

    pub fn with_format(mut self, rule: FormatRule) -> Self {
        self.number_formats.push(rule);
        self
    }

    /// Returns the pattern registered for the given type, if any.
    pub fn type_pattern(&self, number_type: PhoneNumberType) -> Option<&NumberPattern> {
        self.type_patterns
            .iter()
            .find(|entry| entry.number_type == number_type)
            .map(|entry| &entry.pattern)
    }

    /// Coarse bounds of the national significant number, derived from the
    /// general possible lengths. `None` if the metadata declares no lengths.
    pub fn length_bounds(&self) -> Option<RangeInclusive<usize>> {
        let lengths = &self.general_desc.possible_lengths;
        let min = lengths.iter().min()?;
        let max = lengths.iter().max()?;
        Some(*min..=*max)
    }

    /// Both fixed-line and mobile numbers are described by the very same
    /// pattern, so the two cannot be told apart.
    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        match (
            self.type_pattern(PhoneNumberType::FixedLine),
            self.type_pattern(PhoneNumberType::Mobile),
        ) {
            (Some(fixed_line), Some(mobile)) => {
                fixed_line.national_number_pattern == mobile.national_number_pattern
                    && fixed_line.possible_lengths == mobile.possible_lengths
            }
            _ => false,
        }
    }

    /// Prefix to dial before the national number, with the "wait for tone"
    /// marker optionally removed.
    pub fn national_prefix_digits(&self, strip_non_digits: bool) -> Option<String> {
        self.national_prefix.as_ref().map(|prefix| {
            if strip_non_digits {
                prefix.replace('~', "")
            } else {
                prefix.clone()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_use_general_lengths() {
        let metadata = RegionMetadata::new("GB", 44, NumberPattern::new(r"\d{7,10}", &[10, 7, 9]));
        assert_eq!(metadata.length_bounds(), Some(7..=10));

        let metadata = RegionMetadata::new("XX", 999, NumberPattern::default());
        assert_eq!(metadata.length_bounds(), None);
    }

    #[test]
    fn international_template_respects_na() {
        let rule = FormatRule::new(r"(\d{3})(\d{4})", "$1-$2");
        assert_eq!(rule.international_template(), Some("$1-$2"));

        let rule = rule.with_intl_format("NA");
        assert_eq!(rule.international_template(), None);

        let rule = FormatRule::new(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3").with_intl_format("$1-$2-$3");
        assert_eq!(rule.international_template(), Some("$1-$2-$3"));
    }

    #[test]
    fn same_mobile_and_fixed_line_pattern() {
        let pattern = NumberPattern::new(r"[2-9]\d{9}", &[10]);
        let metadata = RegionMetadata::new("US", 1, pattern.clone())
            .with_type(PhoneNumberType::FixedLine, pattern.clone())
            .with_type(PhoneNumberType::Mobile, pattern.clone());
        assert!(metadata.same_mobile_and_fixed_line_pattern());

        let metadata = RegionMetadata::new("GB", 44, pattern.clone())
            .with_type(PhoneNumberType::FixedLine, pattern)
            .with_type(PhoneNumberType::Mobile, NumberPattern::new(r"7\d{9}", &[10]));
        assert!(!metadata.same_mobile_and_fixed_line_pattern());
    }
}
