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

use log::{error, trace};

use super::{
    helper_constants::{DIGIT_PLACEHOLDER, LONGEST_PHONE_NUMBER, MIN_LEADING_DIGITS_LENGTH},
    helper_functions::expand_template,
    phone_engine::PhoneEngine,
    PhoneNumberFormat,
};
use crate::{
    metadata::{FormatRule, RegionMetadata},
    regexp_cache::Anchoring,
};

impl PhoneEngine {
    /// Returns a formatter fed one character at a time, sharing metadata with
    /// this engine. It always accepts partial numbers and never validates.
    pub fn as_you_type_formatter(&self) -> AsYouTypeFormatter {
        let config = self
            .config
            .clone()
            .with_allows_partial(true)
            .with_validates_numbers(false);
        AsYouTypeFormatter::new(self.with_config(config))
    }

    /// Formats an incomplete national number with the template of a rule
    /// that may still apply to it. Falls back to the digits as typed when
    /// there are too few of them or no template can hold them. Also tells
    /// whether the national prefix is part of the output.
    pub(super) fn format_partial_nsn(
        &self,
        national_number: &str,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
        had_national_prefix: bool,
    ) -> (String, bool) {
        if national_number.len() < MIN_LEADING_DIGITS_LENGTH {
            return Self::digits_as_typed(national_number, metadata, number_format, had_national_prefix);
        }

        // The n-th leading digits pattern applies once n + 3 digits are known.
        let leading_digits_index = national_number.len() - MIN_LEADING_DIGITS_LENGTH;
        let mut possible_formats = metadata
            .number_formats
            .iter()
            .filter(|rule| self.is_format_eligible_for_as_you_type_formatter(rule, number_format))
            .filter_map(|rule| {
                let leading_digits_length = match rule.leading_digits_patterns.len() {
                    0 => 0,
                    count => {
                        let pattern = &rule.leading_digits_patterns[leading_digits_index.min(count - 1)];
                        self.matcher_api.match_leading_digits(national_number, pattern)?
                    }
                };
                Some((rule, leading_digits_length))
            })
            .collect::<Vec<_>>();
        // Stable sort keeps declaration order among equal matches.
        possible_formats.sort_by(|(_, left), (_, right)| right.cmp(left));

        for (rule, _) in possible_formats {
            if let Some(formatted) = self.format_with_template(
                national_number,
                rule,
                metadata,
                number_format,
                had_national_prefix,
            ) {
                return formatted;
            }
        }
        trace!("No formatting template can hold {}", national_number);
        Self::digits_as_typed(national_number, metadata, number_format, had_national_prefix)
    }

    fn is_format_eligible_for_as_you_type_formatter(
        &self,
        rule: &FormatRule,
        number_format: PhoneNumberFormat,
    ) -> bool {
        if number_format == PhoneNumberFormat::International && rule.international_template().is_none() {
            return false;
        }
        // We require that the first group is present in the output pattern to
        // ensure no data is lost while formatting; when we format as you type,
        // this should always be the case.
        self.reg_exps
            .is_format_eligible_as_you_type_formatting_regex
            .is_match(Self::template_for_form(rule, number_format))
    }

    fn format_with_template(
        &self,
        national_number: &str,
        rule: &FormatRule,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
        had_national_prefix: bool,
    ) -> Option<(String, bool)> {
        let (template, national_prefix_emitted) = self.get_formatting_template(
            national_number,
            rule,
            metadata,
            number_format,
            had_national_prefix,
        )?;
        Some((fill_template(&template, national_number), national_prefix_emitted))
    }

    /// Builds the template of a rule with every digit replaced by
    /// `DIGIT_PLACEHOLDER`. `None` when the rule cannot hold the number.
    fn get_formatting_template(
        &self,
        national_number: &str,
        rule: &FormatRule,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
        had_national_prefix: bool,
    ) -> Option<(String, bool)> {
        let number_pattern = match self
            .reg_exps
            .regexp_cache
            .get_anchored_regex(&rule.pattern, Anchoring::Start)
        {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid format pattern {}: {}", rule.pattern, err);
                return None;
            }
        };
        // Creates a phone number consisting only of the digit 9 that matches the
        // number_pattern by applying the pattern to the longest_phone_number
        // string.
        let captures = number_pattern.captures(LONGEST_PHONE_NUMBER)?;
        let a_phone_number = captures.get(0)?.as_str();
        // No formatting template can be created if the number of digits entered
        // so far is longer than the maximum the current formatting rule can
        // accommodate.
        if a_phone_number.len() < national_number.len() {
            return None;
        }
        let (number_format_rule, national_prefix_emitted) =
            self.number_format_template(rule, metadata, number_format, had_national_prefix);
        let template = expand_template(&number_format_rule, |group| {
            captures
                .get(group)
                .map(|matched| DIGIT_PLACEHOLDER.to_string().repeat(matched.len()))
        });
        Some((template, national_prefix_emitted))
    }

    fn digits_as_typed(
        national_number: &str,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
        had_national_prefix: bool,
    ) -> (String, bool) {
        if number_format == PhoneNumberFormat::National && had_national_prefix {
            if let Some(national_prefix) = metadata.national_prefix_digits(true) {
                return (fast_cat::concat_str!(&national_prefix, national_number), true);
            }
        }
        (national_number.to_string(), false)
    }
}

/// Puts the digits into the placeholders of the template, dropping whatever
/// follows the last digit.
fn fill_template(template: &str, digits: &str) -> String {
    let mut formatted = String::with_capacity(template.len());
    let mut digits = digits.chars().peekable();
    for template_char in template.chars() {
        if digits.peek().is_none() {
            break;
        }
        if template_char == DIGIT_PLACEHOLDER {
            formatted.extend(digits.next());
        } else {
            formatted.push(template_char);
        }
    }
    formatted
}

/// Formats a number as it is typed, one character at a time.
///
/// ```
/// use rtelephone::{EngineConfig, FormatRule, NumberPattern, PhoneEngine, RegionMetadata};
///
/// let us = RegionMetadata::new("US", 1, NumberPattern::new(r"[2-9]\d{9}", &[10]))
///     .main_country_for_code()
///     .with_national_prefix("1")
///     .with_format(
///         FormatRule::new(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3").with_leading_digits("[2-9]"),
///     );
/// let engine = PhoneEngine::from_regions(vec![us], EngineConfig::partial_national("US"));
///
/// let mut formatter = engine.as_you_type_formatter();
/// let mut output = String::new();
/// for digit in "2025550".chars() {
///     output = formatter.input_digit(digit).to_string();
/// }
/// assert_eq!(output, "(202) 555-0");
/// ```
pub struct AsYouTypeFormatter {
    engine: PhoneEngine,
    accrued_input: String,
    current_output: String,
}

impl AsYouTypeFormatter {
    fn new(engine: PhoneEngine) -> Self {
        Self {
            engine,
            accrued_input: String::new(),
            current_output: String::new(),
        }
    }

    /// Formats a phone number on-the-fly as each digit is entered.
    ///
    /// `next_char` is the most recently entered character of a phone number.
    /// Punctuation typed along is accepted and dropped; full width and
    /// Arabic-indic digits are shown as ASCII digits.
    pub fn input_digit(&mut self, next_char: char) -> &str {
        self.accrued_input.push(next_char);
        self.current_output = match self.engine.format_input(&self.accrued_input) {
            Ok(result) => result.formatted,
            Err(err) => {
                trace!("Showing {} as typed: {}", self.accrued_input, err);
                self.accrued_input.clone()
            }
        };
        &self.current_output
    }

    /// Output for the characters entered so far.
    pub fn current_output(&self) -> &str {
        &self.current_output
    }

    /// Clears the internal state of the formatter, so it can be reused.
    pub fn clear(&mut self) {
        self.accrued_input.clear();
        self.current_output.clear();
    }
}
