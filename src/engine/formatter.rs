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

use log::{debug, error, trace, warn};
use regex::NoExpand;

use super::{
    errors::EngineError,
    helper_constants::PLUS_SIGN,
    helper_functions::{expand_template, prefix_number_with_country_calling_code},
    phone_engine::PhoneEngine,
    phone_number::{FormatResult, ParsedNumber},
    CountryCodeSource, PhoneNumberFormat, Result,
};
use crate::{
    macros::owned_from_cow_or,
    metadata::{FormatRule, RegionMetadata},
    regexp_cache::Anchoring,
};

impl PhoneEngine {
    /// Formats a parsed number in the requested form.
    ///
    /// With `validates_numbers` configured, invalid numbers fail with
    /// [`EngineError::InvalidNumber`], or come back as their raw input when
    /// `returns_invalid_string` is set as well.
    pub fn format(
        &self,
        phone_number: &ParsedNumber,
        number_format: PhoneNumberFormat,
    ) -> Result<String> {
        if self.config.validates_numbers && !self.is_valid_number(phone_number) {
            if self.config.returns_invalid_string {
                debug!("Returning invalid number {} unformatted", phone_number.raw_input);
                return Ok(phone_number.raw_input.clone());
            }
            return Err(EngineError::InvalidNumber);
        }

        let country_calling_code = phone_number.country_code;
        let national_number = phone_number.national_number.as_str();
        if number_format == PhoneNumberFormat::E164 {
            // Early exit for E164 case since no formatting of the national
            // number needs to be applied.
            let mut formatted_number = national_number.to_string();
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Ok(formatted_number);
        }

        let Some(metadata) = self.get_formatting_metadata(phone_number) else {
            warn!("No metadata for region {}", phone_number.region_code);
            return Err(EngineError::UnknownRegionMetadata(
                phone_number.region_code.clone(),
            ));
        };

        let partial = self.config.allows_partial;
        // While typing, the national prefix is only shown if it was typed.
        let apply_national_prefix = !partial || phone_number.had_national_prefix;
        let formatting_rule =
            self.choose_formatting_rule(&metadata.number_formats, national_number, number_format);
        let (mut formatted_number, national_prefix_emitted) = match formatting_rule {
            Some(rule) => self.format_nsn_using_rule(
                national_number,
                rule,
                metadata,
                number_format,
                apply_national_prefix,
            ),
            None if partial => self.format_partial_nsn(
                national_number,
                metadata,
                number_format,
                phone_number.had_national_prefix,
            ),
            None => (national_number.to_string(), false),
        };

        if partial
            && number_format == PhoneNumberFormat::National
            && phone_number.had_national_prefix
            && !national_prefix_emitted
        {
            if let Some(national_prefix) = metadata.national_prefix_digits(true) {
                formatted_number = fast_cat::concat_str!(&national_prefix, " ", &formatted_number);
            }
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    /// Parses with the configured default region and formats in the
    /// configured form.
    ///
    /// When partial numbers are allowed, input that cannot be parsed yet is
    /// returned as its normalized digits, and numbers typed with a plus sign
    /// are shown in international form.
    pub fn format_input(&self, input: &str) -> Result<FormatResult> {
        let phone_number = match self.parse_input(input) {
            Ok(phone_number) => phone_number,
            Err(err) if self.config.allows_partial => {
                let normalized = self.normalize(input)?;
                trace!("Partial input {} not parsed yet: {}", input, err);
                let formatted = if normalized.has_leading_plus {
                    fast_cat::concat_str!(PLUS_SIGN, &normalized.digits)
                } else {
                    normalized.digits
                };
                return Ok(FormatResult {
                    formatted,
                    form: self.config.format,
                    region_code: None,
                });
            }
            Err(err) => return Err(err),
        };

        let form = if self.config.allows_partial
            && self.config.format == PhoneNumberFormat::National
            && phone_number.country_code_source == CountryCodeSource::FromNumberWithPlusSign
        {
            PhoneNumberFormat::International
        } else {
            self.config.format
        };
        let formatted = self.format(&phone_number, form)?;
        Ok(FormatResult {
            formatted,
            form,
            region_code: Some(phone_number.region_code),
        })
    }

    /// Parses with the configured default region and formats as E164.
    pub fn e164_from_input(&self, input: &str) -> Result<String> {
        let phone_number = self.parse_input(input)?;
        self.format(&phone_number, PhoneNumberFormat::E164)
    }

    /// Picks the rule to format a national number with: among the rules whose
    /// most detailed leading digits pattern matches and whose pattern matches
    /// the whole number, the one with the longest leading digits match.
    pub(super) fn choose_formatting_rule<'r>(
        &self,
        available_formats: &'r [FormatRule],
        national_number: &str,
        number_format: PhoneNumberFormat,
    ) -> Option<&'r FormatRule> {
        let mut chosen: Option<(&FormatRule, usize)> = None;
        for rule in available_formats {
            if number_format == PhoneNumberFormat::International
                && rule.international_template().is_none()
            {
                continue;
            }
            // We always use the last leading_digits_pattern, as it is the most
            // detailed.
            let leading_digits_length = match rule.leading_digits_patterns.last() {
                Some(last) => {
                    match self.matcher_api.match_leading_digits(national_number, last) {
                        Some(length) => length,
                        None => continue,
                    }
                }
                None => 0,
            };
            let pattern_to_match = match self
                .reg_exps
                .regexp_cache
                .get_anchored_regex(&rule.pattern, Anchoring::Full)
            {
                Ok(regex) => regex,
                Err(err) => {
                    error!("Invalid format pattern {}: {}", rule.pattern, err);
                    continue;
                }
            };
            if !pattern_to_match.is_match(national_number) {
                continue;
            }
            if chosen.is_none_or(|(_, longest)| leading_digits_length > longest) {
                chosen = Some((rule, leading_digits_length));
            }
        }
        chosen.map(|(rule, _)| rule)
    }

    /// Formats the national number with a rule. Also tells whether the
    /// national prefix became part of the output.
    fn format_nsn_using_rule(
        &self,
        national_number: &str,
        rule: &FormatRule,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
        apply_national_prefix: bool,
    ) -> (String, bool) {
        let (number_format_rule, national_prefix_emitted) =
            self.number_format_template(rule, metadata, number_format, apply_national_prefix);
        let pattern_to_match = match self
            .reg_exps
            .regexp_cache
            .get_anchored_regex(&rule.pattern, Anchoring::Full)
        {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid format pattern {}: {}", rule.pattern, err);
                return (national_number.to_string(), false);
            }
        };
        match pattern_to_match.captures(national_number) {
            Some(captures) => (
                expand_template(&number_format_rule, |group| {
                    captures.get(group).map(|matched| matched.as_str())
                }),
                national_prefix_emitted,
            ),
            None => (national_number.to_string(), false),
        }
    }

    /// Template of a rule for the requested form. In national form the
    /// national prefix formatting rule replaces the first group: `$FG` stands
    /// for the group and `$NP` for the national prefix. A rule needing the
    /// national prefix is left out when the region has none, or when
    /// `apply_national_prefix` is false.
    pub(super) fn number_format_template(
        &self,
        rule: &FormatRule,
        metadata: &RegionMetadata,
        number_format: PhoneNumberFormat,
        apply_national_prefix: bool,
    ) -> (String, bool) {
        let template = Self::template_for_form(rule, number_format);
        if number_format != PhoneNumberFormat::National {
            return (template.to_string(), false);
        }
        let Some(national_prefix_formatting_rule) = rule
            .national_prefix_formatting_rule
            .as_deref()
            .filter(|formatting_rule| !formatting_rule.is_empty())
        else {
            return (template.to_string(), false);
        };

        let needs_national_prefix = national_prefix_formatting_rule.contains("$NP");
        let national_prefix_formatting_rule = if needs_national_prefix {
            match metadata
                .national_prefix_digits(true)
                .filter(|national_prefix| !national_prefix.is_empty())
            {
                Some(national_prefix) if apply_national_prefix => {
                    national_prefix_formatting_rule.replace("$NP", &national_prefix)
                }
                Some(_) => return (template.to_string(), false),
                None => {
                    trace!(
                        "Region {} has no national prefix, ignoring rule {}",
                        metadata.id, national_prefix_formatting_rule
                    );
                    return (template.to_string(), false);
                }
            }
        } else {
            national_prefix_formatting_rule.to_string()
        };
        let national_prefix_formatting_rule = national_prefix_formatting_rule.replace("$FG", "$1");

        let number_format_rule = owned_from_cow_or!(
            self.reg_exps.first_group_capturing_pattern.replacen(
                template,
                1,
                NoExpand(&national_prefix_formatting_rule)
            ),
            template.to_string()
        );
        (number_format_rule, needs_national_prefix)
    }

    /// The international template of the rule for international output, the
    /// national one otherwise.
    pub(super) fn template_for_form(rule: &FormatRule, number_format: PhoneNumberFormat) -> &str {
        match number_format {
            PhoneNumberFormat::International => {
                rule.international_template().unwrap_or(&rule.format)
            }
            _ => &rule.format,
        }
    }
}
