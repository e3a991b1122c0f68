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

use std::borrow::Cow;

use log::{debug, error, trace};

use super::{
    errors::EngineError,
    helper_constants::{MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN},
    helper_types::{NationalNumberWithPrefix, PhoneNumberWithCountryCodeSource},
    phone_engine::PhoneEngine,
    phone_number::{NormalizedInput, ParsedNumber},
    CountryCodeSource, PhoneNumberType, Result,
};
use crate::{metadata::RegionMetadata, regexp_cache::Anchoring};

impl PhoneEngine {
    /// Parses a string and returns it as a resolved number.
    ///
    /// `default_region` is only consulted when the number is not written in
    /// international format (with a leading plus sign or the region's
    /// international prefix).
    pub fn parse(&self, input: &str, default_region: Option<&str>) -> Result<ParsedNumber> {
        let normalized = self.normalize(input)?;
        self.resolve(input, &normalized, default_region)
    }

    /// Parses with the configured default region.
    pub fn parse_input(&self, input: &str) -> Result<ParsedNumber> {
        self.parse(input, self.config.default_region.as_deref())
    }

    fn resolve(
        &self,
        raw_input: &str,
        normalized: &NormalizedInput,
        default_region: Option<&str>,
    ) -> Result<ParsedNumber> {
        let digits = normalized.digits.as_str();
        let (number_with_source, fallback_metadata) = if normalized.has_leading_plus {
            let number_with_source = self
                .extract_country_code(digits, CountryCodeSource::FromNumberWithPlusSign)
                .ok_or(EngineError::UnknownCallingCode)?;
            (number_with_source, None)
        } else {
            let Some(default_metadata) =
                default_region.and_then(|region_code| self.provider.lookup_by_region(region_code))
            else {
                debug!("No usable default region ({:?}) for {}", default_region, raw_input);
                return Err(EngineError::NoDefaultRegion);
            };
            self.extract_country_code_with_default(digits, default_metadata)?
        };

        let candidates = self
            .provider
            .lookup_by_calling_code(number_with_source.country_calling_code);
        let Some(main_metadata) = fallback_metadata.or_else(|| candidates.first().copied()) else {
            return Err(EngineError::UnknownCallingCode);
        };

        let NationalNumberWithPrefix {
            national_number,
            had_national_prefix,
        } = self.maybe_strip_national_prefix(number_with_source.phone_number, main_metadata);

        let region_metadata = self.select_region(national_number, &candidates, main_metadata);
        let validated = self.check_national_number_length(national_number, region_metadata)?;

        trace!(
            "Resolved {} to region {} (+{} {})",
            raw_input, region_metadata.id, number_with_source.country_calling_code, national_number
        );
        Ok(ParsedNumber {
            region_code: region_metadata.id.clone(),
            country_code: number_with_source.country_calling_code,
            national_number: national_number.to_string(),
            raw_input: raw_input.to_string(),
            country_code_source: number_with_source.country_code_source,
            validated,
            had_national_prefix,
        })
    }

    /// Extracts the longest known calling code from the start of `digits`.
    fn extract_country_code<'a>(
        &self,
        digits: &'a str,
        country_code_source: CountryCodeSource,
    ) -> Option<PhoneNumberWithCountryCodeSource<'a>> {
        if digits.starts_with('0') {
            // Country codes do not begin with a '0'.
            return None;
        }
        let longest = MAX_LENGTH_COUNTRY_CODE.min(digits.len());
        (1..=longest).rev().find_map(|code_length| {
            let country_calling_code = digits[..code_length].parse::<u16>().ok()?;
            self.provider
                .is_known_calling_code(country_calling_code)
                .then(|| {
                    PhoneNumberWithCountryCodeSource::new(
                        &digits[code_length..],
                        country_calling_code,
                        country_code_source,
                    )
                })
        })
    }

    /// Works out the calling code of a number written without a plus sign,
    /// together with the metadata used when no region stands out.
    fn extract_country_code_with_default<'a, 'm>(
        &'m self,
        digits: &'a str,
        default_metadata: &'m RegionMetadata,
    ) -> Result<(PhoneNumberWithCountryCodeSource<'a>, Option<&'m RegionMetadata>)> {
        if let Some(after_idd) = self.maybe_strip_international_prefix(digits, default_metadata) {
            let number_with_source = self
                .extract_country_code(after_idd, CountryCodeSource::FromNumberWithIdd)
                .ok_or(EngineError::UnknownCallingCode)?;
            return Ok((number_with_source, None));
        }

        let default_country_code = default_metadata.country_code;
        if let Some(potential_national_number) =
            self.strip_default_country_code(digits, default_metadata)
        {
            return Ok((
                PhoneNumberWithCountryCodeSource::new(
                    potential_national_number,
                    default_country_code,
                    CountryCodeSource::FromNumberWithoutPlusSign,
                ),
                Some(default_metadata),
            ));
        }
        Ok((
            PhoneNumberWithCountryCodeSource::new(
                digits,
                default_country_code,
                CountryCodeSource::FromDefaultCountry,
            ),
            Some(default_metadata),
        ))
    }

    /// Strips the IDD from the start of the number if present. The IDD is not
    /// considered present when it is followed by a '0', as no calling code
    /// begins with it.
    fn maybe_strip_international_prefix<'a>(
        &self,
        digits: &'a str,
        metadata: &RegionMetadata,
    ) -> Option<&'a str> {
        let international_prefix = metadata
            .international_prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())?;
        let regex = match self
            .reg_exps
            .regexp_cache
            .get_anchored_regex(international_prefix, Anchoring::Start)
        {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid international prefix {}: {}", international_prefix, err);
                return None;
            }
        };
        let rest = &digits[regex.find(digits)?.end()..];
        if rest.is_empty() || rest.starts_with('0') {
            return None;
        }
        Some(rest)
    }

    /// Tries to find the calling code of the default region at the start of a
    /// number written without a plus sign. The calling code is taken off when
    /// the remainder is a plausible national number of the region and the
    /// whole number is either not one or is too long to be one.
    fn strip_default_country_code<'a>(
        &self,
        digits: &'a str,
        default_metadata: &RegionMetadata,
    ) -> Option<&'a str> {
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(default_metadata.country_code);
        let potential_national_number = digits.strip_prefix(country_code)?;
        let bounds = default_metadata.length_bounds()?;
        let general_desc = &default_metadata.general_desc;

        let NationalNumberWithPrefix { national_number, .. } =
            self.maybe_strip_national_prefix(potential_national_number, default_metadata);
        if !bounds.contains(&national_number.len()) {
            return None;
        }
        let remainder_matches = self
            .matcher_api
            .match_national_number(national_number, general_desc, false);

        let whole_matches = self.matcher_api.match_national_number(digits, general_desc, false);
        let whole_too_long = digits.len() > *bounds.end();

        if (remainder_matches && !whole_matches) || whole_too_long {
            trace!("Found calling code {} written without plus sign", country_code);
            return Some(potential_national_number);
        }
        None
    }

    /// Strips the national prefix of the region from the start of the number.
    /// Nothing is stripped when this would leave nothing behind, or when the
    /// number was valid before stripping but is not after.
    pub(super) fn maybe_strip_national_prefix<'a>(
        &self,
        number: &'a str,
        metadata: &RegionMetadata,
    ) -> NationalNumberWithPrefix<'a> {
        let unchanged = NationalNumberWithPrefix {
            national_number: number,
            had_national_prefix: false,
        };
        let prefix_pattern = match metadata.national_prefix_for_parsing.as_deref() {
            Some(pattern) => Cow::Borrowed(pattern),
            None => match metadata.national_prefix_digits(true) {
                Some(prefix) => Cow::Owned(regex::escape(&prefix)),
                None => return unchanged,
            },
        };
        if prefix_pattern.is_empty() || number.is_empty() {
            return unchanged;
        }
        let regex = match self
            .reg_exps
            .regexp_cache
            .get_anchored_regex(&prefix_pattern, Anchoring::Start)
        {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid national prefix pattern {}: {}", prefix_pattern, err);
                return unchanged;
            }
        };
        let Some(prefix) = regex.find(number) else {
            return unchanged;
        };
        let stripped = &number[prefix.end()..];
        if stripped.is_empty() {
            return unchanged;
        }
        let general_desc = &metadata.general_desc;
        if self.matcher_api.match_national_number(number, general_desc, false)
            && !self.matcher_api.match_national_number(stripped, general_desc, false)
        {
            debug!(
                "Not stripping national prefix from {}: the result would be invalid in {}",
                number, metadata.id
            );
            return unchanged;
        }
        NationalNumberWithPrefix {
            national_number: stripped,
            had_national_prefix: true,
        }
    }

    /// Picks the region of a national number among the regions sharing a
    /// calling code. Leading digits decide first (longest match, then
    /// declaration order), then the first region without leading digits that
    /// can classify the number, then `fallback`.
    fn select_region<'m>(
        &self,
        national_number: &str,
        candidates: &[&'m RegionMetadata],
        fallback: &'m RegionMetadata,
    ) -> &'m RegionMetadata {
        if let [single] = candidates {
            return *single;
        }
        let mut best_match: Option<(&RegionMetadata, usize)> = None;
        for candidate in candidates {
            let Some(leading_digits) = candidate.leading_digits.as_deref() else {
                continue;
            };
            let Some(matched_length) = self
                .matcher_api
                .match_leading_digits(national_number, leading_digits)
            else {
                continue;
            };
            if best_match.is_none_or(|(_, best_length)| matched_length > best_length) {
                best_match = Some((candidate, matched_length));
            }
        }
        if let Some((region, matched_length)) = best_match {
            trace!(
                "Region {} chosen by {} leading digits of {}",
                region.id, matched_length, national_number
            );
            return region;
        }

        candidates
            .iter()
            .filter(|candidate| candidate.leading_digits.is_none())
            .find(|candidate| {
                self.get_number_type_helper(national_number, candidate) != PhoneNumberType::Unknown
            })
            .copied()
            .unwrap_or(fallback)
    }

    /// Checks the national number against the coarse length bounds of its
    /// region. Returns whether the number was validated; too-short numbers
    /// pass unvalidated when partial input is allowed.
    fn check_national_number_length(
        &self,
        national_number: &str,
        metadata: &RegionMetadata,
    ) -> Result<bool> {
        let bounds = metadata
            .length_bounds()
            .unwrap_or(MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN);
        let length = national_number.len();
        if length > *bounds.end() || length > MAX_LENGTH_FOR_NSN {
            return Err(EngineError::TooLong);
        }
        if length < *bounds.start() || length < MIN_LENGTH_FOR_NSN {
            if self.config.allows_partial {
                return Ok(false);
            }
            return Err(EngineError::TooShort);
        }
        Ok(true)
    }
}
