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

use log::{trace, warn};

use super::{
    errors::ValidationError,
    helper_functions::test_number_length_with_unknown_type,
    phone_engine::PhoneEngine,
    phone_number::ParsedNumber,
    NumberLengthType,
};
use crate::{i18n::RegionCode, metadata::RegionMetadata};

impl PhoneEngine {
    /// Quick check of the number length against the coarse bounds of its
    /// region. No pattern matching is involved.
    pub fn is_possible_number(&self, phone_number: &ParsedNumber) -> bool {
        self.get_metadata_for_region_or_calling_code(
            phone_number.country_code,
            &phone_number.region_code,
        )
        .is_some_and(|metadata| Self::is_within_length_bounds(&phone_number.national_number, metadata))
    }

    /// Tests whether a number matches the general pattern of its region, the
    /// length check of [`is_possible_number`](Self::is_possible_number)
    /// included.
    pub fn is_valid_number(&self, phone_number: &ParsedNumber) -> bool {
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(
            phone_number.country_code,
            &phone_number.region_code,
        ) else {
            trace!("No metadata for region {}, number invalid", phone_number.region_code);
            return false;
        };
        self.is_valid_national_number(&phone_number.national_number, metadata)
    }

    /// Tests whether a number is valid for a specific region. A number valid
    /// in its own region may not be valid in another one sharing its calling
    /// code, as the leading digits of the region must match too.
    pub fn is_valid_number_for_region(&self, phone_number: &ParsedNumber, region_code: &str) -> bool {
        let metadata = if region_code == RegionCode::non_geo_entity() {
            self.get_metadata_for_region_or_calling_code(phone_number.country_code, region_code)
        } else {
            self.provider.lookup_by_region(region_code)
        };
        let Some(metadata) = metadata else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return false;
        };
        if metadata.country_code != phone_number.country_code {
            return false;
        }
        let national_number = &phone_number.national_number;
        if let Some(leading_digits) = metadata.leading_digits.as_deref() {
            if self
                .matcher_api
                .match_leading_digits(national_number, leading_digits)
                .is_none()
            {
                return false;
            }
        }
        self.is_valid_national_number(national_number, metadata)
    }

    /// Checks the number length against the exact possible lengths of its
    /// region and reports why it is not possible.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &ParsedNumber,
    ) -> Result<NumberLengthType, ValidationError> {
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(
            phone_number.country_code,
            &phone_number.region_code,
        ) else {
            return Err(ValidationError::InvalidCountryCode);
        };
        test_number_length_with_unknown_type(&phone_number.national_number, metadata)
    }

    /// Parses with the configured default region; unparsable input is not
    /// possible.
    pub fn is_possible_input(&self, input: &str) -> bool {
        self.parse_input(input)
            .is_ok_and(|phone_number| self.is_possible_number(&phone_number))
    }

    /// Parses with the configured default region; unparsable input is not
    /// valid.
    pub fn is_valid_input(&self, input: &str) -> bool {
        self.parse_input(input)
            .is_ok_and(|phone_number| self.is_valid_number(&phone_number))
    }

    fn is_within_length_bounds(national_number: &str, metadata: &RegionMetadata) -> bool {
        metadata
            .length_bounds()
            .is_some_and(|bounds| bounds.contains(&national_number.len()))
    }

    fn is_valid_national_number(&self, national_number: &str, metadata: &RegionMetadata) -> bool {
        Self::is_within_length_bounds(national_number, metadata)
            && self
                .matcher_api
                .match_national_number(national_number, &metadata.general_desc, false)
    }
}
