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

use log::{debug, trace};
use strum::IntoEnumIterator;

use super::{phone_engine::PhoneEngine, phone_number::ParsedNumber, PhoneNumberType};
use crate::metadata::{NumberPattern, RegionMetadata};

impl PhoneEngine {
    /// Gets the type of a parsed number. Numbers of regions the provider has
    /// no metadata for are `Unknown`.
    pub fn get_number_type(&self, phone_number: &ParsedNumber) -> PhoneNumberType {
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(
            phone_number.country_code,
            &phone_number.region_code,
        ) else {
            debug!("No metadata for region {}, type unknown", phone_number.region_code);
            return PhoneNumberType::Unknown;
        };
        self.get_number_type_helper(&phone_number.national_number, metadata)
    }

    /// Tries the type patterns of the region in priority order; the first one
    /// matching wins.
    pub(super) fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &RegionMetadata,
    ) -> PhoneNumberType {
        for number_type in PhoneNumberType::iter() {
            if number_type == PhoneNumberType::Unknown {
                continue;
            }
            let Some(number_desc) = metadata.type_pattern(number_type) else {
                continue;
            };
            if !self.is_number_matching_desc(national_number, number_desc, metadata) {
                continue;
            }
            if number_type == PhoneNumberType::FixedLine
                && metadata.same_mobile_and_fixed_line_pattern()
            {
                trace!(
                    "Number '{national_number}': fixed-line and mobile patterns equal, \
                     number is fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is of type {number_type:?}");
            return number_type;
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
        PhoneNumberType::Unknown
    }

    pub(super) fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &NumberPattern,
        metadata: &RegionMetadata,
    ) -> bool {
        // Empty lengths mean the type has the same lengths as the region.
        let possible_lengths = if number_desc.possible_lengths.is_empty() {
            &metadata.general_desc.possible_lengths
        } else {
            &number_desc.possible_lengths
        };
        if !possible_lengths.contains(&national_number.len()) {
            return false;
        }
        self.matcher_api
            .match_national_number(national_number, number_desc, false)
    }
}
