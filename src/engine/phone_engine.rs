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

use std::{
    collections::HashSet,
    sync::{Arc, OnceLock},
};

use log::{trace, warn};

use super::{
    config::EngineConfig,
    errors::GetExampleNumberError,
    helper_functions::{get_number_desc_by_type, get_supported_types_for_metadata},
    phone_number::ParsedNumber,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
    PhoneNumberType,
};
use crate::{
    i18n::RegionCode,
    interfaces::{MatcherApi, MetadataProvider},
    metadata::{InMemoryMetadataProvider, RegionMetadata},
    regex_based_matcher::RegexBasedMatcher,
    regexp_cache::RegexCache,
};

static SHARED_ENGINE: OnceLock<PhoneEngine> = OnceLock::new();

/// Entry point of the library: parses, classifies, validates and formats
/// telephone numbers against the metadata of a [`MetadataProvider`].
///
/// Cloning an engine, or deriving one with [`with_config`](Self::with_config),
/// is cheap: metadata, compiled patterns and caches are shared.
#[derive(Clone)]
pub struct PhoneEngine {
    /// Read-only source of region metadata.
    pub(super) provider: Arc<dyn MetadataProvider>,

    /// An API for validation checking.
    pub(super) matcher_api: Arc<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    pub(super) reg_exps: Arc<PhoneNumberRegExpsAndMappings>,

    pub(super) config: EngineConfig,
}

impl PhoneEngine {
    pub fn new(provider: Arc<dyn MetadataProvider>, config: EngineConfig) -> Self {
        // Metadata patterns are compiled once for matching and formatting.
        let regexp_cache = Arc::new(RegexCache::with_capacity(128));
        Self {
            provider,
            matcher_api: Arc::new(RegexBasedMatcher::with_cache(regexp_cache.clone())),
            reg_exps: Arc::new(PhoneNumberRegExpsAndMappings::with_cache(regexp_cache)),
            config,
        }
    }

    /// Builds an engine over an [`InMemoryMetadataProvider`] holding `regions`.
    pub fn from_regions(regions: Vec<RegionMetadata>, config: EngineConfig) -> Self {
        Self::new(Arc::new(InMemoryMetadataProvider::new(regions)), config)
    }

    /// Returns an engine with another configuration that shares metadata and
    /// compiled patterns with this one.
    pub fn with_config(&self, config: EngineConfig) -> Self {
        Self {
            provider: self.provider.clone(),
            matcher_api: self.matcher_api.clone(),
            reg_exps: self.reg_exps.clone(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Installs the process-wide engine. Fails, handing the engine back, if
    /// one was installed already.
    pub fn install_shared(engine: PhoneEngine) -> Result<(), PhoneEngine> {
        SHARED_ENGINE.set(engine)
    }

    /// The process-wide engine, if one was installed.
    pub fn shared() -> Option<&'static PhoneEngine> {
        SHARED_ENGINE.get()
    }

    /// The process-wide engine, built with `init` on first use.
    pub fn shared_or_init(init: impl FnOnce() -> PhoneEngine) -> &'static PhoneEngine {
        SHARED_ENGINE.get_or_init(init)
    }

    /// Convenience method to get a list of what regions the library has metadata
    /// for.
    pub fn get_supported_regions(&self) -> Vec<&str> {
        let mut regions = self.provider.supported_regions();
        regions.sort_unstable();
        regions
    }

    /// Convenience method to get a list of what calling codes the library has
    /// metadata for, non-geographical entities included.
    pub fn get_supported_calling_codes(&self) -> Vec<u16> {
        self.provider.supported_calling_codes()
    }

    /// Returns the types for a given region which the library has metadata for.
    /// Will not include FixedLineOrMobile (if numbers for this non-geographical
    /// entity could be classified as FixedLineOrMobile, both FixedLine and
    /// Mobile would be present) and Unknown.
    ///
    /// No types will be returned for invalid or unknown region codes.
    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        let Some(metadata) = self.provider.lookup_by_region(region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return None;
        };
        Some(get_supported_types_for_metadata(metadata))
    }

    /// Returns the national dialling prefix for a specific region. For example,
    /// this would be 1 for the United States, and 0 for New Zealand. Set
    /// strip_non_digits to true to strip symbols like "~" (which indicates a
    /// wait for a dialling tone) from the prefix returned. If no national prefix
    /// is present, we return None.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        let Some(metadata) = self.provider.lookup_by_region(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return None;
        };
        metadata.national_prefix_digits(strip_non_digits)
    }

    /// Gets a valid number for the specified region and number type, parsed
    /// with the region as default.
    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        number_type: PhoneNumberType,
    ) -> Result<ParsedNumber, GetExampleNumberError> {
        let Some(metadata) = self.provider.lookup_by_region(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode);
        };
        let example_number = get_number_desc_by_type(metadata, number_type)
            .and_then(|desc| desc.example_number.as_deref())
            .ok_or(GetExampleNumberError::NoExampleNumber)?;
        Ok(self.parse(example_number, Some(region_code))?)
    }

    /// Metadata of a region, with non-geographical entities looked up by their
    /// calling code.
    pub(super) fn get_metadata_for_region_or_calling_code(
        &self,
        country_calling_code: u16,
        region_code: &str,
    ) -> Option<&RegionMetadata> {
        if region_code == RegionCode::non_geo_entity() {
            self.provider
                .lookup_by_calling_code(country_calling_code)
                .into_iter()
                .find(|metadata| metadata.id == region_code)
        } else {
            self.provider
                .lookup_by_region(region_code)
                .filter(|metadata| metadata.country_code == country_calling_code)
        }
    }

    /// Metadata whose format rules apply to the number: its own region's, or
    /// those of the main region for the calling code when the region carries
    /// none (NANPA members use the rules of US).
    pub(super) fn get_formatting_metadata(
        &self,
        phone_number: &ParsedNumber,
    ) -> Option<&RegionMetadata> {
        let metadata = self.get_metadata_for_region_or_calling_code(
            phone_number.country_code,
            &phone_number.region_code,
        )?;
        if !metadata.number_formats.is_empty() {
            return Some(metadata);
        }
        let main_metadata = self
            .provider
            .lookup_by_calling_code(phone_number.country_code)
            .into_iter()
            .next()
            .unwrap_or(metadata);
        trace!(
            "Region {} has no format rules, using the ones of {}",
            metadata.id, main_metadata.id
        );
        Some(main_metadata)
    }
}
