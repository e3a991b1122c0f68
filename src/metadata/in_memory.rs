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

use std::collections::{HashMap, VecDeque};

use log::warn;

use crate::{i18n::RegionCode, interfaces::MetadataProvider};

use super::RegionMetadata;

/// Metadata provider over a set of regions fully built by the caller.
///
/// The table is indexed once in [`InMemoryMetadataProvider::new`] and never
/// changes afterwards, so it can be shared freely between threads.
pub struct InMemoryMetadataProvider {
    /// Metadata storage, in the order it was given.
    regions: Vec<RegionMetadata>,

    /// A mapping from a region code to the index of its metadata. Entries of
    /// non-geographical entities are not part of it.
    region_to_metadata_map: HashMap<String, usize>,

    /// A mapping from a country calling code to the regions using it. The main
    /// country for the code goes first, the others follow in declaration
    /// order. Implemented as a sorted vector to be binary searched.
    country_calling_code_to_region_map: Vec<(u16, Vec<usize>)>,
}

impl InMemoryMetadataProvider {
    pub fn new(regions: Vec<RegionMetadata>) -> Self {
        let mut region_to_metadata_map = HashMap::with_capacity(regions.len());
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut calling_code_to_regions = HashMap::<u16, VecDeque<usize>>::new();

        for (index, metadata) in regions.iter().enumerate() {
            if metadata.id == RegionCode::get_unknown() {
                warn!("Skipping metadata declared for the unknown region");
                continue;
            }
            if metadata.id != RegionCode::non_geo_entity() {
                if region_to_metadata_map.insert(metadata.id.clone(), index).is_some() {
                    warn!("Metadata for region {} declared twice, last one wins", metadata.id);
                }
            }

            let regions_for_code = calling_code_to_regions
                .entry(metadata.country_code)
                .or_default();
            if metadata.main_country_for_code {
                regions_for_code.push_front(index);
            } else {
                regions_for_code.push_back(index);
            }
        }

        let mut country_calling_code_to_region_map = calling_code_to_regions
            .into_iter()
            .map(|(code, indexes)| (code, Vec::from(indexes)))
            .collect::<Vec<_>>();
        // Sort all the pairs in ascending order according to country calling code.
        country_calling_code_to_region_map.sort_by_key(|(code, _)| *code);

        Self {
            regions,
            region_to_metadata_map,
            country_calling_code_to_region_map,
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl MetadataProvider for InMemoryMetadataProvider {
    fn lookup_by_region(&self, region_code: &str) -> Option<&RegionMetadata> {
        self.region_to_metadata_map
            .get(region_code)
            .map(|index| &self.regions[*index])
    }

    fn lookup_by_calling_code(&self, calling_code: u16) -> Vec<&RegionMetadata> {
        self.country_calling_code_to_region_map
            .binary_search_by_key(&calling_code, |(code, _)| *code)
            .map(|position| {
                self.country_calling_code_to_region_map[position]
                    .1
                    .iter()
                    .map(|index| &self.regions[*index])
                    .collect()
            })
            .unwrap_or_default()
    }

    fn supported_regions(&self) -> Vec<&str> {
        self.region_to_metadata_map.keys().map(String::as_str).collect()
    }

    fn supported_calling_codes(&self) -> Vec<u16> {
        self.country_calling_code_to_region_map
            .iter()
            .map(|(code, _)| *code)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::NumberPattern;

    fn region(id: &str, code: u16) -> RegionMetadata {
        RegionMetadata::new(id, code, NumberPattern::new(r"\d{10}", &[10]))
    }

    #[test]
    fn main_country_goes_first() {
        let provider = InMemoryMetadataProvider::new(vec![
            region("BS", 1),
            region("US", 1).main_country_for_code(),
            region("CA", 1),
            region("GB", 44),
        ]);

        let ids = provider
            .lookup_by_calling_code(1)
            .into_iter()
            .map(|metadata| metadata.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["US", "BS", "CA"]);
        assert_eq!(provider.supported_calling_codes(), vec![1, 44]);
    }

    #[test]
    fn non_geo_entities_are_reachable_by_code_only() {
        let provider = InMemoryMetadataProvider::new(vec![
            region(RegionCode::non_geo_entity(), 800),
            region("GB", 44),
        ]);

        assert!(provider.lookup_by_region(RegionCode::non_geo_entity()).is_none());
        assert_eq!(provider.lookup_by_calling_code(800).len(), 1);
        assert!(provider.lookup_by_calling_code(2).is_empty());
        assert_eq!(provider.supported_regions(), vec!["GB"]);
    }
}
