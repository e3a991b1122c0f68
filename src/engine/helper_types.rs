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

use super::CountryCodeSource;

/// Digits that follow an extracted calling code, with the way the calling
/// code was written.
#[derive(Debug)]
pub(super) struct PhoneNumberWithCountryCodeSource<'a> {
    pub phone_number: &'a str,
    pub country_calling_code: u16,
    pub country_code_source: CountryCodeSource,
}

impl<'a> PhoneNumberWithCountryCodeSource<'a> {
    pub fn new(
        phone_number: &'a str,
        country_calling_code: u16,
        country_code_source: CountryCodeSource,
    ) -> Self {
        Self { phone_number, country_calling_code, country_code_source }
    }
}

/// National number after an attempt to remove the national prefix.
#[derive(Debug, PartialEq)]
pub(super) struct NationalNumberWithPrefix<'a> {
    pub national_number: &'a str,
    pub had_national_prefix: bool,
}
