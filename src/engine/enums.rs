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

use strum::EnumIter;

/// Output forms of [`PhoneEngine::format`](super::PhoneEngine::format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneNumberFormat {
    /// `+` and the calling code followed by the national number, no
    /// separators: `+442035550123`.
    E164,
    /// Calling code and grouped national number, without national prefix:
    /// `+44 20 3555 0123`.
    International,
    /// The way the number is dialled inside its own region, national prefix
    /// included where the rules ask for it: `020 3555 0123`.
    #[default]
    National,
}

/// Number types in the order the classifier tries them. `Unknown` is never
/// matched against a pattern.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    FixedLine,
    Mobile,
    TollFree,
    PremiumRate,
    /// Call cost split between caller and callee.
    SharedCost,
    VoIP,
    /// Follows a person rather than a line or a place.
    PersonalNumber,
    Pager,
    /// Universal access number: one number routed to several offices.
    UAN,
    VoiceMail,
    /// The region cannot tell its fixed-line and mobile ranges apart.
    FixedLineOrMobile,
    Unknown,
}

/// Outcome of a successful length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    IsPossible,
    /// Only dialable inside a local area, without the area code.
    IsPossibleLocalOnly,
}

/// How the calling code of a parsed number was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The input started with a plus sign.
    FromNumberWithPlusSign,
    /// The input started with the international (IDD) prefix of the default region.
    FromNumberWithIdd,
    /// The input started with the calling code of the default region, without a plus sign.
    FromNumberWithoutPlusSign,
    /// The input had no calling code; the default region supplied it.
    FromDefaultCountry,
}
