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

use thiserror::Error;

/// Failures of parsing and formatting calls.
///
/// Every error is terminal for the call that produced it; the engine never
/// retries internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("The input contains no digits")]
    EmptyInput,
    #[error("The number starts with an unknown country calling code")]
    UnknownCallingCode,
    #[error("The number has no calling code and no usable default region is set")]
    NoDefaultRegion,
    #[error("The number is shorter than all numbers of its region")]
    TooShort,
    #[error("The number is longer than all numbers of its region")]
    TooLong,
    #[error("The number does not match the validity pattern of its region")]
    InvalidNumber,
    #[error("No metadata available for region {0}")]
    UnknownRegionMetadata(String),
}

/// Possible outcomes when testing if a ParsedNumber is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The number has an invalid country calling code.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    #[error("\
    The number is longer than the shortest valid numbers for this region, \
    shorter than the longest valid numbers for this region, and does not \
    itself have a number length that matches valid numbers for this region\
    ")]
    InvalidLength,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetExampleNumberError {
    #[error("Parse error: {0}")]
    FailedToParse(#[from] EngineError),
    #[error("No example number")]
    NoExampleNumber,
    #[error("Invalid region code provided")]
    InvalidRegionCode,
}

impl From<ValidationError> for EngineError {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::InvalidCountryCode => EngineError::UnknownCallingCode,
            ValidationError::TooShort => EngineError::TooShort,
            ValidationError::TooLong => EngineError::TooLong,
            ValidationError::InvalidLength => EngineError::InvalidNumber,
        }
    }
}
