//! Metadata-driven telephone number engine: normalizes free-form input,
//! resolves calling codes and regions, classifies, validates and formats
//! numbers, including numbers that are still being typed.
//!
//! All region knowledge comes from [`RegionMetadata`] values handed to a
//! [`PhoneEngine`] through a [`MetadataProvider`].

mod engine;
mod interfaces;
pub mod metadata;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;

/// Small helper macros shared by the formatter.
mod macros;

#[cfg(test)]
mod tests;

pub use engine::{
    AsYouTypeFormatter, CountryCodeSource, EngineConfig, EngineError, FormatResult,
    GetExampleNumberError, NormalizedInput, NumberLengthType, ParsedNumber, PhoneEngine,
    PhoneNumberFormat, PhoneNumberType, Result, ValidationError,
};
pub use interfaces::MetadataProvider;
pub use metadata::{FormatRule, InMemoryMetadataProvider, NumberPattern, RegionMetadata, TypePattern};
