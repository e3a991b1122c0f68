use super::{CountryCodeSource, PhoneNumberFormat};

/// Digits extracted from free-form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    /// ASCII digits only; never empty.
    pub digits: String,
    /// The input started with a plus sign (not counted in `digits`).
    pub has_leading_plus: bool,
    /// The input may still be incomplete.
    pub is_partial: bool,
}

/// A number resolved to its region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub region_code: String,
    pub country_code: u16,
    /// National significant number, national prefix removed. Leading zeros
    /// that belong to the number (as in Italy) are kept.
    pub national_number: String,
    /// The input exactly as the caller gave it.
    pub raw_input: String,
    pub country_code_source: CountryCodeSource,
    /// The national number lay within its region's length bounds when parsed.
    /// Only partial parsing produces unvalidated numbers.
    pub validated: bool,
    /// A national prefix was typed and removed while parsing.
    pub had_national_prefix: bool,
}

impl ParsedNumber {
    /// Returns `true` if both values identify the same number, regardless of
    /// how they were written.
    pub fn is_same_number(&self, other: &ParsedNumber) -> bool {
        self.country_code == other.country_code
            && self.national_number == other.national_number
            && self.region_code == other.region_code
    }
}

/// Formatted output of a call to
/// [`format_input`](super::PhoneEngine::format_input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    pub formatted: String,
    pub form: PhoneNumberFormat,
    /// Region the number resolved to; `None` when nothing was resolved
    /// (partial input that could not be parsed yet).
    pub region_code: Option<String>,
}
