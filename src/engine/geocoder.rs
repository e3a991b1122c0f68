use log::trace;

use super::{phone_engine::PhoneEngine, phone_number::ParsedNumber};
use crate::i18n::RegionCode;

impl PhoneEngine {
    /// Returns the region where a phone number is from. `None` for numbers of
    /// non-geographical entities (such as +800) and of the unknown region.
    pub fn get_region_code_for_number<'a>(&self, phone_number: &'a ParsedNumber) -> Option<&'a str> {
        let region_code = phone_number.region_code.as_str();
        if !RegionCode::is_geographical(region_code) {
            trace!("Number +{} has no geographical region", phone_number.country_code);
            return None;
        }
        Some(region_code)
    }

    /// Parses with the configured default region and returns the region of
    /// the number, `None` if it cannot be parsed.
    pub fn get_region_code_for_input(&self, input: &str) -> Option<String> {
        let phone_number = self.parse_input(input).ok()?;
        self.get_region_code_for_number(&phone_number)
            .map(str::to_string)
    }
}
