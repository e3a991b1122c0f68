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

use log::trace;

use super::{
    errors::EngineError,
    helper_constants::{MAX_INPUT_DIGITS, MAX_INPUT_STRING_LENGTH},
    helper_functions::normalize_helper,
    phone_engine::PhoneEngine,
    phone_number::NormalizedInput,
    Result,
};

impl PhoneEngine {
    /// Reduces free-form input to the digits of the number.
    ///
    /// Unicode decimal digits are mapped to ASCII, leading garbage, trailing
    /// punctuation, a second number and an extension are dropped, and vanity
    /// numbers such as `1-800-FLOWERS` are mapped to keypad digits.
    pub fn normalize(&self, input: &str) -> Result<NormalizedInput> {
        if input.chars().count() > MAX_INPUT_STRING_LENGTH {
            return Err(EngineError::TooLong);
        }
        let mut phone_number = dec_from_char::normalize_decimals(input).to_string();
        self.extract_possible_number(&mut phone_number)?;

        let has_leading_plus = match self.reg_exps.plus_chars_pattern.find(&phone_number) {
            Some(plus_signs) => {
                phone_number.drain(..plus_signs.end());
                true
            }
            None => false,
        };
        self.maybe_strip_extension(&mut phone_number);

        if self.reg_exps.valid_alpha_phone_pattern.is_match(&phone_number) {
            normalize_helper(&self.reg_exps.alpha_phone_mappings, &mut phone_number);
        } else {
            phone_number.retain(|c| c.is_ascii_digit());
        }

        if phone_number.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        if phone_number.len() > MAX_INPUT_DIGITS {
            return Err(EngineError::TooLong);
        }
        Ok(NormalizedInput {
            digits: phone_number,
            has_leading_plus,
            is_partial: self.config.allows_partial,
        })
    }

    /// Attempts to extract a possible number from the string passed in. This
    /// currently strips all leading characters that cannot be used to start a
    /// phone number. Characters that can be used to start a phone number are
    /// defined in the valid_start_char_pattern. If none of these characters are
    /// found in the number passed in, an error is returned. This function also
    /// attempts to strip off any alternative extensions or endings if two or
    /// more are present, such as in the case of: (530) 583-6985 x302/x2303. The
    /// second extension here makes this actually two phone numbers, (530)
    /// 583-6985 x302 and (530) 583-6985 x2303. We remove the second extension
    /// so that the first number is parsed correctly.
    fn extract_possible_number(&self, phone_number: &mut String) -> Result<()> {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(phone_number) else {
            return Err(EngineError::EmptyInput);
        };
        phone_number.drain(..start.start());

        self.trim_unwanted_end_chars(phone_number);

        let second_number_start = self
            .reg_exps
            .capture_up_to_second_number_start_pattern
            .captures(phone_number)
            .and_then(|captures| captures.get(1))
            .map(|first_number| first_number.end());
        if let Some(end) = second_number_start {
            trace!("Cutting off a second number in {}", phone_number);
            phone_number.truncate(end);
        }
        Ok(())
    }

    fn trim_unwanted_end_chars(&self, phone_number: &mut String) {
        let mut bytes_to_trim = 0;
        let mut buf = [0u8; 4];

        for char in phone_number.chars().rev() {
            if !self
                .reg_exps
                .unwanted_end_char_pattern
                .is_match(char.encode_utf8(&mut buf))
            {
                break;
            }
            bytes_to_trim += char.len_utf8();
        }

        if bytes_to_trim > 0 {
            let new_len = phone_number.len() - bytes_to_trim;
            phone_number.truncate(new_len);
        }
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number. The extension is dropped; only the text in front
    /// of it is kept, and only if that text is a viable number on its own.
    fn maybe_strip_extension(&self, phone_number: &mut String) -> bool {
        let Some(extension) = self.reg_exps.extn_pattern.find(phone_number) else {
            return false;
        };
        // If we find a potential extension, and the number preceding this is a
        // viable number, we assume it is an extension.
        let number_end = extension.start();
        if !self
            .reg_exps
            .valid_phone_number_pattern
            .is_match(&phone_number[..number_end])
        {
            return false;
        }
        trace!("Dropping extension {:?}", &phone_number[number_end..]);
        phone_number.truncate(number_end);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        EngineConfig, PhoneEngine,
        engine::EngineError,
    };

    fn engine() -> PhoneEngine {
        PhoneEngine::from_regions(Vec::new(), EngineConfig::default())
    }

    #[test]
    fn keeps_digits_and_plus() {
        let normalized = engine().normalize("+1 (202) 555-0123").unwrap();
        assert_eq!(normalized.digits, "12025550123");
        assert!(normalized.has_leading_plus);
        assert!(!normalized.is_partial);

        let normalized = engine().normalize("Tel: 020 3555 0123.").unwrap();
        assert_eq!(normalized.digits, "02035550123");
        assert!(!normalized.has_leading_plus);
    }

    #[test]
    fn full_width_digits_and_plus() {
        let normalized = engine().normalize("\u{FF0B}\u{FF14}\u{FF14} 20 3555 0123").unwrap();
        assert_eq!(normalized.digits, "442035550123");
        assert!(normalized.has_leading_plus);
    }

    #[test]
    fn extensions_and_second_numbers_are_dropped() {
        let engine = engine();
        assert_eq!(engine.normalize("(202) 555-0123 ext. 1234").unwrap().digits, "2025550123");
        assert_eq!(engine.normalize("(202) 555-0123;ext=1234").unwrap().digits, "2025550123");
        assert_eq!(engine.normalize("(202) 555-0123,,1234").unwrap().digits, "2025550123");
        assert_eq!(engine.normalize("(530) 583-6985 x302/x2303").unwrap().digits, "5305836985");
    }

    #[test]
    fn vanity_numbers_are_mapped_to_keypad() {
        let engine = engine();
        assert_eq!(engine.normalize("1-800-FLOWERS").unwrap().digits, "18003569377");
        assert_eq!(engine.normalize("1-800-flowers").unwrap().digits, "18003569377");
        // Fewer than three letters are just dropped.
        assert_eq!(engine.normalize("202 555 01AB").unwrap().digits, "20255501");
    }

    #[test]
    fn rejects_empty_and_oversized_input() {
        let engine = engine();
        assert_eq!(engine.normalize(""), Err(EngineError::EmptyInput));
        assert_eq!(engine.normalize("abc"), Err(EngineError::EmptyInput));
        assert_eq!(engine.normalize("+"), Err(EngineError::EmptyInput));
        assert_eq!(engine.normalize(&"1".repeat(41)), Err(EngineError::TooLong));
        assert_eq!(engine.normalize(&"1 ".repeat(126)), Err(EngineError::TooLong));
        assert_eq!(engine.normalize(&"1".repeat(40)).unwrap().digits.len(), 40);
    }

    #[test]
    fn partial_flag_follows_config() {
        let engine = engine().with_config(EngineConfig::default().with_allows_partial(true));
        assert!(engine.normalize("20").unwrap().is_partial);
    }
}
