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

use std::collections::{HashMap, HashSet};

use strum::IntoEnumIterator;

use crate::metadata::{NumberPattern, RegionMetadata};

use super::{
    NumberLengthType, PhoneNumberFormat, PhoneNumberType,
    errors::ValidationError,
    helper_constants::{
        OPTIONAL_EXT_SUFFIX, PLUS_SIGN, POSSIBLE_CHARS_AFTER_EXT_LABEL,
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL, RFC3966_EXTN_PREFIX,
    },
};

/// Returns the description inside the metadata of the appropriate type,
/// `None` when the region has no numbers of that type.
pub(super) fn get_number_desc_by_type(
    metadata: &RegionMetadata,
    phone_number_type: PhoneNumberType,
) -> Option<&NumberPattern> {
    match phone_number_type {
        PhoneNumberType::Unknown => Some(&metadata.general_desc),
        // An explicit entry wins, otherwise fixed-line data describes both.
        PhoneNumberType::FixedLineOrMobile => metadata
            .type_pattern(PhoneNumberType::FixedLineOrMobile)
            .or_else(|| metadata.type_pattern(PhoneNumberType::FixedLine)),
        other => metadata.type_pattern(other),
    }
}

/// A helper function that is used by the formatter to put the calling code in
/// front of an already formatted national number.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: u16,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    match number_format {
        PhoneNumberFormat::E164 => {
            *formatted_number =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
        }
        PhoneNumberFormat::International => {
            *formatted_number = if formatted_number.is_empty() {
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str)
            } else {
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number)
            };
        }
        PhoneNumberFormat::National => {}
    }
}

/// Capturing group of one to `max_length` digits.
pub(super) fn extn_digits(max_length: u32) -> String {
    let mut buf = itoa::Buffer::new();
    let max_length_str = buf.format(max_length);
    fast_cat::concat_str!("([", super::helper_constants::DIGITS, "]{1,", max_length_str, "})")
}

/// Pattern of every extension notation we recognise. The extension digits are
/// the only capturing groups.
pub(super) fn create_extn_pattern(for_parsing: bool) -> String {
    // The less explicit the label, the fewer digits it may introduce. ITU allows
    // up to 40.
    let ext_limit_after_explicit_label = 20;
    let ext_limit_after_likely_label = 15;
    let ext_limit_after_ambiguous_char = 9;
    let ext_limit_when_not_sure = 6;

    // "ext.", "extension", "anexo" and friends, accents composed or not.
    let explicit_ext_labels = "(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|(?:\u{FF45})?\u{FF58}\u{FF54}(?:\u{FF4E})?|\u{0434}\u{043E}\u{0431}|anexo)";
    // Single characters and short labels such as "x", "#" or "int".
    let ambiguous_ext_labels = "(?:[x\u{FF58}#\u{FF03}~\u{FF5E}]|int|\u{FF49}\u{FF4E}\u{FF54})";
    let ambiguous_separator = "[- ]+";

    let rfc_extn = fast_cat::concat_str!(
        RFC3966_EXTN_PREFIX,
        &extn_digits(ext_limit_after_explicit_label)
    );
    let explicit_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        explicit_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_explicit_label),
        OPTIONAL_EXT_SUFFIX
    );
    let ambiguous_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        ambiguous_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_ambiguous_char),
        OPTIONAL_EXT_SUFFIX
    );
    let american_style_extn_with_suffix = fast_cat::concat_str!(
        ambiguous_separator,
        &extn_digits(ext_limit_when_not_sure),
        "#"
    );

    // RFC 3966 ";ext=" first, then explicit labels like "ext:", which allow
    // the longest extensions. Single character labels capture fewer digits to
    // reduce the chance of reading two numbers side by side as number plus
    // extension. The last one covers American numbers where the extension is
    // written with a hash at the end, such as "- 503#".
    let extension_pattern = fast_cat::concat_str!(
        &rfc_extn,
        "|",
        &explicit_extn,
        "|",
        &ambiguous_extn,
        "|",
        &american_style_extn_with_suffix
    );
    if !for_parsing {
        return extension_pattern;
    }
    // ",," is commonly used for auto dialling the extension when connected.
    // Semi-colon works in Iphone and also in Android to pop up a button with
    // the extension number following.
    let auto_dialling_and_ext_labels_found = "(?:,{2}|;)";
    // Same as POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL, but not
    // matching comma as extension label may have it.
    let possible_separators_number_ext_label_no_comma = "[ \u{00A0}\\t]*";

    let auto_dialling_extn = fast_cat::concat_str!(
        possible_separators_number_ext_label_no_comma,
        auto_dialling_and_ext_labels_found,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_likely_label),
        OPTIONAL_EXT_SUFFIX
    );
    let only_commas_extn = fast_cat::concat_str!(
        possible_separators_number_ext_label_no_comma,
        "(?:,)+",
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_ambiguous_char),
        OPTIONAL_EXT_SUFFIX
    );
    fast_cat::concat_str!(
        &extension_pattern,
        "|",
        &auto_dialling_extn,
        "|",
        &only_commas_extn
    )
}

/// Maps every character of the number through `replacements` (looked up in
/// upper case) and drops the ones without a mapping.
pub(super) fn normalize_helper(replacements: &HashMap<char, char>, phone_number: &mut String) {
    *phone_number = phone_number
        .chars()
        .filter_map(|phone_char| replacements.get(&phone_char.to_ascii_uppercase()).copied())
        .collect();
}

/// Returns the types we have metadata for based on the RegionMetadata object
/// passed in.
pub(super) fn get_supported_types_for_metadata(metadata: &RegionMetadata) -> HashSet<PhoneNumberType> {
    PhoneNumberType::iter()
        // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
        // represents that a particular number type can't be
        // determined) or UNKNOWN (the non-type).
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| {
            get_number_desc_by_type(metadata, *number_type).is_some_and(NumberPattern::has_data)
        })
        .collect()
}

/// Helper method to check a number against possible lengths for this number
/// type, and determine whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    phone_number: &str,
    phone_metadata: &RegionMetadata,
    phone_number_type: PhoneNumberType,
) -> Result<NumberLengthType, ValidationError> {
    // A type the region has no numbers of can never have a matching length.
    let Some(desc_for_type) = get_number_desc_by_type(phone_metadata, phone_number_type) else {
        return Err(ValidationError::InvalidLength);
    };
    // Where a sub-description (e.g. fixed-line) has the same possible lengths
    // as the parent, they are missing, so we fall back to the general desc.
    let lengths_or_general = |desc: &NumberPattern| {
        if desc.possible_lengths.is_empty() {
            phone_metadata.general_desc.possible_lengths.clone()
        } else {
            desc.possible_lengths.clone()
        }
    };
    let mut possible_lengths = lengths_or_general(desc_for_type);
    let mut local_lengths = desc_for_type.possible_lengths_local_only.clone();

    if phone_number_type == PhoneNumberType::FixedLineOrMobile
        && phone_metadata
            .type_pattern(PhoneNumberType::FixedLineOrMobile)
            .is_none()
    {
        match phone_metadata.type_pattern(PhoneNumberType::Mobile) {
            // The rare case where no fixed-line data is available (true for some
            // non-geographical entities), so we just check mobile.
            Some(_) if phone_metadata.type_pattern(PhoneNumberType::FixedLine).is_none() => {
                return test_number_length(phone_number, phone_metadata, PhoneNumberType::Mobile);
            }
            Some(mobile_desc) => {
                possible_lengths.extend(lengths_or_general(mobile_desc));
                local_lengths.extend_from_slice(&mobile_desc.possible_lengths_local_only);
            }
            None => {}
        }
    }
    possible_lengths.sort_unstable();
    possible_lengths.dedup();

    let Some(&minimum_length) = possible_lengths.first() else {
        return Err(ValidationError::InvalidLength);
    };

    let actual_length = phone_number.len();
    // There is never an overlap between the possible lengths and the
    // local-only lengths.
    if local_lengths.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    if minimum_length == actual_length {
        Ok(NumberLengthType::IsPossible)
    } else if minimum_length > actual_length {
        Err(ValidationError::TooShort)
    } else if possible_lengths[possible_lengths.len() - 1] < actual_length {
        Err(ValidationError::TooLong)
    } else if possible_lengths[1..].contains(&actual_length) {
        // We skip the first element; we've already checked it.
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(ValidationError::InvalidLength)
    }
}

/// Helper method to check a number against possible lengths for this region,
/// based on the metadata being passed in, and determine whether it matches, or
/// is too short or too long.
pub(super) fn test_number_length_with_unknown_type(
    phone_number: &str,
    phone_metadata: &RegionMetadata,
) -> Result<NumberLengthType, ValidationError> {
    test_number_length(phone_number, phone_metadata, PhoneNumberType::Unknown)
}

/// Substitutes `$n` references of a format template with the text `group`
/// returns for them. References to groups that did not participate are
/// replaced by nothing.
pub(super) fn expand_template<F, S>(template: &str, mut group: F) -> String
where
    F: FnMut(usize) -> Option<S>,
    S: AsRef<str>,
{
    let mut expanded = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();
    while let Some(current) = chars.next() {
        if current == '$' {
            if let Some(index) = chars.peek().and_then(|next| next.to_digit(10)) {
                chars.next();
                if let Some(text) = group(index as usize) {
                    expanded.push_str(text.as_ref());
                }
                continue;
            }
        }
        expanded.push(current);
    }
    expanded
}
