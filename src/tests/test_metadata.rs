use crate::{
    EngineConfig, FormatRule, NumberPattern, PhoneEngine, PhoneNumberType, RegionMetadata,
};

use super::region_code::RegionCode;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Engine over the test metadata, with trace logging enabled once per
/// process.
pub(super) fn get_engine(config: EngineConfig) -> PhoneEngine {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneEngine::from_regions(test_regions(), config)
}

pub(super) fn get_engine_for_region(region_code: &str) -> PhoneEngine {
    get_engine(EngineConfig::default().with_default_region(region_code))
}

/// A trimmed down set of regions, shaped after real dialling plans but with
/// simplified patterns.
pub(super) fn test_regions() -> Vec<RegionMetadata> {
    vec![
        us_metadata(),
        bs_metadata(),
        gb_metadata(),
        it_metadata(),
        ru_metadata(),
        kz_metadata(),
        toll_free_800_metadata(),
    ]
}

fn us_metadata() -> RegionMetadata {
    let fixed_line_or_mobile = NumberPattern::new(r"(?:[2-7]\d|8[1-9])\d{8}", &[]);
    RegionMetadata::new(
        RegionCode::us(),
        1,
        NumberPattern::new(r"[2-9]\d{9}", &[10]).with_local_only_lengths(&[7]),
    )
    .main_country_for_code()
    .with_international_prefix("011")
    .with_national_prefix("1")
    .with_type(
        PhoneNumberType::FixedLine,
        fixed_line_or_mobile.clone().with_example_number("2015550123"),
    )
    .with_type(PhoneNumberType::Mobile, fixed_line_or_mobile.with_example_number("2015550123"))
    .with_type(
        PhoneNumberType::TollFree,
        NumberPattern::new(r"800\d{7}", &[]).with_example_number("8002530000"),
    )
    .with_type(
        PhoneNumberType::PremiumRate,
        NumberPattern::new(r"900\d{7}", &[]).with_example_number("9002530000"),
    )
    .with_format(
        FormatRule::new(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3")
            .with_intl_format("$1-$2-$3")
            .with_leading_digits("[2-9]"),
    )
}

/// Shares calling code 1 with US and has no format rules of its own.
fn bs_metadata() -> RegionMetadata {
    RegionMetadata::new(
        RegionCode::bs(),
        1,
        NumberPattern::new(r"242\d{7}", &[10]),
    )
    .with_leading_digits("242")
    .with_international_prefix("011")
    .with_national_prefix("1")
    .with_type(
        PhoneNumberType::FixedLine,
        NumberPattern::new(r"242[3-5]\d{6}", &[]).with_example_number("2423651234"),
    )
    .with_type(
        PhoneNumberType::Mobile,
        NumberPattern::new(r"242[6-8]\d{6}", &[]).with_example_number("2426401234"),
    )
}

fn gb_metadata() -> RegionMetadata {
    RegionMetadata::new(
        RegionCode::gb(),
        44,
        NumberPattern::new(r"[1-9]\d{9}|800(?:\d{4}|\d{6})", &[7, 9, 10]),
    )
    .with_international_prefix("00")
    .with_national_prefix("0")
    .with_type(
        PhoneNumberType::FixedLine,
        NumberPattern::new(r"[12]\d{9}", &[10]).with_example_number("2070313000"),
    )
    .with_type(
        PhoneNumberType::Mobile,
        NumberPattern::new(r"7[1-57-9]\d{8}", &[10]).with_example_number("7912345678"),
    )
    .with_type(
        PhoneNumberType::TollFree,
        NumberPattern::new(r"800(?:\d{4}|\d{6})", &[7, 9]).with_example_number("8001234"),
    )
    .with_type(
        PhoneNumberType::PremiumRate,
        NumberPattern::new(r"9[018]\d{8}", &[10]).with_example_number("9012345678"),
    )
    .with_type(PhoneNumberType::VoIP, NumberPattern::new(r"56\d{8}", &[10]))
    .with_format(
        FormatRule::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3")
            .with_leading_digits("2|5[56]|7[06]")
            .with_national_prefix_formatting_rule("$NP$FG"),
    )
    .with_format(
        FormatRule::new(r"(\d{4})(\d{6})", "$1 $2")
            .with_leading_digits("7")
            .with_national_prefix_formatting_rule("$NP$FG"),
    )
    .with_format(
        FormatRule::new(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3")
            .with_leading_digits("[1389]")
            .with_national_prefix_formatting_rule("$NP$FG"),
    )
    .with_format(
        FormatRule::new(r"(\d{3})(\d{4})", "$1 $2")
            .with_intl_format("NA")
            .with_leading_digits("800")
            .with_national_prefix_formatting_rule("$NP$FG"),
    )
    .with_format(
        FormatRule::new(r"(\d{3})(\d{6})", "$1 $2")
            .with_leading_digits("800")
            .with_national_prefix_formatting_rule("$NP$FG"),
    )
}

/// Leading zeros are part of Italian national numbers; there is no national
/// prefix.
fn it_metadata() -> RegionMetadata {
    RegionMetadata::new(
        RegionCode::it(),
        39,
        NumberPattern::new(r"0\d{5,10}|3\d{8,10}", &[6, 7, 8, 9, 10, 11]),
    )
    .with_international_prefix("00")
    .with_type(
        PhoneNumberType::FixedLine,
        NumberPattern::new(r"0\d{5,10}", &[]).with_example_number("0236618300"),
    )
    .with_type(
        PhoneNumberType::Mobile,
        NumberPattern::new(r"3[1-9]\d{8}", &[10]).with_example_number("3123456789"),
    )
    .with_format(
        FormatRule::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3").with_leading_digits("0[26]"),
    )
    .with_format(
        FormatRule::new(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3").with_leading_digits("3"),
    )
}

fn ru_metadata() -> RegionMetadata {
    RegionMetadata::new(
        RegionCode::ru(),
        7,
        NumberPattern::new(r"[3489]\d{9}", &[10]),
    )
    .main_country_for_code()
    .with_international_prefix("810")
    .with_national_prefix("8")
    .with_type(
        PhoneNumberType::FixedLine,
        NumberPattern::new(r"[348]\d{9}", &[]).with_example_number("4951234567"),
    )
    .with_type(
        PhoneNumberType::Mobile,
        NumberPattern::new(r"9\d{9}", &[]).with_example_number("9123456789"),
    )
    .with_format(
        FormatRule::new(r"(\d{3})(\d{3})(\d{2})(\d{2})", "$1 $2-$3-$4")
            .with_leading_digits("[3-9]")
            .with_national_prefix_formatting_rule("$NP ($FG)"),
    )
}

/// Shares calling code 7 with RU and borrows its format rules.
fn kz_metadata() -> RegionMetadata {
    RegionMetadata::new(
        RegionCode::kz(),
        7,
        NumberPattern::new(r"(?:33\d|7\d\d)\d{7}", &[10]),
    )
    .with_leading_digits("33|7")
    .with_international_prefix("810")
    .with_national_prefix("8")
    .with_type(
        PhoneNumberType::FixedLine,
        NumberPattern::new(r"7[12]\d{8}", &[]).with_example_number("7123456789"),
    )
    .with_type(
        PhoneNumberType::Mobile,
        NumberPattern::new(r"7[05-8]\d{8}", &[]).with_example_number("7710009998"),
    )
}

/// International Toll Free Service.
fn toll_free_800_metadata() -> RegionMetadata {
    RegionMetadata::new(
        RegionCode::un001(),
        800,
        NumberPattern::new(r"[1-9]\d{7}", &[8]),
    )
    .with_type(
        PhoneNumberType::TollFree,
        NumberPattern::new(r"[1-9]\d{7}", &[]).with_example_number("12345678"),
    )
    .with_format(FormatRule::new(r"(\d{4})(\d{4})", "$1 $2"))
}
