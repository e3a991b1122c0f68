use rtelephone::{
    EngineConfig, FormatRule, NumberPattern, PhoneEngine, PhoneNumberType, RegionMetadata,
};

pub type TestEntity = (&'static str, &'static str);

pub fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("011 44 20 8765 4321 ext. 1234", "US"),
        ("(650) 253-0000", "US"),
        ("+44 20 8765 4321", "GB"),
        ("020 8765 4321", "GB"),
        ("07912 345678", "GB"),
        ("+1 242 365 1234", "US"),
        ("02 12345678", "IT"),
        ("1-800-FLOWERS", "US"),
    ]
}

pub fn engine() -> PhoneEngine {
    PhoneEngine::from_regions(regions(), EngineConfig::default())
}

fn regions() -> Vec<RegionMetadata> {
    let us_fixed_line_or_mobile = NumberPattern::new(r"(?:[2-7]\d|8[1-9])\d{8}", &[]);
    vec![
        RegionMetadata::new("US", 1, NumberPattern::new(r"[2-9]\d{9}", &[10]))
            .main_country_for_code()
            .with_international_prefix("011")
            .with_national_prefix("1")
            .with_type(PhoneNumberType::FixedLine, us_fixed_line_or_mobile.clone())
            .with_type(PhoneNumberType::Mobile, us_fixed_line_or_mobile)
            .with_type(PhoneNumberType::TollFree, NumberPattern::new(r"8(?:00|33|44|55|66|77|88)\d{7}", &[]))
            .with_format(
                FormatRule::new(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3")
                    .with_intl_format("$1-$2-$3")
                    .with_leading_digits("[2-9]"),
            ),
        RegionMetadata::new("BS", 1, NumberPattern::new(r"242\d{7}", &[10]))
            .with_leading_digits("242")
            .with_international_prefix("011")
            .with_national_prefix("1"),
        RegionMetadata::new("GB", 44, NumberPattern::new(r"[1-9]\d{9}", &[10]))
            .with_international_prefix("00")
            .with_national_prefix("0")
            .with_type(PhoneNumberType::FixedLine, NumberPattern::new(r"[12]\d{9}", &[]))
            .with_type(PhoneNumberType::Mobile, NumberPattern::new(r"7[1-57-9]\d{8}", &[]))
            .with_format(
                FormatRule::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3")
                    .with_leading_digits("2")
                    .with_national_prefix_formatting_rule("$NP$FG"),
            )
            .with_format(
                FormatRule::new(r"(\d{4})(\d{6})", "$1 $2")
                    .with_leading_digits("7")
                    .with_national_prefix_formatting_rule("$NP$FG"),
            ),
        RegionMetadata::new("IT", 39, NumberPattern::new(r"0\d{5,10}|3\d{8,10}", &[6, 7, 8, 9, 10, 11]))
            .with_international_prefix("00")
            .with_type(PhoneNumberType::FixedLine, NumberPattern::new(r"0\d{5,10}", &[]))
            .with_format(FormatRule::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3").with_leading_digits("0[26]")),
    ]
}
