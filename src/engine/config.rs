use super::PhoneNumberFormat;

/// Per-engine configuration. Copied into every engine, never shared mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Region assumed for numbers written without a calling code.
    pub default_region: Option<String>,
    /// Form used by [`format_input`](super::PhoneEngine::format_input).
    pub format: PhoneNumberFormat,
    /// Accept and format numbers that are still being typed.
    pub allows_partial: bool,
    /// Check validity before formatting.
    pub validates_numbers: bool,
    /// When validation fails, hand back the original input instead of an error.
    pub returns_invalid_string: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_region: None,
            format: PhoneNumberFormat::National,
            allows_partial: false,
            validates_numbers: false,
            returns_invalid_string: false,
        }
    }
}

impl EngineConfig {
    pub fn with_default_region(mut self, region_code: impl Into<String>) -> Self {
        self.default_region = Some(region_code.into());
        self
    }

    pub fn with_format(mut self, format: PhoneNumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_allows_partial(mut self, allows_partial: bool) -> Self {
        self.allows_partial = allows_partial;
        self
    }

    pub fn with_validates_numbers(mut self, validates_numbers: bool) -> Self {
        self.validates_numbers = validates_numbers;
        self
    }

    pub fn with_returns_invalid_string(mut self, returns_invalid_string: bool) -> Self {
        self.returns_invalid_string = returns_invalid_string;
        self
    }

    /// Configuration of the partial national formatter used for live input.
    pub fn partial_national(region_code: impl Into<String>) -> Self {
        Self::default()
            .with_default_region(region_code)
            .with_allows_partial(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.default_region, None);
        assert_eq!(config.format, PhoneNumberFormat::National);
        assert!(!config.allows_partial);
        assert!(!config.validates_numbers);
        assert!(!config.returns_invalid_string);
    }

    #[test]
    fn partial_national_preset() {
        let config = EngineConfig::partial_national("GB");
        assert_eq!(config.default_region.as_deref(), Some("GB"));
        assert_eq!(config.format, PhoneNumberFormat::National);
        assert!(config.allows_partial);
    }
}
