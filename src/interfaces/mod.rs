use crate::metadata::{NumberPattern, RegionMetadata};

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the national number pattern defined in the given
    /// NumberPattern.
    fn match_national_number(
        &self,
        number: &str,
        number_pattern: &NumberPattern,
        allow_prefix_match: bool,
    ) -> bool;

    /// Returns the length of the longest prefix of `number` matched by the
    /// leading digits pattern, `None` if the pattern matches no prefix.
    fn match_leading_digits(&self, number: &str, leading_digits_pattern: &str) -> Option<usize>;
}

/// Source of region metadata.
///
/// Implementations must be fully populated before they are handed to an
/// engine; the engine only reads from them.
pub trait MetadataProvider: Send + Sync {
    /// Metadata of a geographical region, `None` for unknown region codes.
    fn lookup_by_region(&self, region_code: &str) -> Option<&RegionMetadata>;

    /// All regions (including non-geographical entities) using the calling
    /// code. The main region for the code comes first, the rest follow in
    /// declaration order. Empty for unknown codes.
    fn lookup_by_calling_code(&self, calling_code: u16) -> Vec<&RegionMetadata>;

    fn supported_regions(&self) -> Vec<&str>;

    fn supported_calling_codes(&self) -> Vec<u16>;

    fn is_known_calling_code(&self, calling_code: u16) -> bool {
        !self.lookup_by_calling_code(calling_code).is_empty()
    }
}
