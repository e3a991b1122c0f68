pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Region code used by metadata of non-geographical entities such as the
    /// International Toll Free Service (+800).
    pub fn non_geo_entity() -> &'static str {
        return "001";
    }

    /// Returns `true` for codes naming an actual geographical region.
    pub fn is_geographical(region_code: &str) -> bool {
        region_code != Self::zz() && region_code != Self::non_geo_entity()
    }
}
