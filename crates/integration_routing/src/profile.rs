//! Travel mode to routing profile mapping

use domain::TravelMode;

/// Profile used when the mode is missing or unknown
pub const DEFAULT_PROFILE: &str = "car";

/// Map a travel mode onto the routing provider's profile token
#[must_use]
pub const fn map_profile(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "car",
        TravelMode::Walking => "foot",
        TravelMode::Cycling | TravelMode::Riding => "bike",
    }
}

/// Map a raw mode name, falling back to [`DEFAULT_PROFILE`]
#[must_use]
pub fn profile_for_name(name: Option<&str>) -> &'static str {
    name.and_then(|n| n.parse::<TravelMode>().ok())
        .map_or(DEFAULT_PROFILE, map_profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_table() {
        assert_eq!(map_profile(TravelMode::Driving), "car");
        assert_eq!(map_profile(TravelMode::Walking), "foot");
        assert_eq!(map_profile(TravelMode::Cycling), "bike");
        assert_eq!(map_profile(TravelMode::Riding), "bike");
    }

    #[test]
    fn test_names() {
        assert_eq!(profile_for_name(Some("driving")), "car");
        assert_eq!(profile_for_name(Some("walking")), "foot");
        assert_eq!(profile_for_name(Some("cycling")), "bike");
        assert_eq!(profile_for_name(Some("riding")), "bike");
    }

    #[test]
    fn test_unknown_or_missing_is_car() {
        assert_eq!(profile_for_name(Some("flying")), "car");
        assert_eq!(profile_for_name(Some("")), "car");
        assert_eq!(profile_for_name(None), "car");
    }

    #[test]
    fn test_total_over_enum() {
        for mode in TravelMode::ALL {
            assert!(["car", "foot", "bike"].contains(&map_profile(mode)));
        }
    }
}
