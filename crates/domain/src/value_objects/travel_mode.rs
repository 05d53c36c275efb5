//! Travel mode value object

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How the traveller intends to move between two points
///
/// Deserialization never fails: unknown names, `null` and non-string values
/// all become [`TravelMode::Driving`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// By car (default)
    #[default]
    Driving,
    /// On foot
    Walking,
    /// By bicycle
    Cycling,
    /// Riding a two-wheeler; routed like a bicycle
    Riding,
}

impl TravelMode {
    /// All modes, in declaration order
    pub const ALL: [Self; 4] = [Self::Driving, Self::Walking, Self::Cycling, Self::Riding];

    /// Lowercase name as used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Riding => "riding",
        }
    }

    /// Lenient lookup: unknown names fall back to [`TravelMode::Driving`]
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "cycling" => Ok(Self::Cycling),
            "riding" => Ok(Self::Riding),
            _ => Err(format!(
                "Invalid travel mode: {s}. Use 'driving', 'walking', 'cycling' or 'riding'"
            )),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMode {
    Name(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for TravelMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawMode::deserialize(deserializer)? {
            RawMode::Name(name) => Self::from_name_or_default(&name),
            RawMode::Other(_) => Self::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_driving() {
        assert_eq!(TravelMode::default(), TravelMode::Driving);
    }

    #[test]
    fn test_from_str_strict() {
        assert_eq!("walking".parse::<TravelMode>(), Ok(TravelMode::Walking));
        assert_eq!("CYCLING".parse::<TravelMode>(), Ok(TravelMode::Cycling));
        assert!("flying".parse::<TravelMode>().is_err());
    }

    #[test]
    fn test_lenient_lookup() {
        assert_eq!(TravelMode::from_name_or_default("riding"), TravelMode::Riding);
        assert_eq!(TravelMode::from_name_or_default("flying"), TravelMode::Driving);
        assert_eq!(TravelMode::from_name_or_default(""), TravelMode::Driving);
    }

    #[test]
    fn test_display_matches_wire_name() {
        for mode in TravelMode::ALL {
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn test_deserialize_unknown_is_driving() {
        let mode: TravelMode = serde_json::from_str(r#""hovercraft""#).expect("json");
        assert_eq!(mode, TravelMode::Driving);

        let mode: TravelMode = serde_json::from_str(r#""walking""#).expect("json");
        assert_eq!(mode, TravelMode::Walking);
    }

    #[test]
    fn test_deserialize_null_and_non_strings_is_driving() {
        for json in ["null", "7", "true", r#"{"name": "walking"}"#, r#"["walking"]"#] {
            let mode: TravelMode = serde_json::from_str(json).expect("json");
            assert_eq!(mode, TravelMode::Driving, "input: {json}");
        }
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&TravelMode::Cycling).expect("serialize");
        assert_eq!(json, r#""cycling""#);
    }
}
