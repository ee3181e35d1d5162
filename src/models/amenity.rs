use serde::{Deserialize, Serialize};

/// Amenity offered by a listing.
///
/// Serialized as its lowercase name. Values outside the known set are kept
/// verbatim in `Other` so a catalog never fails to load over an amenity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Amenity {
    Wifi,
    Parking,
    Coffee,
    Other(String),
}

/// How an amenity is shown in listing cards and the booking dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityDisplay {
    pub label: String,
    pub icon: &'static str,
}

/// Icon for amenities without a dedicated entry
pub const FALLBACK_ICON: &str = "home";

const DISPLAY_TABLE: &[(&str, &str, &str)] = &[
    ("wifi", "Wifi", "wifi"),
    ("parking", "Parking", "car"),
    ("coffee", "Coffee", "coffee"),
];

impl Amenity {
    pub fn name(&self) -> &str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Parking => "parking",
            Amenity::Coffee => "coffee",
            Amenity::Other(name) => name,
        }
    }

    pub fn display(&self) -> AmenityDisplay {
        let name = self.name();
        match DISPLAY_TABLE.iter().find(|(key, _, _)| *key == name) {
            Some((_, label, icon)) => AmenityDisplay {
                label: (*label).to_string(),
                icon,
            },
            None => AmenityDisplay {
                label: capitalize(name),
                icon: FALLBACK_ICON,
            },
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<String> for Amenity {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "wifi" => Amenity::Wifi,
            "parking" => Amenity::Parking,
            "coffee" => Amenity::Coffee,
            _ => Amenity::Other(value),
        }
    }
}

impl From<&str> for Amenity {
    fn from(value: &str) -> Self {
        Amenity::from(value.to_string())
    }
}

impl From<Amenity> for String {
    fn from(value: Amenity) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_amenities_use_their_icons() {
        assert_eq!(Amenity::Parking.display().icon, "car");
        assert_eq!(Amenity::Wifi.display().label, "Wifi");
    }

    #[test]
    fn unknown_amenity_falls_back() {
        let amenity = Amenity::from("pool");
        assert_eq!(amenity, Amenity::Other("pool".to_string()));
        let display = amenity.display();
        assert_eq!(display.label, "Pool");
        assert_eq!(display.icon, FALLBACK_ICON);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![Amenity::Coffee, Amenity::from("sauna")]).unwrap();
        assert_eq!(json, r#"["coffee","sauna"]"#);
        let parsed: Vec<Amenity> = serde_json::from_str(r#"["WiFi","sauna"]"#).unwrap();
        assert_eq!(parsed, vec![Amenity::Wifi, Amenity::Other("sauna".to_string())]);
    }
}
