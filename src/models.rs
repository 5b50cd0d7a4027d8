use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Range-checked constructor for ingestion boundaries.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self> {
        let lat_ok = (-90.0..=90.0).contains(&latitude);
        let lon_ok = (-180.0..=180.0).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(GeoError::InvalidCoordinates { latitude, longitude });
        }
        Ok(Self::new(latitude, longitude))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DisasterCategory {
    Earthquake,
    Flood,
    Hurricane,
    Tornado,
    Wildfire,
    Tsunami,
    Other,
}

impl DisasterCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DisasterCategory::Earthquake => "earthquake",
            DisasterCategory::Flood => "flood",
            DisasterCategory::Hurricane => "hurricane",
            DisasterCategory::Tornado => "tornado",
            DisasterCategory::Wildfire => "wildfire",
            DisasterCategory::Tsunami => "tsunami",
            DisasterCategory::Other => "other",
        }
    }
}

impl fmt::Display for DisasterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Unrecognized names land in `Other` so classification degrades instead of failing.
impl FromStr for DisasterCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "earthquake" => DisasterCategory::Earthquake,
            "flood" => DisasterCategory::Flood,
            "hurricane" => DisasterCategory::Hurricane,
            "tornado" => DisasterCategory::Tornado,
            "wildfire" => DisasterCategory::Wildfire,
            "tsunami" => DisasterCategory::Tsunami,
            _ => DisasterCategory::Other,
        })
    }
}

impl From<String> for DisasterCategory {
    fn from(name: String) -> Self {
        name.parse().unwrap_or(DisasterCategory::Other)
    }
}

/// One disaster event as delivered by an acquisition snapshot.
///
/// At most one reading is expected per category; `reading()` picks the one
/// the category is classified on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub category: DisasterCategory,
    pub coordinates: Coordinates,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

impl DisasterRecord {
    pub fn new(id: &str, category: DisasterCategory, coordinates: Coordinates, timestamp: i64) -> Self {
        Self {
            id: id.to_string(),
            category,
            coordinates,
            timestamp,
            title: String::new(),
            description: String::new(),
            source: String::new(),
            url: None,
            magnitude: None,
            water_level: None,
            wind_speed: None,
            area: None,
        }
    }

    pub fn reading(&self) -> Option<f64> {
        match self.category {
            DisasterCategory::Earthquake => self.magnitude,
            DisasterCategory::Flood => self.water_level,
            DisasterCategory::Hurricane | DisasterCategory::Tornado => self.wind_speed,
            DisasterCategory::Wildfire => self.area,
            DisasterCategory::Tsunami | DisasterCategory::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub coordinates: Coordinates,
    pub capacity: u32,
    pub occupancy: u32,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ShelterRecord {
    pub fn new(id: &str, coordinates: Coordinates, capacity: u32, occupancy: u32) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            address: String::new(),
            coordinates,
            capacity,
            occupancy,
            amenities: BTreeSet::new(),
            active: true,
        }
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a.eq_ignore_ascii_case(amenity))
    }
}

/// Anything with a position that radius filtering can act on.
pub trait Located {
    fn coordinates(&self) -> Coordinates;
}

impl Located for Coordinates {
    fn coordinates(&self) -> Coordinates {
        *self
    }
}

impl Located for DisasterRecord {
    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

impl Located for ShelterRecord {
    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinates(&self) -> Coordinates {
        (**self).coordinates()
    }
}
