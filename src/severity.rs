use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::models::{DisasterCategory, DisasterRecord};

/// Coarse danger level. Ordering runs from `Low` up to `Critical`.
///
/// `Low` is reserved for administrative overrides; the threshold table never
/// yields it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl SeverityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::High => "high",
            SeverityLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeverityLevel {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(SeverityLevel::Low),
            "moderate" => Ok(SeverityLevel::Moderate),
            "high" => Ok(SeverityLevel::High),
            "critical" => Ok(SeverityLevel::Critical),
            other => Err(GeoError::UnknownSeverity(other.to_string())),
        }
    }
}

pub const EARTHQUAKE_CRITICAL_MAGNITUDE: f64 = 6.0;
pub const EARTHQUAKE_HIGH_MAGNITUDE: f64 = 4.5;
pub const FLOOD_CRITICAL_LEVEL_M: f64 = 3.0;
pub const FLOOD_HIGH_LEVEL_M: f64 = 2.0;
pub const WIND_CRITICAL_MPH: f64 = 110.0;
pub const WIND_HIGH_MPH: f64 = 74.0;
pub const WILDFIRE_CRITICAL_ACRES: f64 = 10_000.0;
pub const WILDFIRE_HIGH_ACRES: f64 = 5_000.0;

// Earthquakes promote at the boundary value; every other scale needs to exceed it.
fn tier_inclusive(value: f64, critical: f64, high: f64) -> SeverityLevel {
    if value >= critical {
        SeverityLevel::Critical
    } else if value >= high {
        SeverityLevel::High
    } else {
        SeverityLevel::Moderate
    }
}

fn tier_strict(value: f64, critical: f64, high: f64) -> SeverityLevel {
    if value > critical {
        SeverityLevel::Critical
    } else if value > high {
        SeverityLevel::High
    } else {
        SeverityLevel::Moderate
    }
}

/// Classify a raw reading for the given category.
///
/// Categories without a scale, and missing readings, fall back to `Moderate`.
pub fn classify_severity(category: DisasterCategory, reading: Option<f64>) -> SeverityLevel {
    let Some(value) = reading else {
        return SeverityLevel::Moderate;
    };
    match category {
        DisasterCategory::Earthquake => {
            tier_inclusive(value, EARTHQUAKE_CRITICAL_MAGNITUDE, EARTHQUAKE_HIGH_MAGNITUDE)
        }
        DisasterCategory::Flood => tier_strict(value, FLOOD_CRITICAL_LEVEL_M, FLOOD_HIGH_LEVEL_M),
        DisasterCategory::Hurricane | DisasterCategory::Tornado => {
            tier_strict(value, WIND_CRITICAL_MPH, WIND_HIGH_MPH)
        }
        DisasterCategory::Wildfire => tier_strict(value, WILDFIRE_CRITICAL_ACRES, WILDFIRE_HIGH_ACRES),
        DisasterCategory::Tsunami | DisasterCategory::Other => SeverityLevel::Moderate,
    }
}

/// Category names that do not parse map to `Other`, so this never fails.
pub fn classify_named(category: &str, reading: Option<f64>) -> SeverityLevel {
    let category = category.parse().unwrap_or(DisasterCategory::Other);
    classify_severity(category, reading)
}

pub fn classify_record(record: &DisasterRecord) -> SeverityLevel {
    classify_severity(record.category, record.reading())
}
