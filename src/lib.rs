pub mod config;
pub mod error;
pub mod feed;
pub mod geo;
pub mod logger;
pub mod models;
pub mod ratelimit;
pub mod severity;
pub mod shelter;

pub use error::{GeoError, Result};
pub use geo::{distance_km, filter_by_radius, within_radius};
pub use models::{Coordinates, DisasterCategory, DisasterRecord, Located, ShelterRecord};
pub use severity::{classify_severity, SeverityLevel};
