use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("coordinates out of range: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error("unknown severity level: {0}")]
    UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
