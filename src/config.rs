use std::path::Path;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{GeoError, Result};
use crate::feed::{alerts_near, is_stale, AlertView, REFRESH_INTERVAL_MS};
use crate::models::{Coordinates, DisasterRecord, ShelterRecord};
use crate::ratelimit::{RateLimitState, DEFAULT_LIMIT, DEFAULT_WINDOW_MS};
use crate::shelter::{nearby_shelters, NEARBY_RADIUS_KM};

pub const ENV_PREFIX: &str = "GEOCLASSIFY";
pub const DEFAULT_NOTIFICATION_RADIUS_KM: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub nearby_radius_km: f64,
    pub notification_radius_km: f64,
    pub refresh_interval_ms: i64,
    pub rate_limit: u32,
    pub rate_window_ms: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nearby_radius_km: NEARBY_RADIUS_KM,
            notification_radius_km: DEFAULT_NOTIFICATION_RADIUS_KM,
            refresh_interval_ms: REFRESH_INTERVAL_MS,
            rate_limit: DEFAULT_LIMIT,
            rate_window_ms: DEFAULT_WINDOW_MS,
        }
    }
}

impl Settings {
    /// Layered load: built-in defaults, then the optional file, then
    /// `GEOCLASSIFY_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("nearby_radius_km", defaults.nearby_radius_km)?
            .set_default("notification_radius_km", defaults.notification_radius_km)?
            .set_default("refresh_interval_ms", defaults.refresh_interval_ms)?
            .set_default("rate_limit", defaults.rate_limit as i64)?
            .set_default("rate_window_ms", defaults.rate_window_ms)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        settings.validate()?;

        info!(
            nearby_radius_km = settings.nearby_radius_km,
            refresh_interval_ms = settings.refresh_interval_ms,
            rate_limit = settings.rate_limit,
            "settings loaded"
        );
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.nearby_radius_km >= 0.0) {
            return Err(GeoError::InvalidSetting(format!(
                "nearby_radius_km must be non-negative, got {}",
                self.nearby_radius_km
            )));
        }
        if !(self.notification_radius_km >= 0.0) {
            return Err(GeoError::InvalidSetting(format!(
                "notification_radius_km must be non-negative, got {}",
                self.notification_radius_km
            )));
        }
        if self.refresh_interval_ms <= 0 {
            return Err(GeoError::InvalidSetting("refresh_interval_ms must be positive".to_string()));
        }
        if self.rate_limit == 0 {
            return Err(GeoError::InvalidSetting("rate_limit must be positive".to_string()));
        }
        if self.rate_window_ms <= 0 {
            return Err(GeoError::InvalidSetting("rate_window_ms must be positive".to_string()));
        }
        Ok(())
    }

    pub fn rate_limiter(&self, now_ms: i64) -> RateLimitState {
        RateLimitState::new(self.rate_limit, self.rate_window_ms, now_ms)
    }

    /// Alerts close enough to notify the user about.
    pub fn notifiable_alerts<'a>(
        &self,
        records: &'a [DisasterRecord],
        center: Option<&Coordinates>,
    ) -> Vec<AlertView<'a>> {
        alerts_near(records, center, self.notification_radius_km)
    }

    pub fn nearby_shelters<'a>(
        &self,
        shelters: &'a [ShelterRecord],
        center: Option<&Coordinates>,
        term: &str,
    ) -> Vec<&'a ShelterRecord> {
        nearby_shelters(shelters, center, self.nearby_radius_km, term)
    }

    pub fn needs_refresh(&self, fetched_at_ms: i64, now_ms: i64) -> bool {
        is_stale(fetched_at_ms, now_ms, self.refresh_interval_ms)
    }
}
