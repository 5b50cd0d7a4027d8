use std::env;
use std::io::Write;

use geoclassify::config::Settings;
use geoclassify::models::{Coordinates, DisasterCategory, DisasterRecord, ShelterRecord};
use geoclassify::GeoError;
use serial_test::serial;

const VARS: [&str; 3] = ["GEOCLASSIFY_NEARBY_RADIUS_KM", "GEOCLASSIFY_RATE_LIMIT", "GEOCLASSIFY_REFRESH_INTERVAL_MS"];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn defaults_without_sources() {
    clear_env();
    let settings = Settings::load(None).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.nearby_radius_km, 10.0);
    assert_eq!(settings.refresh_interval_ms, 300_000);
    assert_eq!(settings.rate_limit, 5);
}

#[test]
#[serial]
fn file_overrides_defaults() {
    clear_env();
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "nearby_radius_km = 25.0").unwrap();
    writeln!(file, "rate_limit = 12").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.nearby_radius_km, 25.0);
    assert_eq!(settings.rate_limit, 12);
    assert_eq!(settings.rate_window_ms, 60_000);
}

#[test]
#[serial]
fn missing_file_is_tolerated() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.toml");
    let settings = Settings::load(Some(absent.as_path())).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
#[serial]
fn environment_wins_over_file() {
    clear_env();
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "nearby_radius_km = 25.0").unwrap();
    env::set_var("GEOCLASSIFY_NEARBY_RADIUS_KM", "3.5");

    let settings = Settings::load(Some(file.path()));
    clear_env();
    assert_eq!(settings.unwrap().nearby_radius_km, 3.5);
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    clear_env();
    env::set_var("GEOCLASSIFY_RATE_LIMIT", "0");
    let result = Settings::load(None);
    clear_env();
    assert!(matches!(result, Err(GeoError::InvalidSetting(_))));
}

#[test]
fn validate_rejects_negative_radius() {
    let settings = Settings { nearby_radius_km: -1.0, ..Settings::default() };
    assert!(settings.validate().is_err());
    let settings = Settings { notification_radius_km: f64::NAN, ..Settings::default() };
    assert!(settings.validate().is_err());
    assert!(Settings::default().validate().is_ok());
}

#[test]
fn limiter_built_from_settings() {
    let settings = Settings { rate_limit: 2, rate_window_ms: 500, ..Settings::default() };
    let limiter = settings.rate_limiter(1_000);
    assert_eq!(limiter.limit, 2);
    assert_eq!(limiter.window_ms, 500);
    assert_eq!(limiter.window_start, 1_000);
    assert_eq!(limiter.count, 0);
}

#[test]
fn radii_drive_alert_and_shelter_views() {
    let la = Coordinates::new(34.052235, -118.243683);
    let records = vec![
        DisasterRecord::new("local", DisasterCategory::Earthquake, la, 2),
        DisasterRecord::new("regional", DisasterCategory::Flood, Coordinates::new(34.35, -118.243683), 1),
    ];
    let shelters = vec![
        ShelterRecord::new("close", Coordinates::new(34.06, -118.243683), 100, 0),
        ShelterRecord::new("outer", Coordinates::new(34.20, -118.243683), 100, 0),
    ];

    let settings = Settings::default();
    assert_eq!(settings.notifiable_alerts(&records, Some(&la)).len(), 2);
    assert_eq!(settings.nearby_shelters(&shelters, Some(&la), "").len(), 1);

    let tight = Settings { notification_radius_km: 5.0, nearby_radius_km: 20.0, ..Settings::default() };
    let ids: Vec<&str> = tight.notifiable_alerts(&records, Some(&la)).iter().map(|v| v.record.id.as_str()).collect();
    assert_eq!(ids, vec!["local"]);
    assert_eq!(tight.nearby_shelters(&shelters, Some(&la), "").len(), 2);
}

#[test]
fn refresh_follows_configured_interval() {
    let settings = Settings { refresh_interval_ms: 1_000, ..Settings::default() };
    assert!(!settings.needs_refresh(5_000, 5_999));
    assert!(settings.needs_refresh(5_000, 6_000));
}
