use geoclassify::models::{Coordinates, DisasterCategory, DisasterRecord, ShelterRecord};
use geoclassify::GeoError;

#[test]
fn validated_coordinates_range_check() {
    assert!(Coordinates::validated(90.0, -180.0).is_ok());
    assert!(Coordinates::validated(-90.0, 180.0).is_ok());
    assert!(matches!(
        Coordinates::validated(90.5, 0.0),
        Err(GeoError::InvalidCoordinates { .. })
    ));
    assert!(Coordinates::validated(0.0, 180.1).is_err());
    assert!(Coordinates::validated(f64::NAN, 0.0).is_err());
}

#[test]
fn category_names_parse_leniently() {
    assert_eq!("Hurricane".parse::<DisasterCategory>().unwrap(), DisasterCategory::Hurricane);
    assert_eq!("landslide".parse::<DisasterCategory>().unwrap(), DisasterCategory::Other);
    assert_eq!(DisasterCategory::Wildfire.to_string(), "wildfire");
}

#[test]
fn reading_follows_category() {
    let at = Coordinates::new(0.0, 0.0);
    let mut r = DisasterRecord::new("x", DisasterCategory::Tornado, at, 0);
    r.wind_speed = Some(90.0);
    r.magnitude = Some(5.0);
    assert_eq!(r.reading(), Some(90.0));

    r.category = DisasterCategory::Tsunami;
    assert_eq!(r.reading(), None);
}

#[test]
fn record_serializes_with_wire_names() {
    let mut r = DisasterRecord::new("fl-1", DisasterCategory::Flood, Coordinates::new(1.0, 2.0), 42);
    r.water_level = Some(4.2);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["type"], "flood");
    assert_eq!(json["waterLevel"], 4.2);
    assert!(json.get("magnitude").is_none());
}

#[test]
fn shelter_defaults_when_fields_absent() {
    let json = r#"{"id": "s1", "coordinates": {"latitude": 1.0, "longitude": 2.0}, "capacity": 10, "occupancy": 3}"#;
    let s: ShelterRecord = serde_json::from_str(json).unwrap();
    assert!(s.active);
    assert!(s.amenities.is_empty());
    assert!(s.name.is_empty());
}
