use astrolink::chart::{ChartAssembler, ChartInput};
use astrolink::ephemeris::{Body, Ephemeris, EphemerisError, SwissEphemerisAdapter, TRACKED_BODIES};
use astrolink::zodiac::Sign;
use astrolink_config::ChartSettings;
use std::path::PathBuf;

#[test]
fn unknown_house_system_is_rejected() {
    let dir = std::env::temp_dir();
    let err = SwissEphemerisAdapter::new(Some(dir))
        .and_then(|adapter| adapter.with_house_system("nonexistent"))
        .err()
        .unwrap();
    assert!(matches!(err, EphemerisError::InvalidHouseSystem { .. }));
}

#[test]
fn settings_with_missing_path_fail() {
    let settings = ChartSettings {
        ephemeris_path: PathBuf::from("/no/such/ephemeris/dir"),
        ..ChartSettings::default()
    };
    assert!(ChartAssembler::from_settings(&settings).is_err());
}

#[test]
fn adapter_takes_path_and_house_system_from_settings() {
    let settings = ChartSettings {
        ephemeris_path: std::env::temp_dir(),
        house_system: "Koch".to_string(),
        ..ChartSettings::default()
    };
    // no *.se1 files in the temp dir: a warning, not an error
    let adapter = SwissEphemerisAdapter::from_settings(&settings).unwrap();
    assert_eq!(adapter.ephemeris_path(), std::env::temp_dir().as_path());
    assert_eq!(adapter.house_system(), "koch");
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_calc_positions_basic() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let jd = adapter.julian_day(2000, 1, 1, 12.0).unwrap();
    assert!((jd - 2_451_545.0).abs() < 1e-6);

    // Sun at J2000 is about 280.46 degrees, early Capricorn
    let sun = adapter.body_longitude(jd, Body::Sun).unwrap();
    assert!((sun - 280.46).abs() < 0.1, "{sun}");

    for body in TRACKED_BODIES {
        let lon = adapter.body_longitude(jd, body).unwrap();
        assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
    }

    let houses = adapter.houses(jd, 40.7128, -74.0060).unwrap();
    assert_eq!(houses.cusps[0], houses.ascendant);
}

#[tokio::test]
#[ignore] // Requires Swiss Ephemeris files
async fn test_full_chart_with_swiss_ephemeris() {
    let settings = astrolink_config::load_chart_settings().unwrap();
    let assembler = ChartAssembler::from_settings(&settings).unwrap();
    let input = ChartInput::new("2000-01-01", "12:00", 51.48, 0.0).with_name("Greenwich");
    let chart = assembler.compute_natal_chart(&input).await.unwrap();

    assert_eq!(chart.body(Body::Sun).unwrap().position().sign, Sign::Capricorn);
    assert_eq!(chart.houses.len(), 12);
}
