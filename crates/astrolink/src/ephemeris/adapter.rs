use crate::ephemeris::bodies::Body;
use crate::ephemeris::types::{EphemerisError, HouseCusps};
use crate::ephemeris::Ephemeris;
use crate::zodiac::normalize_longitude;
use astrolink_config::{
    validate_ephemeris_dir, ChartSettings, DEFAULT_EPHEMERIS_PATH, EPHEMERIS_PATH_ENV,
};
use chrono::NaiveDate;
use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use swisseph::swe::{calc_ut, houses_ex, julday};

// FLG_SWIEPH: read positions from the Swiss Ephemeris data files
const FLG_SWIEPH: i32 = 2;
const GREG_CAL: u32 = 1;

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, u8)] = &[
    ("placidus", b'P'),
    ("whole_sign", b'W'),
    ("koch", b'K'),
    ("equal", b'E'),
    ("regiomontanus", b'R'),
    ("campanus", b'C'),
    ("alcabitius", b'A'),
    ("morinus", b'M'),
];

// The C library keeps global state: one data path per process, one call at a time.
static EPHE_PATH: OnceLock<PathBuf> = OnceLock::new();
static SWISS_LOCK: Mutex<()> = Mutex::new(());

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    house_system: &'static str,
    house_system_byte: u8,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Without a path, `SWISS_EPHEMERIS_PATH` is used, then
    /// `/usr/local/share/swisseph`. Houses default to Placidus.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var(EPHEMERIS_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        install_ephemeris_path(&path);

        let (house_system, house_system_byte) = resolve_house_system("placidus")?;
        Ok(Self {
            ephemeris_path: path,
            house_system,
            house_system_byte,
        })
    }

    /// Build an adapter from loaded settings (path and house system).
    pub fn from_settings(settings: &ChartSettings) -> Result<Self, EphemerisError> {
        let adapter = Self::new(Some(settings.ephemeris_path.clone()))?
            .with_house_system(&settings.house_system)?;
        if let Err(e) = validate_ephemeris_dir(&adapter.ephemeris_path) {
            warn!("{}; body positions will fail until data files are installed", e);
        }
        Ok(adapter)
    }

    /// Switch the house system, e.g. `"koch"` or `"whole_sign"`.
    pub fn with_house_system(mut self, house_system: &str) -> Result<Self, EphemerisError> {
        let (name, byte) = resolve_house_system(house_system)?;
        self.house_system = name;
        self.house_system_byte = byte;
        Ok(self)
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    pub fn house_system(&self) -> &str {
        self.house_system
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn julian_day(
        &self,
        year: i32,
        month: u32,
        day: u32,
        decimal_hour: f64,
    ) -> Result<f64, EphemerisError> {
        // julday silently rolls invalid dates over; reject them first
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(EphemerisError::InvalidDate { year, month, day });
        }
        let _guard = lock_native();
        Ok(julday(year, month as i32, day as i32, decimal_hour, GREG_CAL))
    }

    fn houses(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<HouseCusps, EphemerisError> {
        use swisseph::{AscMc, Cusp};

        let (c, a) = {
            let _guard = lock_native();
            houses_ex(
                julian_day,
                FLG_SWIEPH,
                latitude,
                longitude,
                self.house_system_byte as i32,
            )
        };
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let raw = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if raw.iter().chain([&ascmc.ascendant, &ascmc.mc, &ascmc.vertex]).any(|v| !v.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} houses undefined at JD {} for latitude {}",
                    self.house_system, julian_day, latitude
                ),
            });
        }

        debug!(
            "houses ({}) at JD {}: asc {:.4} mc {:.4}",
            self.house_system, julian_day, ascmc.ascendant, ascmc.mc
        );

        Ok(HouseCusps {
            cusps: raw.map(normalize_longitude),
            ascendant: normalize_longitude(ascmc.ascendant),
            midheaven: normalize_longitude(ascmc.mc),
            vertex: normalize_longitude(ascmc.vertex),
        })
    }

    fn body_longitude(&self, julian_day: f64, body: Body) -> Result<f64, EphemerisError> {
        let result = {
            let _guard = lock_native();
            calc_ut(julian_day, body.swiss_id() as u32, FLG_SWIEPH as u32)
        }
        .map_err(|e| EphemerisError::CalculationFailed {
            body: body.name().to_string(),
            julian_day,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        Ok(normalize_longitude(result.out[0]))
    }
}

/// Point the C library at the data directory. Only the first path wins.
///
/// `swe_set_ephe_path` writes thread-local state, so it would not reach the
/// blocking-pool threads that do the calculations. Each thread reads
/// `SE_EPHE_PATH` on its first call instead.
fn install_ephemeris_path(path: &Path) {
    let installed = EPHE_PATH.get_or_init(|| {
        env::set_var("SE_EPHE_PATH", path);
        debug!("Swiss Ephemeris data path set to {}", path.display());
        path.to_path_buf()
    });
    if installed != path {
        warn!(
            "Swiss Ephemeris data path already set to {}; ignoring {}",
            installed.display(),
            path.display()
        );
    }
}

fn lock_native() -> std::sync::MutexGuard<'static, ()> {
    SWISS_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Convert house system string to byte format
fn resolve_house_system(house_system: &str) -> Result<(&'static str, u8), EphemerisError> {
    let wanted = house_system.to_lowercase();
    HOUSE_SYSTEMS
        .iter()
        .find(|(name, _)| *name == wanted)
        .copied()
        .ok_or_else(|| EphemerisError::InvalidHouseSystem {
            system: house_system.to_string(),
            valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_system_lookup_is_case_insensitive() {
        assert_eq!(resolve_house_system("Placidus").unwrap(), ("placidus", b'P'));
        assert_eq!(resolve_house_system("whole_sign").unwrap().1, b'W');
    }

    #[test]
    fn unknown_house_system_lists_valid_ones() {
        match resolve_house_system("topocentric") {
            Err(EphemerisError::InvalidHouseSystem { system, valid }) => {
                assert_eq!(system, "topocentric");
                assert!(valid.contains(&"koch".to_string()));
            }
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_path_is_reported() {
        let err = SwissEphemerisAdapter::new(Some(PathBuf::from("/definitely/not/here")))
            .err()
            .unwrap();
        assert!(matches!(err, EphemerisError::FileNotFound { .. }));
    }

    #[test]
    fn julian_day_uses_gregorian_calendar() {
        // swe_julday is pure arithmetic; no data files needed
        let adapter = SwissEphemerisAdapter::new(Some(env::temp_dir())).unwrap();
        let jd = adapter.julian_day(2000, 1, 1, 12.0).unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-9, "{jd}");
        let jd = adapter.julian_day(1957, 10, 4, 0.81 * 24.0).unwrap();
        assert!((jd - 2_436_116.31).abs() < 1e-6, "{jd}");
    }

    #[test]
    fn julian_day_rejects_impossible_dates() {
        let adapter = SwissEphemerisAdapter::new(Some(env::temp_dir())).unwrap();
        let err = adapter.julian_day(2023, 2, 30, 0.0).unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidDate { month: 2, day: 30, .. }));
    }
}
