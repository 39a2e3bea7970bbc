use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";
pub const DEFAULT_HOUSE_SYSTEM: &str = "placidus";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolved settings for the chart engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub ephemeris_path: PathBuf,
    pub house_system: String,
    pub ephemeris_timeout: Duration,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: PathBuf::from(DEFAULT_EPHEMERIS_PATH),
            house_system: DEFAULT_HOUSE_SYSTEM.to_string(),
            ephemeris_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_house_system() -> String {
    DEFAULT_HOUSE_SYSTEM.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
}

/// Try the usual relative locations of `configs/astrolink.toml`.
/// Returns `None` when no file is found; the caller falls back to defaults.
pub fn read_config_toml_text() -> Option<String> {
    let paths = ["configs/astrolink.toml", "../../configs/astrolink.toml"];
    paths.iter().find_map(|p| fs::read_to_string(p).ok())
}

/// Parse settings from TOML text. `env_path` wins over the file's path.
pub fn parse_chart_settings(text: &str, env_path: Option<PathBuf>) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse astrolink.toml: {e}"))?;
    let mut settings = ChartSettings::default();
    if let Some(EphemerisToml {
        path,
        house_system,
        timeout_secs,
    }) = root.ephemeris
    {
        if let Some(path) = path {
            settings.ephemeris_path = path;
        }
        settings.house_system = house_system;
        if timeout_secs == 0 {
            anyhow::bail!("ephemeris.timeout_secs must be greater than zero");
        }
        settings.ephemeris_timeout = Duration::from_secs(timeout_secs);
    }
    if let Some(path) = env_path {
        settings.ephemeris_path = path;
    }
    Ok(settings)
}

/// Load settings from `configs/astrolink.toml` (if present) and the environment.
pub fn load_chart_settings() -> anyhow::Result<ChartSettings> {
    let env_path = env::var(EPHEMERIS_PATH_ENV).ok().map(PathBuf::from);
    match read_config_toml_text() {
        Some(text) => parse_chart_settings(&text, env_path),
        None => {
            let mut settings = ChartSettings::default();
            if let Some(path) = env_path {
                settings.ephemeris_path = path;
            }
            Ok(settings)
        }
    }
}

/// Check that `dir` exists and holds at least one Swiss Ephemeris data file (`*.se1`).
pub fn validate_ephemeris_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("ephemeris path does not exist: {}", dir.display());
    }
    let has_data = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .any(|entry| entry.path().extension().is_some_and(|ext| ext == "se1"));
    if !has_data {
        anyhow::bail!(
            "No Swiss Ephemeris data files (*.se1) found in {}",
            dir.display()
        );
    }
    Ok(())
}
