use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_PATHS: [&str; 2] = ["configs/natal.toml", "../../configs/natal.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NatalConfig {
    #[serde(default)]
    pub ephemeris: EphemerisConfig,
    #[serde(default)]
    pub timezone: TimezoneConfig,
    #[serde(default)]
    pub places: Vec<PlaceConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EphemerisConfig {
    /// Swiss Ephemeris data directory; falls back to SWISS_EPHEMERIS_PATH.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_house_system")]
    pub house_system: String,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            path: None,
            house_system: default_house_system(),
        }
    }
}

fn default_house_system() -> String {
    "placidus".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimezoneConfig {
    /// IANA zone used when no region contains the birth place.
    #[serde(default)]
    pub default_tz: Option<String>,
    #[serde(default)]
    pub regions: Vec<TimezoneRegionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimezoneRegionConfig {
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    /// IANA zone name, e.g. `Europe/London`.
    pub tz: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

impl PlaceConfig {
    /// Address shown for the place, defaulting to its name.
    pub fn address(&self) -> &str {
        self.formatted_address.as_deref().unwrap_or(&self.name)
    }
}

fn check_zone_name(name: &str, what: &str) -> anyhow::Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("{what} timezone name is empty");
    }
    Ok(())
}

impl NatalConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(name) = &self.timezone.default_tz {
            check_zone_name(name, "timezone.default_tz:")?;
        }
        for region in &self.timezone.regions {
            if region.min_lat > region.max_lat || region.min_lon > region.max_lon {
                anyhow::bail!(
                    "timezone region '{}' has min bounds above max bounds",
                    region.name
                );
            }
            check_zone_name(&region.tz, &format!("timezone region '{}':", region.name))?;
        }
        for place in &self.places {
            if !(-90.0..=90.0).contains(&place.latitude)
                || !(-180.0..=180.0).contains(&place.longitude)
            {
                anyhow::bail!(
                    "place '{}' has out-of-range coordinates ({}, {})",
                    place.name,
                    place.latitude,
                    place.longitude
                );
            }
        }
        Ok(())
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<NatalConfig> {
    let config: NatalConfig = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse natal.toml: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// Try common relative paths for `configs/natal.toml`.
pub fn read_config_text() -> Option<(PathBuf, String)> {
    for p in &DEFAULT_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Some((PathBuf::from(p), c));
        }
    }
    None
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default locations are
/// searched and a missing file yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<NatalConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
            parse_config(&text)
        }
        None => match read_config_text() {
            Some((found, text)) => parse_config(&text)
                .map_err(|e| anyhow::anyhow!("{} ({})", e, found.display())),
            None => Ok(NatalConfig::default()),
        },
    }
}
