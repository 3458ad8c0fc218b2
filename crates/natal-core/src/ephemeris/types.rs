use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ephemeris::provider::EphemerisError;
use crate::houses::HouseCusps;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// A UTC instant as the ephemeris wants it: calendar date plus decimal hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcMoment {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub day: u32,
    /// Decimal UTC hour, 0 <= hour < 24
    pub hour: f64,
}

impl UtcMoment {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let hour = dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour,
        }
    }
}

impl fmt::Display for UtcMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:.4}h UTC",
            self.year, self.month, self.day, self.hour
        )
    }
}

/// House systems understood by the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

const HOUSE_SYSTEMS: &[(&str, HouseSystem)] = &[
    ("placidus", HouseSystem::Placidus),
    ("whole_sign", HouseSystem::WholeSign),
    ("koch", HouseSystem::Koch),
    ("equal", HouseSystem::Equal),
    ("regiomontanus", HouseSystem::Regiomontanus),
    ("campanus", HouseSystem::Campanus),
    ("alcabitius", HouseSystem::Alcabitius),
    ("morinus", HouseSystem::Morinus),
];

impl HouseSystem {
    /// Single-letter house system code used by the Swiss Ephemeris
    pub const fn code(self) -> u8 {
        match self {
            Self::Placidus => b'P',
            Self::WholeSign => b'W',
            Self::Koch => b'K',
            Self::Equal => b'E',
            Self::Regiomontanus => b'R',
            Self::Campanus => b'C',
            Self::Alcabitius => b'A',
            Self::Morinus => b'M',
        }
    }

    pub fn key(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system)| *system == self)
            .map(|(name, _)| *name)
            .unwrap_or("placidus")
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, system)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw coordinates of one body from the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyCoordinates {
    pub longitude: f64,
    pub latitude: f64,
    /// Longitude speed, degrees/day
    pub speed: f64,
}

/// House cusps plus the two primary angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    pub cusps: HouseCusps,
    pub ascendant: f64,
    pub midheaven: f64,
}

/// Planetary position data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// Stable body key: "sun", "north_node", ...
    pub key: String,
    pub name: String,
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

impl PlanetPosition {
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Everything the chart assembler needs, captured once per chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EphemerisSnapshot {
    pub julian_day: f64,
    pub house_cusps: HouseCusps,
    pub planet_positions: Vec<PlanetPosition>,
    pub ascendant: f64,
    pub midheaven: f64,
}
