//! The four chart angles.
//!
//! Only the ascendant and midheaven come from the ephemeris. The descendant
//! and imum coeli are always their 180° complements.

use serde::{Deserialize, Serialize};

use crate::zodiac::{map_longitude, ZodiacPlacement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AngleKind {
    Ascendant,
    Descendant,
    Midheaven,
    ImumCoeli,
}

impl AngleKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Descendant => "Descendant",
            Self::Midheaven => "Midheaven",
            Self::ImumCoeli => "Imum Coeli",
        }
    }

    /// Short label used in text output
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Ascendant => "ASC",
            Self::Descendant => "DSC",
            Self::Midheaven => "MC",
            Self::ImumCoeli => "IC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAngle {
    pub kind: AngleKind,
    pub longitude: f64,
    pub placement: ZodiacPlacement,
}

impl ChartAngle {
    fn new(kind: AngleKind, longitude: f64) -> Self {
        Self {
            kind,
            longitude,
            placement: map_longitude(longitude),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAngles {
    pub ascendant: ChartAngle,
    pub descendant: ChartAngle,
    pub midheaven: ChartAngle,
    pub imum_coeli: ChartAngle,
}

impl ChartAngles {
    /// Angles in wheel order: ASC, MC, DSC, IC.
    pub fn iter(&self) -> impl Iterator<Item = &ChartAngle> {
        [
            &self.ascendant,
            &self.midheaven,
            &self.descendant,
            &self.imum_coeli,
        ]
        .into_iter()
    }
}

/// Longitude opposite `longitude`, as `(longitude + 180) % 360`.
pub fn opposite_longitude(longitude: f64) -> f64 {
    (longitude + 180.0) % 360.0
}

/// Derive all four angles from the ascendant and midheaven longitudes.
pub fn derive_angles(ascendant: f64, midheaven: f64) -> ChartAngles {
    ChartAngles {
        ascendant: ChartAngle::new(AngleKind::Ascendant, ascendant),
        descendant: ChartAngle::new(AngleKind::Descendant, opposite_longitude(ascendant)),
        midheaven: ChartAngle::new(AngleKind::Midheaven, midheaven),
        imum_coeli: ChartAngle::new(AngleKind::ImumCoeli, opposite_longitude(midheaven)),
    }
}
