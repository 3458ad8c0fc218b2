use serde::{Deserialize, Serialize};

use crate::angles::ChartAngles;
use crate::aspects::DetectedAspect;
use crate::houses::HouseReport;
use crate::zodiac::ZodiacPlacement;

/// Sun sign reported when the snapshot carries no sun.
pub const UNKNOWN_SIGN: &str = "Unknown";

/// A body with its sign and house attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBody {
    pub key: String,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub speed: f64,
    pub is_retrograde: bool,
    pub placement: ZodiacPlacement,
    /// 1-12
    pub house: u8,
}

/// The derived natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChartReport {
    pub julian_day: f64,
    pub sun_sign: String,
    pub planets: Vec<PlacedBody>,
    pub houses: Vec<HouseReport>,
    pub aspects: Vec<DetectedAspect>,
    pub angles: ChartAngles,
}

impl NatalChartReport {
    pub fn planet(&self, key: &str) -> Option<&PlacedBody> {
        self.planets.iter().find(|p| p.key == key)
    }

    /// Bodies occupying `house`, in catalog order.
    pub fn planets_in_house(&self, house: u8) -> impl Iterator<Item = &PlacedBody> {
        self.planets.iter().filter(move |p| p.house == house)
    }

    /// Aspects involving the body with `key`.
    pub fn aspects_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a DetectedAspect> {
        self.aspects
            .iter()
            .filter(move |a| a.body_a.key == key || a.body_b.key == key)
    }
}
