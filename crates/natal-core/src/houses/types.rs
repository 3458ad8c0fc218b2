use serde::{Deserialize, Serialize};

use crate::zodiac::ZodiacPlacement;

/// The 12 house cusps of a chart, house 1 first.
///
/// Cusps are circular longitudes; the sequence may wrap past 360°/0° once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseCusps(pub [f64; 12]);

impl HouseCusps {
    pub fn new(cusps: [f64; 12]) -> Self {
        Self(cusps)
    }

    /// Build from a slice, `None` unless it holds exactly 12 values.
    pub fn from_slice(cusps: &[f64]) -> Option<Self> {
        let array: [f64; 12] = cusps.try_into().ok()?;
        Some(Self(array))
    }

    /// Cusp longitude of house `house` (1-based). House 13 wraps to house 1.
    pub fn cusp(&self, house: u8) -> f64 {
        let index = (usize::from(house).max(1) - 1) % 12;
        self.0[index]
    }

    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }
}

/// A house cusp as it appears in the chart report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseReport {
    pub number: u8,
    pub cusp_longitude: f64,
    pub placement: ZodiacPlacement,
}
