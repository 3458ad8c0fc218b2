use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectSeverity {
    Major,
    Minor,
}

/// One entry of the fixed aspect table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectDefinition {
    pub name: &'static str,
    pub key: &'static str,
    /// Exact separation in degrees (0-180)
    pub exact_angle: f64,
    /// Largest deviation from `exact_angle` still counted
    pub max_orb: f64,
    pub severity: AspectSeverity,
}

const fn def(
    name: &'static str,
    key: &'static str,
    exact_angle: f64,
    max_orb: f64,
    severity: AspectSeverity,
) -> AspectDefinition {
    AspectDefinition {
        name,
        key,
        exact_angle,
        max_orb,
        severity,
    }
}

/// Aspect table, majors first. Detection checks definitions in this order.
pub const ASPECT_DEFINITIONS: &[AspectDefinition] = &[
    def("Conjunction", "conjunction", 0.0, 10.0, AspectSeverity::Major),
    def("Sextile", "sextile", 60.0, 6.0, AspectSeverity::Major),
    def("Square", "square", 90.0, 8.0, AspectSeverity::Major),
    def("Trine", "trine", 120.0, 8.0, AspectSeverity::Major),
    def("Opposition", "opposition", 180.0, 10.0, AspectSeverity::Major),
    def("Semi-sextile", "semi_sextile", 30.0, 3.0, AspectSeverity::Minor),
    def("Semi-square", "semi_square", 45.0, 3.0, AspectSeverity::Minor),
    def("Sesquiquadrate", "sesquiquadrate", 135.0, 3.0, AspectSeverity::Minor),
    def("Quincunx", "quincunx", 150.0, 3.0, AspectSeverity::Minor),
];

/// A body handed to the aspect detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectBody<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub longitude: f64,
    /// Longitude speed in degrees/day, when known.
    pub speed: Option<f64>,
}

/// Reference to one side of an aspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectBodyRef {
    pub key: String,
    pub name: String,
}

/// An aspect found between two bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedAspect {
    pub body_a: AspectBodyRef,
    pub body_b: AspectBodyRef,
    /// Aspect display name: "Trine", "Quincunx", etc.
    pub aspect: String,
    pub aspect_key: String,
    pub severity: AspectSeverity,
    pub exact_angle: f64,
    /// Deviation from the exact angle, rounded to 2 decimals
    pub orb: f64,
    /// Maximum orb of the matched definition
    pub orb_used: f64,
    /// Within 0.1° of exact
    pub is_exact: bool,
    /// Whether the separation is closing toward exact. `None` without speeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_applying: Option<bool>,
}
