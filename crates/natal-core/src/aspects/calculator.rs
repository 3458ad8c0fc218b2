use crate::aspects::types::{
    AspectBody, AspectBodyRef, AspectDefinition, DetectedAspect, ASPECT_DEFINITIONS,
};
use crate::zodiac::normalize_longitude;

/// Orb below which an aspect counts as exact
const EXACT_ORB: f64 = 0.1;

/// Look-ahead used to decide whether an aspect is applying (days)
const APPLYING_TIME_STEP: f64 = 0.1;

/// Relative speeds below this are too slow to call applying/separating
const MIN_RELATIVE_SPEED: f64 = 0.01;

/// Separation between two longitudes folded into [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_longitude(lon1) - normalize_longitude(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Signed separation `lon1 - lon2` folded into (-180, 180].
fn signed_separation(lon1: f64, lon2: f64) -> f64 {
    let mut signed = normalize_longitude(lon1) - normalize_longitude(lon2);
    if signed > 180.0 {
        signed -= 360.0;
    } else if signed <= -180.0 {
        signed += 360.0;
    }
    signed
}

fn round_orb(orb: f64) -> f64 {
    (orb * 100.0).round() / 100.0
}

/// Aspect detector, by default over [`ASPECT_DEFINITIONS`]
pub struct AspectCalculator {
    definitions: &'static [AspectDefinition],
}

impl AspectCalculator {
    pub fn new() -> Self {
        Self {
            definitions: ASPECT_DEFINITIONS,
        }
    }

    /// Detector over a caller-supplied table, checked in slice order.
    pub fn with_definitions(definitions: &'static [AspectDefinition]) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &'static [AspectDefinition] {
        self.definitions
    }

    /// Detect aspects between every unordered pair of `bodies`.
    ///
    /// Pairs are visited as (i, j) with i < j in input order, and definitions
    /// in table order. A pair whose separation falls inside several orb
    /// windows yields one aspect per window.
    pub fn detect(&self, bodies: &[AspectBody<'_>]) -> Vec<DetectedAspect> {
        let mut aspects = Vec::new();

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                self.collect_pair(&bodies[i], &bodies[j], &mut aspects);
            }
        }

        aspects
    }

    fn collect_pair(&self, a: &AspectBody<'_>, b: &AspectBody<'_>, out: &mut Vec<DetectedAspect>) {
        let separation = angular_separation(a.longitude, b.longitude);

        for definition in self.definitions {
            let orb = (separation - definition.exact_angle).abs();
            if orb > definition.max_orb {
                continue;
            }

            let is_applying = match (a.speed, b.speed) {
                (Some(speed_a), Some(speed_b)) => self.is_aspect_applying(
                    a.longitude,
                    b.longitude,
                    speed_a,
                    speed_b,
                    definition.exact_angle,
                    separation,
                ),
                _ => None,
            };

            out.push(DetectedAspect {
                body_a: AspectBodyRef {
                    key: a.key.to_string(),
                    name: a.name.to_string(),
                },
                body_b: AspectBodyRef {
                    key: b.key.to_string(),
                    name: b.name.to_string(),
                },
                aspect: definition.name.to_string(),
                aspect_key: definition.key.to_string(),
                severity: definition.severity,
                exact_angle: definition.exact_angle,
                orb: round_orb(orb),
                orb_used: definition.max_orb,
                is_exact: orb < EXACT_ORB,
                is_applying,
            });
        }
    }

    /// Determine if an aspect is applying (approaching exact) or separating.
    ///
    /// Projects the signed separation a short step forward and compares the
    /// distance from the exact angle. `None` when the bodies move together.
    fn is_aspect_applying(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
        aspect_angle: f64,
        current_angle: f64,
    ) -> Option<bool> {
        let relative_speed = speed1 - speed2;
        if !relative_speed.is_finite() || relative_speed.abs() < MIN_RELATIVE_SPEED {
            return None;
        }

        let signed_diff = signed_separation(lon1, lon2);
        let current_distance = (current_angle - aspect_angle).abs();

        let mut future_signed_diff = signed_diff + relative_speed * APPLYING_TIME_STEP;
        if future_signed_diff > 180.0 {
            future_signed_diff -= 360.0;
        } else if future_signed_diff < -180.0 {
            future_signed_diff += 360.0;
        }

        let future_distance = (future_signed_diff.abs() - aspect_angle).abs();

        Some(future_distance < current_distance)
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
