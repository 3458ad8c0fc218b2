//! Catalog of the bodies placed in a natal chart.
//!
//! Order matters: aspects are enumerated pairwise in catalog order.

use serde::Serialize;

/// Where a body's position comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BodySource {
    /// Queried from the ephemeris provider under this identifier.
    Ephemeris(i32),
    /// Exactly opposite (+180°) the body with this key.
    OppositeOf(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CelestialBody {
    /// Stable lowercase key, e.g. "north_node".
    pub key: &'static str,
    pub name: &'static str,
    pub source: BodySource,
}

impl CelestialBody {
    const fn ephemeris(key: &'static str, name: &'static str, id: i32) -> Self {
        Self {
            key,
            name,
            source: BodySource::Ephemeris(id),
        }
    }
}

// Swiss Ephemeris identifiers. The true node is used for the lunar nodes.
pub const BODIES: &[CelestialBody] = &[
    CelestialBody::ephemeris("sun", "Sun", 0),
    CelestialBody::ephemeris("moon", "Moon", 1),
    CelestialBody::ephemeris("mercury", "Mercury", 2),
    CelestialBody::ephemeris("venus", "Venus", 3),
    CelestialBody::ephemeris("mars", "Mars", 4),
    CelestialBody::ephemeris("jupiter", "Jupiter", 5),
    CelestialBody::ephemeris("saturn", "Saturn", 6),
    CelestialBody::ephemeris("uranus", "Uranus", 7),
    CelestialBody::ephemeris("neptune", "Neptune", 8),
    CelestialBody::ephemeris("pluto", "Pluto", 9),
    CelestialBody::ephemeris("north_node", "North Node", 11),
    CelestialBody {
        key: "south_node",
        name: "South Node",
        source: BodySource::OppositeOf("north_node"),
    },
    CelestialBody::ephemeris("chiron", "Chiron", 15),
];

/// Look up a catalog body by key (case-insensitive).
pub fn find_body(key: &str) -> Option<&'static CelestialBody> {
    BODIES.iter().find(|b| b.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        assert_eq!(BODIES.len(), 13);
        assert_eq!(BODIES[0].key, "sun");
        assert_eq!(BODIES[12].key, "chiron");
    }

    #[test]
    fn test_derived_bodies_reference_earlier_entries() {
        for (i, body) in BODIES.iter().enumerate() {
            if let BodySource::OppositeOf(source) = body.source {
                let pos = BODIES.iter().position(|b| b.key == source);
                assert!(matches!(pos, Some(p) if p < i), "{} must follow {}", body.key, source);
            }
        }
    }

    #[test]
    fn test_find_body() {
        assert_eq!(find_body("Moon").map(|b| b.name), Some("Moon"));
        assert!(find_body("vulcan").is_none());
    }
}
