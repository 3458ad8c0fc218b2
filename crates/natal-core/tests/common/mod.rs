#![allow(dead_code)]

use natal_core::ephemeris::{EphemerisSnapshot, PlanetPosition};
use natal_core::houses::HouseCusps;

pub fn position(key: &str, name: &str, longitude: f64, speed: f64) -> PlanetPosition {
    PlanetPosition {
        key: key.to_string(),
        name: name.to_string(),
        longitude,
        latitude: 0.0,
        speed,
    }
}

/// A hand-built chart: Placidus-like cusps wrapping in the 4th house.
pub fn sample_snapshot() -> EphemerisSnapshot {
    EphemerisSnapshot {
        julian_day: 2448000.5,
        house_cusps: HouseCusps::new([
            265.0, 300.0, 340.0, 15.0, 45.0, 70.0, 85.0, 120.0, 160.0, 195.0, 225.0, 250.0,
        ]),
        planet_positions: vec![
            position("sun", "Sun", 22.0, 0.98),
            position("moon", "Moon", 142.0, 13.1),
            position("mercury", "Mercury", 4.0, -0.4),
            position("venus", "Venus", 356.0, 1.2),
            position("mars", "Mars", 202.0, 0.6),
        ],
        ascendant: 265.0,
        midheaven: 195.0,
    }
}
