use crate::angles::derive_angles;
use crate::aspects::{AspectBody, AspectCalculator};
use crate::chart::report::{NatalChartReport, PlacedBody, UNKNOWN_SIGN};
use crate::ephemeris::EphemerisSnapshot;
use crate::houses::{describe_houses, locate_house};
use crate::zodiac::map_longitude;

/// Turns one ephemeris snapshot into a chart report.
///
/// Pure and deterministic: the same snapshot always produces the same report.
pub struct ChartAssembler {
    aspects: AspectCalculator,
}

impl ChartAssembler {
    pub fn new() -> Self {
        Self {
            aspects: AspectCalculator::new(),
        }
    }

    pub fn assemble(&self, snapshot: &EphemerisSnapshot) -> NatalChartReport {
        let planets: Vec<PlacedBody> = snapshot
            .planet_positions
            .iter()
            .map(|pos| PlacedBody {
                key: pos.key.clone(),
                name: pos.name.clone(),
                longitude: pos.longitude,
                latitude: pos.latitude,
                speed: pos.speed,
                is_retrograde: pos.is_retrograde(),
                placement: map_longitude(pos.longitude),
                house: locate_house(pos.longitude, &snapshot.house_cusps),
            })
            .collect();

        let sun_sign = planets
            .iter()
            .find(|p| p.key == "sun")
            .map(|p| p.placement.sign_name.clone())
            .unwrap_or_else(|| UNKNOWN_SIGN.to_string());

        let aspect_bodies: Vec<AspectBody<'_>> = snapshot
            .planet_positions
            .iter()
            .map(|pos| AspectBody {
                key: &pos.key,
                name: &pos.name,
                longitude: pos.longitude,
                speed: Some(pos.speed),
            })
            .collect();
        let aspects = self.aspects.detect(&aspect_bodies);

        log::debug!(
            "Assembled chart for jd {:.6}: {} bodies, {} aspects",
            snapshot.julian_day,
            planets.len(),
            aspects.len()
        );

        NatalChartReport {
            julian_day: snapshot.julian_day,
            sun_sign,
            planets,
            houses: describe_houses(&snapshot.house_cusps),
            aspects,
            angles: derive_angles(snapshot.ascendant, snapshot.midheaven),
        }
    }
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble with the default aspect table.
pub fn assemble(snapshot: &EphemerisSnapshot) -> NatalChartReport {
    ChartAssembler::new().assemble(snapshot)
}
