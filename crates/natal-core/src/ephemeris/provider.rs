use thiserror::Error;

use crate::angles::opposite_longitude;
use crate::bodies::{find_body, BodySource, CelestialBody};
use crate::ephemeris::types::{
    BodyCoordinates, EphemerisSnapshot, GeoLocation, HouseFrame, HouseSystem, PlanetPosition,
    UtcMoment,
};

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Ephemeris {operation} failed for {input}: {message}")]
    CalculationFailed {
        operation: String,
        input: String,
        message: String,
    },
}

impl EphemerisError {
    pub fn calculation(
        operation: impl Into<String>,
        input: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::CalculationFailed {
            operation: operation.into(),
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Source of raw astronomical positions.
pub trait EphemerisProvider {
    /// Julian day (UT) of a Gregorian-calendar UTC moment.
    fn julian_day(&self, moment: &UtcMoment) -> Result<f64, EphemerisError>;

    /// House cusps and primary angles for a moment and place.
    fn houses(
        &self,
        julian_day: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError>;

    /// Ecliptic coordinates of a body queried directly from the ephemeris.
    fn body_position(
        &self,
        julian_day: f64,
        body: &CelestialBody,
    ) -> Result<BodyCoordinates, EphemerisError>;
}

fn position_from(body: &CelestialBody, coords: BodyCoordinates) -> PlanetPosition {
    PlanetPosition {
        key: body.key.to_string(),
        name: body.name.to_string(),
        longitude: coords.longitude,
        latitude: coords.latitude,
        speed: coords.speed,
    }
}

fn derive_opposite(body: &CelestialBody, source: &PlanetPosition) -> PlanetPosition {
    PlanetPosition {
        key: body.key.to_string(),
        name: body.name.to_string(),
        longitude: opposite_longitude(source.longitude),
        // nodes lie on the ecliptic
        latitude: 0.0,
        speed: source.speed,
    }
}

/// Query the provider for everything a chart needs.
///
/// Bodies sourced as the opposite of another body reuse that body's
/// position when it was already captured, and query it otherwise.
pub fn capture_snapshot<P: EphemerisProvider + ?Sized>(
    provider: &P,
    moment: &UtcMoment,
    location: &GeoLocation,
    system: HouseSystem,
    bodies: &[CelestialBody],
) -> Result<EphemerisSnapshot, EphemerisError> {
    let julian_day = provider.julian_day(moment)?;
    log::debug!("Julian day for {} is {:.6}", moment, julian_day);

    let frame = provider.houses(julian_day, location, system)?;

    let mut positions: Vec<PlanetPosition> = Vec::with_capacity(bodies.len());
    for body in bodies {
        let position = match body.source {
            BodySource::Ephemeris(_) => position_from(body, provider.body_position(julian_day, body)?),
            BodySource::OppositeOf(source_key) => {
                let captured = positions.iter().find(|p| p.key == source_key).cloned();
                let source = match captured {
                    Some(source) => source,
                    None => {
                        let source_body = find_body(source_key).ok_or_else(|| {
                            EphemerisError::calculation(
                                "body lookup",
                                body.key,
                                format!("unknown source body '{}'", source_key),
                            )
                        })?;
                        position_from(source_body, provider.body_position(julian_day, source_body)?)
                    }
                };
                derive_opposite(body, &source)
            }
        };
        positions.push(position);
    }

    Ok(EphemerisSnapshot {
        julian_day,
        house_cusps: frame.cusps,
        planet_positions: positions,
        ascendant: frame.ascendant,
        midheaven: frame.midheaven,
    })
}
