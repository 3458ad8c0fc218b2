//! End-to-end chart computation over pluggable collaborators.

use crate::bodies::{CelestialBody, BODIES};
use crate::chart::{ChartAssembler, NatalChartReport};
use crate::ephemeris::{capture_snapshot, EphemerisProvider, GeoLocation, HouseSystem};
use crate::error::{ChartError, InputError};
use crate::geocode::Geocoder;
use crate::request::{BirthRequest, LocationInput};
use crate::timezone::{LocalTimeResolver, TimezoneLookup};

/// Computes natal charts from birth requests.
///
/// Stages: validate, geocode, local time to UTC, ephemeris snapshot,
/// assemble. Only the last stage is pure; every error comes from the
/// stages before it.
pub struct NatalChartService<E, G, T> {
    ephemeris: E,
    geocoder: G,
    time: LocalTimeResolver<T>,
    house_system: HouseSystem,
    bodies: &'static [CelestialBody],
    assembler: ChartAssembler,
}

impl<E, G, T> NatalChartService<E, G, T>
where
    E: EphemerisProvider,
    G: Geocoder,
    T: TimezoneLookup,
{
    pub fn new(ephemeris: E, geocoder: G, timezones: T) -> Self {
        Self {
            ephemeris,
            geocoder,
            time: LocalTimeResolver::new(timezones),
            house_system: HouseSystem::default(),
            bodies: BODIES,
            assembler: ChartAssembler::new(),
        }
    }

    /// House system used when a request doesn't name one.
    pub fn with_house_system(mut self, system: HouseSystem) -> Self {
        self.house_system = system;
        self
    }

    pub fn house_system(&self) -> HouseSystem {
        self.house_system
    }

    pub fn resolve_location(&self, location: &LocationInput) -> Result<GeoLocation, ChartError> {
        match location {
            LocationInput::Coordinates {
                latitude,
                longitude,
            } => Ok(GeoLocation {
                latitude: *latitude,
                longitude: *longitude,
            }),
            LocationInput::Place(place) => {
                let found = self.geocoder.lookup(place).map_err(|source| {
                    log::warn!("Geocoder failed for '{}': {}", place, source);
                    ChartError::Geocoding {
                        place: place.clone(),
                        source,
                    }
                })?;
                let found = found.ok_or_else(|| InputError::PlaceNotFound {
                    place: place.clone(),
                })?;
                log::debug!("Resolved '{}' to {}", place, found.formatted_address);
                Ok(found.location())
            }
        }
    }

    pub fn compute(&self, request: &BirthRequest) -> Result<NatalChartReport, ChartError> {
        request.validate()?;

        let location = self.resolve_location(&request.location)?;
        let moment = self.time.to_utc(&request.local_time(), &location)?;
        log::debug!(
            "Birth time resolved to {} at ({:.4}, {:.4})",
            moment,
            location.latitude,
            location.longitude
        );

        let system = request.house_system.unwrap_or(self.house_system);
        let snapshot = capture_snapshot(&self.ephemeris, &moment, &location, system, self.bodies)
            .map_err(|e| {
                log::warn!("Ephemeris failed for {}: {}", moment, e);
                e
            })?;

        Ok(self.assembler.assemble(&snapshot))
    }
}
