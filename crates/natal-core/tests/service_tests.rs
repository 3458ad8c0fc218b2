use natal_core::bodies::{BodySource, CelestialBody};
use natal_core::ephemeris::{
    BodyCoordinates, EphemerisError, EphemerisProvider, GeoLocation, HouseFrame, HouseSystem,
    UtcMoment,
};
use natal_core::geocode::{GazetteerEntry, Gazetteer, GeocodeError, GeocodeMatch, Geocoder};
use natal_core::houses::HouseCusps;
use natal_core::timezone::{parse_zone, RegionTimezoneLookup, TimezoneError, TimezoneRegion, Tz};
use natal_core::{BirthRequest, ChartError, InputError, LocationInput, NatalChartService};

/// Deterministic stand-in for the Swiss Ephemeris.
#[derive(Default)]
struct FakeEphemeris {
    fail_houses: bool,
}

impl EphemerisProvider for FakeEphemeris {
    fn julian_day(&self, moment: &UtcMoment) -> Result<f64, EphemerisError> {
        Ok(2451544.5 + moment.hour / 24.0)
    }

    fn houses(
        &self,
        julian_day: f64,
        _location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError> {
        if self.fail_houses {
            return Err(EphemerisError::calculation(
                "house calculation",
                format!("jd {julian_day} with {system}"),
                "polar latitude",
            ));
        }
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = (100.0 + 30.0 * i as f64) % 360.0;
        }
        Ok(HouseFrame {
            cusps: HouseCusps::new(cusps),
            ascendant: 100.0,
            midheaven: 10.0,
        })
    }

    fn body_position(
        &self,
        _julian_day: f64,
        body: &CelestialBody,
    ) -> Result<BodyCoordinates, EphemerisError> {
        match body.source {
            BodySource::Ephemeris(id) => Ok(BodyCoordinates {
                longitude: (id as f64 * 25.0) % 360.0,
                latitude: 0.5,
                speed: if id == 2 { -0.5 } else { 1.0 },
            }),
            BodySource::OppositeOf(_) => Err(EphemerisError::calculation(
                "body position",
                body.key,
                "derived body queried",
            )),
        }
    }
}

struct BrokenGeocoder;

impl Geocoder for BrokenGeocoder {
    fn lookup(&self, _place: &str) -> Result<Option<GeocodeMatch>, GeocodeError> {
        Err(GeocodeError::Unavailable {
            message: "timeout".to_string(),
        })
    }
}

fn gazetteer() -> Gazetteer {
    Gazetteer::new(vec![GazetteerEntry {
        name: "Greenwich".to_string(),
        aliases: vec![],
        latitude: 51.48,
        longitude: 0.0,
        formatted_address: "Greenwich, London, UK".to_string(),
    }])
}

fn utc_everywhere() -> RegionTimezoneLookup {
    RegionTimezoneLookup::new(vec![], Some(Tz::UTC))
}

fn request(location: LocationInput) -> BirthRequest {
    BirthRequest {
        year: 2000,
        month: 1,
        day: 1,
        hour: 12,
        minute: 0,
        second: 0,
        location,
        house_system: None,
    }
}

#[test]
fn test_compute_from_place_name() {
    let service = NatalChartService::new(FakeEphemeris::default(), gazetteer(), utc_everywhere());
    let report = service
        .compute(&request(LocationInput::Place("greenwich".to_string())))
        .unwrap();

    assert_eq!(report.julian_day, 2451545.0);
    assert_eq!(report.planets.len(), 13);
    assert_eq!(report.sun_sign, "Aries");
    assert_eq!(report.angles.descendant.longitude, 280.0);
    assert!(report.planet("mercury").unwrap().is_retrograde);
}

#[test]
fn test_south_node_is_derived_not_queried() {
    // the fake rejects queries for derived bodies
    let service = NatalChartService::new(FakeEphemeris::default(), gazetteer(), utc_everywhere());
    let report = service
        .compute(&request(LocationInput::Coordinates {
            latitude: 51.48,
            longitude: 0.0,
        }))
        .unwrap();

    let north = report.planet("north_node").unwrap();
    let south = report.planet("south_node").unwrap();
    assert_eq!(north.longitude, 275.0);
    assert_eq!(south.longitude, 95.0);
    assert_eq!(south.latitude, 0.0);
}

#[test]
fn test_unknown_place_is_input_error() {
    let service = NatalChartService::new(FakeEphemeris::default(), gazetteer(), utc_everywhere());
    let err = service
        .compute(&request(LocationInput::Place("Atlantis".to_string())))
        .unwrap_err();

    assert!(err.is_input_error());
    assert!(matches!(
        err,
        ChartError::Input(InputError::PlaceNotFound { ref place }) if place == "Atlantis"
    ));
}

#[test]
fn test_geocoder_failure_keeps_context() {
    let service = NatalChartService::new(FakeEphemeris::default(), BrokenGeocoder, utc_everywhere());
    let err = service
        .compute(&request(LocationInput::Place("Paris".to_string())))
        .unwrap_err();

    assert!(!err.is_input_error());
    let message = err.to_string();
    assert!(message.contains("Paris"), "{message}");
    assert!(message.contains("timeout"), "{message}");
}

#[test]
fn test_invalid_request_stops_before_collaborators() {
    let service = NatalChartService::new(FakeEphemeris::default(), BrokenGeocoder, utc_everywhere());
    let mut req = request(LocationInput::Place("Paris".to_string()));
    req.hour = 24;

    let err = service.compute(&req).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Input(InputError::InvalidField { ref field, .. }) if field == "hour"
    ));
}

#[test]
fn test_unresolvable_timezone() {
    let service = NatalChartService::new(
        FakeEphemeris::default(),
        gazetteer(),
        RegionTimezoneLookup::default(),
    );
    let err = service
        .compute(&request(LocationInput::Coordinates {
            latitude: -75.0,
            longitude: 120.0,
        }))
        .unwrap_err();

    assert!(matches!(
        err,
        ChartError::Timezone(TimezoneError::Unresolvable { .. })
    ));
}

#[test]
fn test_ephemeris_failure_names_operation() {
    let ephemeris = FakeEphemeris { fail_houses: true };
    let service = NatalChartService::new(ephemeris, gazetteer(), utc_everywhere())
        .with_house_system(HouseSystem::Koch);
    let err = service
        .compute(&request(LocationInput::Place("Greenwich".to_string())))
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, ChartError::Ephemeris(_)));
    assert!(message.contains("house calculation"), "{message}");
    assert!(message.contains("koch"), "{message}");
}

#[test]
fn test_clock_change_gap_is_input_error() {
    let uk = TimezoneRegion {
        name: "UK".to_string(),
        min_lat: 49.0,
        max_lat: 61.0,
        min_lon: -8.5,
        max_lon: 2.0,
        zone: parse_zone("Europe/London").unwrap(),
    };
    let service = NatalChartService::new(
        FakeEphemeris::default(),
        gazetteer(),
        RegionTimezoneLookup::new(vec![uk], None),
    );
    let mut req = request(LocationInput::Place("Greenwich".to_string()));
    req.year = 2021;
    req.month = 3;
    req.day = 28;
    req.hour = 1;
    req.minute = 30;

    let err = service.compute(&req).unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(
        err,
        ChartError::Timezone(TimezoneError::NonexistentLocalTime { .. })
    ));
}
