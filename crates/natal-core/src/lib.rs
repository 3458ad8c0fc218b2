//! Natal chart derivation: zodiac placements, houses, angles and aspects
//! computed from a single ephemeris snapshot.

pub mod angles;
pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod geocode;
pub mod houses;
pub mod request;
pub mod service;
pub mod timezone;
pub mod zodiac;

pub use angles::{derive_angles, AngleKind, ChartAngle, ChartAngles};
pub use aspects::{AspectCalculator, DetectedAspect};
pub use chart::{assemble, ChartAssembler, NatalChartReport};
pub use ephemeris::{EphemerisProvider, EphemerisSnapshot};
pub use error::{ChartError, InputError};
pub use request::{BirthRequest, LocationInput};
pub use service::NatalChartService;
pub use zodiac::{format_degree, map_longitude, ZodiacPlacement, ZodiacSign};
