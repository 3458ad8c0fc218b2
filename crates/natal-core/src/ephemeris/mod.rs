#[cfg(feature = "swisseph")]
pub mod adapter;
pub mod provider;
pub mod types;

#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemerisAdapter;
pub use provider::{capture_snapshot, EphemerisError, EphemerisProvider};
pub use types::{
    BodyCoordinates, EphemerisSnapshot, GeoLocation, HouseFrame, HouseSystem, PlanetPosition,
    UtcMoment,
};
