use thiserror::Error;

use crate::ephemeris::EphemerisError;
use crate::geocode::GeocodeError;
use crate::timezone::TimezoneError;

/// Problems with the request itself, reported back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid {field}: {message}")]
    InvalidField { field: String, message: String },
    #[error("No location found for place '{place}'")]
    PlaceNotFound { place: String },
}

/// Anything that stops a chart from being produced.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Geocoding '{place}' failed: {source}")]
    Geocoding {
        place: String,
        #[source]
        source: GeocodeError,
    },
    #[error("Timezone resolution failed: {0}")]
    Timezone(#[from] TimezoneError),
    #[error("Ephemeris snapshot failed: {0}")]
    Ephemeris(#[from] EphemerisError),
}

impl ChartError {
    /// Whether the caller can fix this by changing the request.
    pub fn is_input_error(&self) -> bool {
        match self {
            ChartError::Input(_) => true,
            ChartError::Timezone(e) => !matches!(e, TimezoneError::UnknownZone { .. }),
            _ => false,
        }
    }
}
