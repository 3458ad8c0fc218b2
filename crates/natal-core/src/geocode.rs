//! Place name resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ephemeris::GeoLocation;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("Geocoding service unavailable: {message}")]
    Unavailable { message: String },
    #[error("Geocoding response for '{place}' was malformed: {message}")]
    Malformed { place: String, message: String },
}

/// Best match for a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
}

impl GeocodeMatch {
    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Resolves free-text place names to coordinates.
pub trait Geocoder {
    /// `Ok(None)` when nothing matches.
    fn lookup(&self, place: &str) -> Result<Option<GeocodeMatch>, GeocodeError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
}

impl GazetteerEntry {
    fn matches(&self, wanted: &str) -> bool {
        normalize_place(&self.name) == wanted
            || self.aliases.iter().any(|a| normalize_place(a) == wanted)
    }
}

/// Collapse case and whitespace so "  new   YORK " matches "New York".
fn normalize_place(place: &str) -> String {
    place
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// In-memory geocoder over a fixed list of places.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
}

impl Gazetteer {
    pub fn new(entries: Vec<GazetteerEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for Gazetteer {
    fn lookup(&self, place: &str) -> Result<Option<GeocodeMatch>, GeocodeError> {
        let wanted = normalize_place(place);
        if wanted.is_empty() {
            return Ok(None);
        }

        Ok(self.entries.iter().find(|e| e.matches(&wanted)).map(|e| GeocodeMatch {
            latitude: e.latitude,
            longitude: e.longitude,
            formatted_address: e.formatted_address.clone(),
        }))
    }
}
