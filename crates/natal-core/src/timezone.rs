//! Local birth time to UTC.

use std::fmt;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use chrono_tz::Tz;

use crate::ephemeris::{GeoLocation, UtcMoment};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimezoneError {
    #[error("No timezone could be resolved for coordinates ({latitude}, {longitude})")]
    Unresolvable { latitude: f64, longitude: f64 },
    #[error("Unknown timezone name '{name}'")]
    UnknownZone { name: String },
    #[error("Invalid local {field}: {message}")]
    InvalidLocalTime { field: String, message: String },
    #[error("Local time {local} does not exist in {zone} (skipped by a clock change)")]
    NonexistentLocalTime { local: String, zone: String },
}

/// Wall-clock birth time as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBirthTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
}

impl LocalBirthTime {
    pub fn to_naive(&self) -> Result<NaiveDateTime, TimezoneError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            TimezoneError::InvalidLocalTime {
                field: "date".to_string(),
                message: format!(
                    "{:04}-{:02}-{:02} is not a calendar date",
                    self.year, self.month, self.day
                ),
            }
        })?;
        date.and_hms_opt(self.hour, self.minute, self.second)
            .ok_or_else(|| TimezoneError::InvalidLocalTime {
                field: "time".to_string(),
                message: format!(
                    "{:02}:{:02}:{:02} is not a time of day",
                    self.hour, self.minute, self.second
                ),
            })
    }
}

/// Finds the timezone in force at a location.
pub trait TimezoneLookup {
    type Zone: TimeZone + fmt::Display;

    fn zone_for(&self, location: &GeoLocation) -> Option<Self::Zone>;
}

/// A rectangular region governed by one IANA timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneRegion {
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub zone: Tz,
}

impl TimezoneRegion {
    pub fn contains(&self, location: &GeoLocation) -> bool {
        location.latitude >= self.min_lat
            && location.latitude <= self.max_lat
            && location.longitude >= self.min_lon
            && location.longitude <= self.max_lon
    }
}

/// Coordinate-keyed lookup over a table of regions. The first region
/// containing the point wins; otherwise the default zone, if any.
///
/// Offsets, including daylight saving, come from the tz database.
#[derive(Debug, Clone, Default)]
pub struct RegionTimezoneLookup {
    regions: Vec<TimezoneRegion>,
    default_zone: Option<Tz>,
}

impl RegionTimezoneLookup {
    pub fn new(regions: Vec<TimezoneRegion>, default_zone: Option<Tz>) -> Self {
        Self {
            regions,
            default_zone,
        }
    }

    pub fn regions(&self) -> &[TimezoneRegion] {
        &self.regions
    }
}

impl TimezoneLookup for RegionTimezoneLookup {
    type Zone = Tz;

    fn zone_for(&self, location: &GeoLocation) -> Option<Tz> {
        self.regions
            .iter()
            .find(|r| r.contains(location))
            .map(|r| r.zone)
            .or(self.default_zone)
    }
}

/// Parse an IANA zone name such as `Europe/London`.
pub fn parse_zone(name: &str) -> Result<Tz, TimezoneError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimezoneError::UnknownZone {
            name: name.to_string(),
        })
}

/// Pick the UTC instant for a local-time lookup result.
///
/// Ambiguous times (clocks turned back) resolve to the earlier instant.
pub fn pick_instant<Z: TimeZone + fmt::Display>(
    local: LocalResult<DateTime<Z>>,
    naive: &NaiveDateTime,
    zone: &Z,
) -> Result<DateTime<Utc>, TimezoneError> {
    match local {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => {
            log::debug!("Local time {} is ambiguous; using the earlier instant", naive);
            Ok(earliest.with_timezone(&Utc))
        }
        LocalResult::None => Err(TimezoneError::NonexistentLocalTime {
            local: naive.to_string(),
            zone: zone.to_string(),
        }),
    }
}

/// Resolves wall-clock birth times to UTC through a [`TimezoneLookup`].
pub struct LocalTimeResolver<L> {
    lookup: L,
}

impl<L: TimezoneLookup> LocalTimeResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn to_utc(
        &self,
        local: &LocalBirthTime,
        location: &GeoLocation,
    ) -> Result<UtcMoment, TimezoneError> {
        let naive = local.to_naive()?;
        let zone = self
            .lookup
            .zone_for(location)
            .ok_or(TimezoneError::Unresolvable {
                latitude: location.latitude,
                longitude: location.longitude,
            })?;

        let utc = pick_instant(zone.from_local_datetime(&naive), &naive, &zone)?;
        Ok(UtcMoment::from_datetime(utc))
    }
}
