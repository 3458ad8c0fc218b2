//! Chart requests as they arrive from callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ephemeris::{GeoLocation, HouseSystem};
use crate::error::InputError;
use crate::timezone::LocalBirthTime;

/// Birth place: either coordinates or a name still to be geocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationInput {
    Coordinates { latitude: f64, longitude: f64 },
    Place(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRequest {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    pub location: LocationInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_system: Option<HouseSystem>,
}

fn invalid(field: &str, message: String) -> InputError {
    InputError::InvalidField {
        field: field.to_string(),
        message,
    }
}

impl BirthRequest {
    /// Check every field, reporting the first one that is out of range.
    pub fn validate(&self) -> Result<(), InputError> {
        if !(1..=12).contains(&self.month) {
            return Err(invalid("month", format!("{} is not in 1-12", self.month)));
        }
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(invalid(
                "day",
                format!(
                    "{} is not a day of {:04}-{:02}",
                    self.day, self.year, self.month
                ),
            ));
        }
        if self.hour > 23 {
            return Err(invalid("hour", format!("{} is not in 0-23", self.hour)));
        }
        if self.minute > 59 {
            return Err(invalid("minute", format!("{} is not in 0-59", self.minute)));
        }
        if self.second > 59 {
            return Err(invalid("second", format!("{} is not in 0-59", self.second)));
        }

        match &self.location {
            LocationInput::Coordinates {
                latitude,
                longitude,
            } => {
                if !latitude.is_finite() || !(-90.0..=90.0).contains(latitude) {
                    return Err(invalid(
                        "location.latitude",
                        format!("{} is not in -90..90", latitude),
                    ));
                }
                if !longitude.is_finite() || !(-180.0..=180.0).contains(longitude) {
                    return Err(invalid(
                        "location.longitude",
                        format!("{} is not in -180..180", longitude),
                    ));
                }
            }
            LocationInput::Place(name) => {
                if name.trim().is_empty() {
                    return Err(invalid("location", "place name is empty".to_string()));
                }
            }
        }

        Ok(())
    }

    pub fn local_time(&self) -> LocalBirthTime {
        LocalBirthTime {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }

    /// Coordinates, if the request already carries them.
    pub fn coordinates(&self) -> Option<GeoLocation> {
        match self.location {
            LocationInput::Coordinates {
                latitude,
                longitude,
            } => Some(GeoLocation {
                latitude,
                longitude,
            }),
            LocationInput::Place(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(location: LocationInput) -> BirthRequest {
        BirthRequest {
            year: 1990,
            month: 4,
            day: 12,
            hour: 14,
            minute: 30,
            second: 0,
            location,
            house_system: None,
        }
    }

    fn field_of(err: InputError) -> String {
        match err {
            InputError::InvalidField { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_request() {
        let req = request(LocationInput::Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        });
        assert!(req.validate().is_ok());
        assert_eq!(req.coordinates().map(|c| c.latitude), Some(51.5));
    }

    #[test]
    fn test_invalid_fields_are_named() {
        let mut req = request(LocationInput::Place("London".to_string()));
        req.month = 13;
        assert_eq!(field_of(req.validate().unwrap_err()), "month");

        let mut req = request(LocationInput::Place("London".to_string()));
        req.day = 31;
        assert_eq!(field_of(req.validate().unwrap_err()), "day");

        let mut req = request(LocationInput::Place("London".to_string()));
        req.minute = 60;
        assert_eq!(field_of(req.validate().unwrap_err()), "minute");

        let req = request(LocationInput::Coordinates {
            latitude: 91.0,
            longitude: 0.0,
        });
        assert_eq!(field_of(req.validate().unwrap_err()), "location.latitude");

        let req = request(LocationInput::Place("  ".to_string()));
        assert_eq!(field_of(req.validate().unwrap_err()), "location");
    }

    #[test]
    fn test_location_deserializes_either_shape() {
        let coords: LocationInput =
            serde_json::from_str(r#"{"latitude": 10.5, "longitude": 20.25}"#).unwrap();
        assert_eq!(
            coords,
            LocationInput::Coordinates {
                latitude: 10.5,
                longitude: 20.25
            }
        );

        let place: LocationInput = serde_json::from_str(r#""Paris""#).unwrap();
        assert_eq!(place, LocationInput::Place("Paris".to_string()));
    }
}
