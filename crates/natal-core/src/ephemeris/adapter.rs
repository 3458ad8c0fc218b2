use std::env;
use std::path::PathBuf;

use swisseph::swe::{calc_ut, houses_ex, julday, set_ephe_path};
use swisseph::{AscMc, Cusp};

use crate::bodies::{BodySource, CelestialBody};
use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{BodyCoordinates, GeoLocation, HouseFrame, HouseSystem, UtcMoment};
use crate::houses::HouseCusps;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// GREG_CAL
const GREGORIAN_CALENDAR: i32 = 1;

/// FLG_SWIEPH | FLG_SPEED: Swiss Ephemeris files, with speeds filled in
const CALC_FLAGS: i32 = 2 | 256;

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    _private: (),
}

impl SwissEphemerisAdapter {
    /// Create a new adapter. Without an explicit path, `SWISS_EPHEMERIS_PATH`
    /// is consulted before the system default.
    ///
    /// The data path is process-wide library state; the last adapter
    /// created decides it.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        set_ephe_path(&path.to_string_lossy());
        log::info!("Using Swiss Ephemeris data from {}", path.display());
        Ok(Self { _private: () })
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn julian_day(&self, moment: &UtcMoment) -> Result<f64, EphemerisError> {
        let jd = julday(
            moment.year,
            moment.month as i32,
            moment.day as i32,
            moment.hour,
            GREGORIAN_CALENDAR,
        );
        if !jd.is_finite() {
            return Err(EphemerisError::calculation(
                "julian day",
                moment.to_string(),
                "non-finite result",
            ));
        }
        Ok(jd)
    }

    fn houses(
        &self,
        julian_day: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError> {
        let (c, a) = houses_ex(
            julian_day,
            CALC_FLAGS,
            location.latitude,
            location.longitude,
            system.code() as i32,
        );
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let values = [
            cusps.first,
            cusps.second,
            cusps.third,
            cusps.fourth,
            cusps.fifth,
            cusps.sixth,
            cusps.seventh,
            cusps.eighth,
            cusps.ninth,
            cusps.tenth,
            cusps.eleventh,
            cusps.twelfth,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(EphemerisError::calculation(
                "house calculation",
                format!(
                    "jd {:.6} at ({:.4}, {:.4}) with {}",
                    julian_day, location.latitude, location.longitude, system
                ),
                "non-finite cusp",
            ));
        }

        Ok(HouseFrame {
            cusps: HouseCusps::new(values.map(|v| v % 360.0)),
            ascendant: ascmc.ascendant % 360.0,
            midheaven: ascmc.mc % 360.0,
        })
    }

    fn body_position(
        &self,
        julian_day: f64,
        body: &CelestialBody,
    ) -> Result<BodyCoordinates, EphemerisError> {
        let BodySource::Ephemeris(code) = body.source else {
            return Err(EphemerisError::calculation(
                "body position",
                body.key,
                "body is derived, not an ephemeris object",
            ));
        };

        let result = calc_ut(julian_day, code as u32, CALC_FLAGS as u32).map_err(|e| {
            EphemerisError::calculation(
                "body position",
                format!("{} at jd {:.6}", body.key, julian_day),
                format!("Swiss Ephemeris error: {}", e),
            )
        })?;

        let out = result.out;
        Ok(BodyCoordinates {
            longitude: out[0] % 360.0,
            latitude: out[1],
            speed: out[3],
        })
    }
}
