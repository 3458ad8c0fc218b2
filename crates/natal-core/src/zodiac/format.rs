//! Sexagesimal rendering of a position inside a sign.
//!
//! Every step truncates. 29.999° renders as `29° 59' 56"`, never `30° 0' 0"`,
//! so a formatted degree always stays inside its sign.

use serde::{Deserialize, Serialize};

/// Degrees-minutes-seconds with whole-number components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Split a non-negative degree value into truncated DMS components.
pub fn to_dms(degree: f64) -> Dms {
    let deg = degree.floor();
    let minutes_exact = (degree - deg) * 60.0;
    let min = minutes_exact.floor();
    let sec = ((minutes_exact - min) * 60.0).floor();

    Dms {
        degrees: deg as u32,
        minutes: min as u32,
        seconds: sec as u32,
    }
}

/// Format a degree-in-sign as `D° M' S"`.
pub fn format_degree(degree_in_sign: f64) -> String {
    let dms = to_dms(degree_in_sign);
    format!("{}° {}' {}\"", dms.degrees, dms.minutes, dms.seconds)
}
