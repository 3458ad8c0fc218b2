use crate::zodiac::format::format_degree;
use crate::zodiac::types::{ZodiacPlacement, ZodiacSign};

/// Normalize any longitude into [0, 360). Non-finite input maps to 0.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if !longitude.is_finite() {
        return 0.0;
    }
    ((longitude % 360.0) + 360.0) % 360.0
}

/// Sign index (0-11) for a longitude, clamped so float noise at 360° stays in Pisces.
pub fn sign_index(longitude: f64) -> usize {
    let normalized = normalize_longitude(longitude);
    ((normalized / 30.0).floor() as usize).min(11)
}

/// Map an ecliptic longitude onto the tropical zodiac.
pub fn map_longitude(longitude: f64) -> ZodiacPlacement {
    let normalized = normalize_longitude(longitude);
    let sign = ZodiacSign::from_index(sign_index(normalized));
    let degree_in_sign = normalized % 30.0;

    ZodiacPlacement {
        sign,
        sign_name: sign.name().to_string(),
        sign_key: sign.key().to_string(),
        degree_in_sign,
        formatted: format_degree(degree_in_sign),
    }
}
