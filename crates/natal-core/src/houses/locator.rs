use crate::houses::types::{HouseCusps, HouseReport};
use crate::zodiac::{map_longitude, normalize_longitude};

/// House returned when no cusp span contains the longitude.
pub const FALLBACK_HOUSE: u8 = 1;

/// Find the house (1-12) containing `longitude`.
///
/// A span whose next cusp is not greater than its own cusp crosses 0° Aries
/// and matches on either side of the boundary. The first matching house in
/// ascending order wins. Cusp data that leaves the longitude uncovered
/// yields [`FALLBACK_HOUSE`].
pub fn locate_house(longitude: f64, cusps: &HouseCusps) -> u8 {
    let lon = normalize_longitude(longitude);

    for house in 1..=12u8 {
        let current = cusps.cusp(house);
        let next = cusps.cusp(house + 1);

        let inside = if next > current {
            lon >= current && lon < next
        } else {
            lon >= current || lon < next
        };

        if inside {
            return house;
        }
    }

    log::warn!(
        "No house span contains longitude {:.4} (cusps {:?}); using house {}",
        lon,
        cusps.as_array(),
        FALLBACK_HOUSE
    );
    FALLBACK_HOUSE
}

/// Describe every cusp with its zodiac placement.
pub fn describe_houses(cusps: &HouseCusps) -> Vec<HouseReport> {
    (1..=12u8)
        .map(|number| {
            let cusp_longitude = cusps.cusp(number);
            HouseReport {
                number,
                cusp_longitude,
                placement: map_longitude(cusp_longitude),
            }
        })
        .collect()
}
