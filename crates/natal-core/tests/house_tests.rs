use natal_core::houses::{locate_house, HouseCusps, FALLBACK_HOUSE};

fn equal_cusps() -> HouseCusps {
    HouseCusps::new([
        0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
    ])
}

#[test]
fn test_locate_on_equal_cusps() {
    let cusps = equal_cusps();
    assert_eq!(locate_house(0.0, &cusps), 1);
    assert_eq!(locate_house(15.0, &cusps), 1);
    assert_eq!(locate_house(30.0, &cusps), 2);
    assert_eq!(locate_house(185.0, &cusps), 7);
    assert_eq!(locate_house(355.0, &cusps), 12);
}

#[test]
fn test_locate_normalizes_longitude() {
    let cusps = equal_cusps();
    assert_eq!(locate_house(-5.0, &cusps), 12);
    assert_eq!(locate_house(375.0, &cusps), 1);
}

#[test]
fn test_span_crossing_aries_point() {
    // Ascendant in late Sagittarius: houses 3 and 4 straddle 0°
    let cusps = HouseCusps::new([
        265.0, 300.0, 340.0, 15.0, 45.0, 70.0, 85.0, 120.0, 160.0, 195.0, 225.0, 250.0,
    ]);
    assert_eq!(locate_house(265.0, &cusps), 1);
    assert_eq!(locate_house(350.0, &cusps), 3);
    assert_eq!(locate_house(5.0, &cusps), 3);
    assert_eq!(locate_house(15.0, &cusps), 4);
    assert_eq!(locate_house(260.0, &cusps), 12);
}

#[test]
fn test_twelfth_house_wraps_to_first_cusp() {
    let cusps = HouseCusps::new([
        10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0,
    ]);
    assert_eq!(locate_house(345.0, &cusps), 12);
    assert_eq!(locate_house(5.0, &cusps), 12);
    assert_eq!(locate_house(10.0, &cusps), 1);
}

#[test]
fn test_malformed_cusps_fall_back_to_first_house() {
    // Every span is empty, so nothing can match
    let cusps = HouseCusps::new([f64::NAN; 12]);
    assert_eq!(locate_house(123.0, &cusps), FALLBACK_HOUSE);
    assert_eq!(FALLBACK_HOUSE, 1);
}

#[test]
fn test_from_slice_requires_twelve() {
    assert!(HouseCusps::from_slice(&[0.0; 11]).is_none());
    assert!(HouseCusps::from_slice(&[0.0; 12]).is_some());
}
