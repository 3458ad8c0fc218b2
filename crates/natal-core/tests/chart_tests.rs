mod common;

use common::{position, sample_snapshot};
use natal_core::chart::{assemble, UNKNOWN_SIGN};

#[test]
fn test_planets_get_sign_and_house() {
    let report = assemble(&sample_snapshot());

    let sun = report.planet("sun").unwrap();
    assert_eq!(sun.placement.sign_name, "Aries");
    assert_eq!(sun.placement.formatted, "22° 0' 0\"");
    assert_eq!(sun.house, 4);
    assert!(!sun.is_retrograde);

    let venus = report.planet("venus").unwrap();
    assert_eq!(venus.placement.sign_key, "pisces");
    assert_eq!(venus.house, 3);

    let mercury = report.planet("mercury").unwrap();
    assert_eq!(mercury.placement.formatted, "4° 0' 0\"");
    assert!(mercury.is_retrograde);
    assert_eq!(mercury.house, 3);

    assert_eq!(report.planets_in_house(3).count(), 2);
}

#[test]
fn test_sun_sign_convenience_field() {
    let report = assemble(&sample_snapshot());
    assert_eq!(report.sun_sign, "Aries");

    let mut snapshot = sample_snapshot();
    snapshot.planet_positions.retain(|p| p.key != "sun");
    assert_eq!(assemble(&snapshot).sun_sign, UNKNOWN_SIGN);
}

#[test]
fn test_houses_and_angles() {
    let report = assemble(&sample_snapshot());

    assert_eq!(report.houses.len(), 12);
    assert_eq!(report.houses[0].placement.sign_key, "sagittarius");
    assert_eq!(report.houses[3].cusp_longitude, 15.0);

    assert_eq!(report.angles.ascendant.longitude, 265.0);
    assert_eq!(report.angles.descendant.longitude, 85.0);
    assert_eq!(report.angles.midheaven.longitude, 195.0);
    assert_eq!(report.angles.imum_coeli.longitude, 15.0);
    assert_eq!(report.angles.descendant.placement.sign_name, "Gemini");
}

#[test]
fn test_aspects_in_catalog_order() {
    let report = assemble(&sample_snapshot());

    // sun 22, moon 142: trine (orb 0)
    let first = &report.aspects[0];
    assert_eq!(first.body_a.key, "sun");
    assert_eq!(first.body_b.key, "moon");
    assert_eq!(first.aspect_key, "trine");
    assert_eq!(first.orb, 0.0);

    // sun 22, mars 202: opposition
    assert!(report
        .aspects_for("mars")
        .any(|a| a.body_a.key == "sun" && a.aspect_key == "opposition"));

    // mercury 4, venus 356: conjunction across 0° Aries
    let conjunction = report
        .aspects
        .iter()
        .find(|a| a.body_a.key == "mercury" && a.body_b.key == "venus")
        .unwrap();
    assert_eq!(conjunction.aspect_key, "conjunction");
    assert_eq!(conjunction.orb, 8.0);

    // mercury 4, moon 142: sesquiquadrate right at its 3° limit
    assert!(report
        .aspects_for("mercury")
        .any(|a| a.body_b.key == "mercury" && a.aspect_key == "sesquiquadrate"));
}

#[test]
fn test_speeds_feed_applying_flag() {
    let report = assemble(&sample_snapshot());
    assert!(report.aspects.iter().all(|a| a.is_applying.is_some()));
}

#[test]
fn test_assembly_is_idempotent() {
    let snapshot = sample_snapshot();
    let first = serde_json::to_vec(&assemble(&snapshot)).unwrap();
    let second = serde_json::to_vec(&assemble(&snapshot)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_snapshot_still_yields_angles() {
    let mut snapshot = sample_snapshot();
    snapshot.planet_positions.clear();
    let report = assemble(&snapshot);
    assert!(report.planets.is_empty());
    assert!(report.aspects.is_empty());
    assert_eq!(report.houses.len(), 12);
    assert_eq!(report.angles.imum_coeli.longitude, 15.0);

    snapshot.planet_positions.push(position("moon", "Moon", 1.0, 12.0));
    assert_eq!(assemble(&snapshot).planets[0].house, 3);
}

#[test]
fn test_report_serializes_camel_case() {
    let json = serde_json::to_value(assemble(&sample_snapshot())).unwrap();
    assert_eq!(json["sunSign"], "Aries");
    assert_eq!(json["planets"][0]["placement"]["signKey"], "aries");
    assert_eq!(json["planets"][0]["isRetrograde"], false);
    assert_eq!(json["aspects"][0]["orbUsed"], 8.0);
    assert_eq!(json["angles"]["imumCoeli"]["kind"], "imumCoeli");
}
