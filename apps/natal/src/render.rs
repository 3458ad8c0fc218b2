use std::fmt::Write;

use natal_core::NatalChartReport;

/// Plain-text chart summary.
pub fn render_text(report: &NatalChartReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sun sign: {}  (JD {:.6})", report.sun_sign, report.julian_day);

    let _ = writeln!(out, "\nPlanets");
    for planet in &report.planets {
        let _ = writeln!(
            out,
            "  {:<11} {:<12} {:<12} house {:>2}{}",
            planet.name,
            planet.placement.sign_name,
            planet.placement.formatted,
            planet.house,
            if planet.is_retrograde { "  ℞" } else { "" }
        );
    }

    let _ = writeln!(out, "\nAngles");
    for angle in report.angles.iter() {
        let _ = writeln!(
            out,
            "  {:<4} {:<12} {}",
            angle.kind.abbreviation(),
            angle.placement.sign_name,
            angle.placement.formatted
        );
    }

    let _ = writeln!(out, "\nHouses");
    for house in &report.houses {
        let _ = writeln!(
            out,
            "  {:>2}  {:<12} {}",
            house.number, house.placement.sign_name, house.placement.formatted
        );
    }

    let _ = writeln!(out, "\nAspects");
    if report.aspects.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for aspect in &report.aspects {
        let motion = match aspect.is_applying {
            Some(true) => ", applying",
            Some(false) => ", separating",
            None => "",
        };
        let _ = writeln!(
            out,
            "  {} {} {} (orb {:.2} of {}{})",
            aspect.body_a.name,
            aspect.aspect.to_lowercase(),
            aspect.body_b.name,
            aspect.orb,
            aspect.orb_used,
            motion
        );
    }

    out
}
