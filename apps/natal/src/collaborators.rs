//! Builds the chart service's collaborators from `natal.toml`.

use anyhow::Context;
use natal_config::NatalConfig;
use natal_core::ephemeris::{EphemerisProvider, HouseSystem};
use natal_core::geocode::{Gazetteer, GazetteerEntry};
use natal_core::timezone::{parse_zone, RegionTimezoneLookup, TimezoneRegion};
use natal_core::NatalChartService;

pub fn gazetteer_from(config: &NatalConfig) -> Gazetteer {
    Gazetteer::new(
        config
            .places
            .iter()
            .map(|p| GazetteerEntry {
                name: p.name.clone(),
                aliases: p.aliases.clone(),
                latitude: p.latitude,
                longitude: p.longitude,
                formatted_address: p.address().to_string(),
            })
            .collect(),
    )
}

pub fn timezones_from(config: &NatalConfig) -> anyhow::Result<RegionTimezoneLookup> {
    let mut regions = Vec::with_capacity(config.timezone.regions.len());
    for region in &config.timezone.regions {
        let zone = parse_zone(&region.tz)
            .with_context(|| format!("timezone region '{}'", region.name))?;
        regions.push(TimezoneRegion {
            name: region.name.clone(),
            min_lat: region.min_lat,
            max_lat: region.max_lat,
            min_lon: region.min_lon,
            max_lon: region.max_lon,
            zone,
        });
    }

    let default_zone = config
        .timezone
        .default_tz
        .as_deref()
        .map(parse_zone)
        .transpose()
        .context("timezone.default_tz")?;

    Ok(RegionTimezoneLookup::new(regions, default_zone))
}

pub fn build_service<E: EphemerisProvider>(
    ephemeris: E,
    config: &NatalConfig,
) -> anyhow::Result<NatalChartService<E, Gazetteer, RegionTimezoneLookup>> {
    let house_system: HouseSystem = config.ephemeris.house_system.parse()?;
    let gazetteer = gazetteer_from(config);
    let timezones = timezones_from(config)?;
    log::debug!(
        "Chart service: {} places, {} timezone regions, {} houses",
        gazetteer.len(),
        timezones.regions().len(),
        house_system
    );

    Ok(NatalChartService::new(ephemeris, gazetteer, timezones).with_house_system(house_system))
}
