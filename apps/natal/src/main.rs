#[cfg_attr(not(feature = "swisseph"), allow(dead_code))]
mod collaborators;
mod render;

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime, Timelike};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use natal_core::ephemeris::{EphemerisSnapshot, HouseSystem};
use natal_core::{assemble, BirthRequest, LocationInput, NatalChartReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON report.
    Json,
    /// Human-readable summary.
    Text,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Natal chart derivation")]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a chart from an ephemeris snapshot JSON file.
    Snapshot {
        /// Path to the snapshot file.
        file: PathBuf,
    },
    /// Build a chart from birth data (needs the `swisseph` feature).
    Birth(BirthArgs),
}

#[derive(clap::Args, Debug)]
struct BirthArgs {
    /// Local birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM or HH:MM:SS.
    #[arg(long)]
    time: String,

    /// Birth place, resolved through the configured places.
    #[arg(long, conflicts_with_all = ["lat", "lon"], required_unless_present_all = ["lat", "lon"])]
    place: Option<String>,

    /// Birth latitude in degrees (north positive).
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Birth longitude in degrees (east positive).
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// House system override (placidus, whole_sign, koch, ...).
    #[arg(long)]
    house_system: Option<String>,

    /// Config file (default: configs/natal.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_date(text: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid --date '{}': expected YYYY-MM-DD", text))
}

fn parse_time(text: &str) -> anyhow::Result<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .with_context(|| format!("Invalid --time '{}': expected HH:MM or HH:MM:SS", text))
}

fn build_request(args: &BirthArgs) -> anyhow::Result<BirthRequest> {
    use chrono::Datelike;

    let date = parse_date(&args.date)?;
    let time = parse_time(&args.time)?;

    let location = match (&args.place, args.lat, args.lon) {
        (Some(place), _, _) => LocationInput::Place(place.clone()),
        (None, Some(latitude), Some(longitude)) => LocationInput::Coordinates {
            latitude,
            longitude,
        },
        _ => anyhow::bail!("Provide either --place or both --lat and --lon"),
    };

    let house_system = args
        .house_system
        .as_deref()
        .map(str::parse::<HouseSystem>)
        .transpose()?;

    Ok(BirthRequest {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        hour: time.hour(),
        minute: time.minute(),
        second: time.second(),
        location,
        house_system,
    })
}

fn load_snapshot(path: &Path) -> anyhow::Result<EphemerisSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))
}

#[cfg(feature = "swisseph")]
fn run_birth(args: &BirthArgs) -> anyhow::Result<NatalChartReport> {
    use natal_core::ephemeris::SwissEphemerisAdapter;

    let config = natal_config::load_config(args.config.as_deref())?;
    let request = build_request(args)?;
    let ephemeris = SwissEphemerisAdapter::new(config.ephemeris.path.clone())?;
    let service = collaborators::build_service(ephemeris, &config)?;

    service.compute(&request).map_err(|e| {
        if e.is_input_error() {
            anyhow::anyhow!("Invalid birth data: {e}")
        } else {
            anyhow::anyhow!(e)
        }
    })
}

#[cfg(not(feature = "swisseph"))]
fn run_birth(args: &BirthArgs) -> anyhow::Result<NatalChartReport> {
    // Still validate the arguments so mistakes surface before the feature message.
    natal_config::load_config(args.config.as_deref())?;
    build_request(args)?.validate()?;
    anyhow::bail!(
        "This build has no ephemeris. Rebuild with `--features swisseph`, or use `natal snapshot <file>`."
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let report = match &args.command {
        Command::Snapshot { file } => {
            let snapshot = load_snapshot(file)?;
            log::debug!(
                "Loaded snapshot with {} bodies from {}",
                snapshot.planet_positions.len(),
                file.display()
            );
            assemble(&snapshot)
        }
        Command::Birth(birth) => run_birth(birth)?,
    };

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print!("{}", render::render_text(&report)),
    }
    Ok(())
}
