use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// QDWB reference evapotranspiration calculator.
#[derive(Parser)]
#[command(
    name = "qdwb",
    version,
    about = "Reference evapotranspiration and solar geometry"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the solar geometry for a site and day.
    Solar(SolarArgs),
    /// Estimate ETo with the Hargreaves-Samani method.
    Hargreaves(HargreavesArgs),
    /// Estimate ETo with the FAO-56 Penman-Monteith equation.
    PenmanMonteith(PenmanMonteithArgs),
}

/// Day selection shared by the site-day subcommands.
#[derive(clap::Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct DayArgs {
    /// Julian day of the year (1-366).
    #[arg(long)]
    pub doy: Option<u16>,

    /// Calendar date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `solar` subcommand.
#[derive(clap::Args)]
pub struct SolarArgs {
    /// Latitude in degrees, negative south. Overrides `[site].latitude`.
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[command(flatten)]
    pub day: DayArgs,
}

/// Arguments for the `hargreaves` subcommand.
#[derive(clap::Args)]
pub struct HargreavesArgs {
    /// Minimum daily temperature (°C).
    #[arg(long, allow_negative_numbers = true)]
    pub tmin: f64,

    /// Maximum daily temperature (°C).
    #[arg(long, allow_negative_numbers = true)]
    pub tmax: f64,

    /// Mean daily temperature (°C). Defaults to the midpoint of tmin and tmax.
    #[arg(long, allow_negative_numbers = true)]
    pub tmean: Option<f64>,

    /// Latitude in degrees, negative south. Overrides `[site].latitude`.
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[command(flatten)]
    pub day: DayArgs,
}

/// Arguments for the `penman-monteith` subcommand.
#[derive(clap::Args)]
pub struct PenmanMonteithArgs {
    /// Slope of the saturation vapour pressure curve (kPa/°C).
    #[arg(long)]
    pub delta: f64,

    /// Net radiation at the crop surface (MJ/m²/day).
    #[arg(long, allow_negative_numbers = true)]
    pub rn: f64,

    /// Soil heat flux density (MJ/m²/day).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub soil_heat_flux: f64,

    /// Psychrometric constant (kPa/°C).
    #[arg(long)]
    pub gamma: f64,

    /// Mean daily air temperature (°C).
    #[arg(long, allow_negative_numbers = true)]
    pub tmean: f64,

    /// Wind speed at 2 m height (m/s).
    #[arg(long)]
    pub u2: f64,

    /// Saturation vapour pressure (kPa).
    #[arg(long)]
    pub es: f64,

    /// Actual vapour pressure (kPa).
    #[arg(long)]
    pub ea: f64,
}
