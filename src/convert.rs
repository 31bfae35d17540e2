//! Pure conversion functions: CLI arguments and TOML config -> library types.

use anyhow::{Context, Result, bail};

use qdwb_pet::{JulianDay, validate_latitude_radians};
use qdwb_units::degrees_to_radians;

use crate::cli::DayArgs;
use crate::config::SiteToml;

/// Resolves the site latitude in radians.
///
/// A CLI value overrides `[site].latitude`; at least one must be set.
pub fn resolve_latitude(cli_latitude: Option<f64>, site: &SiteToml) -> Result<f64> {
    let Some(degrees) = cli_latitude.or(site.latitude) else {
        bail!("no latitude: pass --latitude or set [site].latitude in config");
    };
    let radians = degrees_to_radians(degrees);
    validate_latitude_radians(radians)
        .with_context(|| format!("invalid latitude: {degrees} degrees"))?;
    Ok(radians)
}

/// Resolves the Julian day from either `--doy` or `--date`.
pub fn resolve_day(day: &DayArgs) -> Result<JulianDay> {
    match (day.doy, day.date) {
        (Some(doy), None) => JulianDay::new(doy).context("invalid --doy"),
        (None, Some(date)) => Ok(JulianDay::from_date(date)),
        (Some(_), Some(_)) => bail!("pass exactly one of --doy or --date, got both"),
        (None, None) => bail!("pass exactly one of --doy or --date, got neither"),
    }
}

/// Mean temperature for Hargreaves-Samani, defaulting to the midpoint.
pub fn resolve_tmean(tmin: f64, tmax: f64, tmean: Option<f64>) -> f64 {
    tmean.unwrap_or((tmin + tmax) / 2.0)
}
