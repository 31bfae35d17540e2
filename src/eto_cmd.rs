//! ETo commands: Hargreaves-Samani and FAO-56 Penman-Monteith.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use qdwb_pet::{PenmanMonteithInputs, SolarGeometry, hargreaves_samani};

use crate::cli::{HargreavesArgs, PenmanMonteithArgs};
use crate::config::QdwbConfig;
use crate::convert;
use crate::report::{self, EtoReport, Method};

/// Run the Hargreaves-Samani estimate for a site-day.
pub fn run_hargreaves(args: HargreavesArgs, config: &QdwbConfig) -> Result<()> {
    let _cmd = info_span!("hargreaves").entered();

    let latitude = convert::resolve_latitude(args.latitude, &config.site)?;
    let day = convert::resolve_day(&args.day)?;
    let tmean = convert::resolve_tmean(args.tmin, args.tmax, args.tmean);
    debug!(latitude, doy = day.get(), tmean, "resolved inputs");

    let geo = SolarGeometry::new(latitude, day).context("solar geometry failed")?;
    let eto = hargreaves_samani(args.tmin, args.tmax, tmean, geo.extraterrestrial_radiation)
        .context("Hargreaves-Samani estimate failed")?;
    info!(eto, "reference evapotranspiration computed");

    let report = EtoReport {
        method: Method::HargreavesSamani,
        site: config.site.name.clone(),
        day_of_year: Some(day.get()),
        extraterrestrial_radiation: Some(geo.extraterrestrial_radiation),
        eto,
    };
    println!("{}", report::render(&report, config.output.pretty)?);
    Ok(())
}

/// Run the FAO-56 Penman-Monteith estimate.
pub fn run_penman_monteith(args: PenmanMonteithArgs, config: &QdwbConfig) -> Result<()> {
    let _cmd = info_span!("penman_monteith").entered();

    let inputs = PenmanMonteithInputs {
        delta: args.delta,
        net_radiation: args.rn,
        soil_heat_flux: args.soil_heat_flux,
        gamma: args.gamma,
        tmean: args.tmean,
        wind_speed_2m: args.u2,
        es: args.es,
        ea: args.ea,
    };
    let eto = inputs.eto();
    if !eto.is_finite() {
        warn!(?inputs, eto, "non-finite ETo");
    }
    info!(eto, "reference evapotranspiration computed");

    let report = EtoReport {
        method: Method::Fao56PenmanMonteith,
        site: config.site.name.clone(),
        day_of_year: None,
        extraterrestrial_radiation: None,
        eto,
    };
    println!("{}", report::render(&report, config.output.pretty)?);
    Ok(())
}
