//! Solar command: print the solar geometry for a site-day.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use qdwb_pet::SolarGeometry;

use crate::cli::SolarArgs;
use crate::config::QdwbConfig;
use crate::convert;
use crate::report::{self, SolarReport};

/// Run the solar geometry calculation.
pub fn run(args: SolarArgs, config: &QdwbConfig) -> Result<()> {
    let _cmd = info_span!("solar").entered();

    let latitude = convert::resolve_latitude(args.latitude, &config.site)?;
    let day = convert::resolve_day(&args.day)?;
    debug!(latitude, doy = day.get(), "resolved site-day");

    let geo = SolarGeometry::new(latitude, day).context("solar geometry failed")?;

    let report = SolarReport::new(config.site.name.clone(), latitude, day, &geo);
    println!("{}", report::render(&report, config.output.pretty)?);
    Ok(())
}
