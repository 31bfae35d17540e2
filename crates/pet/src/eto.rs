//! Reference crop evapotranspiration (ETo) estimators.

use qdwb_units::{RADIATION_TO_EVAPORATION, radiation_to_evaporation};
use tracing::debug;

use crate::check::{validate_between, validate_less_than};
use crate::error::RangeError;
use crate::solar::SOLAR_CONSTANT;

/// Upper bound accepted for extraterrestrial radiation by
/// [`hargreaves_samani`].
pub const HARGREAVES_MAX_RA: f64 = SOLAR_CONSTANT * 24.0 * 60.0 * RADIATION_TO_EVAPORATION;

/// Estimates ETo (mm day-1) with the Hargreaves and Samani (1985) method,
/// eq. 4.
///
/// # Arguments
///
/// * `tmin` — Minimum daily temperature (°C).
/// * `tmax` — Maximum daily temperature (°C).
/// * `tmean` — Mean daily temperature (°C).
/// * `ra` — Extraterrestrial radiation (MJ m-2 day-1), e.g. from
///   [`extraterrestrial_radiation`](crate::extraterrestrial_radiation).
///
/// # Errors
///
/// Returns [`RangeError::NotLess`] unless `tmin < tmean < tmax`, and
/// [`RangeError::OutOfRange`] if `ra` is outside `[0, HARGREAVES_MAX_RA]`.
pub fn hargreaves_samani(tmin: f64, tmax: f64, tmean: f64, ra: f64) -> Result<f64, RangeError> {
    check_hargreaves_inputs(tmin, tmax, tmean, ra).inspect_err(|e| {
        debug!(error = %e, "hargreaves-samani input rejected");
    })?;

    Ok(0.0023 * (tmean + 17.8) * (tmax - tmin).sqrt() * radiation_to_evaporation(ra))
}

fn check_hargreaves_inputs(tmin: f64, tmax: f64, tmean: f64, ra: f64) -> Result<(), RangeError> {
    validate_less_than(tmin, "tmin", tmax, "tmax")?;
    validate_less_than(tmean, "tmean", tmax, "tmax")?;
    validate_less_than(tmin, "tmin", tmean, "tmean")?;
    validate_between(ra, 0.0, HARGREAVES_MAX_RA, "extraterrestrial radiation")
}

/// Estimates ETo (mm day-1) over a hypothetical short grass reference
/// surface with the FAO-56 Penman-Monteith equation (Allen et al. 1998,
/// eq. 6).
///
/// Inputs are not range-checked; the caller owns their physical
/// consistency.
///
/// # Arguments
///
/// * `delta` — Slope of the saturation vapour pressure curve (kPa °C-1).
/// * `rn` — Net radiation at the crop surface (MJ m-2 day-1).
/// * `g` — Soil heat flux density (MJ m-2 day-1).
/// * `gamma` — Psychrometric constant (kPa °C-1).
/// * `tmean` — Mean daily air temperature at 2 m height (°C).
/// * `u2` — Wind speed at 2 m height (m s-1).
/// * `es` — Saturation vapour pressure (kPa).
/// * `ea` — Actual vapour pressure (kPa).
#[allow(clippy::too_many_arguments)]
pub fn fao56_penman_monteith(
    delta: f64,
    rn: f64,
    g: f64,
    gamma: f64,
    tmean: f64,
    u2: f64,
    es: f64,
    ea: f64,
) -> f64 {
    let radiation = RADIATION_TO_EVAPORATION * delta * (rn - g);
    let aerodynamic = gamma * (900.0 / (tmean + 273.0)) * u2 * (es - ea);
    let denominator = delta + gamma * (1.0 + 0.34 * u2);
    (radiation + aerodynamic) / denominator
}

/// Named inputs for [`fao56_penman_monteith`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenmanMonteithInputs {
    /// Slope of the saturation vapour pressure curve (kPa °C-1).
    pub delta: f64,
    /// Net radiation at the crop surface (MJ m-2 day-1).
    pub net_radiation: f64,
    /// Soil heat flux density (MJ m-2 day-1).
    pub soil_heat_flux: f64,
    /// Psychrometric constant (kPa °C-1).
    pub gamma: f64,
    /// Mean daily air temperature (°C).
    pub tmean: f64,
    /// Wind speed at 2 m height (m s-1).
    pub wind_speed_2m: f64,
    /// Saturation vapour pressure (kPa).
    pub es: f64,
    /// Actual vapour pressure (kPa).
    pub ea: f64,
}

impl PenmanMonteithInputs {
    /// Reference evapotranspiration (mm day-1).
    pub fn eto(&self) -> f64 {
        fao56_penman_monteith(
            self.delta,
            self.net_radiation,
            self.soil_heat_flux,
            self.gamma,
            self.tmean,
            self.wind_speed_2m,
            self.es,
            self.ea,
        )
    }
}
