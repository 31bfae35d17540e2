//! Solar geometry for daily extraterrestrial radiation.
//!
//! Equations 21 and 23-25 of Allen et al. (1998), *Crop evapotranspiration:
//! Guidelines for computing crop water requirements*, FAO Irrigation and
//! Drainage Paper 56. Angles are in radians throughout; latitude is
//! positive in the northern hemisphere and negative in the southern.

use std::f64::consts::PI;

use tracing::trace;

use crate::check::{
    validate_julian_day, validate_latitude_radians, validate_solar_declination_radians,
    validate_sunset_hour_angle_radians,
};
use crate::day::JulianDay;
use crate::error::RangeError;

/// Solar constant (MJ m-2 min-1).
pub const SOLAR_CONSTANT: f64 = 0.0820;

/// Minutes per day, the integration span of eq. 21.
const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Angular speed of the day-of-year term (radians per day).
const DAILY_ANGLE: f64 = 2.0 * PI / 365.0;

/// Solar declination (radians) for a day of the year (eq. 24).
///
/// # Errors
///
/// Returns [`RangeError::JulianDay`] if `day_of_year` is outside 1..=366.
pub fn solar_declination(day_of_year: u16) -> Result<f64, RangeError> {
    validate_julian_day(day_of_year)?;
    Ok(0.409 * (DAILY_ANGLE * f64::from(day_of_year) - 1.39).sin())
}

/// Inverse relative distance Earth-Sun (dimensionless) for a day of the
/// year (eq. 23).
///
/// # Errors
///
/// Returns [`RangeError::JulianDay`] if `day_of_year` is outside 1..=366.
pub fn inverse_relative_distance_earth_sun(day_of_year: u16) -> Result<f64, RangeError> {
    validate_julian_day(day_of_year)?;
    Ok(1.0 + 0.033 * (DAILY_ANGLE * f64::from(day_of_year)).cos())
}

/// Sunset hour angle (radians) from latitude and solar declination (eq. 25).
///
/// Beyond the polar circles the cosine argument leaves [-1, 1]; it is
/// clamped so the result is π under midnight sun and 0 in polar night.
///
/// # Errors
///
/// Returns [`RangeError::Latitude`] or [`RangeError::SolarDeclination`]
/// when the corresponding input is out of range.
pub fn sunset_hour_angle(latitude: f64, solar_dec: f64) -> Result<f64, RangeError> {
    validate_latitude_radians(latitude)?;
    validate_solar_declination_radians(solar_dec)?;

    let cos_sha = -latitude.tan() * solar_dec.tan();
    if !(-1.0..=1.0).contains(&cos_sha) {
        trace!(cos_sha, latitude, solar_dec, "clamping sunset hour angle cosine");
    }
    Ok(cos_sha.clamp(-1.0, 1.0).acos())
}

/// Daily extraterrestrial radiation Ra (MJ m-2 day-1) (eq. 21).
///
/// `irdes` is the inverse relative distance Earth-Sun from
/// [`inverse_relative_distance_earth_sun`]; it is not range-checked.
///
/// # Errors
///
/// Returns a [`RangeError`] if `latitude`, `solar_dec`, or `sha` is out of range.
pub fn extraterrestrial_radiation(
    latitude: f64,
    solar_dec: f64,
    sha: f64,
    irdes: f64,
) -> Result<f64, RangeError> {
    validate_latitude_radians(latitude)?;
    validate_solar_declination_radians(solar_dec)?;
    validate_sunset_hour_angle_radians(sha)?;

    let horizon = sha * latitude.sin() * solar_dec.sin();
    let zenith = latitude.cos() * solar_dec.cos() * sha.sin();
    Ok((MINUTES_PER_DAY / PI) * SOLAR_CONSTANT * irdes * (horizon + zenith))
}

/// Daily solar quantities for one site and day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    /// Solar declination (radians).
    pub solar_declination: f64,
    /// Inverse relative distance Earth-Sun (dimensionless).
    pub inverse_relative_distance: f64,
    /// Sunset hour angle (radians).
    pub sunset_hour_angle: f64,
    /// Extraterrestrial radiation (MJ m-2 day-1).
    pub extraterrestrial_radiation: f64,
}

impl SolarGeometry {
    /// Computes the solar geometry for a latitude (radians) and day.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Latitude`] if `latitude` is outside ±π/2.
    pub fn new(latitude: f64, day: JulianDay) -> Result<Self, RangeError> {
        let solar_declination = solar_declination(day.get())?;
        let inverse_relative_distance = inverse_relative_distance_earth_sun(day.get())?;
        let sunset_hour_angle = sunset_hour_angle(latitude, solar_declination)?;
        let extraterrestrial_radiation = extraterrestrial_radiation(
            latitude,
            solar_declination,
            sunset_hour_angle,
            inverse_relative_distance,
        )?;
        Ok(Self {
            solar_declination,
            inverse_relative_distance,
            sunset_hour_angle,
            extraterrestrial_radiation,
        })
    }

    /// Maximum possible duration of sunshine N (hours), FAO-56 eq. 34.
    pub fn daylight_hours(&self) -> f64 {
        24.0 / PI * self.sunset_hour_angle
    }
}

/// Extraterrestrial radiation (MJ m-2 day-1) for a latitude (radians) and
/// raw day of the year.
///
/// # Errors
///
/// Returns a [`RangeError`] if `latitude` or `day_of_year` is out of range.
pub fn daily_extraterrestrial_radiation(latitude: f64, day_of_year: u16) -> Result<f64, RangeError> {
    let day = JulianDay::new(day_of_year)?;
    Ok(SolarGeometry::new(latitude, day)?.extraterrestrial_radiation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn declination_near_solstices() {
        // June solstice is close to the 0.409 rad amplitude.
        assert_abs_diff_eq!(solar_declination(172).unwrap(), 0.409, epsilon = 1e-3);
        assert_abs_diff_eq!(solar_declination(355).unwrap(), -0.409, epsilon = 1e-2);
    }

    #[test]
    fn declination_within_validated_range() {
        for doy in 1..=366 {
            let sd = solar_declination(doy).unwrap();
            assert!(validate_solar_declination_radians(sd).is_ok(), "doy {doy}: {sd}");
        }
    }

    #[test]
    fn declination_rejects_bad_day() {
        assert_eq!(
            solar_declination(0).unwrap_err(),
            RangeError::JulianDay { doy: 0 }
        );
        assert!(inverse_relative_distance_earth_sun(367).is_err());
    }

    #[test]
    fn inverse_distance_bounds() {
        for doy in 1..=366 {
            let dr = inverse_relative_distance_earth_sun(doy).unwrap();
            assert!((0.966..=1.034).contains(&dr), "doy {doy}: {dr}");
        }
        // Perihelion in early January.
        assert!(inverse_relative_distance_earth_sun(3).unwrap() > 1.03);
    }

    #[test]
    fn equator_equinox_is_twelve_hours() {
        let sha = sunset_hour_angle(0.0, 0.0).unwrap();
        assert_abs_diff_eq!(sha, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn clamps_at_poles() {
        let summer = sunset_hour_angle(FRAC_PI_2, 0.1).unwrap();
        assert_abs_diff_eq!(summer, PI, epsilon = 1e-12);

        let winter = sunset_hour_angle(-FRAC_PI_2, 0.1).unwrap();
        assert_abs_diff_eq!(winter, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sunset_hour_angle_validates_inputs() {
        assert!(matches!(
            sunset_hour_angle(2.0, 0.0),
            Err(RangeError::Latitude { .. })
        ));
        assert!(matches!(
            sunset_hour_angle(0.5, 0.5),
            Err(RangeError::SolarDeclination { .. })
        ));
    }

    #[test]
    fn extraterrestrial_radiation_validates_sha() {
        assert!(matches!(
            extraterrestrial_radiation(0.0, 0.0, -0.1, 1.0),
            Err(RangeError::SunsetHourAngle { .. })
        ));
    }

    #[test]
    fn polar_night_has_no_radiation() {
        let ra = extraterrestrial_radiation(1.4, -0.4, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(ra, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn fao56_example_8() {
        // 20°S on 3 September: Ra = 32.2 MJ m-2 day-1.
        let lat = (-20.0_f64).to_radians();
        let geo = SolarGeometry::new(lat, JulianDay::new(246).unwrap()).unwrap();
        assert_abs_diff_eq!(geo.solar_declination, 0.120, epsilon = 1e-3);
        assert_abs_diff_eq!(geo.inverse_relative_distance, 0.985, epsilon = 1e-3);
        assert_abs_diff_eq!(geo.sunset_hour_angle, 1.527, epsilon = 1e-3);
        assert_abs_diff_eq!(geo.extraterrestrial_radiation, 32.2, epsilon = 0.05);
    }

    #[test]
    fn daylight_hours_equinox() {
        let geo = SolarGeometry {
            solar_declination: 0.0,
            inverse_relative_distance: 1.0,
            sunset_hour_angle: FRAC_PI_2,
            extraterrestrial_radiation: 0.0,
        };
        assert_abs_diff_eq!(geo.daylight_hours(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn daily_shorthand_matches_geometry() {
        let lat = 35.69_f64.to_radians();
        let ra = daily_extraterrestrial_radiation(lat, 172).unwrap();
        let geo = SolarGeometry::new(lat, JulianDay::new(172).unwrap()).unwrap();
        assert_eq!(ra, geo.extraterrestrial_radiation);
        assert!(daily_extraterrestrial_radiation(lat, 0).is_err());
    }
}
