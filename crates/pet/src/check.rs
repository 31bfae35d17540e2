//! Input range validation.
//!
//! Angular bounds are stored in radians, converted once from their degree
//! definitions. Solar declination and sunset hour angle limits follow the
//! usual solar geometry conventions: the declination swings between the
//! tropics (±23.5°) and the sun sets between 0° and 180° from solar noon.

use qdwb_units::degrees_to_radians;

use crate::error::RangeError;

/// Lowest valid latitude (the South Pole), in radians.
pub const MIN_LATITUDE_RADIANS: f64 = degrees_to_radians(-90.0);
/// Highest valid latitude (the North Pole), in radians.
pub const MAX_LATITUDE_RADIANS: f64 = degrees_to_radians(90.0);

/// Lowest valid solar declination (Tropic of Capricorn), in radians.
pub const MIN_SOLAR_DECLINATION_RADIANS: f64 = degrees_to_radians(-23.5);
/// Highest valid solar declination (Tropic of Cancer), in radians.
pub const MAX_SOLAR_DECLINATION_RADIANS: f64 = degrees_to_radians(23.5);

/// Lowest valid sunset hour angle (polar night), in radians.
pub const MIN_SUNSET_HOUR_ANGLE_RADIANS: f64 = 0.0;
/// Highest valid sunset hour angle (midnight sun), in radians.
pub const MAX_SUNSET_HOUR_ANGLE_RADIANS: f64 = degrees_to_radians(180.0);

/// Largest Julian day, reached on leap years.
pub const MAX_JULIAN_DAY: u16 = 366;

/// Fails if `a` is greater than `b`.
///
/// Equal values pass. A NaN on either side compares false and passes; use
/// [`validate_less_than`] when NaN must be rejected.
///
/// # Errors
///
/// Returns [`RangeError::Greater`] when `a > b`.
pub fn validate_greater_than(
    a: f64,
    a_name: &'static str,
    b: f64,
    b_name: &'static str,
) -> Result<(), RangeError> {
    if a > b {
        return Err(RangeError::Greater {
            a_name,
            a,
            b_name,
            b,
        });
    }
    Ok(())
}

/// Fails unless `a` is strictly less than `b`.
///
/// # Errors
///
/// Returns [`RangeError::NotLess`] when `a >= b` or either value is NaN.
pub fn validate_less_than(
    a: f64,
    a_name: &'static str,
    b: f64,
    b_name: &'static str,
) -> Result<(), RangeError> {
    if a < b {
        Ok(())
    } else {
        Err(RangeError::NotLess {
            a_name,
            a,
            b_name,
            b,
        })
    }
}

/// Fails if `a` lies outside the closed interval `[min, max]`.
///
/// # Errors
///
/// Returns [`RangeError::OutOfRange`] when `a < min`, `a > max`, or `a` is NaN.
pub fn validate_between(a: f64, min: f64, max: f64, name: &'static str) -> Result<(), RangeError> {
    if (min..=max).contains(&a) {
        Ok(())
    } else {
        Err(RangeError::OutOfRange {
            name,
            value: a,
            min,
            max,
        })
    }
}

/// Checks that a Julian day of the year is in `1..=366`.
///
/// # Errors
///
/// Returns [`RangeError::JulianDay`] otherwise.
pub fn validate_julian_day(doy: u16) -> Result<(), RangeError> {
    if (1..=MAX_JULIAN_DAY).contains(&doy) {
        Ok(())
    } else {
        Err(RangeError::JulianDay { doy })
    }
}

/// Checks that a latitude in radians is within ±90°.
///
/// # Errors
///
/// Returns [`RangeError::Latitude`] otherwise (including NaN).
pub fn validate_latitude_radians(latitude: f64) -> Result<(), RangeError> {
    if (MIN_LATITUDE_RADIANS..=MAX_LATITUDE_RADIANS).contains(&latitude) {
        Ok(())
    } else {
        Err(RangeError::Latitude {
            value: latitude,
            min: MIN_LATITUDE_RADIANS,
            max: MAX_LATITUDE_RADIANS,
        })
    }
}

/// Checks that a solar declination in radians is within ±23.5°.
///
/// # Errors
///
/// Returns [`RangeError::SolarDeclination`] otherwise (including NaN).
pub fn validate_solar_declination_radians(sd: f64) -> Result<(), RangeError> {
    if (MIN_SOLAR_DECLINATION_RADIANS..=MAX_SOLAR_DECLINATION_RADIANS).contains(&sd) {
        Ok(())
    } else {
        Err(RangeError::SolarDeclination {
            value: sd,
            min: MIN_SOLAR_DECLINATION_RADIANS,
            max: MAX_SOLAR_DECLINATION_RADIANS,
        })
    }
}

/// Checks that a sunset hour angle in radians is within 0° to 180°.
///
/// # Errors
///
/// Returns [`RangeError::SunsetHourAngle`] otherwise (including NaN).
pub fn validate_sunset_hour_angle_radians(sha: f64) -> Result<(), RangeError> {
    if (MIN_SUNSET_HOUR_ANGLE_RADIANS..=MAX_SUNSET_HOUR_ANGLE_RADIANS).contains(&sha) {
        Ok(())
    } else {
        Err(RangeError::SunsetHourAngle {
            value: sha,
            min: MIN_SUNSET_HOUR_ANGLE_RADIANS,
            max: MAX_SUNSET_HOUR_ANGLE_RADIANS,
        })
    }
}
