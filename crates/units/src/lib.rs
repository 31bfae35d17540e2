//! Unit conversions for the qdwb evapotranspiration formulas.
//!
//! Temperatures are in degrees Celsius or Kelvin, angles in degrees or
//! radians, and radiation in MJ m-2 day-1. None of the conversions fail;
//! range checks belong to the callers that know the physical bounds.

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Factor converting radiation (MJ m-2 day-1) to equivalent evaporation
/// (mm day-1). Equal to the inverse of the latent heat of vaporization,
/// 1 / 2.45 MJ kg-1 (Allen et al. 1998, eq. 20).
pub const RADIATION_TO_EVAPORATION: f64 = 0.408;

/// Converts a temperature in degrees Celsius to Kelvin.
pub const fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Converts a temperature in Kelvin to degrees Celsius.
pub const fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Converts an angle in degrees to radians.
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Converts an angle in radians to degrees.
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Converts radiation in MJ m-2 day-1 to equivalent evaporation in mm day-1.
pub const fn radiation_to_evaporation(radiation: f64) -> f64 {
    radiation * RADIATION_TO_EVAPORATION
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn freezing_point() {
        assert_abs_diff_eq!(celsius_to_kelvin(0.0), 273.15, epsilon = 1e-12);
        assert_abs_diff_eq!(kelvin_to_celsius(273.15), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn absolute_zero() {
        assert_abs_diff_eq!(kelvin_to_celsius(0.0), -273.15, epsilon = 1e-12);
        assert_abs_diff_eq!(celsius_to_kelvin(-273.15), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn kelvin_celsius_roundtrip() {
        for &k in &[0.0, 1.0, 250.5, 273.15, 300.0, 1.0e4] {
            assert_abs_diff_eq!(celsius_to_kelvin(kelvin_to_celsius(k)), k, epsilon = 1e-9);
        }
    }

    #[test]
    fn right_angle() {
        assert_abs_diff_eq!(degrees_to_radians(90.0), FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(radians_to_degrees(PI), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_angles() {
        assert_abs_diff_eq!(degrees_to_radians(-45.0), -PI / 4.0, epsilon = 1e-15);
        assert_abs_diff_eq!(radians_to_degrees(-FRAC_PI_2), -90.0, epsilon = 1e-12);
    }

    #[test]
    fn radians_degrees_roundtrip() {
        for &r in &[-PI, -1.0, 0.0, 0.409, 1.0, 2.0 * PI] {
            assert_abs_diff_eq!(degrees_to_radians(radians_to_degrees(r)), r, epsilon = 1e-12);
        }
    }

    #[test]
    fn radiation_equivalent_evaporation() {
        // FAO-56 example 3: 15 MJ m-2 day-1 is about 6.1 mm day-1.
        assert_abs_diff_eq!(radiation_to_evaporation(15.0), 6.12, epsilon = 1e-12);
        assert_abs_diff_eq!(radiation_to_evaporation(0.0), 0.0, epsilon = 1e-15);
    }
}
