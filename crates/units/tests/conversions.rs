use approx::assert_abs_diff_eq;
use qdwb_units::{
    celsius_to_kelvin, degrees_to_radians, kelvin_to_celsius, radians_to_degrees,
    radiation_to_evaporation,
};

#[test]
fn kelvin_roundtrip_over_range() {
    let mut k = 0.0;
    while k <= 400.0 {
        let back = celsius_to_kelvin(kelvin_to_celsius(k));
        assert_abs_diff_eq!(back, k, epsilon = 1e-9);
        k += 0.25;
    }
}

#[test]
fn degrees_roundtrip_full_circle() {
    for d in -360..=360 {
        let r = f64::from(d).to_radians();
        let back = degrees_to_radians(radians_to_degrees(r));
        assert_abs_diff_eq!(back, r, epsilon = 1e-12);
    }
}

#[test]
fn matches_std_angle_conversion() {
    for d in [-90.0_f64, -23.5, 0.0, 23.5, 35.69, 90.0, 180.0] {
        assert_abs_diff_eq!(degrees_to_radians(d), d.to_radians(), epsilon = 1e-15);
    }
}

#[test]
fn radiation_conversion_is_linear() {
    let a = radiation_to_evaporation(10.0);
    let b = radiation_to_evaporation(20.0);
    assert_abs_diff_eq!(b, 2.0 * a, epsilon = 1e-12);
    assert_abs_diff_eq!(a, 4.08, epsilon = 1e-12);
}
