//! Error types for the qdwb-pet crate.

/// Error type for all fallible operations in the qdwb-pet crate.
///
/// Every variant is an input outside its physical or logical bounds. The
/// offending value travels with the error together with the bound it broke.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// Returned when a named value falls outside a closed interval.
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Label of the checked value.
        name: &'static str,
        /// The value that was provided.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// Returned when `a` exceeds `b`.
    #[error("{a_name} ({a}) is greater than {b_name} ({b})")]
    Greater {
        /// Label of the left-hand value.
        a_name: &'static str,
        /// The left-hand value.
        a: f64,
        /// Label of the right-hand value.
        b_name: &'static str,
        /// The right-hand value.
        b: f64,
    },

    /// Returned when `a` is not strictly less than `b`.
    #[error("{a_name} ({a}) must be less than {b_name} ({b})")]
    NotLess {
        /// Label of the left-hand value.
        a_name: &'static str,
        /// The left-hand value.
        a: f64,
        /// Label of the right-hand value.
        b_name: &'static str,
        /// The right-hand value.
        b: f64,
    },

    /// Returned when a Julian day is outside 1..=366.
    #[error("invalid Julian day: {doy} (must be 1..=366)")]
    JulianDay {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a latitude is outside ±90 degrees.
    #[error("latitude outside valid range {min} to {max} radians: {value}")]
    Latitude {
        /// The latitude that was provided, in radians.
        value: f64,
        /// Lower bound in radians.
        min: f64,
        /// Upper bound in radians.
        max: f64,
    },

    /// Returned when a solar declination is outside ±23.5 degrees.
    #[error("solar declination outside valid range {min} to {max} radians: {value}")]
    SolarDeclination {
        /// The declination that was provided, in radians.
        value: f64,
        /// Lower bound in radians.
        min: f64,
        /// Upper bound in radians.
        max: f64,
    },

    /// Returned when a sunset hour angle is outside 0 to 180 degrees.
    #[error("sunset hour angle outside valid range {min} to {max} radians: {value}")]
    SunsetHourAngle {
        /// The hour angle that was provided, in radians.
        value: f64,
        /// Lower bound in radians.
        min: f64,
        /// Upper bound in radians.
        max: f64,
    },
}
