//! # qdwb-pet
//!
//! Reference crop evapotranspiration (ETo) and the solar geometry that
//! feeds it.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["JulianDay (1..=366)"] -->|"solar_declination()"| B["δ"]
//!     A -->|"inverse_relative_distance_earth_sun()"| C["dr"]
//!     L["latitude φ"] --> D
//!     B -->|"sunset_hour_angle()"| D["ωs"]
//!     B --> E
//!     C --> E
//!     D -->|"extraterrestrial_radiation()"| E["Ra"]
//!     E -->|"hargreaves_samani()"| F["ETo"]
//!     G["Δ, Rn, G, γ, T, u2, es, ea"] -->|"fao56_penman_monteith()"| F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use qdwb_pet::{JulianDay, SolarGeometry, hargreaves_samani};
//!
//! let latitude = (-20.0_f64).to_radians();
//! let geo = SolarGeometry::new(latitude, JulianDay::new(246)?)?;
//! let eto = hargreaves_samani(12.3, 25.1, 18.7, geo.extraterrestrial_radiation)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `check` | Range validation helpers and angular bounds |
//! | `day` | Julian day-of-year newtype |
//! | `solar` | Declination, Earth-Sun distance, sunset hour angle, Ra |
//! | `eto` | Hargreaves-Samani and FAO-56 Penman-Monteith |
//! | `error` | Error types |

mod check;
mod day;
mod error;
mod eto;
mod solar;

pub use check::{
    MAX_JULIAN_DAY, MAX_LATITUDE_RADIANS, MAX_SOLAR_DECLINATION_RADIANS,
    MAX_SUNSET_HOUR_ANGLE_RADIANS, MIN_LATITUDE_RADIANS, MIN_SOLAR_DECLINATION_RADIANS,
    MIN_SUNSET_HOUR_ANGLE_RADIANS, validate_between, validate_greater_than, validate_julian_day,
    validate_latitude_radians, validate_less_than, validate_solar_declination_radians,
    validate_sunset_hour_angle_radians,
};
pub use day::JulianDay;
pub use error::RangeError;
pub use eto::{HARGREAVES_MAX_RA, PenmanMonteithInputs, fao56_penman_monteith, hargreaves_samani};
pub use solar::{
    SOLAR_CONSTANT, SolarGeometry, daily_extraterrestrial_radiation, extraterrestrial_radiation,
    inverse_relative_distance_earth_sun, solar_declination, sunset_hour_angle,
};
