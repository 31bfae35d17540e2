//! JSON reports written to stdout.

use anyhow::{Context, Result};
use serde::Serialize;

use qdwb_pet::{JulianDay, SolarGeometry};
use qdwb_units::radians_to_degrees;

/// Solar geometry for one site-day.
#[derive(Debug, Serialize)]
pub struct SolarReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    pub latitude_deg: f64,
    pub day_of_year: u16,
    pub solar_declination_rad: f64,
    pub inverse_relative_distance: f64,
    pub sunset_hour_angle_rad: f64,
    pub daylight_hours: f64,
    /// MJ m-2 day-1.
    pub extraterrestrial_radiation: f64,
}

impl SolarReport {
    pub fn new(site: Option<String>, latitude: f64, day: JulianDay, geo: &SolarGeometry) -> Self {
        Self {
            site,
            latitude_deg: radians_to_degrees(latitude),
            day_of_year: day.get(),
            solar_declination_rad: geo.solar_declination,
            inverse_relative_distance: geo.inverse_relative_distance,
            sunset_hour_angle_rad: geo.sunset_hour_angle,
            daylight_hours: geo.daylight_hours(),
            extraterrestrial_radiation: geo.extraterrestrial_radiation,
        }
    }
}

/// Reference evapotranspiration result.
#[derive(Debug, Serialize)]
pub struct EtoReport {
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraterrestrial_radiation: Option<f64>,
    /// mm day-1.
    pub eto: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    HargreavesSamani,
    Fao56PenmanMonteith,
}

/// Serializes a report to JSON.
pub fn render<T: Serialize>(report: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("failed to serialize report")
}
