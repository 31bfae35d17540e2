//! Julian day-of-year newtype.

use chrono::{Datelike, NaiveDate};

use crate::check::validate_julian_day;
use crate::error::RangeError;

/// Day of the year (1..=366), counting January 1 as day 1.
///
/// Unlike a no-leap calendar, day 366 is valid so that December 31 of a
/// leap year can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDay(u16);

impl JulianDay {
    /// Creates a `JulianDay` from a raw day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::JulianDay`] if `doy` is outside 1..=366.
    pub fn new(doy: u16) -> Result<Self, RangeError> {
        validate_julian_day(doy)?;
        Ok(Self(doy))
    }

    /// Creates a `JulianDay` from a calendar date.
    ///
    /// This constructor is infallible because a Gregorian ordinal is
    /// always in 1..=366.
    pub fn from_date(date: NaiveDate) -> Self {
        // ordinal() is 1..=366, which fits in u16.
        Self(date.ordinal() as u16)
    }

    /// Returns the raw day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for JulianDay {
    type Error = RangeError;

    fn try_from(doy: u16) -> Result<Self, Self::Error> {
        Self::new(doy)
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
