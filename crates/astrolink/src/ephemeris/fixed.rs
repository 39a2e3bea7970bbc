//! An ephemeris that replays positions recorded ahead of time.
//!
//! Useful for tests, benchmarks and for rebuilding a chart from positions
//! exported elsewhere, without the Swiss Ephemeris data files.

use crate::ephemeris::bodies::Body;
use crate::ephemeris::types::{EphemerisError, HouseCusps};
use crate::ephemeris::Ephemeris;
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    houses: HouseCusps,
    longitudes: HashMap<Body, f64>,
}

impl FixedEphemeris {
    pub fn new(houses: HouseCusps) -> Self {
        Self {
            houses,
            longitudes: HashMap::new(),
        }
    }

    pub fn with_body(mut self, body: Body, longitude: f64) -> Self {
        self.longitudes.insert(body, longitude);
        self
    }

    pub fn with_bodies<I>(mut self, bodies: I) -> Self
    where
        I: IntoIterator<Item = (Body, f64)>,
    {
        self.longitudes.extend(bodies);
        self
    }
}

impl Ephemeris for FixedEphemeris {
    /// Meeus, Astronomical Algorithms ch. 7, Gregorian calendar.
    fn julian_day(
        &self,
        year: i32,
        month: u32,
        day: u32,
        decimal_hour: f64,
    ) -> Result<f64, EphemerisError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(EphemerisError::InvalidDate { year, month, day });
        }
        let (y, m) = if month <= 2 {
            (year as f64 - 1.0, month as f64 + 12.0)
        } else {
            (year as f64, month as f64)
        };
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        Ok((365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
            + day as f64
            + decimal_hour / 24.0
            + b
            - 1524.5)
    }

    fn houses(
        &self,
        _julian_day: f64,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<HouseCusps, EphemerisError> {
        Ok(self.houses.clone())
    }

    fn body_longitude(&self, julian_day: f64, body: Body) -> Result<f64, EphemerisError> {
        self.longitudes
            .get(&body)
            .copied()
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                julian_day,
                message: "no position recorded".to_string(),
            })
    }
}
