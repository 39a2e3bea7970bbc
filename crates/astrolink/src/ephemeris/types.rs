use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: String,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Invalid calendar date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// House cusps and angles for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    /// Cusp longitudes, house 1 first.
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
    pub vertex: f64,
}

impl HouseCusps {
    /// Cusp of house `number`. Panics outside 1-12.
    pub fn cusp(&self, number: usize) -> f64 {
        self.cusps[number - 1]
    }
}
