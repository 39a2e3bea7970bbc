pub mod adapter;
pub mod bodies;
pub mod fixed;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use bodies::{Body, Classification, TRACKED_BODIES};
pub use fixed::FixedEphemeris;
pub use types::{EphemerisError, HouseCusps};

/// Astronomical calculations the chart is built from.
///
/// Calls block; the chart assembler runs them on tokio's blocking pool.
/// Longitudes are tropical, geocentric, ecliptic degrees.
pub trait Ephemeris: Send + Sync {
    /// Julian day (UT) for a Gregorian calendar date and decimal hour.
    fn julian_day(
        &self,
        year: i32,
        month: u32,
        day: u32,
        decimal_hour: f64,
    ) -> Result<f64, EphemerisError>;

    /// House cusps and angles for a moment and a place.
    fn houses(&self, julian_day: f64, latitude: f64, longitude: f64)
        -> Result<HouseCusps, EphemerisError>;

    /// Ecliptic longitude of one body.
    fn body_longitude(&self, julian_day: f64, body: Body) -> Result<f64, EphemerisError>;
}
