//! Natal chart and numerology calculations.
//!
//! Positions come from an [`ephemeris::Ephemeris`]; everything else (zodiac
//! lookup, lots, nodes, weighting, numerology) is computed here.

pub mod chart;
pub mod ephemeris;
pub mod numerology;
pub mod western;
pub mod zodiac;

pub use astrolink_config::{load_chart_settings, ChartSettings};
pub use chart::{compute_natal_chart, AssemblerOptions, ChartAssembler, ChartError, ChartInput, NatalChart};
pub use ephemeris::{Body, Ephemeris, EphemerisError, FixedEphemeris, HouseCusps, SwissEphemerisAdapter};
pub use zodiac::{zodiac_position, Element, Modality, Polarity, Sign, ZodiacPosition};
