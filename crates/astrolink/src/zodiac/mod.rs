//! Zodiac lookup: longitude to sign, degree in sign and sign qualities.

pub mod rulers;
pub mod signs;

pub use rulers::{modern_ruler, rulers, traditional_ruler};
pub use signs::{Element, Modality, Polarity, Sign, SIGN_ORDER};

use serde::{Deserialize, Serialize};

/// Where a longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: Sign,
    /// Degree within the sign, [0, 30), two decimals.
    pub degree: f64,
    pub element: Element,
    pub modality: Modality,
    pub polarity: Polarity,
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_longitude(longitude: f64) -> f64 {
    let r = ((longitude % 360.0) + 360.0) % 360.0;
    // -1e-15 % 360 + 360 rounds back up to 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Round to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve a longitude (any real value) to its zodiac position.
pub fn zodiac_position(longitude: f64) -> ZodiacPosition {
    let lon = normalize_longitude(longitude);
    let sign = Sign::from_index((lon / 30.0).floor() as usize);
    let degree = round2(lon % 30.0).min(29.99);

    ZodiacPosition {
        sign,
        degree,
        element: sign.element(),
        modality: sign.modality(),
        polarity: sign.polarity(),
    }
}
