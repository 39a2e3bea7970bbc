use crate::ephemeris::Body;
use crate::numerology::NumerologyResult;
use crate::western::{Astro, AstroKind, Distributions};
use crate::zodiac::{normalize_longitude, zodiac_position, Sign, ZodiacPosition};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct House {
    number: u8,
    cusp: f64,
    #[serde(flatten)]
    position: ZodiacPosition,
}

impl House {
    pub fn new(number: u8, cusp: f64) -> Self {
        let cusp = normalize_longitude(cusp);
        Self {
            number,
            cusp,
            position: zodiac_position(cusp),
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn cusp(&self) -> f64 {
        self.cusp
    }

    pub fn position(&self) -> &ZodiacPosition {
        &self.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAttributes {
    pub dominant_sign: Option<Sign>,
    /// Rulers of the Ascendant sign.
    pub rulers: Vec<Body>,
    pub night_chart: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Numerology {
    pub life_path: NumerologyResult,
    pub destiny: Option<u32>,
}

/// A computed birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub julian_day: f64,
    /// Bodies in tracking order, then South Node, Part of Fortune and the
    /// five angular points.
    pub astros: Vec<Astro>,
    pub houses: Vec<House>,
    pub distribution: Distributions,
    pub attributes: ChartAttributes,
    pub numerology: Numerology,
}

impl NatalChart {
    pub fn astro(&self, kind: AstroKind) -> Option<&Astro> {
        self.astros.iter().find(|a| a.kind() == kind)
    }

    pub fn body(&self, body: Body) -> Option<&Astro> {
        self.astro(AstroKind::Body(body))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
