//! Chart points: bodies, angles and the derived lots and nodes.

use crate::ephemeris::{Body, Classification, HouseCusps};
use crate::zodiac::{normalize_longitude, zodiac_position, ZodiacPosition};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AngularPoint {
    Ascendant,
    Descendant,
    Midheaven,
    ImumCoeli,
    Vertex,
}

impl AngularPoint {
    pub fn name(self) -> &'static str {
        match self {
            AngularPoint::Ascendant => "Ascendant",
            AngularPoint::Descendant => "Descendant",
            AngularPoint::Midheaven => "Midheaven",
            AngularPoint::ImumCoeli => "Imum Coeli",
            AngularPoint::Vertex => "Vertex",
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            AngularPoint::Ascendant | AngularPoint::Midheaven => 4.5,
            _ => 0.2,
        }
    }

    pub fn classification(self) -> Classification {
        match self {
            AngularPoint::Vertex => Classification::Other,
            _ => Classification::AngularPoint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AstroKind {
    Body(Body),
    SouthNode,
    PartOfFortune,
    Angle(AngularPoint),
}

/// One weighted point of the chart.
///
/// The zodiac position is computed from the longitude when the point is
/// built and the fields are read-only afterwards, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Astro {
    kind: AstroKind,
    name: &'static str,
    classification: Classification,
    weight: f64,
    longitude: f64,
    #[serde(flatten)]
    position: ZodiacPosition,
}

impl Astro {
    fn new(
        kind: AstroKind,
        name: &'static str,
        classification: Classification,
        weight: f64,
        longitude: f64,
    ) -> Self {
        let longitude = normalize_longitude(longitude);
        Self {
            kind,
            name,
            classification,
            weight,
            longitude,
            position: zodiac_position(longitude),
        }
    }

    pub fn body(body: Body, longitude: f64) -> Self {
        Self::new(
            AstroKind::Body(body),
            body.name(),
            body.classification(),
            body.weight(),
            longitude,
        )
    }

    pub fn angle(point: AngularPoint, longitude: f64) -> Self {
        Self::new(
            AstroKind::Angle(point),
            point.name(),
            point.classification(),
            point.weight(),
            longitude,
        )
    }

    pub fn kind(&self) -> AstroKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn position(&self) -> &ZodiacPosition {
        &self.position
    }
}

/// South Node: opposite the North Node, same weight and classification.
pub fn south_node(north_node: &Astro) -> Astro {
    Astro::new(
        AstroKind::SouthNode,
        "South Node",
        north_node.classification,
        north_node.weight,
        (north_node.longitude + 180.0) % 360.0,
    )
}

/// Part of Fortune: Asc + Moon - Sun by day, Asc + Sun - Moon by night.
pub fn part_of_fortune(sun: f64, moon: f64, ascendant: f64, night: bool) -> Astro {
    let lot = if night {
        ascendant + sun - moon
    } else {
        ascendant + moon - sun
    };
    Astro::new(
        AstroKind::PartOfFortune,
        "Part of Fortune",
        Classification::Other,
        0.2,
        lot,
    )
}

/// Ascendant, Descendant, Midheaven, Imum Coeli and Vertex, in that order.
/// Descendant and Imum Coeli are always derived from their opposite angle.
pub fn angular_points(houses: &HouseCusps) -> [Astro; 5] {
    [
        Astro::angle(AngularPoint::Ascendant, houses.ascendant),
        Astro::angle(AngularPoint::Descendant, (houses.ascendant + 180.0) % 360.0),
        Astro::angle(AngularPoint::Midheaven, houses.midheaven),
        Astro::angle(AngularPoint::ImumCoeli, (houses.midheaven + 180.0) % 360.0),
        Astro::angle(AngularPoint::Vertex, houses.vertex),
    ]
}

/// True when the Sun is below the horizon (houses 1-6).
///
/// Both comparisons are strict: a Sun exactly on the house 1 or house 7 cusp
/// counts as a day chart.
pub fn is_night_chart(sun: f64, houses: &HouseCusps) -> bool {
    sun < houses.cusp(7) || sun > houses.cusp(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::Sign;
    use approx::assert_relative_eq;

    fn houses(asc: f64) -> HouseCusps {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = (asc + 30.0 * i as f64) % 360.0;
        }
        HouseCusps {
            cusps,
            ascendant: asc,
            midheaven: (asc + 270.0) % 360.0,
            vertex: (asc + 100.0) % 360.0,
        }
    }

    #[test]
    fn south_node_opposes_north_node() {
        let north = Astro::body(Body::NorthNode, 10.0);
        let south = south_node(&north);
        assert_relative_eq!(south.longitude(), 190.0);
        assert_eq!(south.kind(), AstroKind::SouthNode);
        assert_eq!(south.weight(), north.weight());
        assert_eq!(south.classification(), Classification::LunarNode);

        let south = south_node(&Astro::body(Body::NorthNode, 350.0));
        assert_relative_eq!(south.longitude(), 170.0);
        assert_eq!(south.position().sign, Sign::Virgo);
    }

    #[test]
    fn part_of_fortune_day_and_night() {
        let day = part_of_fortune(100.0, 200.0, 0.0, false);
        assert_relative_eq!(day.longitude(), 100.0);
        let night = part_of_fortune(100.0, 200.0, 0.0, true);
        assert_relative_eq!(night.longitude(), 260.0);
        assert_eq!(night.weight(), 0.2);
        assert_eq!(night.classification(), Classification::Other);
    }

    #[test]
    fn part_of_fortune_wraps_above_360() {
        let lot = part_of_fortune(10.0, 300.0, 200.0, false);
        assert_relative_eq!(lot.longitude(), 130.0);
    }

    #[test]
    fn angles_derive_opposites() {
        let points = angular_points(&houses(200.0));
        assert_eq!(points[0].kind(), AstroKind::Angle(AngularPoint::Ascendant));
        assert_relative_eq!(points[1].longitude(), 20.0);
        assert_relative_eq!(points[2].longitude(), 110.0);
        assert_relative_eq!(points[3].longitude(), 290.0);
        assert_eq!(points[0].weight(), 4.5);
        assert_eq!(points[1].weight(), 0.2);
        assert_eq!(points[4].classification(), Classification::Other);
    }

    #[test]
    fn night_chart_when_sun_below_horizon() {
        // Ascendant at 180: houses 1-6 span 180..360
        let h = houses(180.0);
        assert!(!is_night_chart(90.0, &h));
        assert!(is_night_chart(270.0, &h));
    }

    #[test]
    fn night_chart_boundaries_are_strict() {
        let h = houses(180.0);
        assert!(!is_night_chart(180.0, &h)); // on house 1 cusp
        assert!(!is_night_chart(0.0, &h)); // on house 7 cusp
        assert!(is_night_chart(180.01, &h));
    }

    #[test]
    fn night_chart_rule_with_ascendant_at_zero() {
        // cusp 1 = 0 and cusp 7 = 180: any Sun past 0 satisfies `sun > cusp1`
        let h = houses(0.0);
        assert!(is_night_chart(90.0, &h));
        assert!(is_night_chart(270.0, &h));
        assert!(!is_night_chart(0.0, &h));
    }
}
