use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping used when weighting chart points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Luminary,
    #[serde(rename = "Personal Planet")]
    PersonalPlanet,
    #[serde(rename = "Social Planet")]
    SocialPlanet,
    #[serde(rename = "Generational Planet")]
    GenerationalPlanet,
    #[serde(rename = "Lunar Node")]
    LunarNode,
    #[serde(rename = "Angular Point")]
    AngularPoint,
    Other,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::Luminary => "Luminary",
            Classification::PersonalPlanet => "Personal Planet",
            Classification::SocialPlanet => "Social Planet",
            Classification::GenerationalPlanet => "Generational Planet",
            Classification::LunarNode => "Lunar Node",
            Classification::AngularPoint => "Angular Point",
            Classification::Other => "Other",
        }
    }
}

/// Bodies whose longitude is requested from the ephemeris for every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Mean lunar apogee (Black Moon).
    Lilith,
    Chiron,
    Pholus,
    Ceres,
    Pallas,
    Juno,
    Vesta,
    /// Mean ascending lunar node.
    NorthNode,
}

/// Every tracked body, in chart order.
pub const TRACKED_BODIES: [Body; 18] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Lilith,
    Body::Chiron,
    Body::Pholus,
    Body::Ceres,
    Body::Pallas,
    Body::Juno,
    Body::Vesta,
    Body::NorthNode,
];

impl Body {
    /// Swiss Ephemeris planet number (SE_SUN, SE_MEAN_NODE, ...).
    pub fn swiss_id(self) -> i32 {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
            Body::Pluto => 9,
            Body::NorthNode => 10,
            Body::Lilith => 12,
            Body::Chiron => 15,
            Body::Pholus => 16,
            Body::Ceres => 17,
            Body::Pallas => 18,
            Body::Juno => 19,
            Body::Vesta => 20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Lilith => "Lilith",
            Body::Chiron => "Chiron",
            Body::Pholus => "Pholus",
            Body::Ceres => "Ceres",
            Body::Pallas => "Pallas",
            Body::Juno => "Juno",
            Body::Vesta => "Vesta",
            Body::NorthNode => "North Node",
        }
    }

    pub fn classification(self) -> Classification {
        match self {
            Body::Sun | Body::Moon => Classification::Luminary,
            Body::Mercury | Body::Venus | Body::Mars => Classification::PersonalPlanet,
            Body::Jupiter | Body::Saturn => Classification::SocialPlanet,
            Body::Uranus | Body::Neptune | Body::Pluto => Classification::GenerationalPlanet,
            Body::NorthNode => Classification::LunarNode,
            Body::Lilith
            | Body::Chiron
            | Body::Pholus
            | Body::Ceres
            | Body::Pallas
            | Body::Juno
            | Body::Vesta => Classification::Other,
        }
    }

    /// Importance of the body when summing signs and qualities.
    pub fn weight(self) -> f64 {
        match self.classification() {
            Classification::Luminary => 6.0,
            Classification::PersonalPlanet => 4.0,
            Classification::SocialPlanet => 2.0,
            Classification::GenerationalPlanet => 1.0,
            _ => 0.2,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn swiss_ids_are_unique() {
        let ids: HashSet<i32> = TRACKED_BODIES.iter().map(|b| b.swiss_id()).collect();
        assert_eq!(ids.len(), TRACKED_BODIES.len());
    }

    #[test]
    fn weights_follow_classification() {
        assert_eq!(Body::Sun.weight(), 6.0);
        assert_eq!(Body::Mars.weight(), 4.0);
        assert_eq!(Body::Saturn.weight(), 2.0);
        assert_eq!(Body::Pluto.weight(), 1.0);
        assert_eq!(Body::Vesta.weight(), 0.2);
        assert_eq!(Body::NorthNode.weight(), 0.2);
        assert_eq!(Body::NorthNode.classification(), Classification::LunarNode);
    }

    #[test]
    fn classification_serializes_as_label() {
        for class in [Classification::PersonalPlanet, Classification::AngularPoint, Classification::Other] {
            let json = serde_json::to_string(&class).unwrap();
            assert_eq!(json, format!("\"{}\"", class.label()));
            assert_eq!(class.to_string(), class.label());
        }
        let parsed: Classification = serde_json::from_str("\"Lunar Node\"").unwrap();
        assert_eq!(parsed, Classification::LunarNode);
    }
}
