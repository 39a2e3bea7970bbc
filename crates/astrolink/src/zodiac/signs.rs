//! The twelve tropical signs and their fixed element, modality and polarity.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

/// Zodiac order, Aries first.
pub const SIGN_ORDER: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign for a zodiac index; wraps past Pisces.
    pub fn from_index(index: usize) -> Sign {
        SIGN_ORDER[index % 12]
    }

    /// 0 for Aries through 11 for Pisces.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Sign::Aries | Sign::Leo | Sign::Sagittarius => Element::Fire,
            Sign::Taurus | Sign::Virgo | Sign::Capricorn => Element::Earth,
            Sign::Gemini | Sign::Libra | Sign::Aquarius => Element::Air,
            Sign::Cancer | Sign::Scorpio | Sign::Pisces => Element::Water,
        }
    }

    pub fn modality(self) -> Modality {
        match self {
            Sign::Aries | Sign::Cancer | Sign::Libra | Sign::Capricorn => Modality::Cardinal,
            Sign::Taurus | Sign::Leo | Sign::Scorpio | Sign::Aquarius => Modality::Fixed,
            Sign::Gemini | Sign::Virgo | Sign::Sagittarius | Sign::Pisces => Modality::Mutable,
        }
    }

    /// Fire and air signs are positive, earth and water negative.
    pub fn polarity(self) -> Polarity {
        match self.element() {
            Element::Fire | Element::Air => Polarity::Positive,
            Element::Earth | Element::Water => Polarity::Negative,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Polarity::Positive => "Positive",
            Polarity::Negative => "Negative",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_order() {
        for (i, sign) in SIGN_ORDER.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(Sign::from_index(i), *sign);
        }
        assert_eq!(Sign::from_index(12), Sign::Aries);
    }

    #[test]
    fn each_element_has_three_signs() {
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let count = SIGN_ORDER.iter().filter(|s| s.element() == element).count();
            assert_eq!(count, 3, "{element}");
        }
    }

    #[test]
    fn qualities_of_known_signs() {
        assert_eq!(Sign::Scorpio.element(), Element::Water);
        assert_eq!(Sign::Scorpio.modality(), Modality::Fixed);
        assert_eq!(Sign::Scorpio.polarity(), Polarity::Negative);
        assert_eq!(Sign::Gemini.modality(), Modality::Mutable);
        assert_eq!(Sign::Aquarius.polarity(), Polarity::Positive);
    }
}
