//! Sign rulers.
//!
//! Maps zodiac signs to their planetary rulers. Scorpio, Aquarius and Pisces
//! carry both the traditional ruler and the modern outer-planet ruler.

use crate::ephemeris::Body;
use crate::zodiac::Sign;

/// All rulers of a sign, traditional first.
pub fn rulers(sign: Sign) -> &'static [Body] {
    match sign {
        Sign::Aries => &[Body::Mars],
        Sign::Taurus => &[Body::Venus],
        Sign::Gemini => &[Body::Mercury],
        Sign::Cancer => &[Body::Moon],
        Sign::Leo => &[Body::Sun],
        Sign::Virgo => &[Body::Mercury],
        Sign::Libra => &[Body::Venus],
        Sign::Scorpio => &[Body::Mars, Body::Pluto],
        Sign::Sagittarius => &[Body::Jupiter],
        Sign::Capricorn => &[Body::Saturn],
        Sign::Aquarius => &[Body::Saturn, Body::Uranus],
        Sign::Pisces => &[Body::Jupiter, Body::Neptune],
    }
}

/// Traditional (visible planet) ruler.
pub fn traditional_ruler(sign: Sign) -> Body {
    rulers(sign)[0]
}

/// Modern ruler; the outer planet where one is assigned.
pub fn modern_ruler(sign: Sign) -> Body {
    let all = rulers(sign);
    all[all.len() - 1]
}
