//! Life Path and Destiny numbers.

pub mod reduce;

pub use reduce::{digit_sum, is_master, reduce_keeping_master, reduce_to_single_digit};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref NON_DIGIT: Regex = Regex::new(r"\D").unwrap();
    static ref NON_LETTER: Regex = Regex::new(r"[^A-Z]").unwrap();

    // Pythagorean table
    static ref LETTER_VALUES: HashMap<char, u32> = {
        let rows: [(&str, u32); 9] = [
            ("AJS", 1),
            ("BKT", 2),
            ("CLU", 3),
            ("DMV", 4),
            ("ENW", 5),
            ("FOX", 6),
            ("GPY", 7),
            ("HQZ", 8),
            ("IR", 9),
        ];
        rows.iter()
            .flat_map(|(letters, value)| letters.chars().map(move |c| (c, *value)))
            .collect()
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyResult {
    /// Digit sum before any reduction.
    pub raw: u32,
    #[serde(rename = "final")]
    pub final_value: u32,
    /// "raw/final" for master numbers, otherwise just the final value.
    pub display: String,
}

/// Value of a letter in the Pythagorean table; `None` outside A-Z.
pub fn letter_value(letter: char) -> Option<u32> {
    LETTER_VALUES.get(&letter).copied()
}

/// Life Path number from a date string such as `1990-05-15`.
///
/// Only a master sum gets reduced further: a non-master sum is reported as is,
/// even when it has two digits.
pub fn life_path(date: &str) -> NumerologyResult {
    let digits = NON_DIGIT.replace_all(date, "");
    let raw: u32 = digits.chars().filter_map(|c| c.to_digit(10)).sum();

    if is_master(raw) {
        let final_value = reduce_to_single_digit(raw);
        NumerologyResult {
            raw,
            final_value,
            display: format!("{}/{}", raw, final_value),
        }
    } else {
        NumerologyResult {
            raw,
            final_value: raw,
            display: raw.to_string(),
        }
    }
}

/// Destiny number from a full name. No name (or an empty one), no number.
pub fn destiny_number(name: Option<&str>) -> Option<u32> {
    let name = name.filter(|n| !n.is_empty())?;
    let upper = name.to_uppercase();
    let letters = NON_LETTER.replace_all(&upper, "");
    let sum: u32 = letters.chars().filter_map(letter_value).sum();
    Some(reduce_keeping_master(sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_path_keeps_non_master_sum() {
        let result = life_path("1990-05-15");
        assert_eq!(result.raw, 30);
        assert_eq!(result.final_value, 30);
        assert_eq!(result.display, "30");
    }

    #[test]
    fn life_path_master_sum() {
        // 2+0+0+0+0+2+0+7 = 11
        let result = life_path("2000-02-07");
        assert_eq!(result.raw, 11);
        assert_eq!(result.final_value, 2);
        assert_eq!(result.display, "11/2");
    }

    #[test]
    fn life_path_ignores_separators() {
        assert_eq!(life_path("1990/05/15"), life_path("19900515"));
    }

    #[test]
    fn destiny() {
        assert_eq!(destiny_number(Some("ANA")), Some(7));
        assert_eq!(destiny_number(Some("ana")), Some(7));
        assert_eq!(destiny_number(None), None);
    }

    #[test]
    fn empty_name_has_no_destiny() {
        assert_eq!(destiny_number(Some("")), None);
        // non-empty but letterless still counts as a name
        assert_eq!(destiny_number(Some("42")), Some(0));
    }

    #[test]
    fn destiny_skips_non_letters() {
        // J=1 O=6 H=8 N=5 -> 20 -> 2
        assert_eq!(destiny_number(Some("John 3rd!")), destiny_number(Some("JOHNRD")));
        assert_eq!(destiny_number(Some("John")), Some(2));
    }

    #[test]
    fn destiny_keeps_master() {
        // B=2 I=9
        assert_eq!(destiny_number(Some("BI")), Some(11));
    }

    #[test]
    fn letter_table() {
        assert_eq!(letter_value('A'), Some(1));
        assert_eq!(letter_value('R'), Some(9));
        assert_eq!(letter_value('Z'), Some(8));
        assert_eq!(letter_value('a'), None);
    }
}
