//! Weighted sums over chart points: dominant sign and quality distributions.

use crate::western::points::Astro;
use crate::zodiac::{round2, Element, Modality, Polarity, Sign, ZodiacPosition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category -> percentage of total weight, two decimals.
pub type Distribution<K> = BTreeMap<K, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributions {
    pub elements: Distribution<Element>,
    pub modalities: Distribution<Modality>,
    pub polarities: Distribution<Polarity>,
}

/// Sum weights per key, keeping the order in which keys first appear.
/// Points without weight are skipped.
fn weighted_buckets<'a, K, I, F>(astros: I, key: F) -> Vec<(K, f64)>
where
    K: PartialEq,
    I: IntoIterator<Item = &'a Astro>,
    F: Fn(&ZodiacPosition) -> K,
{
    let mut buckets: Vec<(K, f64)> = Vec::new();
    for astro in astros {
        if astro.weight() <= 0.0 {
            continue;
        }
        let k = key(astro.position());
        match buckets.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, total)) => *total += astro.weight(),
            None => buckets.push((k, astro.weight())),
        }
    }
    buckets
}

/// Sign holding the greatest total weight.
///
/// On a tie the sign reached first while iterating `astros` wins.
/// `None` when no point carries weight.
pub fn dominant_sign<'a, I>(astros: I) -> Option<Sign>
where
    I: IntoIterator<Item = &'a Astro>,
{
    let mut dominant = None;
    let mut highest = 0.0;
    for (sign, total) in weighted_buckets(astros, |p| p.sign) {
        if total > highest {
            dominant = Some(sign);
            highest = total;
        }
    }
    dominant
}

/// Share of total weight per category, as percentages rounded to two decimals.
///
/// Returns an empty map when nothing carries weight.
pub fn distribution<'a, K, I, F>(astros: I, key: F) -> Distribution<K>
where
    K: Ord,
    I: IntoIterator<Item = &'a Astro>,
    F: Fn(&ZodiacPosition) -> K,
{
    let buckets = weighted_buckets(astros, key);
    let total: f64 = buckets.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return Distribution::new();
    }
    buckets
        .into_iter()
        .map(|(k, w)| (k, round2(w / total * 100.0)))
        .collect()
}

pub fn distributions(astros: &[Astro]) -> Distributions {
    Distributions {
        elements: distribution(astros, |p| p.element),
        modalities: distribution(astros, |p| p.modality),
        polarities: distribution(astros, |p| p.polarity),
    }
}
