// crates/gridtune-core/src/search/exhaustive.rs
//
// Full enumeration over the Cartesian product of the per-component domains.
// Enumeration order is fixed: components in declared order, each domain
// ascending, the LAST component varying fastest (odometer). The running best
// is replaced only on strict improvement, so a tie resolves to the
// first-encountered tuple and the result is deterministic.
//
// This is the ground-truth algorithm; cost is the product of the domain
// cardinalities, exponential in component count.

use crate::error::{GtError, Result};
use crate::model::component::Component;
use crate::model::target::TargetVector;
use crate::score::Scorer;

/// Evaluate every tuple in the product of `domains` and return the one with
/// minimum deviation, with its score.
pub fn search_exhaustive(
    domains: &[Vec<f64>],
    components: &[Component],
    target: &TargetVector,
) -> Result<(Vec<f64>, f64)> {
    if domains.len() != components.len() {
        return Err(GtError::Configuration(format!(
            "{} domains for {} components",
            domains.len(),
            components.len()
        )));
    }
    let scorer = Scorer::new(components, target)?;
    best_over(domains, &scorer)
        .ok_or_else(|| GtError::Configuration("empty setting domain".into()))
}

/// Number of tuples the enumeration will visit.
pub fn combination_count(domains: &[Vec<f64>]) -> u128 {
    domains
        .iter()
        .fold(1u128, |acc, d| acc.saturating_mul(d.len() as u128))
}

/// Core odometer loop, shared with the refining search. `None` when any
/// domain is empty.
pub(crate) fn best_over(domains: &[Vec<f64>], scorer: &Scorer) -> Option<(Vec<f64>, f64)> {
    if domains.is_empty() || domains.iter().any(|d| d.is_empty()) {
        return None;
    }

    let mut idx = vec![0usize; domains.len()];
    let mut current: Vec<f64> = domains.iter().map(|d| d[0]).collect();

    let mut best = current.clone();
    let mut best_score = scorer.score(&current);

    loop {
        // Advance the odometer; rightmost digit moves fastest.
        let mut pos = domains.len();
        loop {
            if pos == 0 {
                return Some((best, best_score));
            }
            pos -= 1;
            idx[pos] += 1;
            if idx[pos] < domains[pos].len() {
                current[pos] = domains[pos][idx[pos]];
                break;
            }
            idx[pos] = 0;
            current[pos] = domains[pos][0];
        }

        let s = scorer.score(&current);
        if s < best_score {
            best.copy_from_slice(&current);
            best_score = s;
        }
    }
}
