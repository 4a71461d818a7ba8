// crates/gridtune-core/src/score.rs
//
// Setup scoring. Per aspect, the outcome of a setting tuple is
//   sum_i (setting_i - midpoint_i) * coeff[component_i][aspect]
// and the deviation is the L1 aggregate of per-aspect absolute error
// against the target. The L1 norm is load-bearing: together with the fixed
// enumeration order it decides which tuple wins a tie.

use crate::error::{GtError, Result};
use crate::model::component::Component;
use crate::model::target::TargetVector;
use crate::validate;

/// Scoring context with coefficients resolved up front, so the per-tuple
/// hot path is infallible. Construction validates the model; a missing
/// coefficient is a hard error here, never treated as zero.
pub struct Scorer<'a> {
    components: &'a [Component],
    rows: Vec<AspectRow>,
}

struct AspectRow {
    aspect: String,
    target: f64,
    /// One coefficient per component, in component order.
    coeffs: Vec<f64>,
}

impl<'a> Scorer<'a> {
    pub fn new(components: &'a [Component], target: &TargetVector) -> Result<Self> {
        validate::validate_model(components, target)?;

        let mut rows = Vec::with_capacity(target.len());
        for (aspect, want) in &target.values {
            let mut coeffs = Vec::with_capacity(components.len());
            for c in components {
                let coeff = c.effect(aspect).ok_or_else(|| {
                    GtError::Lookup(format!("{}: no coefficient for aspect {aspect}", c.name))
                })?;
                coeffs.push(coeff);
            }
            rows.push(AspectRow {
                aspect: aspect.clone(),
                target: *want,
                coeffs,
            });
        }

        Ok(Scorer { components, rows })
    }

    /// Per-aspect linear outcome of one setting tuple, in target order.
    pub fn outcomes(&self, tuple: &[f64]) -> Vec<(String, f64)> {
        debug_assert_eq!(tuple.len(), self.components.len());
        self.rows
            .iter()
            .map(|row| (row.aspect.clone(), self.outcome_row(tuple, row)))
            .collect()
    }

    /// Aggregate deviation: L1 distance between outcomes and targets.
    pub fn score(&self, tuple: &[f64]) -> f64 {
        debug_assert_eq!(tuple.len(), self.components.len());
        self.rows
            .iter()
            .map(|row| (self.outcome_row(tuple, row) - row.target).abs())
            .sum()
    }

    fn outcome_row(&self, tuple: &[f64], row: &AspectRow) -> f64 {
        self.components
            .iter()
            .zip(tuple)
            .zip(&row.coeffs)
            .map(|((c, &setting), coeff)| (setting - c.midpoint) * coeff)
            .sum()
    }
}

/// One-shot deviation of a single tuple.
pub fn score(tuple: &[f64], components: &[Component], target: &TargetVector) -> Result<f64> {
    Ok(Scorer::new(components, target)?.score(tuple))
}
