// crates/gridtune-core/src/search/refine.rs
//
// Iterative depth-refinement: enumerate the full native range at a coarse
// step, then re-grid at finer effective steps depth by depth, carrying the
// running best (tuple, score) by value.
//
// Two states: Scanning(depth) and Done. Scanning(d) -> Scanning(d+1) unless
// every component has reached native resolution or d hit max_depth, in which
// case -> Done. A depth level always completes before the depth advances.
//
// This is a coarse-to-fine heuristic. It keeps the cost tractable but is NOT
// guaranteed to find the global optimum that full enumeration over the
// native grids would find.

use crate::domain;
use crate::error::Result;
use crate::model::component::Component;
use crate::model::target::TargetVector;
use crate::score::Scorer;
use crate::search::exhaustive;

/// Snapshot of the running best at the end of one depth level.
#[derive(Clone, Debug)]
pub struct DepthReport {
    pub depth: u32,
    pub best: Vec<f64>,
    pub best_score: f64,
    /// Effective step used per component at this depth.
    pub steps: Vec<f64>,
    /// How many components ran at their native step.
    pub at_native: usize,
}

#[derive(Clone, Debug)]
pub struct RefineOutcome {
    pub best: Vec<f64>,
    pub best_score: f64,
    pub depth_reached: u32,
    pub reports: Vec<DepthReport>,
}

/// Owned by one search; never shared.
struct ScanState {
    best: Vec<f64>,
    best_score: f64,
    depth: u32,
    /// Sticky per-component flag: granularity has reached the native step.
    at_native: Vec<bool>,
}

/// Refining search over the components' native ranges.
///
/// The initial best estimate is the all-midpoint tuple with its real score,
/// so the result is never worse than that baseline. `max_depth` bounds the
/// number of depth levels (at least one level always runs).
pub fn search_refining(
    components: &[Component],
    target: &TargetVector,
    max_depth: u32,
) -> Result<RefineOutcome> {
    let scorer = Scorer::new(components, target)?;

    let midpoints: Vec<f64> = components.iter().map(|c| c.midpoint).collect();
    let mut state = ScanState {
        best_score: scorer.score(&midpoints),
        best: midpoints,
        depth: 1,
        at_native: vec![false; components.len()],
    };

    let mut reports = Vec::new();
    loop {
        let mut steps = Vec::with_capacity(components.len());
        let mut domains = Vec::with_capacity(components.len());
        for (c, flag) in components.iter().zip(state.at_native.iter_mut()) {
            steps.push(domain::effective_step(c, state.depth));
            domains.push(domain::build_domain_at_depth(c, state.depth)?);
            *flag |= domain::at_native_resolution(c, state.depth);
        }

        if let Some((tuple, s)) = exhaustive::best_over(&domains, &scorer) {
            if s < state.best_score {
                state.best = tuple;
                state.best_score = s;
            }
        }

        let at_native = state.at_native.iter().filter(|&&b| b).count();
        reports.push(DepthReport {
            depth: state.depth,
            best: state.best.clone(),
            best_score: state.best_score,
            steps,
            at_native,
        });

        if at_native == components.len() || state.depth >= max_depth {
            return Ok(RefineOutcome {
                best: state.best,
                best_score: state.best_score,
                depth_reached: state.depth,
                reports,
            });
        }
        state.depth += 1;
    }
}
