// crates/gridtune-core/src/domain.rs
//
// Setting grids for one component.
//
// Native grid: midpoint ± k*step for k = 0..=half_range/step. The range must
// tile exactly - half_range an integer multiple of step - so the grid has an
// odd point count with the midpoint at the center index. We fail instead of
// truncating the range.
//
// Depth grid: same center, coarser spacing. The effective step at scan depth
// d is half_range/d snapped to the nearest multiple of the native step and
// never finer than native resolution; the grid is clipped to the native range.

use crate::error::{GtError, Result};
use crate::model::component::Component;

/// Tolerance on the exact-tiling check. Steps come from config files with a
/// few decimal places, so float noise is far below this.
const TILE_EPS: f64 = 1e-6;

/// The full native setting grid, ascending, midpoint at the center index.
pub fn build_domain(c: &Component) -> Result<Vec<f64>> {
    // Guard before dividing: a zero or non-finite step turns the tiling
    // check into NaN arithmetic and the grid size into garbage.
    if !c.step.is_finite() || c.step <= 0.0 {
        return Err(GtError::Configuration(format!(
            "{}: step must be a positive finite number (got {})",
            c.name, c.step
        )));
    }
    if !c.half_range.is_finite() || c.half_range <= 0.0 {
        return Err(GtError::Configuration(format!(
            "{}: half_range must be a positive finite number (got {})",
            c.name, c.half_range
        )));
    }
    if !c.midpoint.is_finite() {
        return Err(GtError::Configuration(format!(
            "{}: midpoint must be finite (got {})",
            c.name, c.midpoint
        )));
    }

    let half_steps = c.half_range / c.step;
    if (half_steps - half_steps.round()).abs() > TILE_EPS {
        return Err(GtError::Configuration(format!(
            "{}: half_range {} does not tile by step {} (grid must be odd with the midpoint at center)",
            c.name, c.half_range, c.step
        )));
    }
    Ok(centered_grid(c.midpoint, c.step, half_steps.round() as i64))
}

/// Effective step at scan depth `depth` (>= 1): half_range/depth snapped to
/// the nearest multiple of the native step, floored at native resolution.
pub fn effective_step(c: &Component, depth: u32) -> f64 {
    let raw = c.half_range / depth as f64;
    let multiple = (raw / c.step).round().max(1.0);
    multiple * c.step
}

/// True once the depth-`depth` grid runs at the component's native step.
pub fn at_native_resolution(c: &Component, depth: u32) -> bool {
    effective_step(c, depth) <= c.step * (1.0 + TILE_EPS)
}

/// The coarse grid for scan depth `depth`: spaced by the effective step,
/// centered on the native midpoint, clipped to the native range.
pub fn build_domain_at_depth(c: &Component, depth: u32) -> Result<Vec<f64>> {
    if depth == 0 {
        return Err(GtError::Configuration("scan depth must be >= 1".into()));
    }
    // Validates tiling even when the coarse grid would mask the problem.
    build_domain(c)?;
    let step = effective_step(c, depth);
    let half_steps = (c.half_range / step + TILE_EPS).floor() as i64;
    Ok(centered_grid(c.midpoint, step, half_steps))
}

fn centered_grid(midpoint: f64, step: f64, half_steps: i64) -> Vec<f64> {
    (-half_steps..=half_steps)
        .map(|k| midpoint + k as f64 * step)
        .collect()
}
