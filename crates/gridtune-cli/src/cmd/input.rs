// crates/gridtune-cli/src/cmd/input.rs
//
// Shared inputs for the search commands: where the component model comes
// from, and where the target vector comes from.

use clap::Args;
use gridtune_core::{Component, TargetVector};

use crate::io::{components_file, sav};

#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Component config (.yml). If omitted, uses the built-in reference car.
    #[arg(long)]
    pub components: Option<String>,
}

impl ModelArgs {
    pub fn load(&self) -> anyhow::Result<Vec<Component>> {
        match self.components.as_deref() {
            Some(path) => components_file::load_components(path),
            None => Ok(gridtune_core::model::defaults::reference_components()),
        }
    }
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Setup save file (.sav) to extract targets from
    #[arg(long)]
    pub sav: Option<String>,

    /// Explicit target, repeatable: --target "Downforce=0.3"
    #[arg(long = "target", value_name = "ASPECT=VALUE")]
    pub targets: Vec<String>,
}

impl TargetArgs {
    pub fn resolve(&self) -> anyhow::Result<TargetVector> {
        match (self.sav.as_deref(), self.targets.is_empty()) {
            (Some(path), true) => sav::read_targets(path),
            (None, false) => parse_pairs(&self.targets),
            (Some(_), false) => anyhow::bail!("pass either --sav or --target, not both"),
            (None, true) => anyhow::bail!("need --sav or at least one --target"),
        }
    }
}

fn parse_pairs(pairs: &[String]) -> anyhow::Result<TargetVector> {
    let mut values = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let (aspect, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("invalid --target entry: {pair} (want ASPECT=VALUE)"))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --target value in: {pair}"))?;
        values.push((aspect.trim().to_string(), value));
    }
    Ok(TargetVector::new(values))
}

/// Shared TARGET block, printed by search and refine before the run.
pub fn print_target(target: &TargetVector) {
    println!("TARGET");
    for (aspect, value) in &target.values {
        println!("  {:<14} {:+.6}", aspect, value);
    }
}

/// Shared OPTIMUM block: best settings per component, per-aspect outcomes,
/// and the aggregate deviation.
pub fn print_optimum(
    components: &[Component],
    target: &TargetVector,
    best: &[f64],
    best_score: f64,
) -> anyhow::Result<()> {
    println!("OPTIMUM");
    for (c, value) in components.iter().zip(best) {
        println!("  {:<14} {:.4}", c.name, value);
    }

    let scorer = gridtune_core::Scorer::new(components, target)?;
    println!("OUTCOME");
    for (aspect, value) in scorer.outcomes(best) {
        println!("  {:<14} {:+.6}", aspect, value);
    }
    println!("  (deviation: {:.6})", best_score);
    Ok(())
}
