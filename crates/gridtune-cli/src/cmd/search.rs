use clap::Args;
use gridtune_core::domain;
use gridtune_core::search::exhaustive::{combination_count, search_exhaustive};

use crate::cmd::input::{print_optimum, print_target, ModelArgs, TargetArgs};

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub target: TargetArgs,
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    let components = args.model.load()?;
    let target = args.target.resolve()?;

    let domains = components
        .iter()
        .map(domain::build_domain)
        .collect::<gridtune_core::Result<Vec<_>>>()?;

    print_target(&target);
    let combos = combination_count(&domains);
    eprintln!("{} setup combinations, analysing against target ...", combos);

    let (best, best_score) = search_exhaustive(&domains, &components, &target)?;
    print_optimum(&components, &target, &best, best_score)?;

    eprintln!(
        "search ok: deviation={:.6} combinations={}",
        best_score, combos
    );
    Ok(())
}
