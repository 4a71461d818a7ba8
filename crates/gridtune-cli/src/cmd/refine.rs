use clap::Args;
use gridtune_core::search::refine::search_refining;

use crate::cmd::input::{print_optimum, print_target, ModelArgs, TargetArgs};

#[derive(Args)]
pub struct RefineArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Maximum scan depth (the search also stops once every component
    /// reaches its native step)
    #[arg(long, default_value_t = 10)]
    pub max_depth: u32,
}

pub fn run(args: RefineArgs) -> anyhow::Result<()> {
    let components = args.model.load()?;
    let target = args.target.resolve()?;

    print_target(&target);

    let out = search_refining(&components, &target, args.max_depth)?;
    for r in &out.reports {
        let best = r
            .best
            .iter()
            .map(|v| format!("{v:.4}"))
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!(
            "depth {}: best=[{}] deviation={:.6} native={}/{}",
            r.depth,
            best,
            r.best_score,
            r.at_native,
            components.len()
        );
    }

    print_optimum(&components, &target, &out.best, out.best_score)?;

    eprintln!(
        "refine ok: deviation={:.6} depth_reached={} max_depth={}",
        out.best_score, out.depth_reached, args.max_depth
    );
    Ok(())
}
