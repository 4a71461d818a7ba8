use clap::Args;
use gridtune_core::domain;
use gridtune_core::search::exhaustive::combination_count;

use crate::cmd::input::ModelArgs;

#[derive(Args)]
pub struct ComponentsArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

pub fn run(args: ComponentsArgs) -> anyhow::Result<()> {
    let components = args.model.load()?;

    let mut domains = Vec::with_capacity(components.len());
    for c in &components {
        let d = domain::build_domain(c)?;
        println!(
            "{:<14} {:>8.2} .. {:<8.2} step {:<6} {:>5} settings",
            c.name,
            c.midpoint - c.half_range,
            c.midpoint + c.half_range,
            c.step,
            d.len()
        );
        for (aspect, coeff) in &c.effects {
            println!("    {:<14} {:+.5} per unit", aspect, coeff);
        }
        domains.push(d);
    }

    eprintln!(
        "components ok: {} components, {} setup combinations",
        components.len(),
        combination_count(&domains)
    );
    Ok(())
}
