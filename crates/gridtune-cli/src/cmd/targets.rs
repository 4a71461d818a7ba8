use clap::Args;

use crate::io::sav;

#[derive(Args)]
pub struct TargetsArgs {
    /// Input setup save (.sav)
    #[arg(long)]
    pub sav: String,
}

pub fn run(args: TargetsArgs) -> anyhow::Result<()> {
    let target = sav::read_targets(&args.sav)?;

    println!("TARGET");
    for (aspect, value) in &target.values {
        println!("  {:<14} {:+.6}", aspect, value);
    }

    eprintln!("targets ok: {} aspects from {}", target.len(), args.sav);
    Ok(())
}
