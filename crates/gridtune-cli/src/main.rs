// crates/gridtune-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "gridtune")]
#[command(about = "Race setup search against save-file targets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the per-aspect target values from a setup save (.sav)
    Targets(cmd::targets::TargetsArgs),

    /// Exhaustive search: evaluate every setting combination
    Search(cmd::search::SearchArgs),

    /// Coarse-to-fine search with increasing scan depth
    Refine(cmd::refine::RefineArgs),

    /// Show the component set and its setting domains
    Components(cmd::components::ComponentsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Targets(args) => cmd::targets::run(args),
        Commands::Search(args) => cmd::search::run(args),
        Commands::Refine(args) => cmd::refine::run(args),
        Commands::Components(args) => cmd::components::run(args),
    }
}
