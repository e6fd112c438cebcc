use clap::{Parser, Subcommand};

mod check;
mod common;
mod place;

#[derive(Parser)]
#[command(name = "femtoplace")]
#[command(about = "Deterministic field autoplacement for schematic documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Autoplace symbol fields in schematic documents
    #[command(alias = "p")]
    Place(place::PlaceArgs),

    /// Report which symbols would move, without writing anything
    Check(check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Place(args) => place::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}
