use anyhow::Result;
use clap::{Parser, Subcommand};
use species_tools::algorithm::species_id;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "species-tools")]
#[command(version)]
#[command(about = "Command-line utilities for bioinformatics data wrangling", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Log every record (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate short species IDs (Drosophila melanogaster -> Dmel)
    SpeciesId(species_id::SpeciesIdArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::SpeciesId(args) => {
            species_id::run(args)?;
        }
    }
    Ok(())
}
