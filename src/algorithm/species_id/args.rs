//! Command-line arguments for species identifier generation

use clap::Args;
use std::path::PathBuf;

use crate::config::{Spacer, SpeciesIdConfig};

/// Command-line arguments for `species-id`
#[derive(Args, Debug)]
pub struct SpeciesIdArgs {
    /// Species list, one name per line, no header
    #[arg(short, long, alias = "input-file")]
    pub input: PathBuf,

    /// Allow several species to share an identifier
    #[arg(short = 'd', long, default_value_t = false)]
    pub allow_duplicates: bool,

    /// Character separating the words of a species name.
    ///
    /// A single character, or one of `space`, `tab`, `comma`, `underscore`.
    #[arg(short, long, default_value = " ")]
    pub spacer: Spacer,

    /// Directory for the output files (created if missing)
    #[arg(short, long, default_value = "./")]
    pub output_dir: PathBuf,

    /// Prefix prepended to every output file name
    #[arg(long)]
    pub prefix: Option<String>,
}

impl From<&SpeciesIdArgs> for SpeciesIdConfig {
    fn from(args: &SpeciesIdArgs) -> Self {
        SpeciesIdConfig {
            allow_duplicates: args.allow_duplicates,
            spacer: args.spacer,
        }
    }
}
