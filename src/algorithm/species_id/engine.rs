use anyhow::{Context, Result};
use tracing::{info, warn};

use super::args::SpeciesIdArgs;
use super::batch::classify_input;
use crate::common::{ensure_output_dir, read_species_lines};
use crate::config::SpeciesIdConfig;
use crate::report::{write_batch, OutputLayout};

/// Runs the `species-id` command: read the list, classify it, write the
/// output files.
pub fn run(args: SpeciesIdArgs) -> Result<()> {
    let config = SpeciesIdConfig::from(&args);

    if ensure_output_dir(&args.output_dir)
        .with_context(|| format!("cannot create output directory {}", args.output_dir.display()))?
    {
        info!("Created output directory {}", args.output_dir.display());
    }

    info!("Reading {}...", args.input.display());
    let lines = read_species_lines(&args.input)?;

    info!(
        spacer = %config.spacer,
        allow_duplicates = config.allow_duplicates,
        "Generating species IDs..."
    );
    let result = classify_input(&lines, &config);
    info!("    {} species found", result.total_species());
    if result.skipped_blank > 0 {
        info!("    {} blank lines skipped", result.skipped_blank);
    }

    let layout = OutputLayout::new(&args.output_dir).with_prefix(args.prefix.clone());
    let written = write_batch(&result, &layout)
        .with_context(|| format!("failed to write results to {}", args.output_dir.display()))?;

    info!("    {} IDs were successfully generated", result.assigned.len());
    info!("      Results written to {}", written.assigned.display());

    if let Some(path) = &written.unassignable {
        info!(
            "    {} occurrences were composed of only one word, no ID generated",
            result.unassignable.len()
        );
        info!("      Results written to {}", path.display());
    }

    if let Some(path) = &written.duplicated {
        let unresolved = result.unresolved().count();
        info!(
            "    {} occurrences were duplicated, you may want to check them",
            result.duplicated.len()
        );
        if unresolved > 0 {
            warn!("    {} of them could not be given an alternative ID", unresolved);
        }
        info!("      Results written to {}", path.display());
    }

    if let Some(path) = &written.malformed {
        warn!(
            "    {} occurrences were malformed, no ID generated",
            result.malformed.len()
        );
        info!("      Results written to {}", path.display());
    }

    Ok(())
}
