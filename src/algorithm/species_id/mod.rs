//! Species identifier generation
//!
//! Turns a list of species names into short identifiers
//! (`Drosophila melanogaster -> Dmel`), resolving collisions within the batch
//! and sorting every input line into assigned, duplicated, unassignable or
//! malformed.

pub mod args;
pub mod tokenizer;
pub mod formula;
pub mod alternatives;
pub mod resolver;
pub mod batch;
pub mod engine;

pub use alternatives::alternative_ids;
pub use args::SpeciesIdArgs;
pub use batch::{classify_batch, classify_input, AssignedSpecies, BatchResult, DuplicatedSpecies, MalformedEntry};
pub use engine::run;
pub use formula::primary_id;
pub use resolver::{CollisionResolver, Resolution};
pub use tokenizer::{SpeciesRecord, Tokenized};
