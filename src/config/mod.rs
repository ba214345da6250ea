pub mod species;

pub use species::{Spacer, SpeciesIdConfig};
