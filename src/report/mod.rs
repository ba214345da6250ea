//! Output writers
//!
//! This module provides the writers that persist a species-id batch:
//! - `species_lists` - TSV table of assigned ids plus the duplicated,
//!   unassignable and malformed lists

pub mod species_lists;

pub use species_lists::{write_batch, OutputLayout, WrittenFiles};
