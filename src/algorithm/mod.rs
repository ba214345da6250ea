pub mod species_id;
