//! Catalogue input and data file output.

pub mod format;
pub mod loaders;
pub mod writers;

pub use loaders::{ingest_file, load_catalogue, CatalogueLoadResult, CatalogueLoader};
pub use writers::{
    save_catalogue, save_magnitude_distance, save_main_sequence, save_star_chart, write_catalogue,
    write_magnitude_distance, write_main_sequence, write_star_chart,
};
