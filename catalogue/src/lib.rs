//! # Star Catalogue
//!
//! Astronomical observation catalogue: ingestion of comma-separated object
//! records, sexagesimal coordinate conversion, derived stellar quantities,
//! and the queries and projections used for star charts and
//! Hertzsprung-Russell style plots.
//!
//! ## Architecture
//!
//! - [`models`]: object records and the owning [`Catalogue`]
//! - [`parsing`]: the record line format
//! - [`coordinates`]: packed `hhmmss` / `ddmmss` values to hours and degrees
//! - [`services`]: star chart, magnitude/distance, main sequence, search,
//!   report and validation over a catalogue
//! - [`io`]: file loading and the flat data file writers
//! - [`config`]: TOML run configuration
//!
//! ## Example
//!
//! ```
//! use star_catalogue::{summarize, Catalogue};
//!
//! let mut catalogue = Catalogue::new();
//! catalogue
//!     .ingest_str("star,A,5,0,0,10,1\nstar,B,3,0,0,5,1\n")
//!     .unwrap();
//!
//! let report = summarize(&catalogue).unwrap();
//! assert_eq!(report.brightest.name, "B");
//! assert_eq!(report.furthest.name, "A");
//! ```

pub mod config;
pub mod coordinates;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;

pub use config::CatalogueConfig;
pub use coordinates::{declination_to_degrees, right_ascension_to_hours, EquatorialPosition};
pub use error::{CatalogueError, CatalogueResult};
pub use models::{Catalogue, CelestialObject, KindCounts, ObjectKind, Radius};
pub use services::{
    compute_magnitude_distance, compute_main_sequence, extract_star_chart, search_by_coordinates,
    search_by_name, summarize, validate_catalogue, ChartWindow, KindFilter,
};
