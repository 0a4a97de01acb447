//! Read-only services over a [`Catalogue`](crate::models::Catalogue).
//!
//! Each service turns the catalogue into plain data, either numeric series
//! for plotting or summary records, that renderers and writers consume.

pub mod magnitude_distance;
pub mod main_sequence;
pub mod report;
pub mod search;
pub mod sky_chart;
pub mod validation;

pub use magnitude_distance::{compute_magnitude_distance, MagnitudeDistanceData};
pub use main_sequence::{compute_main_sequence, stellar_properties, MainSequenceData, StellarProperties};
pub use report::{summarize, CatalogueReport, ObjectSummary};
pub use search::{search_by_coordinates, search_by_name};
pub use sky_chart::{
    extract_star_chart, ChartWindow, ConvertedStarChart, CoordinateSeries, KindFilter, StarChartData,
};
pub use validation::{validate_catalogue, ValidationIssue, ValidationReport};
