use crate::models::{Catalogue, CelestialObject};

/// Half-width of the coordinate search box, in raw packed units on each axis.
pub const COORDINATE_TOLERANCE: f64 = 1.0;

/// All objects whose name matches exactly, in catalogue order.
///
/// An empty result means "not found" and is not an error.
pub fn search_by_name<'a>(catalogue: &'a Catalogue, name: &str) -> Vec<&'a CelestialObject> {
    catalogue.iter().filter(|o| o.name() == name).collect()
}

/// All objects whose stored raw coordinates are each within
/// [`COORDINATE_TOLERANCE`] of the target, in catalogue order.
///
/// The comparison is on the packed values, axis by axis; it is not an
/// angular separation.
pub fn search_by_coordinates(
    catalogue: &Catalogue,
    right_ascension_raw: f64,
    declination_raw: f64,
) -> Vec<&CelestialObject> {
    catalogue
        .iter()
        .filter(|o| {
            within_tolerance(right_ascension_raw, o.right_ascension_raw())
                && within_tolerance(declination_raw, o.declination_raw())
        })
        .collect()
}

fn within_tolerance(target: f64, stored: f64) -> bool {
    target >= stored - COORDINATE_TOLERANCE && target <= stored + COORDINATE_TOLERANCE
}
