use serde::{Deserialize, Serialize};

use super::sky_chart::KindFilter;
use crate::error::{CatalogueError, CatalogueResult};
use crate::models::{Catalogue, ObjectKind};

/// Parallel distance (pc) / apparent magnitude sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeDistanceData {
    pub distances: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl MagnitudeDistanceData {
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distances.iter().copied().zip(self.magnitudes.iter().copied())
    }
}

/// Magnitude against distance for stars and, if selected, galaxies and nebulae.
///
/// Stars come first, then galaxies, then nebulae, each in catalogue order.
/// Planets are never included: their magnitude is that of the host star.
pub fn compute_magnitude_distance(
    catalogue: &Catalogue,
    filter: &KindFilter,
) -> CatalogueResult<MagnitudeDistanceData> {
    let mut data = MagnitudeDistanceData::default();

    for kind in [ObjectKind::Star, ObjectKind::Galaxy, ObjectKind::Nebula] {
        if !filter.includes(kind) {
            continue;
        }
        for object in catalogue.of_kind(kind) {
            data.distances.push(object.distance());
            data.magnitudes.push(object.apparent_magnitude());
        }
    }

    if data.is_empty() {
        return Err(CatalogueError::NoPlottableData(
            "no objects for the magnitude/distance graph".to_string(),
        ));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CelestialObject;

    fn object(kind: ObjectKind, magnitude: f64, distance: f64) -> CelestialObject {
        CelestialObject::new(kind, "obj", magnitude, 0.0, 0.0, distance, 1.0)
    }

    #[test]
    fn test_groups_by_kind_and_skips_planets() {
        let catalogue: Catalogue = vec![
            object(ObjectKind::Nebula, 4.0, 400.0),
            object(ObjectKind::Star, 1.0, 10.0),
            object(ObjectKind::Planet, 9.0, 90.0),
            object(ObjectKind::Galaxy, 3.0, 300.0),
            object(ObjectKind::Star, 2.0, 20.0),
        ]
        .into_iter()
        .collect();

        let data = compute_magnitude_distance(&catalogue, &KindFilter::all()).unwrap();
        assert_eq!(data.distances, vec![10.0, 20.0, 300.0, 400.0]);
        assert_eq!(data.magnitudes, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_filter_drops_galaxies() {
        let catalogue: Catalogue = vec![
            object(ObjectKind::Galaxy, 3.0, 300.0),
            object(ObjectKind::Star, 1.0, 10.0),
        ]
        .into_iter()
        .collect();
        let filter = KindFilter {
            galaxies: false,
            ..KindFilter::all()
        };
        let data = compute_magnitude_distance(&catalogue, &filter).unwrap();
        assert_eq!(data.points().collect::<Vec<_>>(), vec![(10.0, 1.0)]);
    }

    #[test]
    fn test_planets_only_is_no_plottable_data() {
        let catalogue: Catalogue = vec![object(ObjectKind::Planet, 9.0, 90.0)].into_iter().collect();
        let err = compute_magnitude_distance(&catalogue, &KindFilter::all()).unwrap_err();
        assert!(err.is_no_plottable_data());
    }
}
