use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CatalogueError, CatalogueResult};
use crate::io::format::format_significant;
use crate::models::{Catalogue, CelestialObject, KindCounts, ObjectKind};

const RULE: &str =
    "----------------------------------------------------------------------------------------";

/// Digits used for values in the printed report.
const REPORT_PRECISION: usize = 5;

/// One extreme object and the value that made it extreme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub name: String,
    pub kind: ObjectKind,
    pub value: f64,
}

impl ObjectSummary {
    fn new(object: &CelestialObject, value: f64) -> Self {
        Self {
            name: object.name().to_string(),
            kind: object.kind(),
            value,
        }
    }
}

/// Summary statistics over a whole catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueReport {
    /// Lowest apparent magnitude.
    pub brightest: ObjectSummary,
    /// Highest apparent magnitude.
    pub dimmest: ObjectSummary,
    pub closest: ObjectSummary,
    pub furthest: ObjectSummary,
    pub counts: KindCounts,
}

/// Compute the report in one pass.
///
/// Comparisons are strict, so on ties the first object in catalogue order
/// wins.
pub fn summarize(catalogue: &Catalogue) -> CatalogueResult<CatalogueReport> {
    let mut objects = catalogue.iter();
    let Some(first) = objects.next() else {
        return Err(CatalogueError::EmptyCatalogue(
            "cannot report on a catalogue with no objects".to_string(),
        ));
    };

    let mut brightest = first;
    let mut dimmest = first;
    let mut closest = first;
    let mut furthest = first;

    for object in objects {
        if object.apparent_magnitude() < brightest.apparent_magnitude() {
            brightest = object;
        }
        if object.apparent_magnitude() > dimmest.apparent_magnitude() {
            dimmest = object;
        }
        if object.distance() < closest.distance() {
            closest = object;
        }
        if object.distance() > furthest.distance() {
            furthest = object;
        }
    }

    Ok(CatalogueReport {
        brightest: ObjectSummary::new(brightest, brightest.apparent_magnitude()),
        dimmest: ObjectSummary::new(dimmest, dimmest.apparent_magnitude()),
        closest: ObjectSummary::new(closest, closest.distance()),
        furthest: ObjectSummary::new(furthest, furthest.distance()),
        counts: catalogue.counts(),
    })
}

impl fmt::Display for CatalogueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = |v: f64| format_significant(v, REPORT_PRECISION);

        writeln!(f, "{}", RULE)?;
        writeln!(f, "| This catalogue contains:")?;
        for kind in ObjectKind::ALL {
            writeln!(f, "| \t{} {}", self.counts.get(kind), kind.plural())?;
        }
        writeln!(
            f,
            "| The brightest object is {} {} at an apparent magnitude {}",
            self.brightest.name,
            self.brightest.kind,
            value(self.brightest.value)
        )?;
        writeln!(
            f,
            "| The dimmest object is {} {} at an apparent magnitude {}",
            self.dimmest.name,
            self.dimmest.kind,
            value(self.dimmest.value)
        )?;
        writeln!(
            f,
            "| The furthest object is {} {} at a distance {}pc",
            self.furthest.name,
            self.furthest.kind,
            value(self.furthest.value)
        )?;
        writeln!(
            f,
            "| The closest object is {} {} at a distance {}pc",
            self.closest.name,
            self.closest.kind,
            value(self.closest.value)
        )?;
        writeln!(f, "{}", RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(kind: ObjectKind, name: &str, magnitude: f64, distance: f64) -> CelestialObject {
        CelestialObject::new(kind, name, magnitude, 0.0, 0.0, distance, 1.0)
    }

    #[test]
    fn test_empty_catalogue_fails() {
        let err = summarize(&Catalogue::new()).unwrap_err();
        assert!(err.is_empty_catalogue());
    }

    #[test]
    fn test_single_object_is_every_extreme() {
        let catalogue: Catalogue = vec![object(ObjectKind::Galaxy, "M31", 3.44, 778000.0)]
            .into_iter()
            .collect();
        let report = summarize(&catalogue).unwrap();
        for summary in [&report.brightest, &report.dimmest, &report.closest, &report.furthest] {
            assert_eq!(summary.name, "M31");
            assert_eq!(summary.kind, ObjectKind::Galaxy);
        }
        assert_eq!(report.counts.galaxies, 1);
    }

    #[test]
    fn test_extremes() {
        let catalogue: Catalogue = vec![
            object(ObjectKind::Star, "A", 5.0, 10.0),
            object(ObjectKind::Star, "B", 3.0, 5.0),
            object(ObjectKind::Nebula, "C", 8.0, 400.0),
        ]
        .into_iter()
        .collect();
        let report = summarize(&catalogue).unwrap();
        assert_eq!(report.brightest.name, "B");
        assert_eq!(report.brightest.value, 3.0);
        assert_eq!(report.closest.name, "B");
        assert_eq!(report.dimmest.name, "C");
        assert_eq!(report.furthest.name, "C");
        assert_eq!(report.furthest.value, 400.0);
        assert_eq!(report.counts.stars, 2);
        assert_eq!(report.counts.nebulae, 1);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let catalogue: Catalogue = vec![
            object(ObjectKind::Star, "first", 1.0, 10.0),
            object(ObjectKind::Star, "second", 1.0, 10.0),
        ]
        .into_iter()
        .collect();
        let report = summarize(&catalogue).unwrap();
        assert_eq!(report.brightest.name, "first");
        assert_eq!(report.dimmest.name, "first");
        assert_eq!(report.closest.name, "first");
        assert_eq!(report.furthest.name, "first");
    }

    #[test]
    fn test_display_lists_counts_and_extremes() {
        let catalogue: Catalogue = vec![
            object(ObjectKind::Star, "Sirius", -1.46, 2.64),
            object(ObjectKind::Planet, "Mars", -2.0, 0.0),
        ]
        .into_iter()
        .collect();
        let text = summarize(&catalogue).unwrap().to_string();
        assert!(text.contains("| \t1 stars"));
        assert!(text.contains("| \t1 planets"));
        assert!(text.contains("| \t0 galaxies"));
        assert!(text.contains("| \t0 nebulae"));
        assert!(text.contains("The brightest object is Mars planet at an apparent magnitude -2"));
        assert!(text.contains("The furthest object is Sirius star at a distance 2.64pc"));
    }
}
