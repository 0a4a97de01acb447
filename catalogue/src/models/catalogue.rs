use serde::{Deserialize, Serialize};
use std::io::BufRead;

use super::object::{CelestialObject, ObjectKind};
use crate::error::CatalogueResult;
use crate::parsing::record_parser;

/// Number of catalogued objects per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub galaxies: usize,
    pub stars: usize,
    pub planets: usize,
    pub nebulae: usize,
}

impl KindCounts {
    pub fn get(&self, kind: ObjectKind) -> usize {
        match kind {
            ObjectKind::Galaxy => self.galaxies,
            ObjectKind::Star => self.stars,
            ObjectKind::Planet => self.planets,
            ObjectKind::Nebula => self.nebulae,
        }
    }

    pub fn total(&self) -> usize {
        self.galaxies + self.stars + self.planets + self.nebulae
    }

    fn increment(&mut self, kind: ObjectKind) {
        match kind {
            ObjectKind::Galaxy => self.galaxies += 1,
            ObjectKind::Star => self.stars += 1,
            ObjectKind::Planet => self.planets += 1,
            ObjectKind::Nebula => self.nebulae += 1,
        }
    }
}

/// Ordered, owning collection of observations.
///
/// Insertion order is preserved and duplicates are allowed. Counts per kind
/// are kept in step with the single append path.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    objects: Vec<CelestialObject>,
    counts: KindCounts,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one object.
    pub fn push(&mut self, object: CelestialObject) {
        self.counts.increment(object.kind());
        self.objects.push(object);
    }

    pub fn extend<I>(&mut self, objects: I)
    where
        I: IntoIterator<Item = CelestialObject>,
    {
        for object in objects {
            self.push(object);
        }
    }

    /// Parse every line of `reader` and append the records.
    ///
    /// Nothing is appended unless the whole source parses. Returns the
    /// number of records added.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R, source_name: &str) -> CatalogueResult<usize> {
        let records = record_parser::parse_records(reader, source_name)?;
        let added = records.len();
        self.extend(records);
        log::info!("Ingested {} objects from {}", added, source_name);
        Ok(added)
    }

    /// In-memory variant of [`Catalogue::ingest_reader`].
    pub fn ingest_str(&mut self, data: &str) -> CatalogueResult<usize> {
        self.ingest_reader(data.as_bytes(), "<memory>")
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CelestialObject> {
        self.objects.iter()
    }

    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }

    pub fn counts(&self) -> KindCounts {
        self.counts
    }

    pub fn count(&self, kind: ObjectKind) -> usize {
        self.counts.get(kind)
    }

    /// Objects of one kind, in catalogue order.
    pub fn of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = &CelestialObject> + '_ {
        self.objects.iter().filter(move |o| o.kind() == kind)
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a CelestialObject;
    type IntoIter = std::slice::Iter<'a, CelestialObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl FromIterator<CelestialObject> for Catalogue {
    fn from_iter<I: IntoIterator<Item = CelestialObject>>(iter: I) -> Self {
        let mut catalogue = Catalogue::new();
        catalogue.extend(iter);
        catalogue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(kind: ObjectKind, name: &str) -> CelestialObject {
        CelestialObject::new(kind, name, 1.0, 0.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn test_push_preserves_order_and_counts() {
        let mut catalogue = Catalogue::new();
        catalogue.push(object(ObjectKind::Star, "a"));
        catalogue.push(object(ObjectKind::Galaxy, "b"));
        catalogue.push(object(ObjectKind::Star, "c"));

        let names: Vec<&str> = catalogue.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(catalogue.count(ObjectKind::Star), 2);
        assert_eq!(catalogue.count(ObjectKind::Galaxy), 1);
        assert_eq!(catalogue.count(ObjectKind::Planet), 0);
        assert_eq!(catalogue.counts().total(), catalogue.len());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let catalogue: Catalogue = vec![object(ObjectKind::Nebula, "x"), object(ObjectKind::Nebula, "x")]
            .into_iter()
            .collect();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.counts().nebulae, 2);
    }

    #[test]
    fn test_of_kind_filters_in_order() {
        let catalogue: Catalogue = vec![
            object(ObjectKind::Planet, "p1"),
            object(ObjectKind::Star, "s1"),
            object(ObjectKind::Planet, "p2"),
        ]
        .into_iter()
        .collect();
        let planets: Vec<&str> = catalogue.of_kind(ObjectKind::Planet).map(|o| o.name()).collect();
        assert_eq!(planets, vec!["p1", "p2"]);
    }

    #[test]
    fn test_ingest_str_counts_kinds() {
        let mut catalogue = Catalogue::new();
        let added = catalogue
            .ingest_str("star,A,5.0,0,0,10,1.0\nplanet,B,3.0,0,0,5,1.0\ncomet,C,1,1,1,1,1\n")
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(catalogue.counts().stars, 1);
        assert_eq!(catalogue.counts().planets, 1);
    }

    #[test]
    fn test_failed_ingest_leaves_catalogue_untouched() {
        let mut catalogue = Catalogue::new();
        catalogue.push(object(ObjectKind::Star, "existing"));

        let err = catalogue
            .ingest_str("star,A,5.0,0,0,10,1.0\nstar,B,bright,0,0,5,1.0\n")
            .unwrap_err();
        assert!(err.is_malformed_record());
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.counts().stars, 1);
    }
}
