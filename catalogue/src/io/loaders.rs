use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{CatalogueError, CatalogueResult};
use crate::models::Catalogue;
use crate::services::validation::{validate_catalogue, ValidationReport};

/// Append every record of the file at `path` to `catalogue`.
///
/// Returns the number of objects added. Nothing is added if any record
/// fails to parse.
pub fn ingest_file<P: AsRef<Path>>(catalogue: &mut Catalogue, path: P) -> CatalogueResult<usize> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| CatalogueError::source_unavailable(&source_name, e))?;
    catalogue.ingest_reader(BufReader::new(file), &source_name)
}

/// Load a fresh catalogue from a file.
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> CatalogueResult<Catalogue> {
    let mut catalogue = Catalogue::new();
    ingest_file(&mut catalogue, path)?;
    Ok(catalogue)
}

/// Result of loading a catalogue.
#[derive(Debug)]
pub struct CatalogueLoadResult {
    pub catalogue: Catalogue,
    pub validation: ValidationReport,
    pub source_name: String,
}

impl CatalogueLoadResult {
    fn new(catalogue: Catalogue, source_name: impl Into<String>) -> Self {
        let validation = validate_catalogue(&catalogue);
        let source_name = source_name.into();
        for issue in &validation.warnings {
            log::warn!(
                "{}: object #{} '{}' ({}): {} = {} (expected {}): {}",
                source_name,
                issue.index,
                issue.name,
                issue.kind,
                issue.field_name,
                issue.current_value,
                issue.expected_value,
                issue.description
            );
        }
        Self {
            catalogue,
            validation,
            source_name,
        }
    }

    pub fn num_objects(&self) -> usize {
        self.catalogue.len()
    }
}

/// Loads and validates catalogues in one step.
pub struct CatalogueLoader;

impl CatalogueLoader {
    /// Load a catalogue from a file and validate it.
    pub fn load_from_file(path: &Path) -> CatalogueResult<CatalogueLoadResult> {
        let catalogue = load_catalogue(path)?;
        Ok(CatalogueLoadResult::new(catalogue, path.display().to_string()))
    }

    /// Load a catalogue from in-memory text and validate it.
    pub fn load_from_str(data: &str) -> CatalogueResult<CatalogueLoadResult> {
        let mut catalogue = Catalogue::new();
        catalogue.ingest_str(data)?;
        Ok(CatalogueLoadResult::new(catalogue, "<memory>"))
    }
}
