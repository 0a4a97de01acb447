//! Error types for catalogue operations.
//!
//! Every fallible operation in the library returns [`CatalogueResult`]. The
//! variants name the failure kind; the payload carries enough context (line
//! number, field, path) to report the problem without re-reading the input.

use std::fmt;
use std::path::PathBuf;

/// Result type for catalogue operations
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Coordinate axis, used to report which side of a window is inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Declination,
    RightAscension,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Declination => write!(f, "declination"),
            Axis::RightAscension => write!(f, "right ascension"),
        }
    }
}

/// Error type for catalogue operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// The input file or stream could not be opened or read.
    #[error("Source unavailable: {source_name}: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Ingestion or a report ran over zero applicable records.
    #[error("Empty catalogue: {0}")]
    EmptyCatalogue(String),

    /// A record of a known kind could not be parsed.
    #[error("Malformed record at line {line}: field '{field}' = '{value}': {reason}")]
    MalformedRecord {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A query or derived computation produced nothing to plot.
    #[error("No plottable data: {0}")]
    NoPlottableData(String),

    /// A coordinate window has its minimum above its maximum.
    #[error("Invalid range: minimum {axis} {min} is larger than maximum {max}")]
    InvalidRange { axis: Axis, min: f64, max: f64 },

    /// A derived quantity is undefined for this object.
    #[error("Computation error for '{name}': {reason}")]
    Computation { name: String, reason: String },

    /// An output file could not be created or written.
    #[error("Output unavailable: {}: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CatalogueError {
    /// Create a source error for a named input.
    pub fn source_unavailable(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    /// Create a malformed-record error.
    pub fn malformed(
        line: usize,
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            line,
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a computation error for the named object.
    pub fn computation(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Computation {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an output error for a path.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn is_empty_catalogue(&self) -> bool {
        matches!(self, Self::EmptyCatalogue(_))
    }

    pub fn is_no_plottable_data(&self) -> bool {
        matches!(self, Self::NoPlottableData(_))
    }

    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}
