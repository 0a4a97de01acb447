//! Catalogue configuration file support.
//!
//! Settings are read from a TOML file. Every key is optional and falls back
//! to the built-in default:
//!
//! ```toml
//! [input]
//! database = "database.txt"
//!
//! [output]
//! directory = "."
//! star_chart_file = "star_chart.txt"
//! magnitude_distance_file = "mag_vs_dist.txt"
//! main_sequence_file = "main_sequence.txt"
//!
//! [chart]
//! show_planets = true
//! show_galaxies = true
//! show_nebulae = true
//! decl_min = -910000
//! decl_max = 910000
//! ra_min = -100
//! ra_max = 240100
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogueError, CatalogueResult};
use crate::services::sky_chart::{ChartWindow, KindFilter};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "CATALOGUE_CONFIG";

/// Config file locations, relative to the search base, in priority order.
const DEFAULT_SEARCH_PATHS: [&str; 2] = ["catalogue.toml", "../catalogue.toml"];

/// Catalogue configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

/// Input data settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSettings {
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

/// Data file output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_star_chart_file")]
    pub star_chart_file: String,
    #[serde(default = "default_magnitude_distance_file")]
    pub magnitude_distance_file: String,
    #[serde(default = "default_main_sequence_file")]
    pub main_sequence_file: String,
}

/// Star chart window and kind selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_true")]
    pub show_planets: bool,
    #[serde(default = "default_true")]
    pub show_galaxies: bool,
    #[serde(default = "default_true")]
    pub show_nebulae: bool,
    #[serde(default = "default_decl_min")]
    pub decl_min: f64,
    #[serde(default = "default_decl_max")]
    pub decl_max: f64,
    #[serde(default = "default_ra_min")]
    pub ra_min: f64,
    #[serde(default = "default_ra_max")]
    pub ra_max: f64,
}

fn default_database() -> PathBuf {
    PathBuf::from("database.txt")
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_star_chart_file() -> String {
    "star_chart.txt".to_string()
}

fn default_magnitude_distance_file() -> String {
    "mag_vs_dist.txt".to_string()
}

fn default_main_sequence_file() -> String {
    "main_sequence.txt".to_string()
}

fn default_true() -> bool {
    true
}

fn default_decl_min() -> f64 {
    ChartWindow::default().decl_min
}

fn default_decl_max() -> f64 {
    ChartWindow::default().decl_max
}

fn default_ra_min() -> f64 {
    ChartWindow::default().ra_min
}

fn default_ra_max() -> f64 {
    ChartWindow::default().ra_max
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            star_chart_file: default_star_chart_file(),
            magnitude_distance_file: default_magnitude_distance_file(),
            main_sequence_file: default_main_sequence_file(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            show_planets: true,
            show_galaxies: true,
            show_nebulae: true,
            decl_min: default_decl_min(),
            decl_max: default_decl_max(),
            ra_min: default_ra_min(),
            ra_max: default_ra_max(),
        }
    }
}

impl CatalogueConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(CatalogueConfig)` if successful
    /// * `Err(CatalogueError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogueResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogueError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_str(&content)
    }

    /// Parse configuration from TOML text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> CatalogueResult<Self> {
        toml::from_str(content).map_err(|e| {
            CatalogueError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Find `catalogue.toml` relative to `base`.
    ///
    /// Searches for `catalogue.toml` in:
    /// 1. `base`
    /// 2. The parent of `base`
    pub fn locate_in(base: &Path) -> Option<PathBuf> {
        DEFAULT_SEARCH_PATHS
            .iter()
            .map(|relative| base.join(relative))
            .find(|path| path.exists())
    }

    /// Find `catalogue.toml` relative to the current directory.
    pub fn default_location() -> Option<PathBuf> {
        Self::locate_in(Path::new("."))
    }

    /// Load configuration from the default location.
    ///
    /// Fails with `Configuration` when no file is found or it does not parse.
    pub fn from_default_location() -> CatalogueResult<Self> {
        let path = Self::default_location().ok_or_else(|| {
            CatalogueError::Configuration(
                "No catalogue.toml found in standard locations".to_string(),
            )
        })?;
        log::info!("Using configuration from {}", path.display());
        Self::from_file(&path)
    }

    /// Resolve the configuration for a run.
    ///
    /// A file named by `CATALOGUE_CONFIG` must load. Otherwise the default
    /// location is tried, and built-in defaults are used when no file exists.
    pub fn load() -> CatalogueResult<Self> {
        Self::resolve(std::env::var(CONFIG_ENV_VAR).ok(), Self::default_location())
    }

    fn resolve(env_path: Option<String>, found: Option<PathBuf>) -> CatalogueResult<Self> {
        if let Some(path) = env_path {
            log::info!("Using configuration from {}={}", CONFIG_ENV_VAR, path);
            return Self::from_file(path);
        }

        match found {
            Some(path) => {
                log::info!("Using configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                log::debug!("No catalogue.toml found; using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Star chart window from the `[chart]` bounds.
    pub fn chart_window(&self) -> CatalogueResult<ChartWindow> {
        ChartWindow::new(
            self.chart.decl_min,
            self.chart.decl_max,
            self.chart.ra_min,
            self.chart.ra_max,
        )
    }

    pub fn kind_filter(&self) -> KindFilter {
        KindFilter {
            planets: self.chart.show_planets,
            galaxies: self.chart.show_galaxies,
            nebulae: self.chart.show_nebulae,
        }
    }

    pub fn star_chart_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.star_chart_file)
    }

    pub fn magnitude_distance_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.magnitude_distance_file)
    }

    pub fn main_sequence_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.main_sequence_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CatalogueConfig::from_str("").unwrap();
        assert_eq!(config, CatalogueConfig::default());
        assert_eq!(config.input.database, PathBuf::from("database.txt"));
        assert_eq!(config.chart_window().unwrap(), ChartWindow::default());
        assert_eq!(config.kind_filter(), KindFilter::all());
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
[output]
directory = "out"

[chart]
show_nebulae = false
decl_min = 0
"#;
        let config = CatalogueConfig::from_str(toml).unwrap();
        assert_eq!(config.star_chart_path(), PathBuf::from("out").join("star_chart.txt"));
        assert_eq!(config.output.main_sequence_file, "main_sequence.txt");
        assert!(!config.kind_filter().nebulae);
        assert!(config.kind_filter().planets);
        assert_eq!(config.chart.decl_min, 0.0);
        assert_eq!(config.chart.decl_max, 910_000.0);
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let config = CatalogueConfig::from_str("[chart]\nra_min = 10\nra_max = 5\n").unwrap();
        assert!(matches!(
            config.chart_window(),
            Err(CatalogueError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_parse_error_is_configuration_error() {
        let err = CatalogueConfig::from_str("[chart]\nshow_planets = \"maybe\"\n").unwrap_err();
        assert!(matches!(err, CatalogueError::Configuration(_)));
    }

    #[test]
    fn test_locate_prefers_base_over_parent() {
        let parent = tempfile::tempdir().unwrap();
        let base = parent.path().join("run");
        fs::create_dir(&base).unwrap();
        assert_eq!(CatalogueConfig::locate_in(&base), None);

        fs::write(parent.path().join("catalogue.toml"), "").unwrap();
        assert_eq!(
            CatalogueConfig::locate_in(&base),
            Some(base.join("../catalogue.toml"))
        );

        fs::write(base.join("catalogue.toml"), "").unwrap();
        assert_eq!(CatalogueConfig::locate_in(&base), Some(base.join("catalogue.toml")));
    }

    #[test]
    fn test_resolve_without_any_file_uses_defaults() {
        let config = CatalogueConfig::resolve(None, None).unwrap();
        assert_eq!(config, CatalogueConfig::default());
    }

    #[test]
    fn test_resolve_found_file_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.toml");
        fs::write(&path, "[chart\n").unwrap();
        let err = CatalogueConfig::resolve(None, Some(path.clone())).unwrap_err();
        assert!(matches!(err, CatalogueError::Configuration(_)));

        fs::write(&path, "[input]\ndatabase = \"stars.txt\"\n").unwrap();
        let config = CatalogueConfig::resolve(None, Some(path)).unwrap();
        assert_eq!(config.input.database, PathBuf::from("stars.txt"));
    }

    #[test]
    fn test_resolve_env_path_wins_over_found_file() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join("env.toml");
        fs::write(&env_file, "[output]\ndirectory = \"from-env\"\n").unwrap();
        let found = dir.path().join("catalogue.toml");
        fs::write(&found, "[output]\ndirectory = \"from-search\"\n").unwrap();

        let env_path = env_file.to_str().unwrap().to_string();
        let config = CatalogueConfig::resolve(Some(env_path), Some(found)).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("from-env"));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogueConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CatalogueError::Configuration(_)));
    }
}
