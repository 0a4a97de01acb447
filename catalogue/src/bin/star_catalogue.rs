//! Star catalogue command line tool.
//!
//! # Usage
//!
//! ```bash
//! # Print the catalogue report and write the plot data files
//! star-catalogue report [--json]
//!
//! # Look up objects
//! star-catalogue search-name Sirius
//! star-catalogue search-coords 63345 -163942
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOGUE_CONFIG`: Path to a `catalogue.toml` (default: search the
//!   current and parent directory, then built-in defaults)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::{bail, Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use star_catalogue::io::{save_magnitude_distance, save_main_sequence, save_star_chart, CatalogueLoader};
use star_catalogue::services::{
    compute_magnitude_distance, compute_main_sequence, extract_star_chart, search_by_coordinates,
    search_by_name, summarize,
};
use star_catalogue::{Catalogue, CatalogueConfig, CatalogueError, CatalogueResult, CelestialObject};

const USAGE: &str = "usage: star-catalogue [report|search-name <name>|search-coords <ra> <decl>] [--json]";

enum Command {
    Report,
    SearchName(String),
    SearchCoords { right_ascension: f64, declination: f64 },
}

fn parse_args(args: &[String]) -> Result<(Command, bool)> {
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    let command = match positional.as_slice() {
        [] | ["report"] => Command::Report,
        ["search-name", name] => Command::SearchName(name.to_string()),
        ["search-coords", ra, decl] => Command::SearchCoords {
            right_ascension: ra
                .parse()
                .with_context(|| format!("Invalid right ascension '{}'", ra))?,
            declination: decl
                .parse()
                .with_context(|| format!("Invalid declination '{}'", decl))?,
        },
        _ => bail!(USAGE),
    };
    Ok((command, json))
}

/// Run a projection and write it, skipping the file when there is nothing to plot.
fn write_projection<T>(
    name: &str,
    compute: impl FnOnce() -> CatalogueResult<T>,
    save: impl FnOnce(&T) -> CatalogueResult<()>,
) -> Result<()> {
    match compute() {
        Ok(data) => save(&data).with_context(|| format!("Failed to write {}", name)),
        Err(e @ CatalogueError::NoPlottableData(_)) => {
            warn!("Skipping {}: {}", name, e);
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to compute {}", name)),
    }
}

fn run_report(catalogue: &Catalogue, config: &CatalogueConfig, json: bool) -> Result<()> {
    let report = summarize(catalogue).context("Failed to summarize catalogue")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    let window = config.chart_window().context("Invalid chart window")?;
    let filter = config.kind_filter();

    write_projection(
        "star chart",
        || extract_star_chart(catalogue, &window, &filter),
        |data| save_star_chart(config.star_chart_path(), data),
    )?;
    write_projection(
        "magnitude/distance",
        || compute_magnitude_distance(catalogue, &filter),
        |data| save_magnitude_distance(config.magnitude_distance_path(), data),
    )?;
    write_projection(
        "main sequence",
        || compute_main_sequence(catalogue),
        |data| {
            if data.excluded > 0 {
                warn!("{} stars left out of the main sequence", data.excluded);
            }
            save_main_sequence(config.main_sequence_path(), data)
        },
    )?;
    Ok(())
}

fn print_matches(matches: &[&CelestialObject], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(matches)?);
        return Ok(());
    }
    if matches.is_empty() {
        println!("Object not found.");
    }
    for object in matches {
        println!("Object found.");
        print!("{}", object);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (command, json) = parse_args(&args)?;

    let config = CatalogueConfig::load().context("Failed to load configuration")?;
    let loaded = CatalogueLoader::load_from_file(&config.input.database).with_context(|| {
        format!("Failed to load catalogue {}", config.input.database.display())
    })?;
    info!(
        "Loaded {} objects from {} ({} validation warnings)",
        loaded.num_objects(),
        loaded.source_name,
        loaded.validation.warnings.len()
    );

    match command {
        Command::Report => run_report(&loaded.catalogue, &config, json),
        Command::SearchName(name) => print_matches(&search_by_name(&loaded.catalogue, &name), json),
        Command::SearchCoords {
            right_ascension,
            declination,
        } => print_matches(
            &search_by_coordinates(&loaded.catalogue, right_ascension, declination),
            json,
        ),
    }
}
