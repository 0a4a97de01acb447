//! Flat tab-separated data files for the plotting scripts.
//!
//! Every writer has an `impl Write` form and a `save_*` form that creates the
//! file. Both fail with `OutputUnavailable`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::format::format_general;
use crate::error::{CatalogueError, CatalogueResult};
use crate::models::Catalogue;
use crate::services::magnitude_distance::MagnitudeDistanceData;
use crate::services::main_sequence::MainSequenceData;
use crate::services::sky_chart::StarChartData;

pub const STAR_CHART_HEADER: &str = "# Right Ascension [hhmmss]\tDeclination [ddmmss]";
pub const MAGNITUDE_DISTANCE_HEADER: &str = "#Distance (pc) \t Magnitude";
pub const MAIN_SEQUENCE_HEADER: &str = "#Temperature (K) \t Absolute Magnitude";

fn write_pairs<W, I>(writer: &mut W, header: &str, pairs: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (f64, f64)>,
{
    writeln!(writer, "{}", header)?;
    for (x, y) in pairs {
        writeln!(writer, "{}\t{}", format_general(x), format_general(y))?;
    }
    writer.flush()
}

fn save_with<F>(path: &Path, write: F) -> CatalogueResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| CatalogueError::output(path, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|e| CatalogueError::output(path, e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Raw right ascension and declination of every charted point, stars first.
pub fn write_star_chart<W: Write>(writer: &mut W, data: &StarChartData) -> io::Result<()> {
    write_pairs(writer, STAR_CHART_HEADER, data.combined().points())
}

pub fn save_star_chart<P: AsRef<Path>>(path: P, data: &StarChartData) -> CatalogueResult<()> {
    save_with(path.as_ref(), |w| write_star_chart(w, data))
}

pub fn write_magnitude_distance<W: Write>(
    writer: &mut W,
    data: &MagnitudeDistanceData,
) -> io::Result<()> {
    write_pairs(writer, MAGNITUDE_DISTANCE_HEADER, data.points())
}

pub fn save_magnitude_distance<P: AsRef<Path>>(
    path: P,
    data: &MagnitudeDistanceData,
) -> CatalogueResult<()> {
    save_with(path.as_ref(), |w| write_magnitude_distance(w, data))
}

pub fn write_main_sequence<W: Write>(writer: &mut W, data: &MainSequenceData) -> io::Result<()> {
    write_pairs(writer, MAIN_SEQUENCE_HEADER, data.points())
}

pub fn save_main_sequence<P: AsRef<Path>>(path: P, data: &MainSequenceData) -> CatalogueResult<()> {
    save_with(path.as_ref(), |w| write_main_sequence(w, data))
}

/// Write the catalogue back in its ingestion format, one record per line.
pub fn write_catalogue<W: Write>(writer: &mut W, catalogue: &Catalogue) -> io::Result<()> {
    for object in catalogue {
        writeln!(writer, "{}", object.to_record_line())?;
    }
    writer.flush()
}

pub fn save_catalogue<P: AsRef<Path>>(path: P, catalogue: &Catalogue) -> CatalogueResult<()> {
    save_with(path.as_ref(), |w| write_catalogue(w, catalogue))
}
