use log::debug;
use std::io::BufRead;

use crate::error::{CatalogueError, CatalogueResult};
use crate::models::{CelestialObject, ObjectKind};

/// Fields per record: kind, name, magnitude, declination, right ascension,
/// distance, radius.
pub const FIELD_COUNT: usize = 7;

/// Field names as reported in errors, by column index.
const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "kind",
    "name",
    "apparent_magnitude",
    "declination",
    "right_ascension",
    "distance",
    "radius",
];

fn parse_number(fields: &[&str], index: usize, line_number: usize) -> CatalogueResult<f64> {
    let raw = fields[index];
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| CatalogueError::malformed(line_number, FIELD_NAMES[index], raw, e.to_string()))?;
    if !value.is_finite() {
        return Err(CatalogueError::malformed(
            line_number,
            FIELD_NAMES[index],
            raw,
            "expected a finite number",
        ));
    }
    Ok(value)
}

/// Parse one comma-separated record line.
///
/// Returns `Ok(None)` when the first field is not one of the four kind
/// labels, so unknown or blank lines are skipped without failing. For a
/// known kind every field must be present and every numeric field must
/// parse to a finite number.
pub fn parse_record(line: &str, line_number: usize) -> CatalogueResult<Option<CelestialObject>> {
    let fields: Vec<&str> = line.split(',').collect();

    let Some(kind) = fields.first().and_then(|label| ObjectKind::from_label(label)) else {
        return Ok(None);
    };

    if fields.len() != FIELD_COUNT {
        return Err(CatalogueError::malformed(
            line_number,
            "record",
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let name = fields[1].trim();
    if name.is_empty() {
        return Err(CatalogueError::malformed(line_number, "name", fields[1], "name is empty"));
    }

    let apparent_magnitude = parse_number(&fields, 2, line_number)?;
    let declination = parse_number(&fields, 3, line_number)?;
    let right_ascension = parse_number(&fields, 4, line_number)?;
    let distance = parse_number(&fields, 5, line_number)?;
    let radius = parse_number(&fields, 6, line_number)?;

    Ok(Some(CelestialObject::new(
        kind,
        name,
        apparent_magnitude,
        declination,
        right_ascension,
        distance,
        radius,
    )))
}

/// Parse every line of a source into records.
///
/// The first malformed line aborts the call. A source that yields no record
/// at all, because it is empty or every line was skipped, is an
/// `EmptyCatalogue` error.
pub fn parse_records<R: BufRead>(reader: R, source_name: &str) -> CatalogueResult<Vec<CelestialObject>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CatalogueError::source_unavailable(source_name, e))?;
        let line_number = index + 1;

        match parse_record(&line, line_number)? {
            Some(object) => records.push(object),
            None => {
                skipped += 1;
                debug!("Skipping line {} of {}: unknown object kind", line_number, source_name);
            }
        }
    }

    if records.is_empty() {
        return Err(CatalogueError::EmptyCatalogue(format!(
            "no records found in {} ({} lines skipped)",
            source_name, skipped
        )));
    }

    debug!(
        "Parsed {} records from {} ({} lines skipped)",
        records.len(),
        source_name,
        skipped
    );
    Ok(records)
}
