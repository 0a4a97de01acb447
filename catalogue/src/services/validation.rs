use serde::{Deserialize, Serialize};

use crate::coordinates::{
    is_valid_declination_raw, is_valid_right_ascension_raw, DECLINATION_RAW_MAX,
    DECLINATION_RAW_MIN, RIGHT_ASCENSION_RAW_MAX, RIGHT_ASCENSION_RAW_MIN,
};
use crate::models::{Catalogue, CelestialObject, ObjectKind};

/// A data quality warning for one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Position in the catalogue.
    pub index: usize,
    pub name: String,
    pub kind: ObjectKind,
    pub field_name: String,
    pub current_value: f64,
    pub expected_value: String,
    pub description: String,
}

/// Validation report over a catalogue.
///
/// Issues are warnings only; the catalogue is left as ingested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_objects: usize,
    pub valid_objects: usize,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

fn check_object(index: usize, object: &CelestialObject) -> Vec<ValidationIssue> {
    let issue = |field: &str, value: f64, expected: String, description: &str| ValidationIssue {
        index,
        name: object.name().to_string(),
        kind: object.kind(),
        field_name: field.to_string(),
        current_value: value,
        expected_value: expected,
        description: description.to_string(),
    };

    let mut issues = Vec::new();
    if !object.apparent_magnitude().is_finite() {
        issues.push(issue(
            "apparent_magnitude",
            object.apparent_magnitude(),
            "finite".to_string(),
            "Apparent magnitude is not a finite number",
        ));
    }
    if !is_valid_declination_raw(object.declination_raw()) {
        issues.push(issue(
            "declination",
            object.declination_raw(),
            format!("{} to {}", DECLINATION_RAW_MIN, DECLINATION_RAW_MAX),
            "Declination outside -90 to 90 degrees",
        ));
    }
    if !is_valid_right_ascension_raw(object.right_ascension_raw()) {
        issues.push(issue(
            "right_ascension",
            object.right_ascension_raw(),
            format!("{} to {}", RIGHT_ASCENSION_RAW_MIN, RIGHT_ASCENSION_RAW_MAX),
            "Right ascension outside 0 to 24 hours",
        ));
    }
    if !object.distance().is_finite() || object.distance() < 0.0 {
        issues.push(issue(
            "distance",
            object.distance(),
            "finite, >= 0".to_string(),
            "Distance is negative or not a finite number",
        ));
    }
    if object.is_star() && object.radius_value() <= 0.0 {
        issues.push(issue(
            "radius",
            object.radius_value(),
            "> 0".to_string(),
            "Star radius must be positive to derive its temperature",
        ));
    }
    issues
}

/// Check every object against the coordinate and physical domains.
pub fn validate_catalogue(catalogue: &Catalogue) -> ValidationReport {
    let mut report = ValidationReport {
        total_objects: catalogue.len(),
        ..Default::default()
    };

    for (index, object) in catalogue.iter().enumerate() {
        let issues = check_object(index, object);
        if issues.is_empty() {
            report.valid_objects += 1;
        }
        report.warnings.extend(issues);
    }
    report
}
