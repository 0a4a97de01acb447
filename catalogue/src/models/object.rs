use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coordinates::EquatorialPosition;

/// Observation category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Galaxy,
    Star,
    Planet,
    Nebula,
}

impl ObjectKind {
    /// All kinds, in report order.
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::Star,
        ObjectKind::Planet,
        ObjectKind::Galaxy,
        ObjectKind::Nebula,
    ];

    /// Parse a record label. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "galaxy" => Some(ObjectKind::Galaxy),
            "star" => Some(ObjectKind::Star),
            "planet" => Some(ObjectKind::Planet),
            "nebula" => Some(ObjectKind::Nebula),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Galaxy => "galaxy",
            ObjectKind::Star => "star",
            ObjectKind::Planet => "planet",
            ObjectKind::Nebula => "nebula",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ObjectKind::Galaxy => "galaxies",
            ObjectKind::Star => "stars",
            ObjectKind::Planet => "planets",
            ObjectKind::Nebula => "nebulae",
        }
    }

    /// Unit symbol of the stored radius for this kind.
    pub fn radius_unit(&self) -> &'static str {
        match self {
            ObjectKind::Galaxy | ObjectKind::Nebula => "ly",
            ObjectKind::Star => "R_sun",
            ObjectKind::Planet => "AU",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Radius interpreted in the unit implied by the object kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    /// Physical radius of a galaxy or nebula.
    LightYears(qtty::LightYears),
    /// Stellar radius in solar radii.
    SolarRadii(f64),
    /// Orbital radius of a planet.
    OrbitalAu(qtty::AstronomicalUnits),
}

impl Radius {
    pub fn value(&self) -> f64 {
        match self {
            Radius::LightYears(r) => r.value(),
            Radius::SolarRadii(r) => *r,
            Radius::OrbitalAu(r) => r.value(),
        }
    }
}

/// One catalogued observation.
///
/// Coordinates are kept in their packed sexagesimal form (`±ddmmss.ss` and
/// `hhmmss.ss`); use [`CelestialObject::coordinates`] for decimal units.
/// Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    kind: ObjectKind,
    name: String,
    apparent_magnitude: f64,
    declination_raw: f64,
    right_ascension_raw: f64,
    distance: f64,
    radius: f64,
}

impl CelestialObject {
    pub fn new(
        kind: ObjectKind,
        name: impl Into<String>,
        apparent_magnitude: f64,
        declination_raw: f64,
        right_ascension_raw: f64,
        distance: f64,
        radius: f64,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            apparent_magnitude,
            declination_raw,
            right_ascension_raw,
            distance,
            radius,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apparent_magnitude(&self) -> f64 {
        self.apparent_magnitude
    }

    pub fn declination_raw(&self) -> f64 {
        self.declination_raw
    }

    pub fn right_ascension_raw(&self) -> f64 {
        self.right_ascension_raw
    }

    /// Distance in parsecs, as supplied.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn distance_pc(&self) -> qtty::Parsecs {
        qtty::Parsecs::new(self.distance)
    }

    /// Stored radius without unit interpretation.
    pub fn radius_value(&self) -> f64 {
        self.radius
    }

    pub fn radius(&self) -> Radius {
        match self.kind {
            ObjectKind::Galaxy | ObjectKind::Nebula => {
                Radius::LightYears(qtty::LightYears::new(self.radius))
            }
            ObjectKind::Star => Radius::SolarRadii(self.radius),
            ObjectKind::Planet => Radius::OrbitalAu(qtty::AstronomicalUnits::new(self.radius)),
        }
    }

    pub fn is_star(&self) -> bool {
        self.kind == ObjectKind::Star
    }

    /// Coordinates converted to decimal hours and degrees.
    pub fn coordinates(&self) -> EquatorialPosition {
        EquatorialPosition::from_packed(self.right_ascension_raw, self.declination_raw)
    }

    /// Serialize back into the comma-separated ingestion format.
    ///
    /// Numbers use the shortest representation that parses back to the same
    /// value.
    pub fn to_record_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.kind,
            self.name,
            self.apparent_magnitude,
            self.declination_raw,
            self.right_ascension_raw,
            self.distance,
            self.radius
        )
    }
}

impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (magnitude_label, radius_label) = match self.kind {
            ObjectKind::Planet => ("Host Star Apparent Magnitude", "Radius of orbit"),
            _ => ("Apparent Magnitude", "Radius"),
        };
        writeln!(f, "{} {}:", self.name, self.kind)?;
        writeln!(f)?;
        writeln!(f, "  {:<30}{:.4}", format!("{} =", magnitude_label), self.apparent_magnitude)?;
        writeln!(f, "  {:<30}{:.4} pc", "Distance =", self.distance_pc().value())?;
        writeln!(
            f,
            "  {:<30}{:.4} {}",
            format!("{} =", radius_label),
            self.radius,
            self.kind.radius_unit()
        )?;
        let position = self.coordinates();
        writeln!(
            f,
            "  {:<30}{} ({:.4} h)",
            "Right Ascension =",
            self.right_ascension_raw,
            position.right_ascension.value()
        )?;
        writeln!(
            f,
            "  {:<30}{} ({:.4} deg)",
            "Declination =",
            self.declination_raw,
            position.declination.value()
        )
    }
}
