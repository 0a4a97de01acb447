//! Derived stellar quantities and the main sequence projection.
//!
//! For a star with apparent magnitude `m`, distance `d` (pc) and radius `R`
//! (solar radii):
//!
//! ```text
//! M = m - 5 log10(d) + 5
//! L = L0 * 10^(-M / 2.5)
//! T = T_sun * (1 / R)^0.5 * (L / L_sun)^0.25
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, CatalogueResult};
use crate::models::{Catalogue, CelestialObject, ObjectKind};

/// Luminosity of absolute magnitude zero, in watts.
pub const ZERO_POINT_LUMINOSITY_W: f64 = 3.0128e28;
/// Solar luminosity, in watts.
pub const SOLAR_LUMINOSITY_W: f64 = 3.84e26;
/// Solar effective temperature, in kelvin.
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// Derived quantities for one star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StellarProperties {
    pub absolute_magnitude: f64,
    /// Watts.
    pub luminosity: f64,
    /// Kelvin.
    pub temperature: f64,
}

/// Parallel temperature / absolute magnitude sequences, in catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainSequenceData {
    pub temperatures: Vec<f64>,
    pub absolute_magnitudes: Vec<f64>,
    /// Stars left out because a quantity was undefined.
    pub excluded: usize,
}

impl MainSequenceData {
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperatures
            .iter()
            .copied()
            .zip(self.absolute_magnitudes.iter().copied())
    }
}

/// Distance modulus: absolute magnitude from apparent magnitude and parsecs.
///
/// `None` when `distance_pc <= 0`, where the logarithm is undefined.
pub fn absolute_magnitude(apparent_magnitude: f64, distance_pc: f64) -> Option<f64> {
    if distance_pc <= 0.0 || distance_pc.is_nan() {
        return None;
    }
    Some(apparent_magnitude - 5.0 * distance_pc.log10() + 5.0)
}

/// Luminosity in watts for an absolute magnitude.
pub fn luminosity(absolute_magnitude: f64) -> f64 {
    ZERO_POINT_LUMINOSITY_W * 10f64.powf(-absolute_magnitude / 2.5)
}

/// Effective temperature in kelvin from radius (solar radii) and luminosity (W).
///
/// `None` for a non-positive radius or a non-finite result.
pub fn effective_temperature(radius_solar: f64, luminosity_w: f64) -> Option<f64> {
    if radius_solar <= 0.0 || radius_solar.is_nan() {
        return None;
    }
    let temperature =
        SOLAR_TEMPERATURE_K * (1.0 / radius_solar).powf(0.5) * (luminosity_w / SOLAR_LUMINOSITY_W).powf(0.25);
    temperature.is_finite().then_some(temperature)
}

/// Compute the derived quantities of a star.
pub fn stellar_properties(object: &CelestialObject) -> CatalogueResult<StellarProperties> {
    if !object.is_star() {
        return Err(CatalogueError::computation(
            object.name(),
            format!("{} is not a star", object.kind()),
        ));
    }

    let absolute_magnitude = absolute_magnitude(object.apparent_magnitude(), object.distance())
        .ok_or_else(|| {
            CatalogueError::computation(
                object.name(),
                format!("distance {} pc must be positive", object.distance()),
            )
        })?;
    let luminosity = luminosity(absolute_magnitude);
    let temperature = effective_temperature(object.radius_value(), luminosity).ok_or_else(|| {
        CatalogueError::computation(
            object.name(),
            format!(
                "no finite temperature for radius {} R_sun and luminosity {} W",
                object.radius_value(),
                luminosity
            ),
        )
    })?;

    Ok(StellarProperties {
        absolute_magnitude,
        luminosity,
        temperature,
    })
}

/// Temperature against absolute magnitude for every star in the catalogue.
///
/// Stars whose quantities are undefined are left out and counted in
/// `excluded`. Fails with `NoPlottableData` when no star remains.
pub fn compute_main_sequence(catalogue: &Catalogue) -> CatalogueResult<MainSequenceData> {
    if catalogue.count(ObjectKind::Star) == 0 {
        return Err(CatalogueError::NoPlottableData(
            "the catalogue contains no stars".to_string(),
        ));
    }

    let mut data = MainSequenceData::default();
    for star in catalogue.of_kind(ObjectKind::Star) {
        match stellar_properties(star) {
            Ok(props) => {
                data.temperatures.push(props.temperature);
                data.absolute_magnitudes.push(props.absolute_magnitude);
            }
            Err(e) => {
                data.excluded += 1;
                log::warn!("Excluding star from main sequence: {}", e);
            }
        }
    }

    if data.is_empty() {
        return Err(CatalogueError::NoPlottableData(format!(
            "none of the {} stars has defined stellar properties",
            data.excluded
        )));
    }
    Ok(data)
}
