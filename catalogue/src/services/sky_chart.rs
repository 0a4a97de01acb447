use serde::{Deserialize, Serialize};

use crate::coordinates::{declination_to_degrees, right_ascension_to_hours};
use crate::error::{Axis, CatalogueError, CatalogueResult};
use crate::models::{Catalogue, ObjectKind};

/// Inclusive window on raw packed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartWindow {
    pub decl_min: f64,
    pub decl_max: f64,
    pub ra_min: f64,
    pub ra_max: f64,
}

impl Default for ChartWindow {
    /// Slightly wider than the full sky so points on the edges stay visible.
    fn default() -> Self {
        Self {
            decl_min: -910_000.0,
            decl_max: 910_000.0,
            ra_min: -100.0,
            ra_max: 240_100.0,
        }
    }
}

impl ChartWindow {
    pub fn new(decl_min: f64, decl_max: f64, ra_min: f64, ra_max: f64) -> CatalogueResult<Self> {
        let window = Self {
            decl_min,
            decl_max,
            ra_min,
            ra_max,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> CatalogueResult<()> {
        if self.decl_min > self.decl_max {
            return Err(CatalogueError::InvalidRange {
                axis: Axis::Declination,
                min: self.decl_min,
                max: self.decl_max,
            });
        }
        if self.ra_min > self.ra_max {
            return Err(CatalogueError::InvalidRange {
                axis: Axis::RightAscension,
                min: self.ra_min,
                max: self.ra_max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, declination_raw: f64, right_ascension_raw: f64) -> bool {
        declination_raw >= self.decl_min
            && declination_raw <= self.decl_max
            && right_ascension_raw >= self.ra_min
            && right_ascension_raw <= self.ra_max
    }
}

/// Which non-star kinds a projection includes. Stars are always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindFilter {
    pub planets: bool,
    pub galaxies: bool,
    pub nebulae: bool,
}

impl Default for KindFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl KindFilter {
    pub fn all() -> Self {
        Self {
            planets: true,
            galaxies: true,
            nebulae: true,
        }
    }

    pub fn stars_only() -> Self {
        Self {
            planets: false,
            galaxies: false,
            nebulae: false,
        }
    }

    pub fn includes(&self, kind: ObjectKind) -> bool {
        match kind {
            ObjectKind::Star => true,
            ObjectKind::Planet => self.planets,
            ObjectKind::Galaxy => self.galaxies,
            ObjectKind::Nebula => self.nebulae,
        }
    }
}

/// Parallel right ascension / declination sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSeries {
    pub right_ascension: Vec<f64>,
    pub declination: Vec<f64>,
}

impl CoordinateSeries {
    pub fn push(&mut self, right_ascension: f64, declination: f64) {
        self.right_ascension.push(right_ascension);
        self.declination.push(declination);
    }

    pub fn len(&self) -> usize {
        self.right_ascension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.right_ascension.is_empty()
    }

    /// `(ra, decl)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.right_ascension
            .iter()
            .copied()
            .zip(self.declination.iter().copied())
    }

    fn append(&mut self, other: &CoordinateSeries) {
        self.right_ascension.extend_from_slice(&other.right_ascension);
        self.declination.extend_from_slice(&other.declination);
    }

    fn converted(&self) -> CoordinateSeries {
        CoordinateSeries {
            right_ascension: self
                .right_ascension
                .iter()
                .map(|&ra| right_ascension_to_hours(ra).value())
                .collect(),
            declination: self
                .declination
                .iter()
                .map(|&decl| declination_to_degrees(decl).value())
                .collect(),
        }
    }
}

/// Star chart positions in raw packed units, partitioned by kind.
///
/// Kinds excluded by the filter have empty series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarChartData {
    pub stars: CoordinateSeries,
    pub planets: CoordinateSeries,
    pub galaxies: CoordinateSeries,
    pub nebulae: CoordinateSeries,
    pub window: ChartWindow,
    pub filter: KindFilter,
}

impl StarChartData {
    pub fn series(&self, kind: ObjectKind) -> &CoordinateSeries {
        match kind {
            ObjectKind::Star => &self.stars,
            ObjectKind::Planet => &self.planets,
            ObjectKind::Galaxy => &self.galaxies,
            ObjectKind::Nebula => &self.nebulae,
        }
    }

    pub fn total_points(&self) -> usize {
        self.stars.len() + self.planets.len() + self.galaxies.len() + self.nebulae.len()
    }

    /// Union of all series: stars, then planets, galaxies and nebulae.
    pub fn combined(&self) -> CoordinateSeries {
        let mut all = self.stars.clone();
        all.append(&self.planets);
        all.append(&self.galaxies);
        all.append(&self.nebulae);
        all
    }

    /// Image-rendering view in decimal hours and degrees.
    pub fn converted(&self) -> ConvertedStarChart {
        ConvertedStarChart {
            stars: self.stars.converted(),
            planets: self.planets.converted(),
            galaxies: self.galaxies.converted(),
            nebulae: self.nebulae.converted(),
            ra_min: right_ascension_to_hours(self.window.ra_min),
            ra_max: right_ascension_to_hours(self.window.ra_max),
            decl_min: declination_to_degrees(self.window.decl_min),
            decl_max: declination_to_degrees(self.window.decl_max),
        }
    }
}

/// Star chart in decimal units, with axis limits for the renderer.
///
/// Series hold right ascension in hours and declination in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedStarChart {
    pub stars: CoordinateSeries,
    pub planets: CoordinateSeries,
    pub galaxies: CoordinateSeries,
    pub nebulae: CoordinateSeries,
    pub ra_min: qtty::HourAngles,
    pub ra_max: qtty::HourAngles,
    pub decl_min: qtty::Degrees,
    pub decl_max: qtty::Degrees,
}

/// Extract the objects inside `window`, partitioned by kind.
///
/// Bounds apply to the raw packed values. Fails with `InvalidRange` for an
/// inverted window and `NoPlottableData` when nothing included falls inside.
pub fn extract_star_chart(
    catalogue: &Catalogue,
    window: &ChartWindow,
    filter: &KindFilter,
) -> CatalogueResult<StarChartData> {
    window.validate()?;

    let mut data = StarChartData {
        stars: CoordinateSeries::default(),
        planets: CoordinateSeries::default(),
        galaxies: CoordinateSeries::default(),
        nebulae: CoordinateSeries::default(),
        window: *window,
        filter: *filter,
    };

    for object in catalogue {
        let decl = object.declination_raw();
        let ra = object.right_ascension_raw();
        if !filter.includes(object.kind()) || !window.contains(decl, ra) {
            continue;
        }
        let series = match object.kind() {
            ObjectKind::Star => &mut data.stars,
            ObjectKind::Planet => &mut data.planets,
            ObjectKind::Galaxy => &mut data.galaxies,
            ObjectKind::Nebula => &mut data.nebulae,
        };
        series.push(ra, decl);
    }

    if data.total_points() == 0 {
        return Err(CatalogueError::NoPlottableData(
            "no objects inside the star chart window".to_string(),
        ));
    }

    log::debug!(
        "Star chart: {} stars, {} planets, {} galaxies, {} nebulae",
        data.stars.len(),
        data.planets.len(),
        data.galaxies.len(),
        data.nebulae.len()
    );
    Ok(data)
}
