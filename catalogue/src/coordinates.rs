//! Packed sexagesimal coordinate conversion.
//!
//! Catalogue records store equatorial coordinates as single numbers whose
//! decimal digits concatenate the sexagesimal components:
//!
//! - right ascension as `hhmmss.ss` (e.g. `63345` is 6h 33m 45s)
//! - declination as `±ddmmss.ss` (e.g. `-163942` is -16° 39′ 42″)
//!
//! The raw packed values are what the catalogue stores, compares and writes
//! to text files. The functions here produce decimal hours and degrees for
//! rendering and display.
//!
//! ```
//! use star_catalogue::coordinates::{declination_to_degrees, right_ascension_to_hours};
//!
//! let ra = right_ascension_to_hours(63000.0);
//! assert!((ra.value() - 6.5).abs() < 1e-9);
//!
//! let dec = declination_to_degrees(-163000.0);
//! assert!((dec.value() + 16.5).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Smallest packed declination accepted as an angle (-90°).
pub const DECLINATION_RAW_MIN: f64 = -900_000.0;
/// Largest packed declination accepted as an angle (+90°).
pub const DECLINATION_RAW_MAX: f64 = 900_000.0;
/// Smallest packed right ascension (0h).
pub const RIGHT_ASCENSION_RAW_MIN: f64 = 0.0;
/// Largest packed right ascension (24h).
pub const RIGHT_ASCENSION_RAW_MAX: f64 = 240_000.0;

/// Equatorial position in decimal units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialPosition {
    pub right_ascension: qtty::HourAngles,
    pub declination: qtty::Degrees,
}

impl EquatorialPosition {
    /// Convert a raw packed `(ra, decl)` pair.
    pub fn from_packed(right_ascension_raw: f64, declination_raw: f64) -> Self {
        Self {
            right_ascension: right_ascension_to_hours(right_ascension_raw),
            declination: declination_to_degrees(declination_raw),
        }
    }
}

/// Split a packed value into its leading, middle and trailing components.
///
/// The value is divided by 100 and split into integer and fractional parts
/// twice; the fractional parts are scaled back to minutes and seconds.
fn split_packed(packed: f64) -> (f64, f64, f64) {
    let scaled = packed / 100.0;
    let (lead_mid, secs_frac) = (scaled.trunc(), scaled.fract());
    let lead_mid = lead_mid / 100.0;
    let (lead, mins_frac) = (lead_mid.trunc(), lead_mid.fract());
    (lead, mins_frac * 100.0, secs_frac * 100.0)
}

/// Convert packed `hhmmss.ss` right ascension to decimal hours in `[0, 24]`.
pub fn right_ascension_to_hours(packed: f64) -> qtty::HourAngles {
    let (hours, minutes, seconds) = split_packed(packed);
    let value = hours + minutes / 60.0 + seconds / 3600.0;
    qtty::HourAngles::new(value.clamp(0.0, 24.0))
}

/// Convert packed `±ddmmss.ss` declination to decimal degrees in `[-90, 90]`.
///
/// The sign lives on the packed value as a whole, so for negative values the
/// minutes and seconds move the result further from zero.
pub fn declination_to_degrees(packed: f64) -> qtty::Degrees {
    let (degrees, minutes, seconds) = split_packed(packed);
    let offset = minutes.abs() / 60.0 + seconds.abs() / 3600.0;
    let value = if packed < 0.0 {
        degrees - offset
    } else {
        degrees + offset
    };
    qtty::Degrees::new(value.clamp(-90.0, 90.0))
}

/// Whether a packed declination lies within `[-900000, 900000]`.
pub fn is_valid_declination_raw(packed: f64) -> bool {
    (DECLINATION_RAW_MIN..=DECLINATION_RAW_MAX).contains(&packed)
}

/// Whether a packed right ascension lies within `[0, 240000]`.
pub fn is_valid_right_ascension_raw(packed: f64) -> bool {
    (RIGHT_ASCENSION_RAW_MIN..=RIGHT_ASCENSION_RAW_MAX).contains(&packed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_right_ascension_whole_components() {
        // 06h 33m 45s
        let hours = right_ascension_to_hours(63345.0).value();
        assert!((hours - (6.0 + 33.0 / 60.0 + 45.0 / 3600.0)).abs() < EPS);
    }

    #[test]
    fn test_right_ascension_fractional_seconds() {
        let hours = right_ascension_to_hours(123456.78).value();
        let expected = 12.0 + 34.0 / 60.0 + 56.78 / 3600.0;
        assert!((hours - expected).abs() < 1e-8);
    }

    #[test]
    fn test_right_ascension_bounds() {
        assert_eq!(right_ascension_to_hours(0.0).value(), 0.0);
        assert!((right_ascension_to_hours(240000.0).value() - 24.0).abs() < EPS);
    }

    #[test]
    fn test_declination_positive() {
        let deg = declination_to_degrees(453015.0).value();
        assert!((deg - (45.0 + 30.0 / 60.0 + 15.0 / 3600.0)).abs() < EPS);
    }

    #[test]
    fn test_declination_negative_subtracts_minutes_and_seconds() {
        // Sirius: -16° 39′ 42″
        let deg = declination_to_degrees(-163942.0).value();
        let expected = -(16.0 + 39.0 / 60.0 + 42.0 / 3600.0);
        assert!((deg - expected).abs() < EPS);
    }

    #[test]
    fn test_declination_negative_below_one_degree() {
        // -00° 30′ 00″ has a zero degree part but is still south
        let deg = declination_to_degrees(-3000.0).value();
        assert!((deg + 0.5).abs() < EPS);
    }

    #[test]
    fn test_declination_poles() {
        assert!((declination_to_degrees(900000.0).value() - 90.0).abs() < EPS);
        assert!((declination_to_degrees(-900000.0).value() + 90.0).abs() < EPS);
    }

    #[test]
    fn test_out_of_range_digits_are_clamped() {
        assert_eq!(right_ascension_to_hours(239999.0).value(), 24.0);
        assert_eq!(declination_to_degrees(895999.0).value(), 90.0);
        assert_eq!(declination_to_degrees(-895999.0).value(), -90.0);
    }

    #[test]
    fn test_equatorial_position_from_packed() {
        let pos = EquatorialPosition::from_packed(63000.0, -153000.0);
        assert!((pos.right_ascension.value() - 6.5).abs() < EPS);
        assert!((pos.declination.value() + 15.5).abs() < EPS);
    }

    #[test]
    fn test_raw_domain_checks() {
        assert!(is_valid_declination_raw(-900000.0));
        assert!(is_valid_declination_raw(900000.0));
        assert!(!is_valid_declination_raw(900000.5));
        assert!(is_valid_right_ascension_raw(0.0));
        assert!(!is_valid_right_ascension_raw(-1.0));
        assert!(!is_valid_right_ascension_raw(240001.0));
    }

    proptest! {
        #[test]
        fn prop_right_ascension_in_hour_range(v in 0.0f64..=240000.0) {
            let hours = right_ascension_to_hours(v).value();
            prop_assert!((0.0..=24.0).contains(&hours));
        }

        #[test]
        fn prop_declination_in_degree_range(v in -900000.0f64..=900000.0) {
            let deg = declination_to_degrees(v).value();
            prop_assert!((-90.0..=90.0).contains(&deg));
        }

        #[test]
        fn prop_declination_sign_follows_packed_value(v in 100.0f64..=900000.0) {
            prop_assert!(declination_to_degrees(v).value() > 0.0);
            prop_assert!(declination_to_degrees(-v).value() < 0.0);
        }
    }
}
