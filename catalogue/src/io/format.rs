//! Number formatting for the flat data files.
//!
//! Data files print doubles as `%g` with six significant digits, the layout
//! the plotting scripts expect.

/// Default number of significant digits for data files.
pub const DEFAULT_PRECISION: usize = 6;

/// Format like `%g` with [`DEFAULT_PRECISION`] significant digits.
///
/// ```
/// use star_catalogue::io::format::format_general;
///
/// assert_eq!(format_general(63345.0), "63345");
/// assert_eq!(format_general(2.64), "2.64");
/// assert_eq!(format_general(1234567.0), "1.23457e+06");
/// ```
pub fn format_general(value: f64) -> String {
    format_significant(value, DEFAULT_PRECISION)
}

/// Format like `%.<precision>g`.
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= precision as i32 {
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}
