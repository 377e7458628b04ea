/// Number of fractional digits shown when no precision is configured.
pub const DEFAULT_PRECISION: usize = 10;

/// Largest precision honoured when formatting. `f64` carries no more than 17
/// significant digits, and the formatter rejects precisions above `u16::MAX`.
pub const MAX_PRECISION: usize = 20;

/// Formats a computed value for display.
///
/// The value is rounded to `precision` fractional digits (at most
/// [`MAX_PRECISION`]), then trailing zeros and a dangling decimal point are
/// removed. A nonzero value that would round to zero is shown in scientific
/// notation instead, so it is never mistaken for a real zero. `NaN` (the
/// result of a division by zero) is shown as `0`, infinities as `∞` and `-∞`,
/// and negative zero as `0`.
///
/// ## Parameters
/// - `value`: The number to format.
/// - `precision`: Maximum number of fractional digits.
///
/// ## Example
/// ```
/// use linepad::util::num::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2, 10), "0.3");
/// assert_eq!(format_number(20.0, 10), "20");
/// assert_eq!(format_number(2.0 / 3.0, 4), "0.6667");
/// assert_eq!(format_number(f64::NAN, 10), "0");
/// assert_eq!(format_number(-0.0, 10), "0");
/// assert_eq!(format_number(0.000_000_000_01, 10), "1e-11");
/// assert_eq!(format_number(0.5, 70_000), "0.5");
/// ```
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "0".to_string();
    }
    if value.is_infinite() {
        let symbol = if value.is_sign_positive() { "∞" } else { "-∞" };
        return symbol.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.min(MAX_PRECISION);
    let fixed = format!("{value:.precision$}");
    let fixed = trim_fraction(&fixed);
    if fixed != "0" && fixed != "-0" {
        return fixed.to_string();
    }

    let scientific = format!("{value:.precision$e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{exponent}", trim_fraction(mantissa)),
        None => scientific,
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing is left after it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
