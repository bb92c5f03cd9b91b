use std::num::ParseFloatError;

/// Shortest signed separation along one periodic axis of length `length`.
///
/// ```rust
/// use amorph::utils::minimum_image;
///
/// assert!((minimum_image(9.0, 10.0) - -1.0).abs() < 1e-12);
/// assert!((minimum_image(-6.0, 10.0) - 4.0).abs() < 1e-12);
/// assert!((minimum_image(3.0, 10.0) - 3.0).abs() < 1e-12);
/// ```
pub fn minimum_image(delta: f64, length: f64) -> f64 {
    delta - length * (delta / length).round()
}

/// Map `value` into `[lo, hi)`.
///
/// ```rust
/// use amorph::utils::wrap;
///
/// assert_eq!(wrap(12.5, 0.0, 10.0), 2.5);
/// assert_eq!(wrap(-2.5, 0.0, 10.0), 7.5);
/// assert_eq!(wrap(10.0, 0.0, 10.0), 0.0);
/// ```
pub fn wrap(value: f64, lo: f64, hi: f64) -> f64 {
    let length = hi - lo;
    let wrapped = (value - lo).rem_euclid(length);
    // rem_euclid rounds tiny negative offsets up to `length`
    if wrapped >= length {
        lo
    } else {
        lo + wrapped
    }
}

/// Shortest decimal form of `value`, always carrying a fractional part for
/// integral values. Magnitudes from 1e16 up, or below 1e-4, switch to
/// exponent form with a signed, two-digit exponent.
///
/// ```rust
/// use amorph::utils::float_repr;
///
/// assert_eq!(float_repr(2.0), "2.0");
/// assert_eq!(float_repr(0.3), "0.3");
/// assert_eq!(float_repr(1.234), "1.234");
/// assert_eq!(float_repr(1e16), "1e+16");
/// assert_eq!(float_repr(2.5e-5), "2.5e-05");
/// ```
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return format!("{}", value);
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", value);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Round to `decimals` places after the decimal point. The exact binary value
/// is rounded, so `1.2345`, stored just below the tie, rounds down.
///
/// ```rust
/// use amorph::utils::round_to;
///
/// assert_eq!(round_to(1.23456, 3).unwrap(), 1.235);
/// assert_eq!(round_to(1.2345, 3).unwrap(), 1.234);
/// assert_eq!(round_to(2.0, 3).unwrap(), 2.0);
/// ```
pub fn round_to(value: f64, decimals: usize) -> Result<f64, ParseFloatError> {
    format!("{:.prec$}", value, prec = decimals).parse::<f64>()
}
