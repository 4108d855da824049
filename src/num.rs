//! Numeric helpers shared by the parsers and formatters.

use regex::Regex;
use std::sync::LazyLock;

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)").expect("valid float prefix regex")
});

/// Clamp `num` into `[min, max]`.
///
/// Negative zero comes out as `+0` so that `-0.0` alpha literals print as `0`.
#[inline]
pub fn clamp(num: f64, min: f64, max: f64) -> f64 {
    min.max(num).min(max) + 0.0
}

/// Round half toward positive infinity, so `-2.5` rounds to `-2`.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Shortest decimal form of `x`: `0.3`, `280`, `50.5`.
pub fn fmt_number(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else if x.is_infinite() {
        (if x > 0.0 { "Infinity" } else { "-Infinity" }).to_string()
    } else if x.is_nan() {
        "NaN".to_string()
    } else {
        format!("{}", x)
    }
}

/// Read the longest leading decimal literal of `s`.
///
/// Captures such as `1.2.3` yield `1.2`; a capture without digits yields `None`.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    FLOAT_PREFIX.find(s)?.as_str().parse().ok()
}

/// Uppercase two-digit hex byte.
#[inline]
pub fn hex_byte(x: f64) -> String {
    format!("{:02X}", clamp(round_half_up(x), 0.0, 255.0) as u8)
}
