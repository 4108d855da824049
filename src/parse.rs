//! Color string parsers.
//!
//! Every parser answers with `Option`: a fully populated [`ColorValue`] on a
//! match, `None` otherwise. Numbers that match a grammar but fall outside the
//! model's range are clamped, never rejected.
//!
//! [`get`] tries the grammars in a fixed order: hex when the string starts
//! with `#`, then hsl / hwb / rgb chosen by the first three characters, and
//! finally keywords.

use regex::Regex;
use std::sync::LazyLock;

use crate::{
    names,
    num::{clamp, round_half_up, parse_float_prefix},
    value::{Color, ColorModel, ColorValue},
};

/// The one keyword that is not in the name table
pub const TRANSPARENT: &str = "transparent";

static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#([a-f0-9]{6})([a-f0-9]{2})?$").expect("valid hex regex"));

static HEX_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#([a-f0-9]{3,4})$").expect("valid short hex regex"));

static RGB_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*([+-]?[0-9]+)\s*,\s*([+-]?[0-9]+)\s*,\s*([+-]?[0-9]+)\s*(?:,\s*([+-]?[0-9.]+)\s*)?\)$",
    )
    .expect("valid rgb regex")
});

static RGB_PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*([+-]?[0-9.]+)%\s*,\s*([+-]?[0-9.]+)%\s*,\s*([+-]?[0-9.]+)%\s*(?:,\s*([+-]?[0-9.]+)\s*)?\)$",
    )
    .expect("valid rgb percent regex")
});

static HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*([+-]?(?:[0-9]*\.)?[0-9]+)(?:deg)?\s*,\s*([+-]?[0-9.]+)%\s*,\s*([+-]?[0-9.]+)%\s*(?:,\s*([+-]?[0-9.]+)\s*)?\)$",
    )
    .expect("valid hsl regex")
});

static HWB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hwb\(\s*([+-]?[0-9]*[.]?[0-9]+)(?:deg)?\s*,\s*([+-]?[0-9.]+)%\s*,\s*([+-]?[0-9.]+)%\s*(?:,\s*([+-]?[0-9.]+)\s*)?\)$",
    )
    .expect("valid hwb regex")
});

static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("valid keyword regex"));

/// Parse any supported color string, reporting which grammar matched.
pub fn get(text: &str) -> Option<Color> {
    if text.starts_with('#') {
        if let Some(value) = hex(text) {
            tracing::trace!(text, "matched hex");
            return Some(Color::new(ColorModel::Hex, value));
        }
    }

    let prefix = text.chars().take(3).collect::<String>().to_lowercase();
    let (model, value) = match prefix.as_str() {
        "hsl" => (ColorModel::Hsl, hsl(text)),
        "hwb" => (ColorModel::Hwb, hwb(text)),
        _ => (ColorModel::Rgb, rgb(text)),
    };
    tracing::trace!(text, %model, matched = value.is_some(), "routed by prefix");

    if let Some(value) = value {
        return Some(Color::new(model, value));
    }

    let color = keyword(text).map(|value| Color::new(ColorModel::Keyword, value));
    if color.is_none() {
        tracing::debug!(text, "no color grammar matched");
    }
    color
}

/// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`, case-insensitive.
///
/// Alpha is rounded to two decimals: `a9` gives `0.66`.
pub fn hex(text: &str) -> Option<ColorValue> {
    let (channels, alpha) = if let Some(caps) = HEX.captures(text) {
        let digits = &caps[1];
        let mut channels = [0.0; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = hex_pair(&digits[i * 2..i * 2 + 2])?;
        }
        let alpha = match caps.get(2) {
            Some(a) => alpha_from_byte(hex_pair(a.as_str())?),
            None => 1.0,
        };
        (channels, alpha)
    } else if let Some(caps) = HEX_SHORT.captures(text) {
        let digits = caps[1].as_bytes();
        let mut channels = [0.0; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = hex_doubled(digits[i])?;
        }
        let alpha = match digits.get(3) {
            Some(&a) => alpha_from_byte(hex_doubled(a)?),
            None => 1.0,
        };
        (channels, alpha)
    } else {
        return None;
    };

    Some(clamp_rgb(channels, alpha))
}

fn hex_pair(pair: &str) -> Option<f64> {
    u8::from_str_radix(pair, 16).ok().map(f64::from)
}

/// Short-form digit `f` reads as `ff`
fn hex_doubled(digit: u8) -> Option<f64> {
    let nibble = (digit as char).to_digit(16)?;
    Some(f64::from(nibble * 17))
}

fn alpha_from_byte(byte: f64) -> f64 {
    round_half_up(byte / 255.0 * 100.0) / 100.0
}

/// `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer or percentage channels.
///
/// Percentages scale by `2.55` and round. Channels clamp to `[0, 255]` and
/// alpha to `[0, 1]`; negatives clamp to `0`.
pub fn rgb(text: &str) -> Option<ColorValue> {
    let (caps, percent) = if let Some(caps) = RGB_INT.captures(text) {
        (caps, false)
    } else if let Some(caps) = RGB_PERCENT.captures(text) {
        (caps, true)
    } else {
        return None;
    };

    let mut channels = [0.0; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let n = parse_float_prefix(&caps[i + 1])?;
        *channel = if percent { round_half_up(n * 2.55) } else { n };
    }
    let alpha = parse_alpha(caps.get(4).map(|m| m.as_str()));

    Some(clamp_rgb(channels, alpha))
}

/// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`; hue may carry a `deg` suffix.
///
/// Hue is shifted once by 360 before the modulo, so hues below -360 stay
/// negative. Unlike [`hwb`], this is not a full wrap.
pub fn hsl(text: &str) -> Option<ColorValue> {
    let caps = HSL.captures(text)?;
    let h = parse_float_prefix(&caps[1])?;
    let [s, l] = percent_pair(&caps[2], &caps[3])?;
    let alpha = parse_alpha(caps.get(4).map(|m| m.as_str()));

    Some(ColorValue::new((h + 360.0) % 360.0, s, l, alpha))
}

/// `hwb(h, w%, b%)` / `hwb(h, w%, b%, a)`; hue wraps for any magnitude.
pub fn hwb(text: &str) -> Option<ColorValue> {
    let caps = HWB.captures(text)?;
    let h = parse_float_prefix(&caps[1])?;
    let [w, b] = percent_pair(&caps[2], &caps[3])?;
    let alpha = parse_alpha(caps.get(4).map(|m| m.as_str()));

    Some(ColorValue::new(((h % 360.0) + 360.0) % 360.0, w, b, alpha))
}

/// A CSS color name, or `transparent`.
///
/// The first run of non-digit characters is looked up; names are
/// case-sensitive.
pub fn keyword(text: &str) -> Option<ColorValue> {
    let name = KEYWORD.find(text)?.as_str();
    if name == TRANSPARENT {
        return Some(ColorValue::new(0.0, 0.0, 0.0, 0.0));
    }

    let [r, g, b] = names::lookup(name)?;
    Some(ColorValue::opaque(f64::from(r), f64::from(g), f64::from(b)))
}

fn percent_pair(first: &str, second: &str) -> Option<[f64; 2]> {
    Some([
        clamp(parse_float_prefix(first)?, 0.0, 100.0),
        clamp(parse_float_prefix(second)?, 0.0, 100.0),
    ])
}

/// Absent or unparsable alpha reads as `1`
fn parse_alpha(capture: Option<&str>) -> f64 {
    let alpha = capture.and_then(parse_float_prefix).unwrap_or(1.0);
    clamp(alpha, 0.0, 1.0)
}

fn clamp_rgb([r, g, b]: [f64; 3], alpha: f64) -> ColorValue {
    ColorValue::new(
        clamp(r, 0.0, 255.0),
        clamp(g, 0.0, 255.0),
        clamp(b, 0.0, 255.0),
        clamp(alpha, 0.0, 1.0),
    )
}
