//! Color string formatters.
//!
//! Each formatter takes anything convertible into [`Components`]: a 3 or 4
//! element array, a triple plus trailing alpha, or a parsed [`ColorValue`].
//! Alpha is written only when present and not exactly `1`, except for
//! [`hex`], which appends an alpha byte whenever alpha is below `1`.

use crate::{
    args::Components,
    names,
    num::{fmt_number, hex_byte, round_half_up},
    value::ColorValue,
};

/// `#RRGGBB`, or `#RRGGBBAA` when alpha is below `1`, in uppercase.
pub fn hex(values: impl Into<Components>) -> String {
    let rgba: Components = values.into();
    let [r, g, b] = rgba.channels();

    let mut out = String::with_capacity(9);
    out.push('#');
    out.push_str(&hex_byte(r));
    out.push_str(&hex_byte(g));
    out.push_str(&hex_byte(b));
    if let Some(a) = rgba.alpha().filter(|&a| a < 1.0) {
        out.push_str(&hex_byte(a * 255.0));
    }
    out
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; channels are rounded, alpha is not.
pub fn rgb(values: impl Into<Components>) -> String {
    let rgba: Components = values.into();
    let [r, g, b] = rgba.channels().map(|c| fmt_number(round_half_up(c)));

    match rgba.visible_alpha() {
        Some(a) => format!("rgba({}, {}, {}, {})", r, g, b, fmt_number(a)),
        None => format!("rgb({}, {}, {})", r, g, b),
    }
}

/// `rgb(r%, g%, b%)` or `rgba(r%, g%, b%, a)`, each channel as a whole
/// percentage of 255.
pub fn rgb_percent(values: impl Into<Components>) -> String {
    let rgba: Components = values.into();
    let [r, g, b] = rgba
        .channels()
        .map(|c| fmt_number(round_half_up(c / 255.0 * 100.0)));

    match rgba.visible_alpha() {
        Some(a) => format!("rgba({}%, {}%, {}%, {})", r, g, b, fmt_number(a)),
        None => format!("rgb({}%, {}%, {}%)", r, g, b),
    }
}

/// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`; values are written as given.
pub fn hsl(values: impl Into<Components>) -> String {
    let hsla: Components = values.into();
    let [h, s, l] = hsla.channels().map(fmt_number);

    match hsla.visible_alpha() {
        Some(a) => format!("hsla({}, {}%, {}%, {})", h, s, l, fmt_number(a)),
        None => format!("hsl({}, {}%, {}%)", h, s, l),
    }
}

/// `hwb(h, w%, b%)` or `hwb(h, w%, b%, a)`. There is no `hwba` form.
pub fn hwb(values: impl Into<Components>) -> String {
    let hwba: Components = values.into();
    let [h, w, b] = hwba.channels().map(fmt_number);

    let alpha = hwba
        .visible_alpha()
        .map(|a| format!(", {}", fmt_number(a)))
        .unwrap_or_default();

    format!("hwb({}, {}%, {}%{})", h, w, b, alpha)
}

/// Keyword for an exact RGB triple. Alpha is ignored.
///
/// `None` is the normal answer for most triples, not an error.
pub fn keyword(values: impl Into<Components>) -> Option<&'static str> {
    let rgb: Components = values.into();
    let [r, g, b] = rgb.channels();
    ColorValue::opaque(r, g, b)
        .rgb_triple()
        .and_then(names::name_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const RGB: [f64; 3] = [255.0, 10.0, 35.0];
    const HSL: [f64; 3] = [280.0, 40.0, 60.0];

    #[test]
    fn test_hex() {
        assert_eq!(hex(RGB), "#FF0A23");
        assert_eq!(hex([255.0, 10.0, 35.0, 1.0]), "#FF0A23");
        assert_eq!(hex((RGB, 1.0)), "#FF0A23");
        assert_eq!(hex([255.0, 10.0, 35.0, 0.3]), "#FF0A234D");
        assert_eq!(hex((RGB, 0.3)), "#FF0A234D");
        assert_eq!(hex([255.0, 10.0, 35.0, 0.0]), "#FF0A2300");
        assert_eq!(hex((RGB, 0.0)), "#FF0A2300");
    }

    #[test]
    fn test_hex_rounds_channels() {
        assert_eq!(hex([254.6, 9.5, 0.4]), "#FF0A00");
        assert_eq!(hex((RGB, 1.5)), "#FF0A23");
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb(RGB), "rgb(255, 10, 35)");
        assert_eq!(rgb([255.0, 10.0, 35.0, 0.3]), "rgba(255, 10, 35, 0.3)");
        assert_eq!(rgb((RGB, 0.3)), "rgba(255, 10, 35, 0.3)");
        assert_eq!(rgb([255.0, 10.0, 35.0, 1.0]), "rgb(255, 10, 35)");
        assert_eq!(rgb([255.0, 10.0, 35.0, 0.0]), "rgba(255, 10, 35, 0)");
        assert_eq!(rgb([254.5, 10.2, 34.9]), "rgb(255, 10, 35)");
    }

    #[test]
    fn test_rgb_percent() {
        assert_eq!(rgb_percent(RGB), "rgb(100%, 4%, 14%)");
        assert_eq!(rgb_percent([255.0, 10.0, 35.0, 0.3]), "rgba(100%, 4%, 14%, 0.3)");
        assert_eq!(rgb_percent((RGB, 0.3)), "rgba(100%, 4%, 14%, 0.3)");
        assert_eq!(rgb_percent((RGB, 1.0)), "rgb(100%, 4%, 14%)");
    }

    #[test]
    fn test_hsl() {
        assert_eq!(hsl(HSL), "hsl(280, 40%, 60%)");
        assert_eq!(hsl([280.0, 40.0, 60.0, 0.3]), "hsla(280, 40%, 60%, 0.3)");
        assert_eq!(hsl((HSL, 0.3)), "hsla(280, 40%, 60%, 0.3)");
        assert_eq!(hsl((HSL, 0.0)), "hsla(280, 40%, 60%, 0)");
        assert_eq!(hsl([240.0, 100.0, 50.5]), "hsl(240, 100%, 50.5%)");
    }

    #[test]
    fn test_hwb() {
        assert_eq!(hwb(HSL), "hwb(280, 40%, 60%)");
        assert_eq!(hwb([280.0, 40.0, 60.0, 0.3]), "hwb(280, 40%, 60%, 0.3)");
        assert_eq!(hwb((HSL, 0.3)), "hwb(280, 40%, 60%, 0.3)");
        assert_eq!(hwb((HSL, 0.0)), "hwb(280, 40%, 60%, 0)");
        assert_eq!(hwb((HSL, 1.0)), "hwb(280, 40%, 60%)");
    }

    #[test]
    fn test_keyword() {
        assert_eq!(keyword([255.0, 255.0, 0.0]), Some("yellow"));
        assert_eq!(keyword([255.0, 255.0, 0.0, 0.5]), Some("yellow"));
        assert_eq!(keyword([100.0, 255.0, 0.0]), None);
        assert_eq!(keyword([254.5, 255.0, 0.0]), None);
    }

    #[test]
    fn test_parsed_values_format_directly() {
        let value = parse::rgb("rgba(200, 20, 233, 0.2)").expect("valid rgb");
        assert_eq!(rgb(value), "rgba(200, 20, 233, 0.2)");
        assert_eq!(rgb(&value), "rgba(200, 20, 233, 0.2)");
    }

    #[test]
    fn test_hex_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x00c0_1025);
        for _ in 0..500 {
            let input = format!("#{:06X}", rng.gen_range(0..=0xFF_FFFFu32));
            let value = parse::hex(&input.to_lowercase()).expect("valid hex");
            assert_eq!(hex(value), input);
        }
    }

    #[test]
    fn test_format_then_parse_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let alphas = [0.0, 0.2, 0.5, 0.75, 1.0];

        for _ in 0..200 {
            let a = alphas[rng.gen_range(0..alphas.len())];
            let bytes: [f64; 3] = std::array::from_fn(|_| f64::from(rng.gen::<u8>()));
            let rgb_value = ColorValue::new(bytes[0], bytes[1], bytes[2], a);
            assert_eq!(parse::rgb(&rgb(rgb_value)), Some(rgb_value));

            // Half-degree hues survive the +360 shift exactly.
            let h = f64::from(rng.gen_range(0..720u32)) / 2.0;
            let s = f64::from(rng.gen_range(0..=1000u32)) / 10.0;
            let l = f64::from(rng.gen_range(0..=100u32));
            let hsl_value = ColorValue::new(h, s, l, a);
            assert_eq!(parse::hsl(&hsl(hsl_value)), Some(hsl_value));
            assert_eq!(parse::hwb(&hwb(hsl_value)), Some(hsl_value));
        }
    }

    #[test]
    fn test_hex_alpha_round_trip_is_two_decimal() {
        let value = parse::hex("#c814e933").expect("valid hex");
        assert_eq!(hex(value), "#C814E933");
        assert_eq!(parse::hex(&hex(value)), Some(value));
    }
}
