//! Color values and models.
//!
//! A [`ColorValue`] is always four numbers. What the first three mean depends
//! on the [`ColorModel`] it came from; no conversion between models happens
//! anywhere in this crate.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{error::ColorStringError, format, names, num::fmt_number, parse};

/// Four color components `(c0, c1, c2, alpha)`.
///
/// rgb/hex: red, green, blue in `[0, 255]`.
/// hsl: hue in `[0, 360)`, saturation and lightness in `[0, 100]`.
/// hwb: hue, whiteness, blackness with the same ranges as hsl.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColorValue([f64; 4]);

impl ColorValue {
    #[inline]
    pub const fn new(c0: f64, c1: f64, c2: f64, alpha: f64) -> Self {
        Self([c0, c1, c2, alpha])
    }

    /// Opaque value with alpha `1`
    #[inline]
    pub const fn opaque(c0: f64, c1: f64, c2: f64) -> Self {
        Self([c0, c1, c2, 1.0])
    }

    /// The three model-dependent components
    #[inline]
    pub fn channels(&self) -> [f64; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.0[3]
    }

    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        self.0
    }

    /// Exact integer triple, if every channel is an integer in `[0, 255]`
    pub fn rgb_triple(&self) -> Option<[u8; 3]> {
        let [r, g, b] = self.channels();
        Some([to_byte(r)?, to_byte(g)?, to_byte(b)?])
    }
}

fn to_byte(x: f64) -> Option<u8> {
    (x.fract() == 0.0 && (0.0..=255.0).contains(&x)).then_some(x as u8)
}

impl From<[f64; 4]> for ColorValue {
    fn from(values: [f64; 4]) -> Self {
        Self(values)
    }
}

impl From<ColorValue> for [f64; 4] {
    fn from(value: ColorValue) -> Self {
        value.0
    }
}

impl PartialEq<[f64; 4]> for ColorValue {
    fn eq(&self, other: &[f64; 4]) -> bool {
        self.0 == *other
    }
}

impl Index<usize> for ColorValue {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}

impl Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2, a] = self.0;
        write!(
            f,
            "[{}, {}, {}, {}]",
            fmt_number(c0),
            fmt_number(c1),
            fmt_number(c2),
            fmt_number(a)
        )
    }
}

/// The grammar a [`Color`] was recognized by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorModel {
    Rgb,
    Hsl,
    Hwb,
    Hex,
    Keyword,
}

impl ColorModel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorModel::Rgb => "rgb",
            ColorModel::Hsl => "hsl",
            ColorModel::Hwb => "hwb",
            ColorModel::Hex => "hex",
            ColorModel::Keyword => "keyword",
        }
    }
}

impl Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorModel {
    type Err = ColorStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(ColorModel::Rgb),
            "hsl" => Ok(ColorModel::Hsl),
            "hwb" => Ok(ColorModel::Hwb),
            "hex" => Ok(ColorModel::Hex),
            "keyword" => Ok(ColorModel::Keyword),
            _ => Err(ColorStringError::unknown_model(s)),
        }
    }
}

/// A parsed color: the model that matched and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub model: ColorModel,
    pub value: ColorValue,
}

impl Color {
    #[inline]
    pub const fn new(model: ColorModel, value: ColorValue) -> Self {
        Self { model, value }
    }

    /// RGB bytes for models stored in RGB space (rgb, hex, keyword)
    pub fn rgb_triple(&self) -> Option<[u8; 3]> {
        match self.model {
            ColorModel::Rgb | ColorModel::Hex | ColorModel::Keyword => self.value.rgb_triple(),
            ColorModel::Hsl | ColorModel::Hwb => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = match self.model {
            ColorModel::Hex => format::hex(self.value),
            ColorModel::Rgb => format::rgb(self.value),
            ColorModel::Hsl => format::hsl(self.value),
            ColorModel::Hwb => format::hwb(self.value),
            ColorModel::Keyword => {
                let name = if self.value == [0.0, 0.0, 0.0, 0.0] {
                    Some(parse::TRANSPARENT)
                } else if self.value.alpha() == 1.0 {
                    self.value.rgb_triple().and_then(names::name_of)
                } else {
                    None
                };
                match name {
                    Some(name) => name.to_string(),
                    None => format::rgb(self.value),
                }
            }
        };
        f.write_str(&out)
    }
}

impl FromStr for Color {
    type Err = ColorStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::get(s).ok_or_else(|| ColorStringError::no_match(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_accessors() {
        let value = ColorValue::new(200.0, 20.0, 233.0, 0.2);
        assert_eq!(value.channels(), [200.0, 20.0, 233.0]);
        assert_eq!(value.alpha(), 0.2);
        assert_eq!(value[2], 233.0);
        assert_eq!(value, [200.0, 20.0, 233.0, 0.2]);
        assert_eq!(value.to_string(), "[200, 20, 233, 0.2]");
    }

    #[test]
    fn test_rgb_triple_requires_integers() {
        assert_eq!(ColorValue::opaque(255.0, 0.0, 10.0).rgb_triple(), Some([255, 0, 10]));
        assert_eq!(ColorValue::opaque(255.5, 0.0, 10.0).rgb_triple(), None);
        assert_eq!(ColorValue::opaque(256.0, 0.0, 10.0).rgb_triple(), None);

        let hsl = Color::new(ColorModel::Hsl, ColorValue::opaque(0.0, 0.0, 0.0));
        assert_eq!(hsl.rgb_triple(), None);
    }

    #[test]
    fn test_model_names() {
        for model in [
            ColorModel::Rgb,
            ColorModel::Hsl,
            ColorModel::Hwb,
            ColorModel::Hex,
            ColorModel::Keyword,
        ] {
            assert_eq!(model.to_string().parse::<ColorModel>().ok(), Some(model));
        }
        assert!("cmyk".parse::<ColorModel>().is_err());
    }

    #[test]
    fn test_color_display_uses_own_grammar() {
        let cases = [
            ("#fffFEFa9", "#FFFFEFA8"),
            ("rgba(200, 20, 233, 0.2)", "rgba(200, 20, 233, 0.2)"),
            ("hsl(240deg, 100%, 50.5%)", "hsl(240, 100%, 50.5%)"),
            ("hwb(-10.0deg, 100%, 50.5%, +0.6)", "hwb(350, 100%, 50.5%, 0.6)"),
            ("transparent", "transparent"),
            ("aqua", "cyan"),
        ];
        for (input, expected) in cases {
            let color: Color = input.parse().expect("valid color");
            assert_eq!(color.to_string(), expected, "input {input}");
        }
    }

    #[test]
    fn test_color_from_str_error() {
        let err = "333333".parse::<Color>().unwrap_err();
        assert!(matches!(err, ColorStringError::NoMatch { .. }));
        assert_eq!(err.to_string(), "Unrecognized color string: \"333333\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let color: Color = "#fef".parse().expect("valid color");
        let json = serde_json::to_string(&color).expect("serializable");
        assert_eq!(json, r#"{"model":"hex","value":[255.0,238.0,255.0,1.0]}"#);

        let back: Color = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, color);
    }
}
