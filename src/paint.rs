//! Terminal previews of parsed colors via owo-colors.
//!
//! Only values stored in RGB space can be painted. hsl and hwb values are
//! left alone since this crate never converts between models.

use owo_colors::OwoColorize;
use std::fmt::{self, Display};

use crate::value::{Color, ColorValue};

/// Extension trait for painting text with a parsed color
pub trait Swatch: OwoColorize {
    /// Truecolor foreground, or plain text if `value` is not an exact RGB triple
    #[inline]
    fn swatch(self, value: &ColorValue) -> String
    where
        Self: Sized + Display,
    {
        match value.rgb_triple() {
            Some([r, g, b]) => format!("{}", self.truecolor(r, g, b)),
            None => self.to_string(),
        }
    }

    /// Truecolor background, or plain text if `value` is not an exact RGB triple
    #[inline]
    fn on_swatch(self, value: &ColorValue) -> String
    where
        Self: Sized + Display,
    {
        match value.rgb_triple() {
            Some([r, g, b]) => format!("{}", self.on_truecolor(r, g, b)),
            None => self.to_string(),
        }
    }
}

impl<T: OwoColorize + Display> Swatch for T {}

impl From<ColorValue> for owo_colors::Rgb {
    /// Channels are clamped and truncated to bytes; alpha is dropped.
    fn from(value: ColorValue) -> Self {
        let [r, g, b] = value.channels().map(|c| c.clamp(0.0, 255.0) as u8);
        owo_colors::Rgb(r, g, b)
    }
}

/// A block of background color followed by the color's own text form
pub struct Preview<'a>(pub &'a Color);

impl Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.rgb_triple() {
            Some(_) => write!(f, "{} {}", "  ".on_swatch(&self.0.value), self.0),
            None => write!(f, "?? {}", self.0),
        }
    }
}
