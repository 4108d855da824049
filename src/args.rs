//! Argument shapes accepted by the formatters.
//!
//! Callers hand over either a full sequence (`[r, g, b]`, `[r, g, b, a]`) or a
//! triple plus a separate trailing alpha. Everything is normalized into
//! [`Components`] here, before any formatter runs.

use crate::{error::ColorStringError, value::ColorValue};

/// Concatenate a sequence and an optional trailing alpha into one flat list.
///
/// `flatten(&[255., 10., 35.], Some(0.3)) == flatten(&[255., 10., 35., 0.3], None)`
pub fn flatten(values: &[f64], alpha: Option<f64>) -> Vec<f64> {
    let mut flat = Vec::with_capacity(values.len() + 1);
    flat.extend_from_slice(values);
    flat.extend(alpha);
    flat
}

/// Three channels and an alpha that may be absent.
///
/// Absent alpha and alpha exactly `1` both format without an alpha suffix,
/// but they stay distinguishable here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    channels: [f64; 3],
    alpha: Option<f64>,
}

impl Components {
    #[inline]
    pub const fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self {
            channels: [c0, c1, c2],
            alpha: None,
        }
    }

    #[inline]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            channels: self.channels,
            alpha: Some(alpha),
        }
    }

    /// Build from a flat list. Values past the fourth are ignored.
    pub fn from_slice(values: &[f64]) -> Result<Self, ColorStringError> {
        match *values {
            [c0, c1, c2] => Ok(Self::new(c0, c1, c2)),
            [c0, c1, c2, a, ..] => Ok(Self::new(c0, c1, c2).with_alpha(a)),
            _ => Err(ColorStringError::component_count(values)),
        }
    }

    /// [`flatten`] followed by [`Components::from_slice`]
    pub fn flatten(values: &[f64], alpha: Option<f64>) -> Result<Self, ColorStringError> {
        Self::from_slice(&flatten(values, alpha))
    }

    #[inline]
    pub fn channels(&self) -> [f64; 3] {
        self.channels
    }

    #[inline]
    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Alpha that should be written out, i.e. present and not exactly `1`
    #[inline]
    pub(crate) fn visible_alpha(&self) -> Option<f64> {
        self.alpha.filter(|&a| a != 1.0)
    }
}

impl From<[f64; 3]> for Components {
    fn from([c0, c1, c2]: [f64; 3]) -> Self {
        Self::new(c0, c1, c2)
    }
}

impl From<[f64; 4]> for Components {
    fn from([c0, c1, c2, a]: [f64; 4]) -> Self {
        Self::new(c0, c1, c2).with_alpha(a)
    }
}

impl From<([f64; 3], f64)> for Components {
    fn from(([c0, c1, c2], a): ([f64; 3], f64)) -> Self {
        Self::new(c0, c1, c2).with_alpha(a)
    }
}

impl From<ColorValue> for Components {
    fn from(value: ColorValue) -> Self {
        value.to_array().into()
    }
}

impl From<&ColorValue> for Components {
    fn from(value: &ColorValue) -> Self {
        (*value).into()
    }
}

impl TryFrom<&[f64]> for Components {
    type Error = ColorStringError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}
