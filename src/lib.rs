#![forbid(unsafe_code)]

//! # colorstring
//!
//! Parse CSS-style color strings into numeric tuples and format tuples back
//! into strings.
//!
//! ## Overview
//!
//! Supported grammars:
//!
//! - **hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **rgb**: `rgb(r, g, b)`, `rgba(r, g, b, a)`, integer or percentage channels
//! - **hsl**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`, hue optionally in `deg`
//! - **hwb**: `hwb(h, w%, b%)`, `hwb(h, w%, b%, a)`
//! - **keyword**: the CSS named colors plus `transparent`
//!
//! Each grammar parses into a [`ColorValue`] in its own coordinate space. No
//! conversion between models is ever performed: an hsl string gives back
//! hue, saturation and lightness, not red, green and blue.
//!
//! ## Core Components
//!
//! - [`parse`]: one parser per grammar plus [`parse::get`], which picks the
//!   grammar and reports it as a [`ColorModel`]
//! - [`format`]: one formatter per grammar, plus `rgb_percent`
//! - [`Components`]: the argument shape the formatters accept
//! - [`Swatch`]: owo-colors integration for terminal previews
//!
//! ## Example Usage
//!
//! ```rust
//! use colorstring::{format, parse, ColorModel};
//!
//! let color = parse::get("#fffFEFa9").unwrap();
//! assert_eq!(color.model, ColorModel::Hex);
//! assert_eq!(color.value, [255.0, 255.0, 239.0, 0.66]);
//!
//! assert_eq!(format::rgb([255.0, 10.0, 35.0, 0.3]), "rgba(255, 10, 35, 0.3)");
//! assert_eq!(format::hex(([255.0, 10.0, 35.0], 0.3)), "#FF0A234D");
//! assert_eq!(format::keyword([255.0, 255.0, 0.0]), Some("yellow"));
//! ```
//!
//! ## Error Handling
//!
//! The parsers return `Option`: malformed input, unknown keywords and wrong
//! grammars all come back as `None`. Values that match a grammar but are out
//! of range are clamped instead. For `?`-friendly code, [`Color`] implements
//! [`FromStr`](std::str::FromStr) with a [`ColorStringError`] diagnostic.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Color`], [`ColorModel`] and
//!   [`ColorValue`]

pub use args::{flatten, Components};
pub use error::{ColorStringError, ColorStringResult};
pub use paint::{Preview, Swatch};
pub use value::{Color, ColorModel, ColorValue};

/// Argument normalization for the formatters
pub mod args;
/// Error types and handling
pub mod error;
/// Tuple to string formatters
pub mod format;
/// Keyword tables
pub mod names;
/// String to tuple parsers
pub mod parse;
/// Terminal previews
pub mod paint;
/// Color values and models
pub mod value;

mod num;
