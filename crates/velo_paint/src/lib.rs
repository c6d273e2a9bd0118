//! Velo Paint
//!
//! Color primitives shared by the theme system and the widgets:
//!
//! - [`Color`]: RGBA color with `f32` components
//! - CSS color parsing (`#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`, named colors)
//! - Color math used for interaction states (alpha, shade, tint, lightness)
//!
//! ```rust
//! use velo_paint::Color;
//!
//! let primary: Color = "#009688".parse().unwrap();
//! assert_eq!(primary.rgba(0.1).to_css(), "rgba(0,150,136,0.1)");
//! ```

pub mod color;
pub mod parse;

pub use color::Color;
pub use parse::{parse_color, ColorParseError};
