//! Design tokens for theming
//!
//! Only color tokens are part of the shared contract; every component
//! refers to colors through these semantic keys.

mod color;

pub use color::*;
