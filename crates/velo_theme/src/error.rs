//! Theme error types

use std::path::PathBuf;

use thiserror::Error;
use velo_paint::ColorParseError;

/// Errors raised by the theme system
///
/// The first three variants are programming errors: correctly wired
/// applications never see them.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A theme preference outside `light`, `dark`, `default`
    #[error("invalid theme value `{0}`: expected one of `light`, `dark`, `default`")]
    InvalidThemeValue(String),

    /// Theme context accessed outside an entered resolver scope
    #[error("theme context is not available: enter a ThemeResolver scope first")]
    MissingThemeContext,

    /// A color token key outside the token enumeration
    #[error("unknown color token `{0}`")]
    UnknownColorToken(String),

    /// Failed to read a configuration file
    #[error("failed to read theme config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration TOML
    #[error("failed to parse theme config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize configuration TOML
    #[error("failed to serialize theme config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A marker attribute name that cannot appear in an attribute selector
    #[error("invalid marker attribute `{0}`: expected a name like `data-theme`")]
    InvalidMarkerAttribute(String),

    /// A palette override that is not a concrete color
    #[error("invalid color `{value}` for token `{token}`")]
    InvalidColor {
        token: String,
        value: String,
        #[source]
        source: ColorParseError,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
