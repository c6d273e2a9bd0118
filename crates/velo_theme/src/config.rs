//! Theme configuration file handling
//!
//! ```toml
//! initial_theme = "default"
//! marker_attribute = "data-theme"
//!
//! [palette.light]
//! primary = "#1e66f5"
//!
//! [palette.dark]
//! primary = "#89b4fa"
//! overlay = "rgba(0, 0, 0, 0.8)"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use velo_paint::parse_color;

use crate::error::{Result, ThemeError};
use crate::palette::ThemeBundle;
use crate::preference::{ColorScheme, ThemePreference};
use crate::stylesheet::{Stylesheet, DEFAULT_MARKER_ATTRIBUTE};
use crate::tokens::ColorToken;

/// Top-level theme configuration (velo-theme.toml)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Preference the resolver mounts with
    #[serde(default)]
    pub initial_theme: ThemePreference,
    /// Document attribute carrying the explicit scheme
    #[serde(default = "default_marker_attribute")]
    pub marker_attribute: String,
    /// Per-scheme token overrides on top of the built-in palette
    #[serde(default)]
    pub palette: PaletteOverrides,
}

fn default_marker_attribute() -> String {
    DEFAULT_MARKER_ATTRIBUTE.to_string()
}

/// Token name to CSS color overrides
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaletteOverrides {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub light: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dark: BTreeMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial_theme: ThemePreference::Default,
            marker_attribute: default_marker_attribute(),
            palette: PaletteOverrides::default(),
        }
    }
}

impl ThemeConfig {
    /// Load configuration from a file or a directory containing velo-theme.toml
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("velo-theme.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| ThemeError::Config {
            path: config_path.clone(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded theme config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(content)?;
        // Surface bad overrides at load time rather than at first paint
        validate_marker_attribute(&config.marker_attribute)?;
        config.bundle()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Built-in palette with the overrides applied
    pub fn bundle(&self) -> Result<ThemeBundle> {
        let mut bundle = ThemeBundle::velo();
        for (scheme, overrides) in [
            (ColorScheme::Light, &self.palette.light),
            (ColorScheme::Dark, &self.palette.dark),
        ] {
            let tokens = bundle.for_scheme_mut(scheme);
            for (key, value) in overrides {
                let token: ColorToken = key.parse()?;
                let color = parse_color(value).map_err(|source| ThemeError::InvalidColor {
                    token: key.clone(),
                    value: value.clone(),
                    source,
                })?;
                tokens.set(token, color);
            }
        }
        Ok(bundle)
    }

    pub fn stylesheet(&self) -> Result<Stylesheet> {
        validate_marker_attribute(&self.marker_attribute)?;
        Ok(Stylesheet::new(self.bundle()?, self.marker_attribute.clone()))
    }
}

/// An attribute name usable unquoted in `body[name='dark']`
fn validate_marker_attribute(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));

    if valid {
        Ok(())
    } else {
        Err(ThemeError::InvalidMarkerAttribute(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.marker_attribute, "data-theme");
    }

    #[test]
    fn test_overrides_apply_per_scheme() {
        let config = ThemeConfig::from_toml_str(
            r##"
            initial_theme = "dark"

            [palette.dark]
            primary = "#89b4fa"
            "##,
        )
        .unwrap();
        let bundle = config.bundle().unwrap();

        assert_eq!(config.initial_theme, ThemePreference::Dark);
        assert_eq!(
            bundle.for_scheme(ColorScheme::Dark).get(ColorToken::Primary).to_css(),
            "#89b4fa"
        );
        assert_eq!(
            bundle.for_scheme(ColorScheme::Light).get(ColorToken::Primary).to_css(),
            "#009688"
        );
    }

    #[test]
    fn test_bad_overrides_are_rejected() {
        let unknown = ThemeConfig::from_toml_str("[palette.light]\ntertiary = \"#fff\"\n");
        assert!(matches!(unknown, Err(ThemeError::UnknownColorToken(ref k)) if k == "tertiary"));

        let bad_color = ThemeConfig::from_toml_str("[palette.light]\nprimary = \"var(--x)\"\n");
        assert!(matches!(bad_color, Err(ThemeError::InvalidColor { ref token, .. }) if token == "primary"));

        let bad_theme = ThemeConfig::from_toml_str("initial_theme = \"sepia\"\n");
        assert!(matches!(bad_theme, Err(ThemeError::ConfigParse(_))));
    }

    #[test]
    fn test_non_finite_alpha_is_rejected() {
        for value in ["rgba(0, 0, 0, NaN)", "rgba(0, 0, 0, inf)"] {
            let toml = format!("[palette.light]\noverlay = \"{value}\"\n");
            let result = ThemeConfig::from_toml_str(&toml);
            assert!(
                matches!(result, Err(ThemeError::InvalidColor { ref token, .. }) if token == "overlay"),
                "{value} was accepted"
            );
        }
    }

    #[test]
    fn test_marker_attribute_must_be_a_plain_name() {
        for name in ["", "data]theme", "data theme", "-mode", "data-theme='x'"] {
            let toml = format!("marker_attribute = \"{name}\"\n");
            let result = ThemeConfig::from_toml_str(&toml);
            assert!(
                matches!(result, Err(ThemeError::InvalidMarkerAttribute(ref n)) if n == name),
                "{name:?} was accepted"
            );
        }

        let config = ThemeConfig::from_toml_str("marker_attribute = \"data-color-mode\"\n").unwrap();
        assert_eq!(config.marker_attribute, "data-color-mode");

        let mut built = ThemeConfig::default();
        built.marker_attribute = "x]".to_string();
        assert!(matches!(built.stylesheet(), Err(ThemeError::InvalidMarkerAttribute(_))));
    }
}
