//! Theme preference and resolved color scheme

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// User or API selected theme mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the system color scheme
    #[default]
    Default,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::Default => "default",
        }
    }

    /// The scheme this preference forces, `None` when following the system
    pub fn explicit_scheme(self) -> Option<ColorScheme> {
        match self {
            ThemePreference::Light => Some(ColorScheme::Light),
            ThemePreference::Dark => Some(ColorScheme::Dark),
            ThemePreference::Default => None,
        }
    }

    /// Effective dark flag for this preference under the given system signal
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
            ThemePreference::Default => system_prefers_dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "default" => Ok(ThemePreference::Default),
            other => Err(ThemeError::InvalidThemeValue(other.to_string())),
        }
    }
}

impl From<ColorScheme> for ThemePreference {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemePreference::Light,
            ColorScheme::Dark => ThemePreference::Dark,
        }
    }
}

/// Resolved light/dark mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Value written to the document marker attribute
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preference_ignores_system() {
        for system in [true, false] {
            assert!(ThemePreference::Dark.is_dark(system));
            assert!(!ThemePreference::Light.is_dark(system));
            assert_eq!(ThemePreference::Default.is_dark(system), system);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert!(matches!(
            "Dark".parse::<ThemePreference>(),
            Err(ThemeError::InvalidThemeValue(v)) if v == "Dark"
        ));
        assert!("system".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_scheme_toggle() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_dark_flag(true), ColorScheme::Dark);
    }
}
