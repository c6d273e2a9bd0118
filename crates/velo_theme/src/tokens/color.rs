//! Color tokens for theming

use std::fmt;
use std::str::FromStr;

use velo_paint::Color;

use crate::error::ThemeError;

/// Semantic color token keys
///
/// The set is closed: components and stylesheets rely on these exact names.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorToken {
    // Surfaces
    Background,
    BackgroundSecondary,

    // Neutral scale, lightest to darkest in light mode
    Accent0,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Accent7,
    Accent8,
    Accent9,
    Foreground,

    // Brand colors
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    SecondaryHover,
    SecondaryActive,

    // Text drawn on top of filled elements
    ElementText,
    SecondaryElementText,

    // Destructive actions
    Destructive,
    DestructiveHover,
    DestructiveActive,

    // Translucent layers
    SlightLayer,
    Overlay,
}

impl ColorToken {
    /// Every token, in stylesheet order
    pub const ALL: [ColorToken; 26] = [
        ColorToken::Background,
        ColorToken::BackgroundSecondary,
        ColorToken::Accent0,
        ColorToken::Accent1,
        ColorToken::Accent2,
        ColorToken::Accent3,
        ColorToken::Accent4,
        ColorToken::Accent5,
        ColorToken::Accent6,
        ColorToken::Accent7,
        ColorToken::Accent8,
        ColorToken::Accent9,
        ColorToken::Foreground,
        ColorToken::Primary,
        ColorToken::PrimaryHover,
        ColorToken::PrimaryActive,
        ColorToken::Secondary,
        ColorToken::SecondaryHover,
        ColorToken::SecondaryActive,
        ColorToken::ElementText,
        ColorToken::SecondaryElementText,
        ColorToken::Destructive,
        ColorToken::DestructiveHover,
        ColorToken::DestructiveActive,
        ColorToken::SlightLayer,
        ColorToken::Overlay,
    ];

    /// Kebab-case key, also the custom property name without the `--` prefix
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Background => "background",
            ColorToken::BackgroundSecondary => "background-secondary",
            ColorToken::Accent0 => "accent-0",
            ColorToken::Accent1 => "accent-1",
            ColorToken::Accent2 => "accent-2",
            ColorToken::Accent3 => "accent-3",
            ColorToken::Accent4 => "accent-4",
            ColorToken::Accent5 => "accent-5",
            ColorToken::Accent6 => "accent-6",
            ColorToken::Accent7 => "accent-7",
            ColorToken::Accent8 => "accent-8",
            ColorToken::Accent9 => "accent-9",
            ColorToken::Foreground => "foreground",
            ColorToken::Primary => "primary",
            ColorToken::PrimaryHover => "primary-hover",
            ColorToken::PrimaryActive => "primary-active",
            ColorToken::Secondary => "secondary",
            ColorToken::SecondaryHover => "secondary-hover",
            ColorToken::SecondaryActive => "secondary-active",
            ColorToken::ElementText => "element-text",
            ColorToken::SecondaryElementText => "secondary-element-text",
            ColorToken::Destructive => "destructive",
            ColorToken::DestructiveHover => "destructive-hover",
            ColorToken::DestructiveActive => "destructive-active",
            ColorToken::SlightLayer => "slight-layer",
            ColorToken::Overlay => "overlay",
        }
    }

    /// Custom property name, e.g. `--primary`
    pub fn custom_property(self) -> String {
        format!("--{}", self.name())
    }

    /// Accent step `0..=9`
    pub fn accent(step: u8) -> Option<ColorToken> {
        ColorToken::ALL.get(2 + step as usize).filter(|_| step <= 9).copied()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let key = key.strip_prefix("--").unwrap_or(key);
        ColorToken::ALL
            .iter()
            .copied()
            .find(|token| token.name() == key)
            .ok_or_else(|| ThemeError::UnknownColorToken(s.to_string()))
    }
}

/// Complete set of concrete colors for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Surfaces
    pub background: Color,
    pub background_secondary: Color,

    // Neutral scale
    pub accent_0: Color,
    pub accent_1: Color,
    pub accent_2: Color,
    pub accent_3: Color,
    pub accent_4: Color,
    pub accent_5: Color,
    pub accent_6: Color,
    pub accent_7: Color,
    pub accent_8: Color,
    pub accent_9: Color,
    pub foreground: Color,

    // Brand colors
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,
    pub secondary_hover: Color,
    pub secondary_active: Color,

    // Element text
    pub element_text: Color,
    pub secondary_element_text: Color,

    // Destructive
    pub destructive: Color,
    pub destructive_hover: Color,
    pub destructive_active: Color,

    // Layers
    pub slight_layer: Color,
    pub overlay: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        *self.slot(token)
    }

    /// Replace the color behind a token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        *self.slot_mut(token) = color;
    }

    /// `(custom property name, css value)` pairs in stylesheet order
    pub fn css_variables(&self) -> Vec<(String, String)> {
        ColorToken::ALL
            .iter()
            .map(|token| (token.custom_property(), self.get(*token).to_css()))
            .collect()
    }

    fn slot(&self, token: ColorToken) -> &Color {
        match token {
            ColorToken::Background => &self.background,
            ColorToken::BackgroundSecondary => &self.background_secondary,
            ColorToken::Accent0 => &self.accent_0,
            ColorToken::Accent1 => &self.accent_1,
            ColorToken::Accent2 => &self.accent_2,
            ColorToken::Accent3 => &self.accent_3,
            ColorToken::Accent4 => &self.accent_4,
            ColorToken::Accent5 => &self.accent_5,
            ColorToken::Accent6 => &self.accent_6,
            ColorToken::Accent7 => &self.accent_7,
            ColorToken::Accent8 => &self.accent_8,
            ColorToken::Accent9 => &self.accent_9,
            ColorToken::Foreground => &self.foreground,
            ColorToken::Primary => &self.primary,
            ColorToken::PrimaryHover => &self.primary_hover,
            ColorToken::PrimaryActive => &self.primary_active,
            ColorToken::Secondary => &self.secondary,
            ColorToken::SecondaryHover => &self.secondary_hover,
            ColorToken::SecondaryActive => &self.secondary_active,
            ColorToken::ElementText => &self.element_text,
            ColorToken::SecondaryElementText => &self.secondary_element_text,
            ColorToken::Destructive => &self.destructive,
            ColorToken::DestructiveHover => &self.destructive_hover,
            ColorToken::DestructiveActive => &self.destructive_active,
            ColorToken::SlightLayer => &self.slight_layer,
            ColorToken::Overlay => &self.overlay,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Background => &mut self.background,
            ColorToken::BackgroundSecondary => &mut self.background_secondary,
            ColorToken::Accent0 => &mut self.accent_0,
            ColorToken::Accent1 => &mut self.accent_1,
            ColorToken::Accent2 => &mut self.accent_2,
            ColorToken::Accent3 => &mut self.accent_3,
            ColorToken::Accent4 => &mut self.accent_4,
            ColorToken::Accent5 => &mut self.accent_5,
            ColorToken::Accent6 => &mut self.accent_6,
            ColorToken::Accent7 => &mut self.accent_7,
            ColorToken::Accent8 => &mut self.accent_8,
            ColorToken::Accent9 => &mut self.accent_9,
            ColorToken::Foreground => &mut self.foreground,
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryHover => &mut self.primary_hover,
            ColorToken::PrimaryActive => &mut self.primary_active,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::SecondaryHover => &mut self.secondary_hover,
            ColorToken::SecondaryActive => &mut self.secondary_active,
            ColorToken::ElementText => &mut self.element_text,
            ColorToken::SecondaryElementText => &mut self.secondary_element_text,
            ColorToken::Destructive => &mut self.destructive,
            ColorToken::DestructiveHover => &mut self.destructive_hover,
            ColorToken::DestructiveActive => &mut self.destructive_active,
            ColorToken::SlightLayer => &mut self.slight_layer,
            ColorToken::Overlay => &mut self.overlay,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        crate::palette::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_and_round_trip() {
        for token in ColorToken::ALL {
            assert_eq!(token.name().parse::<ColorToken>().unwrap(), token);
        }
        let mut names: Vec<&str> = ColorToken::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ColorToken::ALL.len());
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = "accent-10".parse::<ColorToken>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownColorToken(ref key) if key == "accent-10"));
    }

    #[test]
    fn test_custom_property_prefix_is_accepted() {
        assert_eq!("--overlay".parse::<ColorToken>().unwrap(), ColorToken::Overlay);
    }

    #[test]
    fn test_accent_steps() {
        assert_eq!(ColorToken::accent(0), Some(ColorToken::Accent0));
        assert_eq!(ColorToken::accent(9), Some(ColorToken::Accent9));
        assert_eq!(ColorToken::accent(10), None);
    }

    #[test]
    fn test_set_replaces_single_slot() {
        let mut tokens = ColorTokens::default();
        tokens.set(ColorToken::Primary, Color::BLACK);
        assert_eq!(tokens.get(ColorToken::Primary), Color::BLACK);
        assert_ne!(tokens.get(ColorToken::PrimaryHover), Color::BLACK);
    }
}
