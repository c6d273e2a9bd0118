//! Button style model
//!
//! Resolves a kind/variant/size combination into the declarations a renderer
//! applies. Filled and outlined buttons use token references only; the ghost
//! variant tints its hover and active backgrounds from the live text color.

use std::fmt;

use velo_theme::{token_reference, ColorToken, LiveColor, ThemeHandle};

use crate::overlay::{interaction_overlay, Interaction};
use crate::size::Size;
use crate::watch::ThemeWatch;

/// Purpose of the button
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled background
    #[default]
    Default,
    Outline,
    Ghost,
}

/// Token references for one button color scheme
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonColorScheme {
    pub background: String,
    pub hover: String,
    pub active: String,
    pub text: String,
}

impl ButtonColorScheme {
    fn from_tokens(
        background: ColorToken,
        hover: ColorToken,
        active: ColorToken,
        text: ColorToken,
    ) -> Self {
        Self {
            background: token_reference(background),
            hover: token_reference(hover),
            active: token_reference(active),
            text: token_reference(text),
        }
    }
}

/// Filled color scheme of each kind
pub fn scheme_for(kind: ButtonKind) -> ButtonColorScheme {
    use ColorToken::*;
    match kind {
        ButtonKind::Primary => {
            ButtonColorScheme::from_tokens(Primary, PrimaryHover, PrimaryActive, ElementText)
        }
        ButtonKind::Secondary => ButtonColorScheme::from_tokens(
            Secondary,
            SecondaryHover,
            SecondaryActive,
            SecondaryElementText,
        ),
        ButtonKind::Destructive => ButtonColorScheme::from_tokens(
            Destructive,
            DestructiveHover,
            DestructiveActive,
            ElementText,
        ),
    }
}

/// Neutral scheme for outlined and ghost secondary buttons
///
/// The pale secondary fill would be unreadable as a text color, so these
/// variants use the strongest accents instead.
pub fn secondary_variant_scheme(is_dark_theme: bool) -> ButtonColorScheme {
    use ColorToken::*;
    if is_dark_theme {
        ButtonColorScheme::from_tokens(Accent9, Accent8, Accent7, ElementText)
    } else {
        ButtonColorScheme::from_tokens(Accent8, Accent7, Accent6, ElementText)
    }
}

/// Button configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonConfig {
    pub label: String,
    pub kind: ButtonKind,
    pub variant: ButtonVariant,
    pub size: Size,
    pub full_width: bool,
    /// Width equal to height
    pub square: bool,
    pub disabled: bool,
}

impl ButtonConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn square(mut self) -> Self {
        self.square = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Color scheme for the current effective mode
    pub fn scheme(&self, is_dark_theme: bool) -> ButtonColorScheme {
        if self.variant != ButtonVariant::Default && self.kind == ButtonKind::Secondary {
            secondary_variant_scheme(is_dark_theme)
        } else {
            scheme_for(self.kind)
        }
    }
}

/// Resolved declarations for each interaction state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: String,
    pub color: String,
    pub border: Option<String>,
    pub hover_background: String,
    pub hover_color: Option<String>,
    pub hover_border: Option<String>,
    pub active_background: String,
    pub active_border: Option<String>,
    pub font_size: &'static str,
    pub height: &'static str,
    pub width: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

impl ButtonStyle {
    /// Render as CSS declarations grouped by state
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        css.push_str(&format!("  background: {};\n", self.background));
        css.push_str(&format!("  color: {};\n", self.color));
        if let Some(border) = &self.border {
            css.push_str(&format!("  border: 1px solid {border};\n"));
        }
        css.push_str(&format!("  font-size: {};\n", self.font_size));
        css.push_str(&format!("  height: {};\n", self.height));
        if let Some(width) = self.width {
            css.push_str(&format!("  width: {width};\n"));
        }
        if let Some(opacity) = self.opacity {
            css.push_str(&format!("  opacity: {opacity};\n"));
        }
        css.push_str("}\n");

        css.push_str(&format!("{selector}:hover:enabled {{\n"));
        css.push_str(&format!("  background: {};\n", self.hover_background));
        if let Some(color) = &self.hover_color {
            css.push_str(&format!("  color: {color};\n"));
        }
        if let Some(border) = &self.hover_border {
            css.push_str(&format!("  border-color: {border};\n"));
        }
        css.push_str("}\n");

        css.push_str(&format!("{selector}:active:enabled {{\n"));
        css.push_str(&format!("  background: {};\n", self.active_background));
        if let Some(border) = &self.active_border {
            css.push_str(&format!("  border-color: {border};\n"));
        }
        css.push_str("}\n");
        css
    }
}

/// A mounted button bound to a theme
///
/// Keeps a live read of its scheme's base color for the ghost overlays.
/// Theme changes, including system signal flips under `Default`, are picked
/// up through the resolver; the host only calls [`Button::tick`] after each
/// paint.
#[derive(Debug)]
pub struct Button {
    config: ButtonConfig,
    theme: ThemeHandle,
    base: LiveColor,
    watch: ThemeWatch,
}

impl Button {
    pub fn new(config: ButtonConfig, theme: ThemeHandle) -> Self {
        let scheme = config.scheme(theme.is_dark_theme());
        let base = LiveColor::new(&**theme.document(), scheme.background);
        let watch = ThemeWatch::register(&theme);
        Self {
            config,
            theme,
            base,
            watch,
        }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Live base color, or its reference until the first successful read
    pub fn base_color(&self) -> &str {
        self.base.value()
    }

    /// Re-target the live read at the current scheme
    ///
    /// Runs automatically on the next [`Button::tick`] after a theme change.
    pub fn on_theme_change(&mut self) {
        let scheme = self.config.scheme(self.theme.is_dark_theme());
        self.base.set_reference(scheme.background);
        self.base.invalidate();
    }

    /// Deferred live read; returns whether the style changed
    pub fn tick(&mut self) -> bool {
        if self.watch.take() {
            self.on_theme_change();
        }
        self.base.tick(&**self.theme.document())
    }

    pub fn style(&self) -> ButtonStyle {
        let is_dark = self.theme.is_dark_theme();
        let scheme = self.config.scheme(is_dark);
        let size = self.config.size.set();

        let mut style = match self.config.variant {
            ButtonVariant::Default => ButtonStyle {
                background: scheme.background,
                color: scheme.text,
                border: None,
                hover_background: scheme.hover,
                hover_color: None,
                hover_border: None,
                active_background: scheme.active,
                active_border: None,
                font_size: size.font_size,
                height: size.height,
                width: None,
                opacity: None,
            },
            ButtonVariant::Outline => ButtonStyle {
                background: "transparent".to_string(),
                color: scheme.background.clone(),
                border: Some(scheme.background.clone()),
                hover_background: scheme.background.clone(),
                hover_color: Some(scheme.text),
                hover_border: Some(scheme.background),
                active_background: scheme.hover.clone(),
                active_border: Some(scheme.hover),
                font_size: size.font_size,
                height: size.height,
                width: None,
                opacity: None,
            },
            ButtonVariant::Ghost => {
                let color = self.base.value();
                ButtonStyle {
                    background: "transparent".to_string(),
                    color: color.to_string(),
                    border: None,
                    hover_background: interaction_overlay(color, Interaction::Hover, is_dark),
                    hover_color: None,
                    hover_border: None,
                    active_background: interaction_overlay(color, Interaction::Active, is_dark),
                    active_border: None,
                    font_size: size.font_size,
                    height: size.height,
                    width: None,
                    opacity: None,
                }
            }
        };

        if self.config.full_width {
            style.width = Some("100%");
        } else if self.config.square {
            style.width = Some("2.5em");
        }
        if self.config.disabled {
            style.opacity = Some("0.6");
        }
        style
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ButtonKind::Primary => "primary",
            ButtonKind::Secondary => "secondary",
            ButtonKind::Destructive => "destructive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemes_reference_tokens() {
        let primary = scheme_for(ButtonKind::Primary);
        assert_eq!(primary.background, "var(--primary)");
        assert_eq!(primary.text, "var(--element-text)");

        let secondary = scheme_for(ButtonKind::Secondary);
        assert_eq!(secondary.active, "var(--secondary-active)");
        assert_eq!(secondary.text, "var(--secondary-element-text)");

        assert_eq!(scheme_for(ButtonKind::Destructive).hover, "var(--destructive-hover)");
    }

    #[test]
    fn test_secondary_variants_use_accents() {
        let config = ButtonConfig::new("Cancel")
            .kind(ButtonKind::Secondary)
            .variant(ButtonVariant::Outline);

        assert_eq!(config.scheme(false).background, "var(--accent-8)");
        assert_eq!(config.scheme(true).background, "var(--accent-9)");
        assert_eq!(config.scheme(true).active, "var(--accent-7)");

        let filled = config.clone().variant(ButtonVariant::Default);
        assert_eq!(filled.scheme(true), scheme_for(ButtonKind::Secondary));
    }
}
