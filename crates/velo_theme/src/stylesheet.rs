//! Global stylesheet binding the palettes to the document
//!
//! The sheet has three layers, later ones winning:
//! 1. light custom properties on `body`
//! 2. dark custom properties under `@media (prefers-color-scheme: dark)`
//! 3. `body[<marker>='light']` / `body[<marker>='dark']` blocks
//!
//! Layer 3 only matches once the resolver has written an explicit marker,
//! which is how an explicit preference overrides the system signal.

use std::fmt::Write as _;

use crate::accessor::token_reference;
use crate::palette::ThemeBundle;
use crate::preference::ColorScheme;
use crate::tokens::ColorToken;

/// Default name of the document marker attribute
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-theme";

/// Scheme the stylesheet cascade selects for a document state
pub fn active_scheme(marker: Option<ColorScheme>, system_prefers_dark: bool) -> ColorScheme {
    marker.unwrap_or(ColorScheme::from_dark_flag(system_prefers_dark))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stylesheet {
    bundle: ThemeBundle,
    marker_attribute: String,
}

impl Stylesheet {
    pub fn new(bundle: ThemeBundle, marker_attribute: impl Into<String>) -> Self {
        Self {
            bundle,
            marker_attribute: marker_attribute.into(),
        }
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    pub fn marker_attribute(&self) -> &str {
        &self.marker_attribute
    }

    /// Custom property declarations applied under `scheme`
    pub fn custom_properties(&self, scheme: ColorScheme) -> Vec<(String, String)> {
        self.bundle.for_scheme(scheme).css_variables()
    }

    /// Render the stylesheet text
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        self.write_block(&mut css, "body", ColorScheme::Light, "");

        css.push_str("@media (prefers-color-scheme: dark) {\n");
        self.write_block(&mut css, "body", ColorScheme::Dark, "  ");
        css.push_str("}\n\n");

        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let selector = format!("body[{}='{}']", self.marker_attribute, scheme.as_str());
            self.write_block(&mut css, &selector, scheme, "");
        }

        let _ = writeln!(
            css,
            "body {{\n  color: {};\n}}",
            token_reference(ColorToken::Accent9)
        );

        css
    }

    fn write_block(&self, css: &mut String, selector: &str, scheme: ColorScheme, indent: &str) {
        let _ = writeln!(css, "{indent}{selector} {{");
        for (name, value) in self.custom_properties(scheme) {
            let _ = writeln!(css, "{indent}  {name}: {value};");
        }
        let _ = writeln!(css, "{indent}}}");
        if indent.is_empty() {
            css.push('\n');
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new(ThemeBundle::velo(), DEFAULT_MARKER_ATTRIBUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_overrides_system() {
        assert_eq!(active_scheme(Some(ColorScheme::Light), true), ColorScheme::Light);
        assert_eq!(active_scheme(Some(ColorScheme::Dark), false), ColorScheme::Dark);
        assert_eq!(active_scheme(None, true), ColorScheme::Dark);
        assert_eq!(active_scheme(None, false), ColorScheme::Light);
    }

    #[test]
    fn test_css_contains_every_layer() {
        let css = Stylesheet::default().to_css();

        assert!(css.starts_with("body {\n  --background: #ffffff;\n"));
        assert!(css.contains("@media (prefers-color-scheme: dark) {\n  body {\n    --background: #121212;"));
        assert!(css.contains("body[data-theme='light'] {\n  --background: #ffffff;"));
        assert!(css.contains("body[data-theme='dark'] {\n  --background: #121212;"));
        assert!(css.contains("  --primary: #73e6db;"));
        assert!(css.contains("  --overlay: rgba(0,0,0,0.7);"));
        assert!(css.ends_with("body {\n  color: var(--accent-9);\n}\n"));
    }

    #[test]
    fn test_custom_marker_attribute() {
        let sheet = Stylesheet::new(ThemeBundle::velo(), "data-mode");
        assert!(sheet.to_css().contains("body[data-mode='dark'] {"));
    }
}
