//! Built-in Velo palettes
//!
//! A teal brand color over a neutral grey scale. The dark variant keeps the
//! same roles but inverts the neutral scale and lifts the brand colors so
//! they stay readable on `#121212`.

use velo_paint::Color;

use crate::preference::ColorScheme;
use crate::tokens::ColorTokens;

/// Light and dark color sets for one theme
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    name: String,
    light: ColorTokens,
    dark: ColorTokens,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: ColorTokens, dark: ColorTokens) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    /// The built-in Velo theme
    pub fn velo() -> Self {
        Self::new("Velo", light(), dark())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &ColorTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn for_scheme_mut(&mut self, scheme: ColorScheme) -> &mut ColorTokens {
        match scheme {
            ColorScheme::Light => &mut self.light,
            ColorScheme::Dark => &mut self.dark,
        }
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::velo()
    }
}

/// Light palette
pub fn light() -> ColorTokens {
    ColorTokens {
        background: Color::WHITE,
        background_secondary: Color::from_hex(0xFAFAFA),

        accent_0: Color::WHITE,
        accent_1: Color::from_hex(0xFAFAFA),
        accent_2: Color::from_hex(0xF5F5F5),
        accent_3: Color::from_hex(0xEEEEEE),
        accent_4: Color::from_hex(0xE0E0E0),
        accent_5: Color::from_hex(0x9E9E9E),
        accent_6: Color::from_hex(0x757575),
        accent_7: Color::from_hex(0x616161),
        accent_8: Color::from_hex(0x424242),
        accent_9: Color::from_hex(0x212121),
        foreground: Color::from_hex(0x121212),

        primary: Color::from_hex(0x009688),
        primary_hover: Color::from_hex(0x007E72),
        primary_active: Color::from_hex(0x007267),
        secondary: Color::from_hex(0xC6E8E6),
        secondary_hover: Color::from_hex(0xB6E1DE),
        secondary_active: Color::from_hex(0xA6DBD7),

        element_text: Color::WHITE,
        secondary_element_text: Color::from_hex(0x009688),

        destructive: Color::from_hex(0xF44336),
        destructive_hover: Color::from_hex(0xCD382D),
        destructive_active: Color::from_hex(0xA62E25),

        slight_layer: Color::BLACK.with_alpha(0.1),
        overlay: Color::BLACK.with_alpha(0.4),
    }
}

/// Dark palette
pub fn dark() -> ColorTokens {
    ColorTokens {
        background: Color::from_hex(0x121212),
        background_secondary: Color::from_hex(0x121212),

        accent_0: Color::from_hex(0x1B1B1B),
        accent_1: Color::from_hex(0x252525),
        accent_2: Color::from_hex(0x2E2E2E),
        accent_3: Color::from_hex(0x3D3D3D),
        accent_4: Color::from_hex(0x5B5B5B),
        accent_5: Color::from_hex(0x848484),
        accent_6: Color::from_hex(0x979797),
        accent_7: Color::from_hex(0xB3B3B3),
        accent_8: Color::from_hex(0xBDBDBD),
        accent_9: Color::from_hex(0xE8EAED),
        foreground: Color::WHITE,

        primary: Color::from_hex(0x73E6DB),
        primary_hover: Color::from_hex(0x61D9CE),
        primary_active: Color::from_hex(0x4ECCC0),
        secondary: Color::from_hex(0x214341),
        secondary_hover: Color::from_hex(0x1F4F4B),
        secondary_active: Color::from_hex(0x1E5B56),

        element_text: Color::from_hex(0x121212),
        secondary_element_text: Color::from_hex(0xD8ECEC),

        destructive: Color::from_hex(0xFF7B93),
        destructive_hover: Color::from_hex(0xF7677C),
        destructive_active: Color::from_hex(0xEE5464),

        slight_layer: Color::WHITE.with_alpha(0.1),
        overlay: Color::BLACK.with_alpha(0.7),
    }
}
