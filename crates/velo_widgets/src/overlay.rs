//! Interaction overlays derived from a live color

use velo_paint::parse_color;
use velo_theme::derive_color;

/// Pointer interaction that tints a transparent control
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Interaction {
    Hover,
    Active,
}

impl Interaction {
    /// Overlay opacity; dark surfaces need a stronger tint
    pub fn alpha(self, is_dark_theme: bool) -> f32 {
        match (self, is_dark_theme) {
            (Interaction::Hover, false) => 0.1,
            (Interaction::Hover, true) => 0.3,
            (Interaction::Active, false) => 0.2,
            (Interaction::Active, true) => 0.4,
        }
    }
}

/// Translucent background for `interaction` over `color`
///
/// `color` is usually a live value; while it is still a `var(...)` reference
/// it is returned unchanged. Values that are neither are kept as is.
pub fn interaction_overlay(color: &str, interaction: Interaction, is_dark_theme: bool) -> String {
    derive_color(color, |value| match parse_color(value) {
        Ok(parsed) => parsed.rgba(interaction.alpha(is_dark_theme)).to_css(),
        Err(err) => {
            tracing::warn!("cannot derive {interaction:?} overlay from {value:?}: {err}");
            value.to_string()
        }
    })
}
