//! Velo Widget Library
//!
//! Headless style models for the themed components. Widgets never hold
//! concrete palette colors: their styles carry `var(--token)` references,
//! and only interaction overlays (hover, active) are computed from a live
//! read of the current value.

pub mod button;
pub mod overlay;
pub mod size;
pub mod toggle_theme_button;
mod watch;

pub use button::{
    scheme_for, secondary_variant_scheme, Button, ButtonColorScheme, ButtonConfig, ButtonKind,
    ButtonStyle, ButtonVariant,
};
pub use overlay::{interaction_overlay, Interaction};
pub use size::{safe_px, CssLength, Size, SizeSet};
pub use toggle_theme_button::{ToggleThemeButton, ToggleThemeStyle};
