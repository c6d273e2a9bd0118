//! Light/dark toggle button

use velo_theme::{token_reference, ColorToken, LiveColor, ThemeHandle};

use crate::overlay::{interaction_overlay, Interaction};
use crate::watch::ThemeWatch;

/// Resolved toggle button declarations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleThemeStyle {
    pub color: String,
    pub hover_background: String,
    pub active_background: String,
    /// The icon strip is turned half a revolution in light mode
    pub rotation_deg: u16,
    pub moon_visible: bool,
    pub sun_visible: bool,
    /// Off for the first frame so the initial state does not animate in
    pub transitions: bool,
}

/// Round button flipping the effective theme on click
///
/// Follows every theme change made through its resolver, so the icon color
/// tracks system signal flips as well as clicks.
#[derive(Debug)]
pub struct ToggleThemeButton {
    theme: ThemeHandle,
    color: LiveColor,
    watch: ThemeWatch,
    rendered: bool,
}

fn icon_token(is_dark_theme: bool) -> ColorToken {
    if is_dark_theme {
        ColorToken::Accent9
    } else {
        ColorToken::Accent8
    }
}

impl ToggleThemeButton {
    pub fn new(theme: ThemeHandle) -> Self {
        let reference = token_reference(icon_token(theme.is_dark_theme()));
        let color = LiveColor::new(&**theme.document(), reference);
        let watch = ThemeWatch::register(&theme);
        Self {
            theme,
            color,
            watch,
            rendered: false,
        }
    }

    /// Toggle the theme and schedule a re-read of the icon color
    pub fn click(&mut self) {
        self.theme.toggle();
        self.on_theme_change();
    }

    pub fn on_theme_change(&mut self) {
        self.color
            .set_reference(token_reference(icon_token(self.theme.is_dark_theme())));
        self.color.invalidate();
    }

    /// Deferred work after a paint; returns whether the style changed
    pub fn tick(&mut self) -> bool {
        if self.watch.take() {
            self.on_theme_change();
        }
        let first_frame = !self.rendered;
        self.rendered = true;
        let recolored = self.color.tick(&**self.theme.document());
        first_frame || recolored
    }

    pub fn style(&self) -> ToggleThemeStyle {
        let is_dark = self.theme.is_dark_theme();
        let color = self.color.value();
        ToggleThemeStyle {
            color: color.to_string(),
            hover_background: interaction_overlay(color, Interaction::Hover, is_dark),
            active_background: interaction_overlay(color, Interaction::Active, is_dark),
            rotation_deg: if is_dark { 0 } else { 180 },
            moon_visible: is_dark,
            sun_visible: !is_dark,
            transitions: self.rendered,
        }
    }
}
