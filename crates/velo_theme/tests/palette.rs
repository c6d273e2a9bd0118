//! Built-in palette and stylesheet checks

use pretty_assertions::assert_eq;
use velo_paint::parse_color;
use velo_theme::{ColorScheme, ColorToken, Stylesheet, ThemeBundle, ThemePreference};

#[test]
fn every_token_has_a_concrete_value_in_both_schemes() {
    let bundle = ThemeBundle::velo();
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let tokens = bundle.for_scheme(scheme);
        for (name, value) in tokens.css_variables() {
            assert!(
                parse_color(&value).is_ok(),
                "{scheme} {name} = {value} is not a concrete color"
            );
        }
        assert_eq!(tokens.css_variables().len(), ColorToken::ALL.len());
    }
}

#[test]
fn primary_differs_between_schemes() {
    let bundle = ThemeBundle::velo();
    assert_ne!(
        bundle.for_scheme(ColorScheme::Light).get(ColorToken::Primary),
        bundle.for_scheme(ColorScheme::Dark).get(ColorToken::Primary)
    );
}

#[test]
fn token_names_round_trip() {
    for token in ColorToken::ALL {
        assert_eq!(token.name().parse::<ColorToken>().unwrap(), token);
        assert_eq!(token.custom_property().parse::<ColorToken>().unwrap(), token);
    }
    assert!("tertiary".parse::<ColorToken>().is_err());
}

#[test]
fn stylesheet_binds_marker_and_media_rule() {
    let css = Stylesheet::default().to_css();

    assert!(css.contains("@media (prefers-color-scheme: dark)"));
    assert!(css.contains("body[data-theme='light']"));
    assert!(css.contains("body[data-theme='dark']"));
    assert!(css.contains("--slight-layer: rgba(255,255,255,0.1);"));
    assert!(css.contains("color: var(--accent-9);"));
}

#[test]
fn preference_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ThemePreference::Default).unwrap(), "\"default\"");
    let dark: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(dark, ThemePreference::Dark);
    assert!(serde_json::from_str::<ThemePreference>("\"Dark\"").is_err());
}
