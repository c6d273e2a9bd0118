//! Theme toggle walkthrough
//!
//! Mounts a resolver on a headless document, flips the theme a few times and
//! prints what a renderer would apply after each paint.
//!
//! Run with: cargo run -p velo_widgets --example theme_toggle
//! Set `RUST_LOG=velo_theme=trace` to watch resolver activity, and
//! `VELO_COLOR_SCHEME=dark` to start from a dark system scheme.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use velo_theme::{
    resolve_live_value, token_reference, use_theme, ColorToken, HeadlessDocument,
    ManualSchemeSource, SystemSchemeSource, ThemeConfig, ThemeResolver,
};
use velo_widgets::{Button, ButtonConfig, ButtonKind, ButtonVariant, ToggleThemeButton};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ThemeConfig::load_from_path(&PathBuf::from(&path))
            .with_context(|| format!("loading theme config from {path}"))?,
        None => ThemeConfig::default(),
    };

    let system = Arc::new(ManualSchemeSource::from_environment());
    let document = Arc::new(HeadlessDocument::new(config.stylesheet()?, system.clone()));
    let resolver = ThemeResolver::mount(config.initial_theme, system.clone(), document.clone());
    let _scope = resolver.enter();

    let theme = use_theme()?;
    let mut toggle = ToggleThemeButton::new(theme.clone());
    let mut ghost = Button::new(
        ButtonConfig::new("Cancel")
            .kind(ButtonKind::Secondary)
            .variant(ButtonVariant::Ghost),
        theme.clone(),
    );

    frame("mounted", &document, &mut toggle, &mut ghost);

    toggle.click();
    frame("after toggle", &document, &mut toggle, &mut ghost);

    system.set_prefers_dark(!system.prefers_dark());
    frame("system scheme flipped", &document, &mut toggle, &mut ghost);

    theme.set_theme_str("default")?;
    frame("following system", &document, &mut toggle, &mut ghost);

    println!();
    print!("{}", document.stylesheet().to_css());
    Ok(())
}

/// Paint, run the deferred reads and print the resulting styles
fn frame(
    label: &str,
    document: &HeadlessDocument,
    toggle: &mut ToggleThemeButton,
    ghost: &mut Button,
) {
    let scheme = document.paint();
    toggle.tick();
    ghost.tick();

    let primary = token_reference(ColorToken::Primary);
    println!("== {label}: scheme={scheme}");
    println!("   {primary} = {}", resolve_live_value(document, &primary));
    println!("   toggle: {:?}", toggle.style());
    print!("{}", ghost.style().to_css("   .ghost"));
}
