//! Velo Theme System
//!
//! Light/dark theming for the Velo component library.
//!
//! # Overview
//!
//! - **Theme resolver**: owns the `light`/`dark`/`default` preference, follows
//!   the system color scheme signal, and writes the document theme marker
//! - **Color tokens**: a closed set of semantic color keys, embedded into
//!   styles as `var(--key)` references
//! - **Live reads**: best-effort reads of the concrete value behind a
//!   reference, for hover/active color math
//! - **Stylesheet**: the light/dark palettes bound to the document through
//!   custom properties, a media rule and the marker attribute
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use velo_theme::{
//!     resolve_live_value, token_reference, use_theme, ColorToken, HeadlessDocument,
//!     ManualSchemeSource, Stylesheet, ThemePreference, ThemeResolver,
//! };
//!
//! let system = Arc::new(ManualSchemeSource::new(false));
//! let document = Arc::new(HeadlessDocument::new(Stylesheet::default(), system.clone()));
//! let resolver = ThemeResolver::mount(ThemePreference::Default, system, document.clone());
//!
//! let _scope = resolver.enter();
//! let theme = use_theme().unwrap();
//! theme.set_theme(ThemePreference::Dark);
//!
//! // Styles resolve at paint time
//! document.paint();
//! let primary = token_reference(ColorToken::Primary);
//! assert_eq!(resolve_live_value(&*document, &primary), "#73e6db");
//! ```
//!
//! # Consistency
//!
//! A live read issued synchronously after `set_theme` may still observe the
//! previous scheme. Defer the read past the next paint (see [`LiveColor`]).
//! Only one resolver should write a given document's marker; when several
//! are mounted the last write wins.

pub mod accessor;
pub mod config;
pub mod document;
pub mod error;
pub mod palette;
pub mod preference;
pub mod resolver;
pub mod stylesheet;
pub mod system;
pub mod tokens;

// Re-export commonly used types
pub use accessor::{
    custom_property_name, derive_color, is_token_reference, query_live_value,
    resolve_live_value, token_reference, LiveColor, LiveValue,
};
pub use config::{PaletteOverrides, ThemeConfig};
pub use document::{DetachedDocument, Document, HeadlessDocument};
pub use error::{Result, ThemeError};
pub use palette::ThemeBundle;
pub use preference::{ColorScheme, ThemePreference};
pub use resolver::{use_theme, ChangeCallback, ThemeContext, ThemeHandle, ThemeResolver, ThemeScope};
pub use stylesheet::{active_scheme, Stylesheet, DEFAULT_MARKER_ATTRIBUTE};
pub use system::{
    detect_system_color_scheme, ManualSchemeSource, SchemeListener, SubscriptionId,
    SystemSchemeSource,
};
pub use tokens::*;
