//! Color token accessor
//!
//! Components embed [`token_reference`] strings directly into their styles,
//! so theme switches are resolved by the stylesheet at paint time. The live
//! read functions exist for the few places that need a concrete value for
//! color math (hover and active overlays), and are best effort: the value
//! may be missing or stale until the document has painted after a change.

use crate::document::Document;
use crate::tokens::ColorToken;

/// Style reference for a token, e.g. `var(--primary)`
pub fn token_reference(token: ColorToken) -> String {
    format!("var({})", token.custom_property())
}

/// Whether `value` is a `var(...)` reference rather than a concrete color
pub fn is_token_reference(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("var(") && value.ends_with(')')
}

/// Custom property name inside a reference
///
/// `var(--primary)` and `var(--primary, #000)` both yield `--primary`; a bare
/// `--primary` is accepted as is.
pub fn custom_property_name(reference: &str) -> Option<&str> {
    let reference = reference.trim();
    let name = match reference
        .strip_prefix("var(")
        .and_then(|inner| inner.strip_suffix(')'))
    {
        Some(inner) => inner.split(',').next().unwrap_or_default().trim(),
        None => reference,
    };

    (name.len() > 2 && name.starts_with("--")).then_some(name)
}

/// Result of a live style read
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiveValue {
    /// The document has no value yet (not painted, detached, unknown name)
    Pending,
    Ready(String),
}

impl LiveValue {
    pub fn is_ready(&self) -> bool {
        matches!(self, LiveValue::Ready(_))
    }

    /// The value, or an empty string while pending
    pub fn into_string(self) -> String {
        match self {
            LiveValue::Ready(value) => value,
            LiveValue::Pending => String::new(),
        }
    }
}

/// Read the current computed value behind a reference
pub fn query_live_value(document: &dyn Document, reference: &str) -> LiveValue {
    let Some(name) = custom_property_name(reference) else {
        tracing::trace!("not a token reference: {reference:?}");
        return LiveValue::Pending;
    };

    match document.computed_property(name) {
        Some(value) if !value.trim().is_empty() => LiveValue::Ready(value.trim().to_string()),
        _ => LiveValue::Pending,
    }
}

/// Read the current computed value behind a reference, `""` when unavailable
///
/// Not ordered with respect to theme changes: call it from a deferred
/// callback after the next paint to observe a new theme.
pub fn resolve_live_value(document: &dyn Document, reference: &str) -> String {
    query_live_value(document, reference).into_string()
}

/// Apply `transform` to a concrete color, passing references through untouched
///
/// A reference's concrete value is unknown when styles are declared, so
/// transforming the reference text would produce a malformed style.
pub fn derive_color<F>(value: &str, transform: F) -> String
where
    F: FnOnce(&str) -> String,
{
    if is_token_reference(value) {
        value.to_string()
    } else {
        transform(value)
    }
}

/// A reference whose concrete value is re-read one tick after each change
///
/// Starts from the live value when available and from the reference text
/// otherwise, so it is always usable in a style declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveColor {
    reference: String,
    value: String,
    stale: bool,
}

impl LiveColor {
    pub fn new(document: &dyn Document, reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let value = match query_live_value(document, &reference) {
            LiveValue::Ready(value) => value,
            LiveValue::Pending => reference.clone(),
        };

        Self {
            reference,
            value,
            stale: true,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Last value read, or the reference text if nothing was read yet
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Mark the value as needing a re-read (theme changed)
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Point at a different reference; the old value stays until the next tick
    pub fn set_reference(&mut self, reference: impl Into<String>) {
        let reference = reference.into();
        if reference != self.reference {
            self.reference = reference;
            self.stale = true;
        }
    }

    /// Deferred read, run on the scheduling tick after a paint
    ///
    /// Adopts the live value only when the document has one. Returns whether
    /// the value changed.
    pub fn tick(&mut self, document: &dyn Document) -> bool {
        if !self.stale {
            return false;
        }
        self.stale = false;

        match query_live_value(document, &self.reference) {
            LiveValue::Ready(value) if value != self.value => {
                tracing::trace!("{} resolved to {}", self.reference, value);
                self.value = value;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DetachedDocument;

    #[test]
    fn test_reference_format() {
        assert_eq!(token_reference(ColorToken::Primary), "var(--primary)");
        assert_eq!(
            token_reference(ColorToken::SecondaryElementText),
            "var(--secondary-element-text)"
        );
    }

    #[test]
    fn test_custom_property_name_forms() {
        assert_eq!(custom_property_name("var(--accent-5)"), Some("--accent-5"));
        assert_eq!(custom_property_name(" var( --overlay , #000 ) "), Some("--overlay"));
        assert_eq!(custom_property_name("--primary"), Some("--primary"));
        assert_eq!(custom_property_name("#ff0000"), None);
        assert_eq!(custom_property_name("var(--)"), None);
    }

    #[test]
    fn test_derive_color_guards_references() {
        let shout = |v: &str| v.to_uppercase();
        assert_eq!(derive_color("var(--primary)", shout), "var(--primary)");
        assert_eq!(derive_color("#ff0000", shout), "#FF0000");
    }

    #[test]
    fn test_detached_document_reads_empty() {
        assert_eq!(resolve_live_value(&DetachedDocument, "var(--primary)"), "");
        assert_eq!(
            query_live_value(&DetachedDocument, "var(--primary)"),
            LiveValue::Pending
        );
    }

    #[test]
    fn test_live_color_falls_back_to_reference() {
        let mut color = LiveColor::new(&DetachedDocument, "var(--accent-8)");
        assert_eq!(color.value(), "var(--accent-8)");
        assert!(!color.tick(&DetachedDocument));
        assert_eq!(color.value(), "var(--accent-8)");
        assert!(!color.is_stale());
    }
}
