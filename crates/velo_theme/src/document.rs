//! Rendering environment abstraction
//!
//! A [`Document`] owns the single document-level theme marker and reports
//! the computed value of custom properties. Only the resolver writes the
//! marker; everything else reads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::preference::ColorScheme;
use crate::stylesheet::{active_scheme, Stylesheet};
use crate::system::SystemSchemeSource;

/// The styled document the theme is applied to
pub trait Document: Send + Sync {
    /// Current marker value, `None` when the attribute is absent
    fn theme_marker(&self) -> Option<ColorScheme>;

    /// Write or remove the marker attribute
    fn set_theme_marker(&self, marker: Option<ColorScheme>);

    /// Computed value of a custom property such as `--primary`
    ///
    /// `None` when the document has not been styled yet or the property is
    /// unknown.
    fn computed_property(&self, name: &str) -> Option<String>;
}

/// A document with no rendering behind it
///
/// Marker writes are dropped and every style read is unavailable, which is
/// what server-side and test contexts without a painted tree observe.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedDocument;

impl Document for DetachedDocument {
    fn theme_marker(&self) -> Option<ColorScheme> {
        None
    }

    fn set_theme_marker(&self, _marker: Option<ColorScheme>) {}

    fn computed_property(&self, _name: &str) -> Option<String> {
        None
    }
}

/// In-memory document that applies its stylesheet on [`HeadlessDocument::paint`]
///
/// Marker writes take effect immediately on the attribute, but computed
/// values only change when the host paints. A read issued between a theme
/// change and the next paint sees the previous values.
pub struct HeadlessDocument {
    stylesheet: Stylesheet,
    system: Arc<dyn SystemSchemeSource>,
    marker: RwLock<Option<ColorScheme>>,
    computed: RwLock<FxHashMap<String, String>>,
    marker_writes: AtomicUsize,
    paints: AtomicUsize,
}

impl HeadlessDocument {
    pub fn new(stylesheet: Stylesheet, system: Arc<dyn SystemSchemeSource>) -> Self {
        Self {
            stylesheet,
            system,
            marker: RwLock::new(None),
            computed: RwLock::new(FxHashMap::default()),
            marker_writes: AtomicUsize::new(0),
            paints: AtomicUsize::new(0),
        }
    }

    /// Run the style cascade and publish the resulting custom properties
    pub fn paint(&self) -> ColorScheme {
        let scheme = active_scheme(self.theme_marker(), self.system.prefers_dark());
        let values: FxHashMap<String, String> =
            self.stylesheet.custom_properties(scheme).into_iter().collect();

        *self.computed.write().unwrap_or_else(PoisonError::into_inner) = values;
        self.paints.fetch_add(1, Ordering::SeqCst);
        tracing::trace!("painted document with {scheme} scheme");
        scheme
    }

    /// Attribute value by name; only the marker attribute is modelled
    pub fn attribute(&self, name: &str) -> Option<String> {
        if name != self.stylesheet.marker_attribute() {
            return None;
        }
        self.theme_marker().map(|scheme| scheme.as_str().to_string())
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Number of marker writes that changed the attribute
    pub fn marker_writes(&self) -> usize {
        self.marker_writes.load(Ordering::SeqCst)
    }

    pub fn paint_count(&self) -> usize {
        self.paints.load(Ordering::SeqCst)
    }
}

impl Document for HeadlessDocument {
    fn theme_marker(&self) -> Option<ColorScheme> {
        *self.marker.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_theme_marker(&self, marker: Option<ColorScheme>) {
        let mut current = self.marker.write().unwrap_or_else(PoisonError::into_inner);
        if *current != marker {
            *current = marker;
            self.marker_writes.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn computed_property(&self, name: &str) -> Option<String> {
        self.computed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

impl std::fmt::Debug for HeadlessDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessDocument")
            .field("marker", &self.theme_marker())
            .field("paints", &self.paint_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::ManualSchemeSource;

    #[test]
    fn test_values_appear_only_after_paint() {
        let system = Arc::new(ManualSchemeSource::new(false));
        let doc = HeadlessDocument::new(Stylesheet::default(), system);

        assert_eq!(doc.computed_property("--primary"), None);
        doc.paint();
        assert_eq!(doc.computed_property("--primary").as_deref(), Some("#009688"));
    }

    #[test]
    fn test_marker_write_is_idempotent() {
        let system = Arc::new(ManualSchemeSource::new(false));
        let doc = HeadlessDocument::new(Stylesheet::default(), system);

        doc.set_theme_marker(Some(ColorScheme::Dark));
        doc.set_theme_marker(Some(ColorScheme::Dark));

        assert_eq!(doc.marker_writes(), 1);
        assert_eq!(doc.attribute("data-theme").as_deref(), Some("dark"));
        assert_eq!(doc.attribute("class"), None);
    }

    #[test]
    fn test_media_rule_follows_system_without_marker() {
        let system = Arc::new(ManualSchemeSource::new(true));
        let doc = HeadlessDocument::new(Stylesheet::default(), system.clone());

        assert_eq!(doc.paint(), ColorScheme::Dark);
        system.set_prefers_dark(false);
        assert_eq!(doc.paint(), ColorScheme::Light);
    }
}
