//! System color scheme signal
//!
//! The operating environment exposes a "prefers dark color scheme" boolean
//! that can change at any time. [`SystemSchemeSource`] is the
//! subscribe/unsubscribe pair the resolver consumes; hosts bind it to the
//! browser media query or a native settings watcher.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use crate::preference::ColorScheme;

/// Callback receiving the new "prefers dark" value
pub type SchemeListener = Arc<dyn Fn(bool) + Send + Sync>;

/// Handle returned by [`SystemSchemeSource::subscribe`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SubscriptionId(u64);

/// The "prefers dark color scheme" signal
pub trait SystemSchemeSource: Send + Sync {
    /// Current value of the signal
    fn prefers_dark(&self) -> bool;

    /// Register a listener called on every change
    fn subscribe(&self, listener: SchemeListener) -> SubscriptionId;

    /// Remove a listener; unknown ids are ignored
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Detect the system color scheme from the process environment
///
/// `VELO_COLOR_SCHEME=dark|light` wins; otherwise a GTK theme name with a
/// dark variant (`Adwaita:dark`, `Yaru-dark`) selects dark. Anything else
/// falls back to light.
pub fn detect_system_color_scheme() -> ColorScheme {
    if let Ok(value) = std::env::var("VELO_COLOR_SCHEME") {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => return ColorScheme::Dark,
            "light" => return ColorScheme::Light,
            other => tracing::warn!("ignoring VELO_COLOR_SCHEME={other:?}"),
        }
    }

    if let Ok(gtk) = std::env::var("GTK_THEME") {
        let gtk = gtk.to_ascii_lowercase();
        if gtk.ends_with(":dark") || gtk.ends_with("-dark") {
            tracing::trace!("GTK_THEME={gtk} selects dark scheme");
            return ColorScheme::Dark;
        }
    }

    ColorScheme::Light
}

/// In-process scheme source driven by [`ManualSchemeSource::set_prefers_dark`]
///
/// Used by headless hosts, by tests to simulate the system signal, and by
/// native shells that poll their own settings.
#[derive(Default)]
pub struct ManualSchemeSource {
    prefers_dark: AtomicBool,
    next_id: AtomicU64,
    listeners: Mutex<FxHashMap<u64, SchemeListener>>,
}

impl ManualSchemeSource {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: AtomicBool::new(prefers_dark),
            ..Default::default()
        }
    }

    /// Seed the signal from [`detect_system_color_scheme`]
    pub fn from_environment() -> Self {
        Self::new(detect_system_color_scheme().is_dark())
    }

    /// Change the signal, notifying listeners if the value changed
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let previous = self.prefers_dark.swap(prefers_dark, Ordering::SeqCst);
        if previous == prefers_dark {
            return;
        }

        tracing::trace!("system color scheme changed: prefers_dark={prefers_dark}");

        // Snapshot so listeners may (un)subscribe while being notified
        let listeners: Vec<SchemeListener> = self.listeners().values().cloned().collect();
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    fn listeners(&self) -> MutexGuard<'_, FxHashMap<u64, SchemeListener>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SystemSchemeSource for ManualSchemeSource {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::SeqCst)
    }

    fn subscribe(&self, listener: SchemeListener) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners().insert(id, listener);
        SubscriptionId(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners().remove(&id.0);
    }
}

impl std::fmt::Debug for ManualSchemeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualSchemeSource")
            .field("prefers_dark", &self.prefers_dark())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
