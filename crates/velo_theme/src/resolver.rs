//! Theme resolver
//!
//! Single source of truth for the theme preference. The effective dark flag
//! is never stored; it is recomputed from two inputs on every read:
//!
//! - `preference`: explicit user/API state, changed by `set_theme`/`toggle`
//! - `system_prefers_dark`: the external signal, changed by the listener
//!
//! Descendants reach the resolver either through an explicitly passed
//! [`ThemeHandle`] or through [`use_theme`] inside an entered scope.
//!
//! ```rust
//! use std::sync::Arc;
//! use velo_theme::{DetachedDocument, ManualSchemeSource, ThemePreference, ThemeResolver};
//!
//! let system = Arc::new(ManualSchemeSource::new(true));
//! let resolver = ThemeResolver::mount(
//!     ThemePreference::Default,
//!     system.clone(),
//!     Arc::new(DetachedDocument),
//! );
//! assert!(resolver.is_dark_theme());
//!
//! resolver.toggle();
//! assert_eq!(resolver.theme(), ThemePreference::Light);
//! ```

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use tracing::{debug, trace};

use crate::document::Document;
use crate::error::{Result, ThemeError};
use crate::preference::{ColorScheme, ThemePreference};
use crate::system::{SubscriptionId, SystemSchemeSource};

/// Read surface exposed to descendants
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct ThemeContext {
    pub theme: ThemePreference,
    pub is_dark_theme: bool,
}

impl ThemeContext {
    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark_flag(self.is_dark_theme)
    }
}

/// Callback invoked with the new context after every change
pub type ChangeCallback = Arc<dyn Fn(ThemeContext) + Send + Sync>;

struct ResolverState {
    preference: RwLock<ThemePreference>,
    system_prefers_dark: AtomicBool,
    document: Arc<dyn Document>,
    observers: RwLock<Vec<ChangeCallback>>,
}

impl ResolverState {
    fn preference(&self) -> ThemePreference {
        *self.preference.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn context(&self) -> ThemeContext {
        let theme = self.preference();
        ThemeContext {
            theme,
            is_dark_theme: theme.is_dark(self.system_prefers_dark.load(Ordering::SeqCst)),
        }
    }

    fn set_theme(&self, preference: ThemePreference) {
        let mut current = self.preference.write().unwrap_or_else(PoisonError::into_inner);
        let changed = *current != preference;
        if changed {
            debug!("ThemeResolver::set_theme - switching from {} to {}", *current, preference);
            *current = preference;
        } else {
            trace!("set_theme({preference}) - unchanged");
        }
        drop(current);

        // Written on every call: another resolver may have replaced the marker.
        // Default leaves the choice to the stylesheet's media rule.
        self.document.set_theme_marker(preference.explicit_scheme());
        if changed {
            self.notify();
        }
    }

    fn toggle(&self) {
        if self.context().is_dark_theme {
            self.set_theme(ThemePreference::Light);
        } else {
            self.set_theme(ThemePreference::Dark);
        }
    }

    fn apply_system_signal(&self, prefers_dark: bool) {
        let before = self.context();
        self.system_prefers_dark.store(prefers_dark, Ordering::SeqCst);
        let after = self.context();
        trace!("system signal prefers_dark={prefers_dark}, is_dark_theme={}", after.is_dark_theme);

        if before != after {
            self.notify();
        }
    }

    fn notify(&self) {
        let context = self.context();
        let observers: Vec<ChangeCallback> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer(context);
        }
    }
}

/// Cloneable handle to a mounted resolver's state
///
/// Handles stay valid after the resolver unmounts, but no longer receive
/// system signal updates.
#[derive(Clone)]
pub struct ThemeHandle {
    state: Arc<ResolverState>,
}

impl ThemeHandle {
    pub fn theme(&self) -> ThemePreference {
        self.state.preference()
    }

    pub fn is_dark_theme(&self) -> bool {
        self.state.context().is_dark_theme
    }

    pub fn context(&self) -> ThemeContext {
        self.state.context()
    }

    /// Set the preference; writes or clears the document marker
    pub fn set_theme(&self, preference: ThemePreference) {
        self.state.set_theme(preference);
    }

    /// String entry point; anything but `light`/`dark`/`default` is rejected
    /// and leaves the state untouched
    pub fn set_theme_str(&self, value: &str) -> Result<()> {
        let preference = value.parse::<ThemePreference>()?;
        self.state.set_theme(preference);
        Ok(())
    }

    /// Flip the effective mode, committing to an explicit preference
    pub fn toggle(&self) {
        self.state.toggle();
    }

    /// Observe changes of the preference or the effective dark flag
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(ThemeContext) + Send + Sync + 'static,
    {
        self.state
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(callback));
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.state.document
    }

    /// Whether both handles point at the same resolver
    pub fn same_resolver(&self, other: &ThemeHandle) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("context", &self.context())
            .finish()
    }
}

/// Mounted theme resolver
///
/// Subscribes to the system signal on [`ThemeResolver::mount`] and
/// unsubscribes when dropped or [`ThemeResolver::unmount`]ed.
pub struct ThemeResolver {
    handle: ThemeHandle,
    source: Arc<dyn SystemSchemeSource>,
    subscription: Option<SubscriptionId>,
}

impl ThemeResolver {
    /// Mount with an initial preference
    ///
    /// The document marker is written right away: an explicit preference
    /// sets it and `Default` removes whatever a previous owner left behind.
    pub fn mount(
        initial: ThemePreference,
        source: Arc<dyn SystemSchemeSource>,
        document: Arc<dyn Document>,
    ) -> Self {
        let state = Arc::new(ResolverState {
            preference: RwLock::new(initial),
            system_prefers_dark: AtomicBool::new(source.prefers_dark()),
            document,
            observers: RwLock::new(Vec::new()),
        });

        state.document.set_theme_marker(initial.explicit_scheme());

        let weak: Weak<ResolverState> = Arc::downgrade(&state);
        let subscription = source.subscribe(Arc::new(move |prefers_dark| {
            if let Some(state) = weak.upgrade() {
                state.apply_system_signal(prefers_dark);
            }
        }));

        debug!(
            "ThemeResolver mounted: theme={}, system_prefers_dark={}",
            initial,
            source.prefers_dark()
        );

        Self {
            handle: ThemeHandle { state },
            source,
            subscription: Some(subscription),
        }
    }

    pub fn handle(&self) -> ThemeHandle {
        self.handle.clone()
    }

    /// Make this resolver the current theme context of the calling thread
    /// until the returned guard drops
    pub fn enter(&self) -> ThemeScope {
        ThemeScope::push(self.handle.clone())
    }

    /// Deregister the system listener and drop the resolver
    pub fn unmount(self) {}

    pub fn theme(&self) -> ThemePreference {
        self.handle.theme()
    }

    pub fn is_dark_theme(&self) -> bool {
        self.handle.is_dark_theme()
    }

    pub fn context(&self) -> ThemeContext {
        self.handle.context()
    }

    pub fn set_theme(&self, preference: ThemePreference) {
        self.handle.set_theme(preference);
    }

    pub fn set_theme_str(&self, value: &str) -> Result<()> {
        self.handle.set_theme_str(value)
    }

    pub fn toggle(&self) {
        self.handle.toggle();
    }

    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(ThemeContext) + Send + Sync + 'static,
    {
        self.handle.on_change(callback);
    }
}

impl Drop for ThemeResolver {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
            debug!("ThemeResolver unmounted");
        }
    }
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("context", &self.context())
            .field("subscribed", &self.subscription.is_some())
            .finish()
    }
}

thread_local! {
    static SCOPES: RefCell<Vec<(u64, ThemeHandle)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Guard returned by [`ThemeResolver::enter`]
///
/// Scopes nest; the innermost live one answers [`use_theme`]. Dropping a
/// guard removes only its own entry, whatever the drop order. Not `Send`: a
/// scope belongs to the thread that entered it.
#[must_use = "the scope ends when the guard is dropped"]
pub struct ThemeScope {
    id: u64,
    _not_send: PhantomData<*const ()>,
}

impl ThemeScope {
    fn push(handle: ThemeHandle) -> Self {
        let id = NEXT_SCOPE_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        SCOPES.with(|scopes| scopes.borrow_mut().push((id, handle)));
        Self {
            id,
            _not_send: PhantomData,
        }
    }
}

impl Drop for ThemeScope {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            if let Some(index) = scopes.iter().rposition(|(id, _)| *id == self.id) {
                scopes.remove(index);
            }
        });
    }
}

impl std::fmt::Debug for ThemeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeScope").field("id", &self.id).finish()
    }
}

/// Theme handle of the innermost entered scope
///
/// Fails with [`ThemeError::MissingThemeContext`] outside any scope.
pub fn use_theme() -> Result<ThemeHandle> {
    SCOPES
        .with(|scopes| scopes.borrow().last().map(|(_, handle)| handle.clone()))
        .ok_or(ThemeError::MissingThemeContext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DetachedDocument;
    use crate::system::ManualSchemeSource;

    fn mount(initial: ThemePreference, prefers_dark: bool) -> (ThemeResolver, Arc<ManualSchemeSource>) {
        let system = Arc::new(ManualSchemeSource::new(prefers_dark));
        let resolver = ThemeResolver::mount(initial, system.clone(), Arc::new(DetachedDocument));
        (resolver, system)
    }

    #[test]
    fn test_default_tracks_system_signal() {
        let (resolver, system) = mount(ThemePreference::Default, false);
        assert!(!resolver.is_dark_theme());

        system.set_prefers_dark(true);
        assert!(resolver.is_dark_theme());

        system.set_prefers_dark(false);
        assert!(!resolver.is_dark_theme());
    }

    #[test]
    fn test_system_signal_never_overwrites_explicit_preference() {
        let (resolver, system) = mount(ThemePreference::Light, false);

        system.set_prefers_dark(true);
        assert_eq!(resolver.theme(), ThemePreference::Light);
        assert!(!resolver.is_dark_theme());
    }

    #[test]
    fn test_toggle_from_default_commits_explicit_preference() {
        let (resolver, _system) = mount(ThemePreference::Default, true);

        resolver.toggle();
        assert_eq!(resolver.theme(), ThemePreference::Light);
        assert!(!resolver.is_dark_theme());

        resolver.toggle();
        assert_eq!(resolver.theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_invalid_string_leaves_state_untouched() {
        let (resolver, _system) = mount(ThemePreference::Dark, false);

        let err = resolver.set_theme_str("sepia").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidThemeValue(ref v) if v == "sepia"));
        assert_eq!(resolver.theme(), ThemePreference::Dark);

        resolver.set_theme_str("light").unwrap();
        assert_eq!(resolver.theme(), ThemePreference::Light);
    }

    #[test]
    fn test_use_theme_outside_scope_fails() {
        assert!(matches!(use_theme(), Err(ThemeError::MissingThemeContext)));
    }

    #[test]
    fn test_nested_scopes_answer_innermost() {
        let (outer, _a) = mount(ThemePreference::Light, false);
        let (inner, _b) = mount(ThemePreference::Dark, false);

        let _outer_scope = outer.enter();
        {
            let _inner_scope = inner.enter();
            assert!(use_theme().unwrap().same_resolver(&inner.handle()));
        }
        assert!(use_theme().unwrap().same_resolver(&outer.handle()));
    }

    #[test]
    fn test_out_of_order_scope_drop_keeps_live_scope() {
        let (outer, _a) = mount(ThemePreference::Light, false);
        let (inner, _b) = mount(ThemePreference::Dark, false);

        let outer_scope = outer.enter();
        let inner_scope = inner.enter();
        drop(outer_scope);
        assert!(use_theme().unwrap().same_resolver(&inner.handle()));

        drop(inner_scope);
        assert!(matches!(use_theme(), Err(ThemeError::MissingThemeContext)));
    }
}
