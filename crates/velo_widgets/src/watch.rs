//! Theme change flag shared with the resolver

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use velo_theme::ThemeHandle;

/// Set by the resolver on every theme change, consumed on the widget's tick
///
/// The observer holds only a weak reference, so a dropped widget leaves a
/// no-op callback behind.
#[derive(Debug)]
pub(crate) struct ThemeWatch {
    changed: Arc<AtomicBool>,
}

impl ThemeWatch {
    pub(crate) fn register(theme: &ThemeHandle) -> Self {
        let changed = Arc::new(AtomicBool::new(false));
        let weak: Weak<AtomicBool> = Arc::downgrade(&changed);
        theme.on_change(move |_| {
            if let Some(flag) = weak.upgrade() {
                flag.store(true, Ordering::SeqCst);
            }
        });
        Self { changed }
    }

    /// Whether a change arrived since the last call
    pub(crate) fn take(&self) -> bool {
        self.changed.swap(false, Ordering::SeqCst)
    }
}
