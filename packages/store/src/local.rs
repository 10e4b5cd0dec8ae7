//! # localStorage preference store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`PrefStore`] implementation used on the
//! **web platform**. It persists the dashboard preferences into the
//! browser's `window.localStorage` via `web-sys`, so they survive reloads
//! and navigation.
//!
//! `LocalStorageStore` is a zero-size struct that looks up the storage
//! handle on every operation; the browser hands out the same underlying
//! store each time, so there is nothing to cache.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to
//! default preferences rather than crashing the view.

use crate::prefs::PrefStore;

/// localStorage-backed PrefStore for the web platform.
#[derive(Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PrefStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
}
