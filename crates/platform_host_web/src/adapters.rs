use platform_host::{MemoryPrefsStore, PrefsError, PrefsStore, PrefsStoreFuture};

use crate::WebPrefsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// `localStorage`-backed preferences that survive reloads.
    Browser,
    /// In-memory preferences that reset on every reload (kiosk/demo builds).
    Ephemeral,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "ephemeral-prefs")]
    {
        HostStrategy::Ephemeral
    }

    #[cfg(not(feature = "ephemeral-prefs"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Ephemeral => "ephemeral",
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage`.
    Browser(WebPrefsStore),
    /// Process-lifetime memory map.
    Ephemeral(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Ephemeral(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Ephemeral(store) => store.save_pref(key, raw_json),
        }
    }
}

/// Builds the preference store for the selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Ephemeral => PrefsStoreAdapter::Ephemeral(MemoryPrefsStore::default()),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn default_build_selects_browser_strategy() {
        #[cfg(not(feature = "ephemeral-prefs"))]
        {
            assert_eq!(selected_host_strategy(), HostStrategy::Browser);
            assert_eq!(host_strategy_name(), "browser");
        }
    }

    #[test]
    fn ephemeral_adapter_forwards_to_memory_store() {
        let adapter = PrefsStoreAdapter::Ephemeral(MemoryPrefsStore::default());
        block_on(adapter.save_pref("k", "true")).expect("save");
        assert_eq!(
            block_on(adapter.load_pref("k")).expect("load"),
            Some("true".to_string())
        );
    }

    #[test]
    fn browser_adapter_is_inert_off_wasm() {
        let adapter = PrefsStoreAdapter::Browser(WebPrefsStore);
        block_on(adapter.save_pref("k", "true")).expect("save");
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(block_on(adapter.load_pref("k")).expect("load"), None);
    }
}
