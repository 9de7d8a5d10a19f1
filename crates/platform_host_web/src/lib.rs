//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the shell to `window.localStorage` for preferences, reads the page viewport,
//! and dispatches the process-wide shutdown broadcast. Every browser call is gated on
//! `target_arch = "wasm32"` so the crate still builds and tests on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod broadcast;
pub mod storage;
pub mod viewport;

pub use adapters::{host_strategy_name, prefs_store, selected_host_strategy, PrefsStoreAdapter};
pub use broadcast::{broadcast_shutdown, SHUTDOWN_EVENT_NAME};
pub use storage::local_prefs::WebPrefsStore;
pub use viewport::current_viewport;
