//! Typed host-domain contracts and shared models used by the desktop runtime and browser adapters.
//!
//! This crate stays free of browser bindings. It exposes the preference-store contract the shell
//! persists through, the file-registry record model the desktop icon layer references, and the
//! viewport model the window manager clamps against. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod files;
pub mod storage;
pub mod viewport;

pub use files::{FileKind, FileRecord};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, PrefsError, PrefsStore,
    PrefsStoreFuture,
};
pub use viewport::Viewport;
