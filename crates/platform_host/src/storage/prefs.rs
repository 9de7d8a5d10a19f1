//! Key/value preference storage: JSON text stored per string key.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by preference stores and the typed helpers.
pub enum PrefsError {
    /// The backing store could not be reached (for example, storage disabled by the browser).
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    /// The backing store rejected a write or delete.
    #[error("preference write failed for `{key}`: {message}")]
    Write {
        /// Key being written.
        key: String,
        /// Store-provided failure detail.
        message: String,
    },
    /// A stored value was present but did not decode as the requested type.
    #[error("preference `{key}` is malformed: {message}")]
    Malformed {
        /// Key whose value failed to decode.
        key: String,
        /// Decoder failure detail.
        message: String,
    },
    /// A value could not be encoded to JSON.
    #[error("preference `{key}` could not be encoded: {message}")]
    Encode {
        /// Key being written.
        key: String,
        /// Encoder failure detail.
        message: String,
    },
}

/// Host service for lightweight preference values.
pub trait PrefsStore {
    /// Loads the raw JSON text stored under `key`.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>>;

    /// Stores raw JSON text under `key`, replacing any previous value.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string. Clones share the same map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw JSON text currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Seeds `key` with raw text, bypassing JSON encoding. Useful for corrupt-data fixtures.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async move {
            self.insert_raw(key, raw_json);
            Ok(())
        })
    }
}

/// Loads and decodes a typed value through any [`PrefsStore`].
///
/// # Errors
///
/// Returns [`PrefsError::Malformed`] when a value is stored but does not decode as `T`, or the
/// store's own error when the read fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| PrefsError::Malformed {
            key: key.to_string(),
            message: err.to_string(),
        })
}

/// Encodes and saves a typed value through any [`PrefsStore`].
///
/// # Errors
///
/// Returns [`PrefsError::Encode`] when serialization fails, or the store's own error.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value).map_err(|err| PrefsError::Encode {
        key: key.to_string(),
        message: err.to_string(),
    })?;
    store.save_pref(key, &raw).await
}
