//! Namespaced, versioned persistence over a key-value backend.
//!
//! Each store document lives under the key `{namespace}_{store_name}` and is
//! wrapped in an [`Envelope`] carrying a version integer. There is no
//! migration logic: loading a document whose version does not match (or that
//! fails to parse) silently yields `None`, and callers fall back to the
//! initial state.
//!
//! The namespace is not ambient state. [`Persistence`] owns the backend and
//! the current namespace together; auth transitions retarget it explicitly.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::kv::KeyValueStore;
use crate::entitlement::PassType;
use crate::error::StorageError;

/// Key suffix of the ecosystem state document.
pub const STATE_STORE_NAME: &str = "echosystem-state";
/// Key suffix of the theme document.
pub const THEME_STORE_NAME: &str = "echosystem-theme";
/// Current version of the ecosystem state document.
pub const STATE_VERSION: u32 = 3;
/// Current version of the theme document.
pub const THEME_VERSION: u32 = 2;

/// Persistence namespace, one per pass tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Guest,
    Account,
    Gamer,
    Flow,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Guest => "guest",
            Namespace::Account => "account",
            Namespace::Gamer => "gamer",
            Namespace::Flow => "flow",
        }
    }

    /// The namespace a pass tier persists under.
    pub fn for_pass(pass: PassType) -> Self {
        match pass {
            PassType::Guest => Namespace::Guest,
            PassType::Account => Namespace::Account,
            PassType::Gamer => Namespace::Gamer,
            PassType::Flow => Namespace::Flow,
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Versioned wrapper around a persisted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub version: u32,
    pub state: T,
}

/// Handle bundling a key-value backend with the active namespace.
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    namespace: Namespace,
}

impl Persistence {
    /// Wrap a backend, starting in the guest namespace.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            namespace: Namespace::Guest,
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Retarget the handle at another namespace. Subsequent loads and
    /// saves address that namespace's documents.
    pub fn set_namespace(&mut self, namespace: Namespace) {
        self.namespace = namespace;
    }

    fn key(&self, store_name: &str) -> String {
        format!("{}_{store_name}", self.namespace.as_str())
    }

    /// Persist `state` under the current namespace with the given version.
    pub fn save<T: Serialize>(
        &mut self,
        store_name: &str,
        version: u32,
        state: &T,
    ) -> Result<(), StorageError> {
        let envelope = Envelope { version, state };
        let json = serde_json::to_string(&envelope).map_err(|err| StorageError::WriteFailed {
            key: self.key(store_name),
            message: err.to_string(),
        })?;
        let key = self.key(store_name);
        self.store.set(&key, &json)
    }

    /// Load a document from the current namespace.
    ///
    /// Returns `None` when the document is absent, unparseable, or carries
    /// a different version -- all three cases fall back to initial state.
    pub fn load<T: DeserializeOwned>(&self, store_name: &str, version: u32) -> Option<T> {
        let raw = self.store.get(&self.key(store_name)).ok()??;
        let envelope: Envelope<T> = serde_json::from_str(&raw).ok()?;
        if envelope.version != version {
            return None;
        }
        Some(envelope.state)
    }

    /// Remove a document from the current namespace.
    pub fn remove(&mut self, store_name: &str) -> Result<(), StorageError> {
        let key = self.key(store_name);
        self.store.remove(&key)
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        value: u32,
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut persist = Persistence::new(Box::new(MemoryStore::new()));
        persist
            .save(STATE_STORE_NAME, STATE_VERSION, &Doc { value: 7 })
            .unwrap();
        let loaded: Option<Doc> = persist.load(STATE_STORE_NAME, STATE_VERSION);
        assert_eq!(loaded, Some(Doc { value: 7 }));
    }

    #[test]
    fn version_mismatch_is_silently_ignored() {
        let mut persist = Persistence::new(Box::new(MemoryStore::new()));
        persist
            .save(STATE_STORE_NAME, 2, &Doc { value: 7 })
            .unwrap();
        let loaded: Option<Doc> = persist.load(STATE_STORE_NAME, STATE_VERSION);
        assert_eq!(loaded, None);
    }

    #[test]
    fn namespaces_are_isolated() {
        let mut persist = Persistence::new(Box::new(MemoryStore::new()));
        persist
            .save(STATE_STORE_NAME, STATE_VERSION, &Doc { value: 1 })
            .unwrap();

        persist.set_namespace(Namespace::Account);
        let loaded: Option<Doc> = persist.load(STATE_STORE_NAME, STATE_VERSION);
        assert_eq!(loaded, None);

        persist
            .save(STATE_STORE_NAME, STATE_VERSION, &Doc { value: 2 })
            .unwrap();
        persist.set_namespace(Namespace::Guest);
        let loaded: Option<Doc> = persist.load(STATE_STORE_NAME, STATE_VERSION);
        assert_eq!(loaded, Some(Doc { value: 1 }));
    }

    #[test]
    fn namespace_follows_pass_tier() {
        assert_eq!(Namespace::for_pass(PassType::Guest), Namespace::Guest);
        assert_eq!(Namespace::for_pass(PassType::Account), Namespace::Account);
        assert_eq!(Namespace::for_pass(PassType::Gamer), Namespace::Gamer);
        assert_eq!(Namespace::for_pass(PassType::Flow), Namespace::Flow);
    }

    #[test]
    fn corrupt_documents_fall_back_to_none() {
        let mut store = MemoryStore::new();
        store.set("guest_echosystem-state", "not json").unwrap();
        let persist = Persistence::new(Box::new(store));
        let loaded: Option<Doc> = persist.load(STATE_STORE_NAME, STATE_VERSION);
        assert_eq!(loaded, None);
    }
}
