//! In-Memory Credential Store
//!
//! Ephemeral profile and test double; nothing survives the process.

use std::sync::Mutex;

use crate::domain::repository::CredentialStore;
use crate::domain::value_object::credential::Credential;
use crate::error::SessionResult;

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the stored credential (rehydration tests).
    pub fn seeded(credential: Credential) -> Self {
        Self {
            slot: Mutex::new(Some(credential)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> SessionResult<Option<Credential>> {
        Ok(self.slot.lock().expect("credential slot lock poisoned").clone())
    }

    async fn store(&self, credential: &Credential) -> SessionResult<()> {
        *self.slot.lock().expect("credential slot lock poisoned") = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> SessionResult<()> {
        *self.slot.lock().expect("credential slot lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip_and_clear() {
        let store = MemoryCredentialStore::new();
        assert!(store.load().await.unwrap().is_none());

        store.store(&Credential::new("tok")).await.unwrap();
        assert_eq!(store.load().await.unwrap().unwrap().as_str(), "tok");

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
