//! Infrastructure Layer
//!
//! REST gateway and credential store implementations, plus the
//! production wiring of the session store.

pub mod file_store;
pub mod memory;
pub mod rest;

// Re-exports
pub use file_store::FileCredentialStore;
pub use memory::MemoryCredentialStore;
pub use rest::RestAuthGateway;

use std::sync::Arc;

use platform::http::ApiClient;

use crate::application::config::SessionConfig;
use crate::application::store::SessionStore;

/// Production wiring: REST gateway over the shared HTTP adapter and a
/// file-backed credential store.
pub type ClientSessionStore = SessionStore<RestAuthGateway, FileCredentialStore>;

impl ClientSessionStore {
    pub fn from_config(config: &SessionConfig) -> Self {
        let api = Arc::new(ApiClient::new(&config.base_url));
        Self::new(
            Arc::new(RestAuthGateway::new(api)),
            Arc::new(FileCredentialStore::new(&config.data_dir)),
        )
    }
}
