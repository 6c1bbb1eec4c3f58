//! File-Backed Credential Store
//!
//! One file under the client data directory holding the raw credential
//! string; the durable analog of the web client's single localStorage
//! key. Nothing else is ever written here.

use std::path::{Path, PathBuf};

use crate::domain::repository::CredentialStore;
use crate::domain::value_object::credential::Credential;
use crate::error::SessionResult;

/// File name of the single durable credential entry.
pub const CREDENTIAL_FILE: &str = "token";

#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store rooted at the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(CREDENTIAL_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> SessionResult<Option<Credential>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Credential::new(raw)))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, credential: &Credential) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, credential.as_str()).await?;
        Ok(())
    }

    async fn clear(&self) -> SessionResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
