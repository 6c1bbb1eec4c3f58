//! Repository Traits
//!
//! Seams between the session core and its collaborators: the backend
//! auth surface (with the adapter credential slot) and the durable
//! credential entry. Implementations live in the infrastructure layer;
//! tests substitute fakes.

use crate::domain::entity::user::User;
use crate::domain::value_object::{credential::Credential, role::Role};
use crate::error::SessionResult;

/// Grant returned by the backend login endpoint.
#[derive(Debug, Clone)]
pub struct LoginGrant {
    pub credential: Credential,
    /// Role hint from the login response. The authoritative role is the
    /// one on the re-fetched user record.
    pub role_hint: Role,
}

/// Registration data forwarded to the backend.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: Role,
}

/// Backend auth surface plus the adapter credential slot.
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Exchange username/password for a bearer grant.
    async fn login(&self, username: &str, password: &str) -> SessionResult<LoginGrant>;

    /// Create an account. The response body is not consumed.
    async fn register(&self, registration: &Registration) -> SessionResult<()>;

    /// Fetch the current user with the installed credential.
    async fn current_user(&self) -> SessionResult<User>;

    /// Install or remove the credential attached to every outgoing
    /// request. Mutated only by the session store.
    fn install_credential(&self, credential: Option<&Credential>);
}

/// Durable storage for the single well-known credential entry.
///
/// Nothing else is persisted: user and role are always re-fetched.
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Read the stored credential, if any.
    async fn load(&self) -> SessionResult<Option<Credential>>;

    /// Persist the credential, replacing any previous value.
    async fn store(&self, credential: &Credential) -> SessionResult<()>;

    /// Remove the stored credential. A missing entry is not an error.
    async fn clear(&self) -> SessionResult<()>;
}
