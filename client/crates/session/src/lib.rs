//! Session & Role-Based Authorization Core
//!
//! Client-side session subsystem for the learning platform: establishes
//! who the current actor is, persists that identity across restarts,
//! and gates role-specific areas of the application.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Session store and its configuration
//! - `infra/` - REST gateway and credential store implementations
//! - `presentation/` - Session context and route guard
//!
//! ## Behavior
//! - One session per process: anonymous → authenticating → authenticated
//! - Only the credential is persisted; user and role are always re-fetched
//! - Readers observe whole-session snapshots, never partial updates
//! - Route decisions: allow, redirect to login, or redirect to the
//!   user's own landing route

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::SessionConfig;
pub use application::store::{RegisterInput, SessionStore};
pub use domain::entity::{session::Session, user::User};
pub use domain::repository::{AuthGateway, CredentialStore, LoginGrant, Registration};
pub use domain::value_object::{credential::Credential, role::Role};
pub use error::{SessionError, SessionResult};
pub use infra::ClientSessionStore;
pub use infra::file_store::FileCredentialStore;
pub use infra::memory::MemoryCredentialStore;
pub use infra::rest::RestAuthGateway;
pub use presentation::context::SessionContext;
pub use presentation::guard::{GuardDecision, RouteRequirement, evaluate, home_route};
