//! Session Store
//!
//! Single source of truth for the session and the only component
//! permitted to mutate it. Every mutator constructs the next session
//! fully and publishes it in one step over a watch channel, so readers
//! never observe a partial update; an operation lock serializes
//! mutators so two in-flight calls never interleave.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, watch};

use crate::domain::entity::session::Session;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthGateway, CredentialStore, Registration};
use crate::domain::value_object::{credential::Credential, role::Role};
use crate::error::{SessionError, SessionResult};
use crate::presentation::context::SessionContext;

/// Registration form input, validated before any network call.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Password confirmation from the form; never sent to the backend.
    pub confirm_password: String,
    pub full_name: Option<String>,
    pub role: Role,
}

impl RegisterInput {
    fn validate(self) -> SessionResult<Registration> {
        if self.username.trim().is_empty() {
            return Err(SessionError::Validation("Username is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(SessionError::Validation("Email is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(SessionError::Validation("Password is required".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(SessionError::Validation(
                "Passwords do not match".to_string(),
            ));
        }

        Ok(Registration {
            username: self.username,
            email: self.email,
            password: self.password,
            full_name: self.full_name,
            role: self.role,
        })
    }
}

/// Session store
///
/// Owns the published session state, the durable credential entry and
/// the adapter credential slot. Exactly one store exists per process;
/// construct it explicitly and hand [`SessionContext`] handles to
/// readers.
pub struct SessionStore<G, S>
where
    G: AuthGateway + Send + Sync,
    S: CredentialStore + Send + Sync,
{
    gateway: Arc<G>,
    credentials: Arc<S>,
    state: watch::Sender<Session>,
    /// Serializes mutators across their suspension points.
    op_lock: Mutex<()>,
    rehydrated: AtomicBool,
}

impl<G, S> SessionStore<G, S>
where
    G: AuthGateway + Send + Sync,
    S: CredentialStore + Send + Sync,
{
    pub fn new(gateway: Arc<G>, credentials: Arc<S>) -> Self {
        let (state, _) = watch::channel(Session::anonymous());
        Self {
            gateway,
            credentials,
            state,
            op_lock: Mutex::new(()),
            rehydrated: AtomicBool::new(false),
        }
    }

    /// Current session snapshot.
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Reader handle for the rest of the application. Cheap to clone;
    /// notified on every session transition.
    pub fn subscribe(&self) -> SessionContext {
        SessionContext::new(self.state.subscribe())
    }

    /// Rehydrate the session from the durable credential, if any.
    ///
    /// Call once at application start, before trusting any route guard
    /// evaluation. Never surfaces an error: every failure (unreadable
    /// storage, unreachable backend, rejected credential) degrades to
    /// anonymous and clears the stale credential from the adapter and
    /// from durable storage. Subsequent calls are no-ops.
    pub async fn initialize(&self) {
        let _guard = self.op_lock.lock().await;
        if self.rehydrated.swap(true, Ordering::SeqCst) {
            return;
        }

        let stored = match self.credentials.load().await {
            Ok(Some(credential)) => credential,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored credential");
                return;
            }
        };

        self.gateway.install_credential(Some(&stored));
        match self.gateway.current_user().await {
            Ok(user) => {
                tracing::info!(username = %user.username, role = %user.role, "Session rehydrated");
                self.publish(stored, user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored credential not usable, degrading to anonymous");
                self.clear_session().await;
            }
        }
    }

    /// Authenticate and establish a session.
    ///
    /// On success the credential is persisted durably, installed on the
    /// adapter and the full session published atomically. On any
    /// failure the session, the adapter slot and durable storage are
    /// left exactly as they were and the error propagates.
    pub async fn login(&self, username: &str, password: &str) -> SessionResult<()> {
        let _guard = self.op_lock.lock().await;
        self.login_locked(username, password).await
    }

    /// Create an account, then establish a session with the same
    /// credentials.
    ///
    /// Validation runs before any network call. A login failure after a
    /// successful registration surfaces the login error; registration
    /// is a backend-owned side effect and is not rolled back.
    pub async fn register(&self, input: RegisterInput) -> SessionResult<()> {
        let registration = input.validate()?;

        let _guard = self.op_lock.lock().await;
        self.gateway.register(&registration).await?;
        tracing::info!(username = %registration.username, role = %registration.role, "User registered");

        self.login_locked(&registration.username, &registration.password)
            .await
    }

    /// Drop the session: clears durable storage, removes the adapter
    /// credential and publishes anonymous. Never contacts the backend
    /// and cannot fail.
    pub async fn logout(&self) {
        let _guard = self.op_lock.lock().await;
        self.clear_session().await;
        tracing::info!("User logged out");
    }

    async fn login_locked(&self, username: &str, password: &str) -> SessionResult<()> {
        let previous = self.current();

        let grant = self.gateway.login(username, password).await?;

        // The user fetch must carry the new credential. Until the whole
        // sequence succeeds the previous adapter state is restorable and
        // nothing is persisted.
        self.gateway.install_credential(Some(&grant.credential));
        let user = match self.gateway.current_user().await {
            Ok(user) => user,
            Err(e) => {
                self.gateway.install_credential(previous.credential());
                return Err(e);
            }
        };

        if let Err(e) = self.credentials.store(&grant.credential).await {
            self.gateway.install_credential(previous.credential());
            return Err(e);
        }

        tracing::info!(
            username = %user.username,
            role = %user.role,
            role_hint = %grant.role_hint,
            "User logged in"
        );
        self.publish(grant.credential, user);
        Ok(())
    }

    async fn clear_session(&self) {
        if let Err(e) = self.credentials.clear().await {
            // Best effort: a leftover entry is re-validated on next start.
            tracing::warn!(error = %e, "Failed to clear stored credential");
        }
        self.gateway.install_credential(None);
        self.state.send_replace(Session::anonymous());
    }

    fn publish(&self, credential: Credential, user: User) {
        self.state.send_replace(Session::authenticated(credential, user));
    }
}
