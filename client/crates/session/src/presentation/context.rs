//! Session Context
//!
//! Read-side handle over the session store's published state. Cheap to
//! clone; every clone observes the same snapshots at a given instant
//! and is notified when the session transitions, so route guarding
//! reacts to login/logout without polling.

use tokio::sync::watch;

use crate::domain::entity::session::Session;
use crate::domain::value_object::role::Role;

#[derive(Debug, Clone)]
pub struct SessionContext {
    state: watch::Receiver<Session>,
}

impl SessionContext {
    pub(crate) fn new(state: watch::Receiver<Session>) -> Self {
        Self { state }
    }

    /// Current session snapshot. Reflects every completed mutation;
    /// intermediate states are never published.
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Role of the current user, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.state.borrow().role()
    }

    /// Wait until the session transitions again.
    ///
    /// Errors only when the owning store has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.state.changed().await
    }
}
