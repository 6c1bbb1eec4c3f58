//! Session Entity
//!
//! The authenticated-identity aggregate tracked per process.

use crate::domain::entity::user::User;
use crate::domain::value_object::{credential::Credential, role::Role};

/// Immutable session snapshot.
///
/// Credential and user are either both present or both absent; the two
/// constructors make a half-populated session unrepresentable, so
/// `is_authenticated ⇔ (credential ∧ user)` holds at every observable
/// instant. A credential whose user has not yet resolved is a transient
/// state inside the store and is never published.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    credential: Option<Credential>,
    user: Option<User>,
}

impl Session {
    /// Anonymous session (process start, after logout).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Fully established session.
    pub fn authenticated(credential: Credential, user: User) -> Self {
        Self {
            credential: Some(credential),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some() && self.user.is_some()
    }

    /// Role derived from the user record; never stored independently.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher() -> User {
        User {
            id: "u-1".to_string(),
            username: "alice".to_string(),
            email: "alice@example.edu".to_string(),
            role: Role::Teacher,
            full_name: None,
            created_at: None,
        }
    }

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
        assert!(session.user().is_none());
        assert!(session.credential().is_none());
    }

    #[test]
    fn test_authenticated_session() {
        let session = Session::authenticated(Credential::new("tok"), teacher());
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Teacher));
        assert_eq!(session.role(), session.user().map(|u| u.role));
        assert_eq!(session.credential().map(Credential::as_str), Some("tok"));
    }
}
