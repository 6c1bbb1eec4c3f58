//! User Entity
//!
//! Account record as returned by the backend; never constructed
//! locally and replaced wholesale on re-authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::role;
use crate::domain::value_object::role::Role;

/// Authenticated account record.
///
/// Deserialized from `GET /api/v1/auth/me`. The role field is parsed
/// leniently: an unrecognized code degrades to `student` instead of
/// failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(deserialize_with = "role::deserialize_lenient")]
    pub role: Role,
    /// Optional display name. The backend emits `full_name`, the
    /// original web client used `fullName`; both spellings are accepted.
    #[serde(
        rename = "fullName",
        alias = "full_name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snake_case_display_name() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-1",
                "username": "alice",
                "email": "alice@example.edu",
                "role": "teacher",
                "full_name": "Alice Liddell",
                "created_at": "2024-01-15T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Teacher);
        assert_eq!(user.full_name.as_deref(), Some("Alice Liddell"));
    }

    #[test]
    fn test_deserialize_camel_case_display_name() {
        let user: User = serde_json::from_str(
            r#"{"id":"u-2","username":"bob","email":"bob@example.edu","role":"ta","fullName":"Bob"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Ta);
        assert_eq!(user.full_name.as_deref(), Some("Bob"));
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_unknown_role_degrades_to_student() {
        let user: User = serde_json::from_str(
            r#"{"id":"u-3","username":"eve","email":"eve@example.edu","role":"principal"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Student);
    }
}
