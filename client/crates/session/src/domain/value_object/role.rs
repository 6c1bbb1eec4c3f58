use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Role assigned to every account by the backend.
///
/// Exactly one role per user. The value is authoritative only as
/// returned by the backend; the client never infers a role from route
/// entry or caches one across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Ta,
    Student,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Teacher => "teacher",
            Ta => "ta",
            Student => "student",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Role::*;
        match code {
            "teacher" => Some(Teacher),
            "ta" => Some(Ta),
            "student" => Some(Student),
            _ => None,
        }
    }

    /// Lenient parse for wire values.
    ///
    /// Unrecognized codes fall back to `Student`, the audited default
    /// for unknown roles, and are logged.
    pub fn from_wire(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::warn!(code = %code, "Unrecognized role from backend, defaulting to student");
            Role::Student
        })
    }
}

/// Deserialize a role leniently, coercing unknown codes to `Student`.
///
/// Used at the wire boundary only; `Role`'s own `Deserialize` stays
/// strict for statically declared route requirements.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Ok(Role::from_wire(&code))
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("teacher"), Some(Role::Teacher));
        assert_eq!(Role::from_code("ta"), Some(Role::Ta));
        assert_eq!(Role::from_code("student"), Some(Role::Student));
        assert_eq!(Role::from_code("admin"), None);
    }

    #[test]
    fn test_role_from_wire_falls_back_to_student() {
        assert_eq!(Role::from_wire("ta"), Role::Ta);
        assert_eq!(Role::from_wire("principal"), Role::Student);
        assert_eq!(Role::from_wire(""), Role::Student);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Teacher.to_string(), "teacher");
        assert_eq!(Role::Ta.to_string(), "ta");
        assert_eq!(Role::Student.to_string(), "student");
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Ta).unwrap(), r#""ta""#);
        let role: Role = serde_json::from_str(r#""teacher""#).unwrap();
        assert_eq!(role, Role::Teacher);
        assert!(serde_json::from_str::<Role>(r#""principal""#).is_err());
    }
}
