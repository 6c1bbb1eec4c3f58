use std::fmt;

/// Opaque bearer token issued by the backend on successful login.
///
/// The client gives it no structure and performs no expiry check;
/// validity is determined solely by backend response codes. The raw
/// value never appears in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Credential {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new("eyJhbGciOiJIUzI1NiJ9.secret");
        let debug = format!("{credential:?}");
        assert_eq!(debug, "Credential(***)");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_raw_value_accessible() {
        let credential = Credential::new("abc123");
        assert_eq!(credential.as_str(), "abc123");
        assert_eq!(credential.into_string(), "abc123");
    }
}
