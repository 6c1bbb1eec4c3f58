//! Application Configuration

use std::path::PathBuf;

/// Session core configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Backend base URL
    pub base_url: String,
    /// Directory holding durable client state (the persisted credential)
    pub data_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl SessionConfig {
    pub fn new(base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Local development defaults: backend on localhost, durable state
    /// under the standard data directory.
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            data_dir: platform::paths::data_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(!config.data_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_explicit_config() {
        let config = SessionConfig::new("https://class.example.edu", "/tmp/classroom");
        assert_eq!(config.base_url, "https://class.example.edu");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/classroom"));
    }
}
