//! Client data directory resolution
//!
//! Durable client state (the persisted credential) lives under a single
//! directory: `CLASSROOM_DATA_DIR` when set, otherwise `.classroom`
//! under the user's home directory.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "CLASSROOM_DATA_DIR";

const DEFAULT_DIR_NAME: &str = ".classroom";

/// Resolve the directory holding durable client state.
pub fn data_dir() -> PathBuf {
    resolve(
        env::var(DATA_DIR_ENV).ok().as_deref(),
        env::var("HOME").ok().as_deref(),
    )
}

fn resolve(override_dir: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    match home {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(DEFAULT_DIR_NAME),
        _ => env::temp_dir().join(DEFAULT_DIR_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = resolve(Some("/srv/classroom"), Some("/home/alice"));
        assert_eq!(dir, PathBuf::from("/srv/classroom"));
    }

    #[test]
    fn test_empty_override_ignored() {
        let dir = resolve(Some(""), Some("/home/alice"));
        assert_eq!(dir, PathBuf::from("/home/alice/.classroom"));
    }

    #[test]
    fn test_home_fallback() {
        let dir = resolve(None, Some("/home/alice"));
        assert_eq!(dir, PathBuf::from("/home/alice/.classroom"));
    }

    #[test]
    fn test_no_home_falls_back_to_temp() {
        let dir = resolve(None, None);
        assert!(dir.ends_with(DEFAULT_DIR_NAME));
    }
}
