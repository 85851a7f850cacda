use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::modules::utils::time::{format_timestamp, get_current_timestamp};
use crate::TOKEN_FILE;

/// On-disk shape of the persisted session token.
#[derive(Serialize, Deserialize, Debug)]
struct PersistedToken {
    token: String,
    saved_at: u64,
}

/// Persists the session token under a fixed well-known path so the
/// session survives restarts.
///
/// The store holds at most one token; it is written on login, read once
/// at startup, and cleared on logout or failed validation. A missing or
/// malformed file reads as "no token" rather than an error.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at the crate's well-known token path.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(TOKEN_FILE),
        }
    }

    /// Store at an explicit path (tests use temp files).
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the persisted token, if any.
    pub fn load(&self) -> Option<String> {
        let mut contents = String::new();
        match File::open(&self.path) {
            Ok(mut file) => {
                if file.read_to_string(&mut contents).is_err() {
                    return None;
                }
            }
            Err(_) => return None, // no file means no session
        }

        // A file we cannot parse is treated the same as no token
        match serde_json::from_str::<PersistedToken>(&contents) {
            Ok(persisted) => {
                debug!(
                    "Restoring session token saved at {}",
                    format_timestamp(persisted.saved_at)
                );
                Some(persisted.token)
            }
            Err(_) => None,
        }
    }

    /// Persist `token`, replacing any previous one.
    pub fn save(&self, token: &str) -> io::Result<()> {
        let persisted = PersistedToken {
            token: token.to_string(),
            saved_at: get_current_timestamp(),
        };

        let data = serde_json::to_string_pretty(&persisted)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        File::create(&self.path)?.write_all(data.as_bytes())
    }

    /// Remove the persisted token. Clearing an empty store succeeds.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_clear_round_trip() {
        let dir = tempdir().unwrap();
        let store = TokenStore::with_path(dir.path().join("token.json"));

        // Empty store reads as no token
        assert_eq!(store.load(), None);

        store.save("t1").unwrap();
        assert_eq!(store.load(), Some("t1".to_string()));

        // A later save replaces the token
        store.save("t2").unwrap();
        assert_eq!(store.load(), Some("t2".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load(), None);

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_malformed_file_reads_as_no_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = TokenStore::with_path(&path);
        assert_eq!(store.load(), None);
    }
}
