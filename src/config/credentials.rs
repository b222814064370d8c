//! Bearer token storage
//!
//! The token is read fresh before every gateway call, so replacing or
//! clearing the file takes effect on the next request.

use std::path::PathBuf;
use std::sync::Mutex;

use zeroize::Zeroizing;

use super::paths::BudgetDeskPaths;
use crate::error::{DeskError, DeskResult};

/// Source of the bearer credential attached to gateway requests
pub trait CredentialStore: Send + Sync {
    /// Current token, if one is stored
    fn token(&self) -> Option<Zeroizing<String>>;
}

/// Token kept in a single file under the config directory
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(paths: &BudgetDeskPaths) -> Self {
        Self {
            path: paths.token_file(),
        }
    }

    /// Store a token, replacing any previous one
    pub fn save(&self, token: &str) -> DeskResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DeskError::Credentials("Token cannot be empty".into()));
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
            .map_err(|e| DeskError::Credentials(format!("Failed to write token file: {}", e)))?;
        restrict_permissions(&self.path)?;
        Ok(())
    }

    /// Remove the stored token. Returns false when there was none.
    pub fn clear(&self) -> DeskResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)
            .map_err(|e| DeskError::Credentials(format!("Failed to remove token file: {}", e)))?;
        Ok(true)
    }
}

impl CredentialStore for FileCredentialStore {
    fn token(&self) -> Option<Zeroizing<String>> {
        let contents = Zeroizing::new(std::fs::read_to_string(&self.path).ok()?);
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Zeroizing::new(trimmed.to_string()))
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &std::path::Path) -> DeskResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| DeskError::Credentials(format!("Failed to restrict token file: {}", e)))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &std::path::Path) -> DeskResult<()> {
    Ok(())
}

/// In-memory token, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: Mutex::new(token.map(str::to_string)),
        }
    }

    pub fn set(&self, token: Option<&str>) {
        let mut guard = self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = token.map(str::to_string);
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<Zeroizing<String>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
            .map(Zeroizing::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileCredentialStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetDeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = FileCredentialStore::new(&paths);
        (temp_dir, store)
    }

    #[test]
    fn test_missing_token_is_none() {
        let (_dir, store) = store();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_save_then_read_trims() {
        let (_dir, store) = store();
        store.save("  abc.def.ghi\n").unwrap();
        assert_eq!(store.token().unwrap().as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_empty_token_rejected() {
        let (_dir, store) = store();
        let err = store.save("   ").unwrap_err();
        assert!(matches!(err, DeskError::Credentials(_)));
    }

    #[test]
    fn test_clear() {
        let (_dir, store) = store();
        assert!(!store.clear().unwrap());
        store.save("token").unwrap();
        assert!(store.clear().unwrap());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryCredentialStore::new(None);
        assert!(store.token().is_none());
        store.set(Some("t1"));
        assert_eq!(store.token().unwrap().as_str(), "t1");
    }
}
