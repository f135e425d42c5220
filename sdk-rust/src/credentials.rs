use crate::errors::StoreResult;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

/// The operator's login pair. Owned exclusively by a [`CredentialStore`]:
/// overwritten atomically on login, cleared on logout or auth failure.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Render the pair as an HTTP Basic `Authorization` header value.
    #[must_use]
    pub fn basic_auth(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {encoded}")
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Persisted holder of the operator's login pair.
///
/// `save` and `clear` are each atomic with respect to the stored value; there
/// is no partial state. The store performs no network or UI side effects.
/// Two processes sharing one persisted store race last-write-wins; no locking
/// is attempted.
pub trait CredentialStore: Send + Sync {
    fn save(&self, credential: &Credential) -> StoreResult<()>;
    fn load(&self) -> StoreResult<Option<Credential>>;
    fn clear(&self) -> StoreResult<()>;
}

/// Credential store backed by a JSON file, surviving process restarts.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    fn save(&self, credential: &Credential) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(credential)?)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<Credential>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process credential store for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<Credential>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, credential: &Credential) -> StoreResult<()> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(credential.clone());
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<Credential>> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot.clone())
    }

    fn clear(&self) -> StoreResult<()> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_auth_encodes_the_pair() {
        let credential = Credential::new("user", "pass");
        assert_eq!(credential.basic_auth(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn debug_redacts_the_password() {
        let credential = Credential::new("user", "hunter2");
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load().unwrap(), None);

        let credential = Credential::new("op", "secret");
        store.save(&credential).unwrap();
        assert_eq!(store.load().unwrap(), Some(credential));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_survives_reopen_and_clears_cleanly() {
        let path = std::env::temp_dir().join(format!(
            "portfolio-sdk-credentials-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let store = FileCredentialStore::new(&path);
        assert_eq!(store.load().unwrap(), None);

        let credential = Credential::new("op", "secret");
        store.save(&credential).unwrap();

        // A fresh handle sees the persisted pair, like a page reload would.
        let reopened = FileCredentialStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(credential));

        reopened.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing an already-empty store is not an error.
        store.clear().unwrap();
    }
}
