//! Persisted user preferences.
//!
//! Two flags survive restarts: the role the operator signed in as and the
//! color theme. They live in a small JSON file that is read once when the
//! server starts and rewritten on every change.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use comxstore_core::{Theme, UserRole};

/// Error type for preference persistence.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The persisted flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Signed-in role, absent for guests.
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub theme: Theme,
}

/// File-backed preference store.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    current: RwLock<Preferences>,
}

impl PreferenceStore {
    /// Open the store, reading the file if it exists.
    ///
    /// A missing file yields defaults. An unreadable or corrupt file also
    /// yields defaults and is overwritten on the next change.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = read_file(&path).await;
        Self {
            path,
            current: RwLock::new(current),
        }
    }

    /// Re-read the file, replacing the in-memory copy.
    pub async fn reload(&self) -> Preferences {
        let fresh = read_file(&self.path).await;
        *self.current.write().await = fresh;
        fresh
    }

    /// Current preferences.
    pub async fn get(&self) -> Preferences {
        *self.current.read().await
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set or clear the signed-in role.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written; the in-memory value is
    /// left unchanged in that case.
    pub async fn set_role(&self, role: Option<UserRole>) -> Result<Preferences, PreferencesError> {
        self.update(|prefs| prefs.role = role).await
    }

    /// Set the color theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn set_theme(&self, theme: Theme) -> Result<Preferences, PreferencesError> {
        self.update(|prefs| prefs.theme = theme).await
    }

    async fn update(
        &self,
        change: impl FnOnce(&mut Preferences),
    ) -> Result<Preferences, PreferencesError> {
        let mut guard = self.current.write().await;
        let mut next = *guard;
        change(&mut next);
        write_file(&self.path, &next).await?;
        *guard = next;
        Ok(next)
    }
}

async fn read_file(path: &Path) -> Preferences {
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt preferences file");
            Preferences::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not read preferences file");
            Preferences::default()
        }
    }
}

async fn write_file(path: &Path, prefs: &Preferences) -> Result<(), PreferencesError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(prefs)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
