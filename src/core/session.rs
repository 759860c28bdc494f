//! Durable session storage.
//!
//! Persists the student's progress and locally authored templates between
//! runs under a fixed namespace key. Read failures are treated as absence so
//! a corrupted or missing state file can never block startup.

use crate::core::models::{CurriculumTemplate, UserProgress};
use logger::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Namespace key the session state is stored under
pub const STORAGE_KEY: &str = "unichart-storage";

/// Failures while writing session state
#[derive(Debug, Error)]
pub enum SessionError {
    /// The state file could not be written
    #[error("failed to write session state: {0}")]
    Io(#[from] std::io::Error),
    /// The state could not be serialized
    #[error("failed to serialize session state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The durable slice of application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// The student's progress record
    #[serde(default)]
    pub user_progress: UserProgress,
    /// Locally authored template versions
    #[serde(default)]
    pub custom_templates: Vec<CurriculumTemplate>,
}

/// Reads and writes [`SessionState`] at a fixed file location
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a session store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default state file location
    ///
    /// Returns:
    /// - Linux: `~/.local/share/unichart/unichart-storage.json`
    /// - macOS: `~/Library/Application Support/unichart/unichart-storage.json`
    /// - Windows: `%APPDATA%\unichart\unichart-storage.json`
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("unichart")
            .join(format!("{STORAGE_KEY}.json"))
    }

    /// The file this store reads and writes
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted state, or defaults when absent or unreadable.
    ///
    /// Corruption and read errors are logged and treated as absence.
    #[must_use]
    pub fn load(&self) -> SessionState {
        if !self.path.exists() {
            return SessionState::default();
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => state,
                Err(e) => {
                    warn!("Session state at {} is corrupted: {e}", self.path.display());
                    SessionState::default()
                }
            },
            Err(e) => {
                warn!("Failed to read session state {}: {e}", self.path.display());
                SessionState::default()
            }
        }
    }

    /// Persist the state, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, state: &SessionState) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
