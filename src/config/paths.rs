//! Path management for Fintrix
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRIX_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (e.g. `~/.config/fintrix` on Linux, `%APPDATA%\fintrix` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::FintrixError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINTRIX_DATA_DIR";

/// Manages all paths used by Fintrix
#[derive(Debug, Clone)]
pub struct FintrixPaths {
    /// Base directory for all Fintrix files
    base_dir: PathBuf,
}

impl FintrixPaths {
    /// Create a new FintrixPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, FintrixError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FintrixPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory where exports land when given a bare file name
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Where an export to `path` is written
    ///
    /// A bare file name ("report.csv") goes into the export directory; any
    /// path with a directory part, or an absolute path, is used as given.
    pub fn resolve_export_path(&self, path: &Path) -> PathBuf {
        let is_bare = path.is_relative()
            && path
                .parent()
                .map_or(true, |parent| parent.as_os_str().is_empty());
        if is_bare {
            self.export_dir().join(path)
        } else {
            path.to_path_buf()
        }
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), FintrixError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintrixError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| FintrixError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FintrixError> {
    ProjectDirs::from("", "", "fintrix")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FintrixError::Config("Could not determine home directory".into()))
}
