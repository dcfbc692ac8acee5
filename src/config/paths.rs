//! Path management for PennyWise
//!
//! ## Path Resolution Order
//!
//! 1. `PENNYWISE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pennywise` or `~/.config/pennywise`
//! 3. Windows: `%APPDATA%\pennywise`

use std::path::PathBuf;

use crate::error::PennyError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "PENNYWISE_DATA_DIR";

/// Manages all paths used by PennyWise
#[derive(Debug, Clone)]
pub struct PennywisePaths {
    base_dir: PathBuf,
}

impl PennywisePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PennyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to entries.json
    pub fn entries_file(&self) -> PathBuf {
        self.base_dir.join("data").join("entries.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PennyError> {
        std::fs::create_dir_all(self.base_dir.join("data"))
            .map_err(|e| PennyError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PennyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                PennyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pennywise"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PennyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PennyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pennywise"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennywisePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.entries_file(),
            temp_dir.path().join("data").join("entries.json")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennywisePaths::with_base_dir(temp_dir.path().join("pw"));

        paths.ensure_directories().unwrap();
        assert!(temp_dir.path().join("pw").join("data").exists());
    }
}
