//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the ledger
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

use super::types::LedgerConfig;

/// Loads and provides access to the ledger configuration.
///
/// Relative `ledger_path` and `report_path` entries are resolved against the
/// directory containing the configuration file.
///
/// # Example
///
/// ```no_run
/// use attendance_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ledger.yaml")?;
/// println!("Ledger file: {}", loader.config().ledger_path.display());
/// # Ok::<(), attendance_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks a required field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut config = Self::parse(&content, &path_str)?;

        if let Some(base) = path.parent() {
            config.ledger_path = base.join(&config.ledger_path);
            config.report_path = base.join(&config.report_path);
        }

        Ok(Self { config })
    }

    /// Parses configuration from YAML text; paths are kept as written.
    pub fn from_yaml_str(content: &str) -> LedgerResult<Self> {
        let config = Self::parse(content, "<inline>")?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> LedgerResult<LedgerConfig> {
        serde_yaml::from_str(content).map_err(|e| LedgerError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> LedgerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.yaml");
        fs::write(
            &path,
            "ledger_path: employees.txt\nreport_path: out/payroll.txt\nlock_timeout_ms: 100\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(&path).unwrap();
        let config = loader.config();

        assert_eq!(config.ledger_path, dir.path().join("employees.txt"));
        assert_eq!(config.report_path, dir.path().join("out/payroll.txt"));
        assert_eq!(config.lock_timeout_ms, 100);
    }

    #[test]
    fn test_load_keeps_absolute_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.yaml");
        fs::write(
            &path,
            "ledger_path: /srv/ledger/employees.txt\nreport_path: /srv/ledger/payroll.txt\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap().into_config();

        assert_eq!(
            config.ledger_path,
            Path::new("/srv/ledger/employees.txt").to_path_buf()
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load("/nonexistent/ledger.yaml");
        match result.unwrap_err() {
            LedgerError::ConfigNotFound { path } => {
                assert_eq!(path, "/nonexistent/ledger.yaml");
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.yaml");
        fs::write(&path, "ledger_path: [unclosed\n").unwrap();

        assert!(matches!(
            ConfigLoader::load(&path),
            Err(LedgerError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_from_yaml_str() {
        let loader =
            ConfigLoader::from_yaml_str("ledger_path: a.txt\nreport_path: b.txt\nsave_on_close: true\n")
                .unwrap();
        assert!(loader.config().save_on_close);
        assert_eq!(loader.config().ledger_path, Path::new("a.txt"));
    }
}
