//! Configuration types for the attendance ledger.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Default bound on shared ledger lock acquisition.
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5_000;

fn default_lock_timeout_ms() -> u64 {
    DEFAULT_LOCK_TIMEOUT_MS
}

/// Where the ledger lives and how the shared ledger behaves.
///
/// ```yaml
/// ledger_path: data/employees.txt
/// report_path: data/payroll.txt
/// lock_timeout_ms: 2000
/// save_on_close: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerConfig {
    /// The ledger file loaded at open.
    pub ledger_path: PathBuf,
    /// The payroll report replaced by each batch run.
    pub report_path: PathBuf,
    /// Maximum wait for the shared ledger lock, in milliseconds.
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
    /// Whether closing the shared ledger writes the records back.
    #[serde(default)]
    pub save_on_close: bool,
}

impl LedgerConfig {
    /// Creates a configuration with default timeout and no save on close.
    pub fn new(ledger_path: impl Into<PathBuf>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            ledger_path: ledger_path.into(),
            report_path: report_path.into(),
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
            save_on_close: false,
        }
    }

    /// The lock timeout as a [`Duration`].
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }
}
