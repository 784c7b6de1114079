//! Configuration loading for the attendance ledger.
//!
//! This module loads the ledger and report file locations and the shared
//! ledger lock timeout from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ledger.yaml").unwrap().into_config();
//! println!("Report file: {}", config.report_path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_LOCK_TIMEOUT_MS, LedgerConfig};
