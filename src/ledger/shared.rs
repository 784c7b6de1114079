//! Shared ledger for concurrent callers.
//!
//! This module wraps a [`LedgerStore`] in a reader-writer lock so several
//! tasks can use one ledger. Lookups share the lock; every mutation and the
//! payroll batch hold it exclusively. Lock acquisition is bounded by the
//! configured timeout and surfaces as [`LedgerError::Busy`]. File writes run
//! on tokio's blocking pool while the lock is held.

use std::io;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{OwnedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::time::timeout;
use tracing::{info, warn};

use crate::calculation::run_payroll_batch;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EmployeeRecord, EmployeeReport, PayrollReport};

use super::LedgerStore;

/// Error from [`SharedLedger::close`].
///
/// The ledger is handed back untouched, so the caller can release other
/// handles or fix the ledger path and close again without losing records.
#[derive(Debug, Error)]
#[error("Failed to close shared ledger")]
pub struct CloseError {
    /// Why the ledger stayed open.
    #[source]
    pub error: LedgerError,
    /// The ledger, still open and holding every record.
    pub ledger: SharedLedger,
}

impl From<CloseError> for LedgerError {
    fn from(err: CloseError) -> Self {
        err.error
    }
}

/// A cloneable handle to a ledger shared between tasks.
///
/// # Example
///
/// ```no_run
/// use attendance_ledger::config::LedgerConfig;
/// use attendance_ledger::ledger::SharedLedger;
///
/// # async fn run() -> attendance_ledger::error::LedgerResult<()> {
/// let ledger = SharedLedger::open(LedgerConfig::new("employees.txt", "payroll.txt"))?;
/// ledger.record_attendance(1).await?;
/// let report = ledger.run_payroll_batch().await?;
/// println!("Paid {} employees", report.lines.len());
/// ledger.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SharedLedger {
    store: Arc<RwLock<LedgerStore>>,
    config: Arc<LedgerConfig>,
}

impl SharedLedger {
    /// Wraps an already loaded store.
    pub fn new(store: LedgerStore, config: LedgerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// Loads the ledger file named by `config` and wraps it.
    pub fn open(config: LedgerConfig) -> LedgerResult<Self> {
        let store = LedgerStore::open(&config.ledger_path)?;
        info!(
            path = %config.ledger_path.display(),
            records = store.len(),
            "Opened shared ledger"
        );
        Ok(Self::new(store, config))
    }

    /// Returns the configuration this ledger was opened with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Finds a record by id.
    pub async fn find_by_id(&self, id: i64) -> LedgerResult<Option<EmployeeRecord>> {
        Ok(self.read().await?.find_by_id(id).cloned())
    }

    /// Finds a record by name, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> LedgerResult<Option<EmployeeRecord>> {
        Ok(self.read().await?.find_by_name(name).cloned())
    }

    /// Builds the summary view for the record located by id or name.
    pub async fn report(&self, key: &str) -> LedgerResult<EmployeeReport> {
        self.read().await?.report(key)
    }

    /// Returns a copy of the whole store.
    pub async fn snapshot(&self) -> LedgerResult<LedgerStore> {
        Ok(self.read().await?.clone())
    }

    /// Appends a record; see [`LedgerStore::insert`].
    pub async fn insert(&self, record: EmployeeRecord) -> LedgerResult<()> {
        self.write().await?.insert(record)
    }

    /// Renames the record located by id or name; see [`LedgerStore::rename`].
    pub async fn rename(&self, key: &str, new_name: &str) -> LedgerResult<EmployeeRecord> {
        self.write().await?.rename(key, new_name).cloned()
    }

    /// Records one attendance day; see [`LedgerStore::record_attendance`].
    pub async fn record_attendance(&self, id: i64) -> LedgerResult<EmployeeRecord> {
        self.write().await?.record_attendance(id).cloned()
    }

    /// Removes the record with the given id.
    pub async fn remove(&self, id: i64) -> LedgerResult<EmployeeRecord> {
        self.write().await?.remove(id)
    }

    /// Runs a payroll batch into the configured report file.
    ///
    /// The exclusive lock is held until the report has been replaced, so no
    /// attendance can be recorded between computing and writing the report.
    pub async fn run_payroll_batch(&self) -> LedgerResult<PayrollReport> {
        let mut store = self.write_owned().await?;
        let report_path = self.config.report_path.clone();
        blocking(&self.config.report_path, move || {
            run_payroll_batch(&mut store, &report_path)
        })
        .await
    }

    /// Writes the records back to the configured ledger file.
    pub async fn save(&self) -> LedgerResult<()> {
        let store = self.write_owned().await?;
        let ledger_path = self.config.ledger_path.clone();
        blocking(&self.config.ledger_path, move || store.save(&ledger_path)).await
    }

    /// Ends the ledger's lifetime and returns the store.
    ///
    /// Fails with `Busy` while other handles are still alive. When
    /// `save_on_close` is set the records are written back first. On any
    /// failure the ledger comes back inside the [`CloseError`].
    pub async fn close(self) -> Result<LedgerStore, CloseError> {
        if Arc::strong_count(&self.store) > 1 {
            let error = self.still_shared();
            return Err(CloseError { error, ledger: self });
        }
        if self.config.save_on_close {
            if let Err(error) = self.save().await {
                return Err(CloseError { error, ledger: self });
            }
        }

        let Self { store, config } = self;
        match Arc::try_unwrap(store) {
            Ok(store) => {
                let store = store.into_inner();
                info!(records = store.len(), saved = config.save_on_close, "Closed shared ledger");
                Ok(store)
            }
            Err(store) => {
                let ledger = Self { store, config };
                let error = ledger.still_shared();
                Err(CloseError { error, ledger })
            }
        }
    }

    async fn read(&self) -> LedgerResult<RwLockReadGuard<'_, LedgerStore>> {
        timeout(self.config.lock_timeout(), self.store.read())
            .await
            .map_err(|_| self.busy("read"))
    }

    async fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, LedgerStore>> {
        timeout(self.config.lock_timeout(), self.store.write())
            .await
            .map_err(|_| self.busy("write"))
    }

    async fn write_owned(&self) -> LedgerResult<OwnedRwLockWriteGuard<LedgerStore>> {
        timeout(self.config.lock_timeout(), self.store.clone().write_owned())
            .await
            .map_err(|_| self.busy("write"))
    }

    fn still_shared(&self) -> LedgerError {
        warn!(
            handles = Arc::strong_count(&self.store),
            "Ledger still shared, not closing"
        );
        LedgerError::Busy {
            timeout_ms: self.config.lock_timeout_ms,
        }
    }

    fn busy(&self, access: &str) -> LedgerError {
        warn!(
            access,
            timeout_ms = self.config.lock_timeout_ms,
            "Ledger lock not acquired in time"
        );
        LedgerError::Busy {
            timeout_ms: self.config.lock_timeout_ms,
        }
    }
}

/// Runs file work on the blocking pool. A panicked task surfaces as a
/// `Persistence` error for `path`.
async fn blocking<T, F>(path: &Path, task: F) -> LedgerResult<T>
where
    F: FnOnce() -> LedgerResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| LedgerError::persistence(path.display().to_string(), io::Error::other(err)))?
}
