//! The in-memory ledger store.
//!
//! [`LedgerStore`] owns every [`EmployeeRecord`] for the life of the process.
//! Lookups are linear scans; the store targets tens to low hundreds of
//! records.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::calculation;
use crate::codec::{self, format_error};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EmployeeRecord, EmployeeReport};

/// The working set of employee records, in insertion order.
///
/// # Example
///
/// ```
/// use attendance_ledger::ledger::LedgerStore;
/// use attendance_ledger::models::EmployeeRecord;
///
/// let mut store = LedgerStore::new();
/// store.insert(EmployeeRecord::new(1, "Ana", 440_000, 0, 0)?)?;
/// store.record_attendance(1)?;
/// assert_eq!(store.find_by_name("ana").unwrap().attendance_days(), 1);
/// # Ok::<(), attendance_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerStore {
    records: Vec<EmployeeRecord>,
}

impl LedgerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from ledger lines.
    ///
    /// `source` names the stream in errors. Blank lines are skipped. The
    /// first malformed line fails the whole load with a `Format` error,
    /// including a line that repeats an id seen earlier; no partial store is
    /// returned.
    pub fn from_reader<R: BufRead>(reader: R, source: &str) -> LedgerResult<Self> {
        let mut store = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LedgerError::persistence(source, e))?;
            if line.trim().is_empty() {
                continue;
            }

            let line_number = index + 1;
            let record = codec::parse_record(line_number, &line)?;
            if store.find_by_id(record.id()).is_some() {
                return Err(format_error(
                    line_number,
                    &line,
                    format!("duplicate id {}", record.id()),
                ));
            }
            store.records.push(record);
        }

        debug!(source, records = store.len(), "Loaded ledger");
        Ok(store)
    }

    /// Loads a store from the ledger file at `path`.
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| LedgerError::persistence(&source, e))?;
        Self::from_reader(BufReader::new(file), &source)
    }

    /// Writes every record as a ledger line.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        codec::write_ledger(writer, &self.records)
    }

    /// Replaces the ledger file at `path` with the current records.
    pub fn save(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)
            .map_err(|e| LedgerError::persistence(path.display().to_string(), e))?;
        codec::write_atomic(path, &buffer)
    }

    /// Appends a record.
    ///
    /// Fails with `DuplicateId` if a record with the same id exists.
    pub fn insert(&mut self, record: EmployeeRecord) -> LedgerResult<()> {
        if self.find_by_id(record.id()).is_some() {
            return Err(LedgerError::DuplicateId { id: record.id() });
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes and returns the record with the given id.
    pub fn remove(&mut self, id: i64) -> LedgerResult<EmployeeRecord> {
        let index = self.position_by_id(id).ok_or_else(|| LedgerError::not_found(id))?;
        Ok(self.records.remove(index))
    }

    /// Finds a record by id.
    pub fn find_by_id(&self, id: i64) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Finds the first record whose name matches ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| record.name_matches(name))
    }

    /// Finds a record by a key that is either an id or a name.
    ///
    /// A key written exactly as an id would be (`"2"`, `"-7"`, but not `" 2"`,
    /// `"+2"` or `"02"`) is tried as an id first; if no record has that id, or
    /// the key is not in that form, it is matched against names ignoring case.
    pub fn find_by_key(&self, key: &str) -> Option<&EmployeeRecord> {
        self.position_by_key(key).map(|index| &self.records[index])
    }

    /// Overwrites the name of the record located by `key`.
    ///
    /// The key is resolved as in [`find_by_key`](Self::find_by_key). Fails
    /// with `NotFound` if nothing matches and with `InvalidRecord` if the new
    /// name cannot be stored.
    pub fn rename(
        &mut self,
        key: &str,
        new_name: impl Into<String>,
    ) -> LedgerResult<&EmployeeRecord> {
        let index = self
            .position_by_key(key)
            .ok_or_else(|| LedgerError::not_found(key))?;
        let record = &mut self.records[index];
        record.set_name(new_name.into())?;
        Ok(&*record)
    }

    /// Records one attendance day for the employee with `id`.
    ///
    /// Fails with `NotFound` for an unknown id and with
    /// `AttendanceCeilingExceeded` if the record is already at the ceiling,
    /// in which case it is left unchanged.
    pub fn record_attendance(&mut self, id: i64) -> LedgerResult<&EmployeeRecord> {
        let index = self.position_by_id(id).ok_or_else(|| LedgerError::not_found(id))?;
        let record = &mut self.records[index];
        calculation::record_attendance(record)?;
        Ok(&*record)
    }

    /// Builds the summary view for the record located by `key`.
    pub fn report(&self, key: &str) -> LedgerResult<EmployeeReport> {
        self.find_by_key(key)
            .map(EmployeeReport::from)
            .ok_or_else(|| LedgerError::not_found(key))
    }

    /// Iterates over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.records.iter()
    }

    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = &mut EmployeeRecord> {
        self.records.iter_mut()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_by_id(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn position_by_key(&self, key: &str) -> Option<usize> {
        key.parse::<i64>()
            .ok()
            .filter(|id| id.to_string() == key)
            .and_then(|id| self.position_by_id(id))
            .or_else(|| self.records.iter().position(|record| record.name_matches(key)))
    }
}
