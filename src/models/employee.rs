//! Employee record model.
//!
//! This module defines [`EmployeeRecord`], the single entry type held by the
//! ledger store, along with the name rules the flat-file format depends on.

use serde::Serialize;

use crate::calculation::{check_base_salary, check_day_counts};
use crate::error::{LedgerError, LedgerResult};

/// One employee entry in the ledger.
///
/// Fields are only reachable through accessors; mutation goes through the
/// ledger store so the attendance ceiling holds after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    id: i64,
    name: String,
    base_salary: u64,
    attendance_days: u32,
    leave_days: u32,
    total_pay: u64,
}

impl EmployeeRecord {
    /// Creates a record with `total_pay` set to zero.
    ///
    /// Fails with `InvalidRecord` for an unusable name or a base salary above
    /// [`MAX_BASE_SALARY`](crate::calculation::MAX_BASE_SALARY), and with
    /// `AttendanceCeilingExceeded` when attendance plus leave is already over
    /// the monthly ceiling.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_ledger::models::EmployeeRecord;
    ///
    /// let record = EmployeeRecord::new(1, "Ana", 440_000, 20, 0).unwrap();
    /// assert_eq!(record.name(), "Ana");
    /// assert_eq!(record.total_pay(), 0);
    /// ```
    pub fn new(
        id: i64,
        name: impl Into<String>,
        base_salary: u64,
        attendance_days: u32,
        leave_days: u32,
    ) -> LedgerResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        check_base_salary(base_salary)?;
        check_day_counts(id, attendance_days, leave_days)?;

        Ok(Self {
            id,
            name,
            base_salary,
            attendance_days,
            leave_days,
            total_pay: 0,
        })
    }

    /// The caller-assigned primary key.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The employee's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monthly base salary before allowances.
    pub fn base_salary(&self) -> u64 {
        self.base_salary
    }

    /// Days of recorded attendance this period.
    pub fn attendance_days(&self) -> u32 {
        self.attendance_days
    }

    /// Days of leave this period.
    pub fn leave_days(&self) -> u32 {
        self.leave_days
    }

    /// Pay derived by the last payroll batch, or zero if none has run.
    pub fn total_pay(&self) -> u64 {
        self.total_pay
    }

    /// Returns true if `name` equals this record's name ignoring case.
    ///
    /// ```
    /// use attendance_ledger::models::EmployeeRecord;
    ///
    /// let record = EmployeeRecord::new(1, "Ana", 0, 0, 0).unwrap();
    /// assert!(record.name_matches("ANA"));
    /// assert!(!record.name_matches("Anastasia"));
    /// ```
    pub fn name_matches(&self, name: &str) -> bool {
        // Full Unicode lowercasing, compared char by char without allocating.
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }

    pub(crate) fn set_name(&mut self, name: String) -> LedgerResult<()> {
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub(crate) fn increment_attendance(&mut self) {
        self.attendance_days += 1;
    }

    pub(crate) fn set_total_pay(&mut self, total_pay: u64) {
        self.total_pay = total_pay;
    }
}

/// Checks that a name can be stored and written to the ledger file.
///
/// Names must contain a non-whitespace character and may not contain commas
/// or line breaks, since the flat-file format has no quoting.
pub fn validate_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::InvalidRecord {
            field: "name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if name.contains([',', '\n', '\r']) {
        return Err(LedgerError::InvalidRecord {
            field: "name".to_string(),
            message: format!("'{}' contains a comma or line break", name.escape_debug()),
        });
    }
    Ok(())
}
