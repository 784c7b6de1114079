//! Payroll result models.
//!
//! This module contains the [`PayBreakdown`] produced for a single record and
//! the [`PayrollReport`] produced by a payroll batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The components of one employee's derived pay.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::calculate_pay;
/// use attendance_ledger::models::EmployeeRecord;
///
/// let record = EmployeeRecord::new(1, "Ana", 440_000, 20, 0).unwrap();
/// let pay = calculate_pay(&record);
/// assert_eq!(pay.daily_rate, 20_000);
/// assert_eq!(pay.total_pay, 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Base salary divided by the working days in a month, truncated.
    pub daily_rate: u64,
    /// Daily rate times attended days.
    pub attendance_pay: u64,
    /// Meal allowance for attended days.
    pub meal_allowance: u64,
    /// Transport allowance for attended days.
    pub transport_allowance: u64,
    /// Sum of attendance pay and both allowances.
    pub total_pay: u64,
}

/// One line of the payroll report file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Employee id.
    pub id: i64,
    /// Employee name at the time of the run.
    pub name: String,
    /// Derived pay written back to the record.
    pub total_pay: u64,
}

/// The outcome of a payroll batch.
///
/// `run_id` and `generated_at` identify the run in logs; only `lines` is
/// written to the report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was computed.
    pub generated_at: DateTime<Utc>,
    /// One line per record, in store order.
    pub lines: Vec<ReportLine>,
}

impl PayrollReport {
    /// Creates a report for the given lines, stamped with a fresh run id.
    pub fn new(lines: Vec<ReportLine>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            lines,
        }
    }

    /// Sum of `total_pay` across all lines.
    ///
    /// Widened to `u128`: each line fits a `u64`, their sum may not.
    pub fn total_payout(&self) -> u128 {
        self.lines.iter().map(|line| u128::from(line.total_pay)).sum()
    }

    /// Returns the line for the given employee id, if present.
    pub fn line_for(&self, id: i64) -> Option<&ReportLine> {
        self.lines.iter().find(|line| line.id == id)
    }
}
