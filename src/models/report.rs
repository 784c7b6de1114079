//! Per-employee summary view.

use serde::{Deserialize, Serialize};

use super::EmployeeRecord;
use crate::calculation::remaining_attendance_days;

/// A read-only summary of one employee's standing for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// Employee id.
    pub id: i64,
    /// Employee name.
    pub name: String,
    /// Days of recorded attendance.
    pub attendance_days: u32,
    /// Days of leave.
    pub leave_days: u32,
    /// Attendance days that can still be recorded before the ceiling.
    pub remaining_days: u32,
    /// Pay from the last payroll batch, zero if none has run.
    pub total_pay: u64,
}

impl From<&EmployeeRecord> for EmployeeReport {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_string(),
            attendance_days: record.attendance_days(),
            leave_days: record.leave_days(),
            remaining_days: remaining_attendance_days(
                record.attendance_days(),
                record.leave_days(),
            ),
            total_pay: record.total_pay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_reports_leave_separately_from_attendance() {
        let record = EmployeeRecord::new(5, "Dewi", 220_000, 10, 4).unwrap();
        let report = EmployeeReport::from(&record);

        assert_eq!(report.id, 5);
        assert_eq!(report.name, "Dewi");
        assert_eq!(report.attendance_days, 10);
        assert_eq!(report.leave_days, 4);
        assert_eq!(report.remaining_days, 8);
        assert_eq!(report.total_pay, 0);
    }
}
