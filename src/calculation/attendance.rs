//! Attendance ceiling rules.
//!
//! Attendance and leave together may not exceed the working days in a month.
//! An increment that would cross the ceiling is rejected and the record is
//! left as it was.

use crate::error::{LedgerError, LedgerResult};
use crate::models::EmployeeRecord;

/// Working days in a payroll month; also the attendance plus leave ceiling.
pub const WORKING_DAYS_PER_MONTH: u32 = 22;

/// Attendance days that can still be recorded before reaching the ceiling.
///
/// # Examples
///
/// ```
/// use attendance_ledger::calculation::remaining_attendance_days;
///
/// assert_eq!(remaining_attendance_days(10, 2), 10);
/// assert_eq!(remaining_attendance_days(21, 1), 0);
/// ```
pub fn remaining_attendance_days(attendance_days: u32, leave_days: u32) -> u32 {
    WORKING_DAYS_PER_MONTH.saturating_sub(attendance_days.saturating_add(leave_days))
}

/// Checks that a set of day counts is within the ceiling.
pub fn check_day_counts(id: i64, attendance_days: u32, leave_days: u32) -> LedgerResult<()> {
    match attendance_days.checked_add(leave_days) {
        Some(days) if days <= WORKING_DAYS_PER_MONTH => Ok(()),
        _ => Err(LedgerError::AttendanceCeilingExceeded {
            id,
            attendance_days,
            leave_days,
        }),
    }
}

/// Records one attendance day on the record.
///
/// Fails with `AttendanceCeilingExceeded` if attendance plus leave has
/// already reached [`WORKING_DAYS_PER_MONTH`].
pub fn record_attendance(record: &mut EmployeeRecord) -> LedgerResult<()> {
    if remaining_attendance_days(record.attendance_days(), record.leave_days()) == 0 {
        return Err(LedgerError::AttendanceCeilingExceeded {
            id: record.id(),
            attendance_days: record.attendance_days(),
            leave_days: record.leave_days(),
        });
    }

    record.increment_attendance();
    Ok(())
}
