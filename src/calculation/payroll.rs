//! Monthly payroll derivation.
//!
//! Pay is derived from attendance only:
//!
//! ```text
//! daily_rate          = base_salary / 22      (truncating)
//! meal_allowance      = attendance_days * 10_000
//! transport_allowance = attendance_days * 20_000
//! total_pay           = daily_rate * attendance_days + meal_allowance + transport_allowance
//! ```
//!
//! Leave days never enter the formula; they only limit how many attendance
//! days can be recorded.

use std::path::Path;

use tracing::info;

use super::attendance::WORKING_DAYS_PER_MONTH;
use crate::codec::write_report_file;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::{EmployeeRecord, PayBreakdown, PayrollReport, ReportLine};

/// Meal allowance paid per attended day.
pub const MEAL_ALLOWANCE_PER_DAY: u64 = 10_000;

/// Transport allowance paid per attended day.
pub const TRANSPORT_ALLOWANCE_PER_DAY: u64 = 20_000;

/// Largest base salary a record may carry.
///
/// With at most 22 attended days, attendance pay stays at or below this
/// bound and the allowances add at most 660_000, so `total_pay` fits in a
/// `u64` for every valid record.
pub const MAX_BASE_SALARY: u64 = i64::MAX as u64;

/// Rejects a base salary above [`MAX_BASE_SALARY`] with `InvalidRecord`.
pub fn check_base_salary(base_salary: u64) -> LedgerResult<()> {
    if base_salary > MAX_BASE_SALARY {
        return Err(LedgerError::InvalidRecord {
            field: "base_salary".to_string(),
            message: format!("{base_salary} exceeds the maximum of {MAX_BASE_SALARY}"),
        });
    }
    Ok(())
}

/// Derives the pay breakdown for a single record.
///
/// This is a pure function of the record's base salary and attendance days;
/// it does not touch the record's stored `total_pay`.
///
/// # Examples
///
/// ```
/// use attendance_ledger::calculation::calculate_pay;
/// use attendance_ledger::models::EmployeeRecord;
///
/// // 100_000 / 22 truncates to 4_545
/// let record = EmployeeRecord::new(2, "Budi", 100_000, 2, 0).unwrap();
/// let pay = calculate_pay(&record);
/// assert_eq!(pay.daily_rate, 4_545);
/// assert_eq!(pay.total_pay, 4_545 * 2 + 20_000 + 40_000);
/// ```
pub fn calculate_pay(record: &EmployeeRecord) -> PayBreakdown {
    // Records are built through `EmployeeRecord::new`, which bounds both the
    // salary and the day counts, so none of the arithmetic below can overflow.
    let days = u64::from(record.attendance_days());
    let daily_rate = record.base_salary() / u64::from(WORKING_DAYS_PER_MONTH);
    let attendance_pay = daily_rate * days;
    let meal_allowance = days * MEAL_ALLOWANCE_PER_DAY;
    let transport_allowance = days * TRANSPORT_ALLOWANCE_PER_DAY;

    PayBreakdown {
        daily_rate,
        attendance_pay,
        meal_allowance,
        transport_allowance,
        total_pay: attendance_pay + meal_allowance + transport_allowance,
    }
}

/// Recomputes `total_pay` for every record and collects the report lines.
///
/// Totals are written back into the store. Nothing is persisted; use
/// [`run_payroll_batch`] to also replace the report file.
pub fn compute_payroll(store: &mut LedgerStore) -> PayrollReport {
    let lines = store
        .records_mut()
        .map(|record| {
            let pay = calculate_pay(record);
            record.set_total_pay(pay.total_pay);
            ReportLine {
                id: record.id(),
                name: record.name().to_string(),
                total_pay: pay.total_pay,
            }
        })
        .collect();

    PayrollReport::new(lines)
}

/// Runs a payroll batch and replaces the report at `report_path`.
///
/// Every record's `total_pay` is recomputed and stored, then the whole
/// report is written in one atomic replace. If the write fails the error is
/// a `Persistence` error and the previous report file is left intact; the
/// recomputed totals remain in the store either way.
pub fn run_payroll_batch(
    store: &mut LedgerStore,
    report_path: impl AsRef<Path>,
) -> LedgerResult<PayrollReport> {
    let report_path = report_path.as_ref();
    let report = compute_payroll(store);

    write_report_file(report_path, &report)?;

    info!(
        run_id = %report.run_id,
        employees = report.lines.len(),
        total_payout = report.total_payout(),
        path = %report_path.display(),
        "Payroll batch completed"
    );

    Ok(report)
}
