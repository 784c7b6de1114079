//! Calculation logic for the attendance ledger.
//!
//! This module contains the attendance ceiling rules and the payroll
//! derivation, including the batch run that recomputes every record and
//! replaces the payroll report.

mod attendance;
mod payroll;

pub use attendance::{
    WORKING_DAYS_PER_MONTH, check_day_counts, record_attendance, remaining_attendance_days,
};
pub use payroll::{
    MAX_BASE_SALARY, MEAL_ALLOWANCE_PER_DAY, TRANSPORT_ALLOWANCE_PER_DAY, calculate_pay,
    check_base_salary, compute_payroll, run_payroll_batch,
};
