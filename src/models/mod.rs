//! Core data models for the attendance ledger.
//!
//! This module contains the domain models used throughout the crate.

mod employee;
mod payroll;
mod report;

pub use employee::{EmployeeRecord, validate_name};
pub use payroll::{PayBreakdown, PayrollReport, ReportLine};
pub use report::EmployeeReport;
