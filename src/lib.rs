//! Employee attendance ledger with monthly payroll derivation.
//!
//! This crate keeps an in-memory store of employee records loaded from a flat
//! comma-separated file, enforces the monthly attendance plus leave ceiling,
//! and derives each employee's pay from attendance and base salary. Payroll
//! batches replace a separate report file atomically.

#![warn(missing_docs)]

pub mod calculation;
pub mod codec;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
