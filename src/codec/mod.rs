//! Flat-file persistence for the ledger and the payroll report.
//!
//! Both formats are plain comma-separated lines without a header or quoting.
//! Names therefore may not contain commas or line breaks; the model rejects
//! such names before they can reach a file.

mod atomic;
mod ledger_file;
mod report_file;

pub use atomic::write_atomic;
pub use ledger_file::{LEDGER_LINE_SHAPE, format_record, parse_record, write_ledger};
pub use report_file::{format_report_line, write_report, write_report_file};

pub(crate) use ledger_file::format_error;
