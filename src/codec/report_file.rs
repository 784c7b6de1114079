//! Payroll report file format.
//!
//! One `id,name,total_pay` line per record, no header. The file is always
//! replaced as a whole, never appended to.

use std::io::{self, Write};
use std::path::Path;

use super::atomic::write_atomic;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{PayrollReport, ReportLine};

/// Renders a report line without the trailing newline.
pub fn format_report_line(line: &ReportLine) -> String {
    format!("{},{},{}", line.id, line.name, line.total_pay)
}

/// Writes all report lines, each newline-terminated.
pub fn write_report<W: Write>(writer: &mut W, report: &PayrollReport) -> io::Result<()> {
    for line in &report.lines {
        writeln!(writer, "{}", format_report_line(line))?;
    }
    Ok(())
}

/// Replaces the report file at `path` in a single atomic write.
pub fn write_report_file(path: &Path, report: &PayrollReport) -> LedgerResult<()> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, report)
        .map_err(|e| LedgerError::persistence(path.display().to_string(), e))?;
    write_atomic(path, &buffer)
}
